//! 인증 주체의 클레임 수집기
//!
//! 사용자 저장소에서 역할과 사용자 정의 클레임을 조회하여
//! 액세스 토큰에 들어갈 [`ClaimSet`]을 구성합니다.

use futures_util::future::try_join;
use uuid::Uuid;

use crate::domain::models::auth::principal::Principal;
use crate::domain::models::token::claims::{claim_types, ClaimSet};
use crate::errors::AppResult;
use crate::repositories::users::UserClaimsStore;

/// 클레임 수집기
///
/// 상태를 갖지 않으며, 사용자 저장소는 호출마다 전달받습니다.
#[derive(Debug, Clone, Default)]
pub struct ClaimsCollector;

impl ClaimsCollector {
    pub fn new() -> Self {
        Self
    }

    /// 인증 주체의 클레임 목록을 구성합니다.
    ///
    /// 역할과 사용자 정의 클레임은 동시에 조회하며, 결과는 다음 순서로 합쳐집니다.
    ///
    /// 1. `sub`, `name`, `email` (모두 이메일), `jti` (새 UUID), `uid` (내부 ID)
    /// 2. 저장소가 반환한 사용자 정의 클레임
    /// 3. 역할 이름마다 하나의 `role` 클레임
    ///
    /// 중복된 (타입, 값) 쌍은 제거하지 않습니다.
    ///
    /// # Errors
    ///
    /// 저장소 조회 실패는 변경 없이 그대로 반환됩니다.
    pub async fn collect(
        &self,
        principal: &Principal,
        store: &dyn UserClaimsStore,
    ) -> AppResult<ClaimSet> {
        let (roles, custom_claims) =
            try_join(store.get_roles(principal), store.get_claims(principal)).await?;

        let mut claims = ClaimSet::new();
        claims.push(claim_types::SUBJECT, principal.email());
        claims.push(claim_types::NAME, principal.email());
        claims.push(claim_types::EMAIL, principal.email());
        claims.push(claim_types::TOKEN_ID, Uuid::new_v4().to_string());
        claims.push(claim_types::USER_ID, principal.id());
        claims.extend(custom_claims);
        for role in roles {
            claims.push(claim_types::ROLE, role);
        }

        log::debug!(
            "클레임 수집 완료: user_id={}, 클레임 {}개",
            principal.id(),
            claims.len()
        );

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::token::claims::Claim;
    use crate::errors::AppError;
    use crate::repositories::users::InMemoryUserStore;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl UserClaimsStore for FailingStore {
        async fn get_roles(&self, _principal: &Principal) -> AppResult<Vec<String>> {
            Err(AppError::UpstreamFailure("roles lookup timed out".to_string()))
        }

        async fn get_claims(&self, _principal: &Principal) -> AppResult<Vec<Claim>> {
            Ok(Vec::new())
        }
    }

    #[actix_web::test]
    async fn test_mandatory_identity_claims() {
        let store = InMemoryUserStore::new().with_roles("u1", ["User"]);
        let principal = Principal::new("u1", "a@b.com");

        let claims = ClaimsCollector::new().collect(&principal, &store).await.unwrap();

        assert_eq!(claims.subject(), Some("a@b.com"));
        assert_eq!(claims.first(claim_types::NAME), Some("a@b.com"));
        assert_eq!(claims.email(), Some("a@b.com"));
        assert_eq!(claims.user_id(), Some("u1"));
        assert!(Uuid::parse_str(claims.token_id().unwrap()).is_ok());
        assert_eq!(claims.roles(), vec!["User"]);
    }

    #[actix_web::test]
    async fn test_custom_and_role_claims_are_not_deduplicated() {
        let store = InMemoryUserStore::new()
            .with_roles("u1", ["Admin", "Admin"])
            .with_claim("u1", claim_types::ROLE, "Admin")
            .with_claim("u1", "tenant", "acme");
        let principal = Principal::new("u1", "a@b.com");

        let claims = ClaimsCollector::new().collect(&principal, &store).await.unwrap();

        assert_eq!(claims.roles(), vec!["Admin", "Admin", "Admin"]);
        assert_eq!(claims.first("tenant"), Some("acme"));
        assert_eq!(claims.len(), 9);
    }

    #[actix_web::test]
    async fn test_each_collection_gets_new_token_id() {
        let store = InMemoryUserStore::new().with_roles("u1", ["User"]);
        let principal = Principal::new("u1", "a@b.com");
        let collector = ClaimsCollector::new();

        let first = collector.collect(&principal, &store).await.unwrap();
        let second = collector.collect(&principal, &store).await.unwrap();

        assert_ne!(first.token_id(), second.token_id());
    }

    #[actix_web::test]
    async fn test_upstream_failure_propagates_unchanged() {
        let principal = Principal::new("u1", "a@b.com");

        let result = ClaimsCollector::new().collect(&principal, &FailingStore).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::UpstreamFailure("roles lookup timed out".to_string())
        );
    }
}
