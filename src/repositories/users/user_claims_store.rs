//! # 사용자 역할/클레임 저장소
//!
//! 토큰 발급 시 필요한 역할 이름과 사용자 정의 클레임을 제공하는 외부 협력자 인터페이스입니다.
//! 실제 구현(사용자 DB, 아이덴티티 저장소 등)은 호스트 애플리케이션이 소유합니다.
//!
//! ## 에러 처리
//!
//! 조회 실패는 `AppError::UpstreamFailure` 등 구현체가 선택한 값 그대로
//! 토큰 서비스 호출자에게 전파됩니다. 토큰 서비스는 재시도하거나 무시하지 않습니다.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::models::auth::principal::Principal;
use crate::domain::models::token::claims::Claim;
use crate::errors::{AppError, AppResult};

/// 인증 주체의 역할과 사용자 정의 클레임을 조회하는 외부 저장소
#[async_trait]
pub trait UserClaimsStore: Send + Sync {
    /// 사용자에게 부여된 역할 이름 목록을 반환합니다.
    async fn get_roles(&self, principal: &Principal) -> AppResult<Vec<String>>;

    /// 사용자에게 저장된 사용자 정의 클레임 목록을 반환합니다.
    async fn get_claims(&self, principal: &Principal) -> AppResult<Vec<Claim>>;
}

#[derive(Debug, Clone, Default)]
struct UserRecord {
    roles: Vec<String>,
    claims: Vec<Claim>,
}

/// 메모리 기반 사용자 저장소
///
/// 생성 시 빌더 메서드로 채운 뒤에는 읽기 전용으로만 사용합니다.
/// 데이터베이스가 없는 호스트나 테스트에서 사용합니다.
///
/// 등록되지 않은 사용자를 조회하면 `AppError::UpstreamFailure`를 반환합니다.
///
/// ```rust,ignore
/// let store = InMemoryUserStore::new()
///     .with_roles("u1", ["User"])
///     .with_claim("u1", "tenant", "acme");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 역할을 추가합니다. 사용자가 없으면 새로 등록합니다.
    pub fn with_roles<I, S>(mut self, user_id: &str, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .roles
            .extend(roles.into_iter().map(Into::into));
        self
    }

    /// 사용자 정의 클레임을 추가합니다. 사용자가 없으면 새로 등록합니다.
    pub fn with_claim(mut self, user_id: &str, claim_type: &str, value: &str) -> Self {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .claims
            .push(Claim::new(claim_type, value));
        self
    }

    fn record(&self, principal: &Principal) -> AppResult<&UserRecord> {
        self.users.get(principal.id()).ok_or_else(|| {
            AppError::UpstreamFailure(format!("사용자를 찾을 수 없습니다: {}", principal.id()))
        })
    }
}

#[async_trait]
impl UserClaimsStore for InMemoryUserStore {
    async fn get_roles(&self, principal: &Principal) -> AppResult<Vec<String>> {
        Ok(self.record(principal)?.roles.clone())
    }

    async fn get_claims(&self, principal: &Principal) -> AppResult<Vec<Claim>> {
        Ok(self.record(principal)?.claims.clone())
    }
}
