//! JWT 토큰 관리 서비스 구현
//!
//! 로그인/갱신/폐기 요청 핸들러가 직접 호출하는 유일한 진입점입니다.
//! 클레임 수집, 서명, 리프레시 토큰 생성, 만료 토큰 검증을 조합합니다.
//!
//! # 자격 증명 상태 흐름
//!
//! ```text
//! Issued ─(갱신 요청: 서명/발급자/대상 유효, 수명 무시)─▶ Re-issued (새 액세스 + 새 리프레시)
//!    │                                                    │
//!    └─▶ Expired-and-abandoned                            └─▶ Revoked (외부 저장소가 리프레시 토큰 삭제)
//! ```
//!
//! 이 서비스는 전이만 만들어 내며, 현재 상태의 저장과 리프레시 토큰 교체(rotation)는
//! 외부 사용자 저장소의 책임입니다.

use std::sync::Arc;

use crate::config::SigningConfig;
use crate::domain::models::auth::principal::Principal;
use crate::domain::models::token::claims::ClaimSet;
use crate::domain::models::token::token::{AccessToken, RefreshToken, TokenPair};
use crate::errors::AppResult;
use crate::repositories::users::UserClaimsStore;
use crate::services::auth::{
    ClaimsCollector, ExpiredTokenValidator, RefreshTokenGenerator, TokenSigner,
};

/// JWT 토큰 관리 서비스
///
/// 시작 시 한 번 생성한 불변 [`SigningConfig`] 외에는 상태를 갖지 않으므로
/// `Arc<TokenService>`로 공유하여 동시에 호출해도 안전합니다.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<SigningConfig>,
    collector: ClaimsCollector,
    signer: TokenSigner,
    refresh_tokens: RefreshTokenGenerator,
    validator: ExpiredTokenValidator,
}

impl TokenService {
    pub fn new(config: Arc<SigningConfig>) -> Self {
        Self {
            collector: ClaimsCollector::new(),
            signer: TokenSigner::new(Arc::clone(&config)),
            refresh_tokens: RefreshTokenGenerator::new(),
            validator: ExpiredTokenValidator::new(Arc::clone(&config)),
            config,
        }
    }

    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    /// 인증된 사용자를 위한 액세스 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `principal` - 신원 확인이 끝난 인증 주체
    /// * `store` - 역할과 사용자 정의 클레임을 제공하는 사용자 저장소
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키 미설정 (저장소 조회 전에 실패)
    /// * 저장소가 반환한 에러 (변경 없이 전파)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let principal = Principal::new("u1", "a@b.com");
    /// let access_token = token_service.issue_access_token(&principal, &store).await?;
    /// ```
    pub async fn issue_access_token(
        &self,
        principal: &Principal,
        store: &dyn UserClaimsStore,
    ) -> AppResult<AccessToken> {
        self.config.require_secret()?;

        let claims = self.collector.collect(principal, store).await?;
        let access_token = self.signer.sign(&claims)?;

        log::debug!(
            "액세스 토큰 발급: user_id={}, 만료={}",
            principal.id(),
            access_token.expires_at
        );

        Ok(access_token)
    }

    /// 새 리프레시 토큰 생성
    ///
    /// 반환된 값은 외부 저장소가 사용자 레코드의 이전 리프레시 토큰을 덮어쓰는 데 사용합니다.
    pub fn issue_refresh_token(&self) -> RefreshToken {
        self.refresh_tokens.generate()
    }

    /// 갱신 요청에 제시된 만료된 액세스 토큰 검증
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ClaimSet))` - 우리가 발급한 토큰 (만료 여부 무관)
    /// * `Ok(None)` - 갱신 거부 (재로그인 필요)
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키 미설정
    pub fn validate_for_refresh(&self, expired_token: &str) -> AppResult<Option<ClaimSet>> {
        self.validator.recover_principal_ignoring_expiry(expired_token)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// 로그인 성공 또는 갱신 성공 시 클라이언트 응답으로 사용합니다.
    /// `expires_in`은 유예 시간을 포함한 초 단위 유효 시간입니다.
    pub async fn issue_token_pair(
        &self,
        principal: &Principal,
        store: &dyn UserClaimsStore,
    ) -> AppResult<TokenPair> {
        let access_token = self.issue_access_token(principal, store).await?;
        let refresh_token = self.issue_refresh_token();
        let expires_in = self.config.effective_lifetime().num_seconds();

        Ok(TokenPair {
            access_token: access_token.token,
            refresh_token,
            expires_in,
        })
    }
}
