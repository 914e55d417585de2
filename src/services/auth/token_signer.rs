//! 액세스 토큰 서명기
//!
//! [`ClaimSet`]과 [`SigningConfig`]로부터 HMAC-SHA256(HS256) 서명된 JWT를 생성합니다.
//!
//! # 페이로드 구성
//!
//! - `iss`, `aud`: 설정의 발급자/대상
//! - `exp`: `now + lifetime + grace_period` (Unix timestamp)
//! - 나머지: 클레임 목록 (같은 타입이 반복되면 배열)

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::Value;

use crate::config::SigningConfig;
use crate::domain::models::token::claims::{claim_types, ClaimSet};
use crate::domain::models::token::token::AccessToken;
use crate::errors::{AppResult, ErrorContext};

/// 액세스 토큰 서명기
///
/// 불변 설정만 공유하므로 여러 요청에서 동시에 사용해도 안전합니다.
#[derive(Debug, Clone)]
pub struct TokenSigner {
    config: Arc<SigningConfig>,
}

impl TokenSigner {
    pub fn new(config: Arc<SigningConfig>) -> Self {
        Self { config }
    }

    /// 클레임 목록으로 서명된 액세스 토큰을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키가 비어 있는 경우 (키 생성 전에 실패)
    /// * `AppError::InternalError` - JWT 인코딩 실패
    pub fn sign(&self, claims: &ClaimSet) -> AppResult<AccessToken> {
        self.sign_at(claims, Utc::now())
    }

    pub(crate) fn sign_at(&self, claims: &ClaimSet, now: DateTime<Utc>) -> AppResult<AccessToken> {
        let secret = self.config.require_secret()?;
        let expires_at = now + self.config.effective_lifetime();

        let mut payload = claims.to_payload();
        payload.insert(
            claim_types::ISSUER.to_string(),
            Value::String(self.config.issuer().to_string()),
        );
        payload.insert(
            claim_types::AUDIENCE.to_string(),
            Value::String(self.config.audience().to_string()),
        );
        payload.insert(
            claim_types::EXPIRATION.to_string(),
            Value::from(expires_at.timestamp()),
        );

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(secret);

        let token = encode(&header, &payload, &encoding_key).context("JWT 토큰 생성 실패")?;

        Ok(AccessToken { token, expires_at })
    }
}
