//! 만료된 액세스 토큰 검증기
//!
//! 토큰 갱신 요청에서만 사용합니다. 클라이언트가 제시한 이미 만료된 액세스 토큰이
//! 우리가 정상적으로 발급한 것인지, 누구를 위한 것인지 확인합니다.
//!
//! # 검증 규칙
//!
//! - 서명: 설정된 HMAC-SHA256 키로 검증 (HS256 외 알고리즘 거부)
//! - 발급자(`iss`)와 대상(`aud`): 설정값과 정확히 일치
//! - **수명(`exp`) 검증 비활성화**: 만료는 이 경로에서 정상 입력입니다
//! - 시계 오차 허용: 0초
//!
//! 수명 검증을 생략하는 곳은 이 모듈의
//! [`ExpiredTokenValidator::recover_principal_ignoring_expiry`] 하나뿐입니다.

use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use crate::config::SigningConfig;
use crate::domain::models::token::claims::{claim_types, ClaimSet};
use crate::errors::{AppError, AppResult};

/// 만료된 액세스 토큰 검증기
#[derive(Debug, Clone)]
pub struct ExpiredTokenValidator {
    config: Arc<SigningConfig>,
}

impl ExpiredTokenValidator {
    pub fn new(config: Arc<SigningConfig>) -> Self {
        Self { config }
    }

    /// 만료 여부를 무시하고 토큰의 클레임 목록을 복원합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ClaimSet))` - 서명/발급자/대상이 모두 유효한 경우
    /// * `Ok(None)` - 형식 오류 또는 검증 실패 (원인은 로그로만 남김)
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키가 비어 있는 경우 (검증 시도 전에 실패)
    pub fn recover_principal_ignoring_expiry(&self, token: &str) -> AppResult<Option<ClaimSet>> {
        self.config.require_secret()?;

        match self.verify_ignoring_expiry(token) {
            Ok(claims) => Ok(Some(claims)),
            Err(AppError::FormatError(reason)) => {
                log::debug!("갱신 토큰 형식 오류: {}", reason);
                Ok(None)
            }
            Err(AppError::ValidationFailure(reason)) => {
                log::warn!("갱신 토큰 검증 실패: {}", reason);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// 형식 검사와 서명 검증을 수행하고, 실패 원인을 구분하여 반환합니다.
    pub(crate) fn verify_ignoring_expiry(&self, token: &str) -> AppResult<ClaimSet> {
        let secret = self.config.require_secret()?;
        check_compact_format(token)?;

        let decoding_key = DecodingKey::from_secret(secret);
        let data = decode::<Map<String, Value>>(token, &decoding_key, &self.validation())
            .map_err(|e| AppError::ValidationFailure(format!("{:?}", e.kind())))?;

        Ok(ClaimSet::from_payload(&data.claims))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_issuer(&[self.config.issuer()]);
        validation.set_audience(&[self.config.audience()]);
        validation.set_required_spec_claims(&[
            claim_types::EXPIRATION,
            claim_types::ISSUER,
            claim_types::AUDIENCE,
        ]);
        validation
    }
}

/// 암호 라이브러리에 넘기기 전에 compact JWT 형식을 확인합니다.
///
/// 정확히 세 개의 비어 있지 않은 base64url 세그먼트여야 하며,
/// 헤더 세그먼트는 JSON 객체로 디코딩되어야 합니다.
fn check_compact_format(token: &str) -> AppResult<()> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AppError::FormatError(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let is_base64url = |s: &&str| {
        !s.is_empty()
            && s.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    };
    if !segments.iter().all(is_base64url) {
        return Err(AppError::FormatError(
            "segments must be non-empty base64url".to_string(),
        ));
    }

    let header = URL_SAFE_NO_PAD
        .decode(segments[0])
        .map_err(|e| AppError::FormatError(format!("header is not base64url: {}", e)))?;
    serde_json::from_slice::<Map<String, Value>>(&header)
        .map_err(|_| AppError::FormatError("header is not a JSON object".to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token_signer::TokenSigner;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "s3cr3t-32-bytes-min";
    const ISSUER: &str = "MarketplaceApi";
    const AUDIENCE: &str = "MarketplaceApiClient";

    fn config(secret: &str, issuer: &str, audience: &str) -> Arc<SigningConfig> {
        Arc::new(SigningConfig::new(secret, issuer, audience, Duration::hours(1)))
    }

    fn sample_claims() -> ClaimSet {
        let mut claims = ClaimSet::new();
        claims.push(claim_types::SUBJECT, "a@b.com");
        claims.push(claim_types::EMAIL, "a@b.com");
        claims.push(claim_types::USER_ID, "u1");
        claims.push(claim_types::ROLE, "User");
        claims.push(claim_types::ROLE, "Seller");
        claims
    }

    fn expired_token(config: Arc<SigningConfig>) -> String {
        TokenSigner::new(config)
            .sign_at(&sample_claims(), Utc::now() - Duration::hours(5))
            .unwrap()
            .token
    }

    fn validator() -> ExpiredTokenValidator {
        ExpiredTokenValidator::new(config(SECRET, ISSUER, AUDIENCE))
    }

    #[test]
    fn test_expired_token_is_recovered() {
        let token = expired_token(config(SECRET, ISSUER, AUDIENCE));

        let claims = validator()
            .recover_principal_ignoring_expiry(&token)
            .unwrap()
            .expect("expired but correctly signed token must be recovered");

        assert_eq!(claims.subject(), Some("a@b.com"));
        assert_eq!(claims.email(), Some("a@b.com"));
        assert_eq!(claims.user_id(), Some("u1"));
        assert_eq!(claims.roles(), vec!["User", "Seller"]);
    }

    #[test]
    fn test_standard_validation_would_reject_the_same_token() {
        let token = expired_token(config(SECRET, ISSUER, AUDIENCE));
        let mut strict = Validation::new(Algorithm::HS256);
        strict.set_issuer(&[ISSUER]);
        strict.set_audience(&[AUDIENCE]);

        let err = decode::<Map<String, Value>>(&token, &DecodingKey::from_secret(SECRET.as_ref()), &strict)
            .unwrap_err();

        assert!(matches!(err.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_three_part_garbage_is_format_error() {
        let result = validator().verify_ignoring_expiry("not.a.jwt");

        assert!(matches!(result, Err(AppError::FormatError(_))));
        assert_eq!(validator().recover_principal_ignoring_expiry("not.a.jwt").unwrap(), None);
    }

    #[test]
    fn test_wrong_segment_count_is_format_error() {
        for token in ["", "abc", "only.two", "a.b.c.d", "a..c"] {
            let result = validator().verify_ignoring_expiry(token);
            assert!(
                matches!(result, Err(AppError::FormatError(_))),
                "expected format error for {:?}",
                token
            );
        }
    }

    #[test]
    fn test_signature_from_other_secret_is_rejected() {
        let token = expired_token(config("another-secret-entirely", ISSUER, AUDIENCE));

        assert!(matches!(
            validator().verify_ignoring_expiry(&token),
            Err(AppError::ValidationFailure(_))
        ));
        assert_eq!(validator().recover_principal_ignoring_expiry(&token).unwrap(), None);
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let token = expired_token(config(SECRET, "SomeOtherApi", AUDIENCE));

        assert!(matches!(
            validator().verify_ignoring_expiry(&token),
            Err(AppError::ValidationFailure(_))
        ));
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let token = expired_token(config(SECRET, ISSUER, "SomeOtherClient"));

        assert!(matches!(
            validator().verify_ignoring_expiry(&token),
            Err(AppError::ValidationFailure(_))
        ));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let payload = json!({ "sub": "a@b.com", "iss": ISSUER, "aud": AUDIENCE, "exp": 1 });
        let token = encode(
            &Header::new(Algorithm::HS512),
            &payload,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        assert!(matches!(
            validator().verify_ignoring_expiry(&token),
            Err(AppError::ValidationFailure(_))
        ));
    }

    #[test]
    fn test_missing_audience_claim_is_rejected() {
        let payload = json!({ "sub": "a@b.com", "iss": ISSUER, "exp": 1 });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        assert!(matches!(
            validator().verify_ignoring_expiry(&token),
            Err(AppError::ValidationFailure(_))
        ));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let token = expired_token(config(SECRET, ISSUER, AUDIENCE));
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&json!({
                "sub": "admin@b.com", "role": "Admin", "iss": ISSUER, "aud": AUDIENCE, "exp": 1
            }))
            .unwrap(),
        );
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(matches!(
            validator().verify_ignoring_expiry(&forged),
            Err(AppError::ValidationFailure(_))
        ));
    }

    #[test]
    fn test_missing_secret_is_fatal_not_rejection() {
        let token = expired_token(config(SECRET, ISSUER, AUDIENCE));
        let unconfigured = ExpiredTokenValidator::new(config("", ISSUER, AUDIENCE));

        assert!(matches!(
            unconfigured.recover_principal_ignoring_expiry(&token),
            Err(AppError::ConfigurationError(_))
        ));
        assert!(matches!(
            unconfigured.recover_principal_ignoring_expiry("not.a.jwt"),
            Err(AppError::ConfigurationError(_))
        ));
    }
}
