//! 토큰 서브시스템 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 호출하는 로그인/갱신 핸들러는 이 에러를
//! 그대로 반환하면 내부 정보가 제거된 401 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | AppError | 처리 방식 | 클라이언트 응답 |
//! |----------|-----------|-----------------|
//! | `ConfigurationError` | 즉시 실패, 재시도 없음 | 401 authentication failed |
//! | `FormatError` | 로컬 복구, "principal 없음" | 401 refresh rejected |
//! | `ValidationFailure` | 로컬 복구, 원인 로깅 | 401 refresh rejected |
//! | `UpstreamFailure` | 변경 없이 호출자에게 전파 | 401 authentication failed |
//! | `InternalError` | 호출자에게 전파 | 401 authentication failed |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require_secret(secret: &[u8]) -> Result<(), AppError> {
//!     if secret.is_empty() {
//!         return Err(AppError::ConfigurationError("JWT secret not configured".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 토큰 발급과 갱신 검증에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 서명 비밀키 누락 등 설정 에러
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 갱신 요청에 제시된 토큰의 형식 오류
    #[error("Token format error: {0}")]
    FormatError(String),

    /// 서명/발급자/대상 불일치
    #[error("Token validation failure: {0}")]
    ValidationFailure(String),

    /// 사용자 저장소(역할/클레임 조회) 에러
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// 내부 서버 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 갱신 토큰 검증 단계에서 발생한 에러인지 여부
    pub fn is_refresh_rejection(&self) -> bool {
        matches!(self, AppError::FormatError(_) | AppError::ValidationFailure(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 암호학적 세부 정보나 내부 원인은 클라이언트에 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let message = if self.is_refresh_rejection() {
            "refresh rejected"
        } else {
            "authentication failed"
        };

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_of(error: &AppError) -> String {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .ok()
            .expect("error body is a complete JSON buffer");
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_refresh_rejection_response() {
        let error = AppError::ValidationFailure("InvalidSignature".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(&error), r#"{"error":"refresh rejected"}"#);
    }

    #[test]
    fn test_format_error_is_refresh_rejection() {
        let error = AppError::FormatError("segment count".to_string());
        assert!(error.is_refresh_rejection());
        assert!(!body_of(&error).contains("segment"));
    }

    #[test]
    fn test_issuance_failures_hide_detail() {
        for error in [
            AppError::ConfigurationError("JWT secret not configured".to_string()),
            AppError::UpstreamFailure("connection reset".to_string()),
            AppError::InternalError("encode".to_string()),
        ] {
            assert_eq!(error.status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
            assert_eq!(body_of(&error), r#"{"error":"authentication failed"}"#);
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
