//! 인증 토큰 서비스 모듈
//!
//! 액세스 토큰 발급, 리프레시 토큰 생성, 만료 토큰 갱신 검증을 담당하는 컴포넌트들을 제공합니다.
//! 외부 시스템은 [`TokenService`] 파사드만 직접 호출합니다.
//!
//! # Components
//!
//! - [`ClaimsCollector`] - 사용자 저장소에서 역할/클레임 수집
//! - [`TokenSigner`] - HS256 액세스 토큰 서명
//! - [`RefreshTokenGenerator`] - CSPRNG 기반 리프레시 토큰 생성
//! - [`ExpiredTokenValidator`] - 수명을 무시한 갱신용 토큰 검증
//! - [`TokenService`] - 위 컴포넌트를 조합한 파사드
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(Arc::new(SigningConfig::from_env()?));
//! let tokens = token_service.issue_token_pair(&principal, &user_store).await?;
//!
//! // 갱신 요청
//! match token_service.validate_for_refresh(&expired_access_token)? {
//!     Some(claims) => { /* 새 토큰 쌍 발급 */ }
//!     None => { /* 재로그인 요구 */ }
//! }
//! ```

pub mod claims_collector;
pub mod expired_token_validator;
pub mod refresh_token_generator;
pub mod token_service;
pub mod token_signer;

pub use claims_collector::*;
pub use expired_token_validator::*;
pub use refresh_token_generator::*;
pub use token_service::*;
pub use token_signer::*;
