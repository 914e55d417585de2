//! 마켓플레이스 API 인증 토큰 서브시스템
//!
//! 서명된 액세스 토큰 발급, 리프레시 토큰 생성, 그리고 갱신 흐름을 위한
//! 만료 토큰 검증을 제공합니다. 사용자 레코드, 비밀번호 검증, HTTP 라우팅은
//! 호스트 애플리케이션이 소유하며 이 크레이트를 호출합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │ Login/Refresh Handlers   │ ← 호스트 애플리케이션
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │      TokenService        │ ← 유일한 진입점
//! └──────────────────────────┘
//!     │        │        │
//!     ▼        ▼        ▼
//! Claims   Signer /  Expired
//! Collector Refresh  Token
//!     │    Generator Validator
//!     ▼
//! ┌──────────────────────────┐
//! │    UserClaimsStore       │ ← 외부 사용자 저장소
//! └──────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use marketplace_token_service::config::{load_env_file, SigningConfig};
//! use marketplace_token_service::domain::Principal;
//! use marketplace_token_service::services::auth::TokenService;
//!
//! load_env_file();
//! env_logger::init();
//!
//! let token_service = TokenService::new(Arc::new(SigningConfig::from_env()?));
//! let tokens = token_service
//!     .issue_token_pair(&Principal::new("u1", "a@b.com"), &user_store)
//!     .await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
