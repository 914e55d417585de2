//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 시작 시 생성한 불변 설정을 생성자로 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new(config);
//! ```

pub mod auth;
