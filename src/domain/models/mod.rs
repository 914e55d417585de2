//! 인증 주체와 토큰 모델

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
