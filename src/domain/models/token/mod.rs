//! 클레임과 발급 토큰 모델

pub mod claims;
pub mod token;

pub use claims::*;
pub use token::*;
