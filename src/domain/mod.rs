//! # Domain Layer
//!
//! 토큰 서브시스템의 도메인 모델을 정의하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`models`] - 인증 주체와 토큰 모델
//! - [`Principal`](models::auth::principal::Principal): 사용자 저장소가 제공하는 불변 신원
//! - [`ClaimSet`](models::token::claims::ClaimSet): 순서 있는 (타입, 값) 클레임 목록
//! - [`AccessToken`](models::token::token::AccessToken) / [`RefreshToken`](models::token::token::RefreshToken) / [`TokenPair`](models::token::token::TokenPair)

pub mod models;

pub use models::*;
