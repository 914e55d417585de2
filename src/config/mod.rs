//! # Configuration Module
//!
//! 토큰 서브시스템의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 한 번 읽어 불변 값으로 만듭니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경 감지와 `.env` 파일 로딩
//! - [`auth_config`] - JWT 서명 설정 ([`SigningConfig`])
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export PROFILE="prod"            # .env.prod 로드
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ISSUER="MarketplaceApi"
//! export JWT_AUDIENCE="MarketplaceApiClient"
//! export JWT_EXPIRATION_HOURS="1"
//! export JWT_GRACE_PERIOD_MINUTES="30"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
