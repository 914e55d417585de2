//! 사용자 역할/클레임 저장소 모듈
//!
//! [`UserClaimsStore`](user_claims_store::UserClaimsStore) 협력자 trait과
//! 메모리 기반 구현 [`InMemoryUserStore`](user_claims_store::InMemoryUserStore)를 제공합니다.

pub mod user_claims_store;

pub use user_claims_store::*;
