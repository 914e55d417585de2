//! 외부 데이터 협력자 인터페이스 모듈
//!
//! 토큰 서브시스템은 사용자 레코드를 직접 저장하지 않습니다.
//! 역할과 클레임은 [`UserClaimsStore`](users::UserClaimsStore) 구현체를 통해 조회합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserStore, UserClaimsStore};
//!
//! let store = InMemoryUserStore::new().with_roles("u1", ["User"]);
//! let roles = store.get_roles(&principal).await?;
//! ```

pub mod users;
