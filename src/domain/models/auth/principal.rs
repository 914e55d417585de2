use serde::{Deserialize, Serialize};

/// 사용자 저장소가 제공하는 인증 주체
///
/// 로그인/갱신 핸들러가 신원 확인을 마친 뒤 전달하는 불변 식별 정보입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// 내부 사용자 ID
    id: String,
    /// 사용자 이메일 (`sub`, `name`, `email` 클레임 값)
    email: String,
}

impl Principal {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
