//! 발급 토큰 구조체 및 페어링 된 세트
//!
//! 서명된 액세스 토큰, 불투명한 리프레시 토큰, 그리고 두 토큰을
//! 클라이언트 응답 형태로 묶은 [`TokenPair`]를 정의합니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 서명된 액세스 토큰 (HS256 JWT compact 형식)
///
/// 생성 후 변경되지 않으며, 만료되거나 교체되면 호출자가 폐기합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// `header.payload.signature` 형식의 토큰 문자열
    pub token: String,
    /// 만료 시각 (`발급 시각 + lifetime + grace_period`)
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

/// 불투명한 리프레시 토큰
///
/// 내부 구조가 없는 base64 난수 문자열입니다. 소유자와 만료 기록은 외부 사용자
/// 저장소가 관리하며, 갱신에 성공할 때마다 새 값으로 덮어써야 합니다.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshToken(String);

impl RefreshToken {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// 로그에 베어러 자격 증명이 남지 않도록 합니다.
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken([REDACTED])")
    }
}

/// 토큰 쌍 구조체
///
/// 로그인/갱신 응답으로 클라이언트에게 전달되는 토큰 집합입니다.
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 문자열
    pub access_token: String,
    /// 새 리프레시 토큰 (외부 저장소가 이전 값을 덮어써야 함)
    pub refresh_token: RefreshToken,
    /// 액세스 토큰 만료까지 남은 시간 (초, 유예 시간 포함)
    pub expires_in: i64,
}
