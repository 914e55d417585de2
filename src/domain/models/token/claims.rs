//! 인증 주체에 대한 클레임 모델
//!
//! [`ClaimSet`]은 (클레임 타입, 값) 쌍의 순서 있는 목록입니다.
//! 역할 클레임과 사용자 정의 클레임을 합칠 때 생기는 중복 쌍을 제거하지 않습니다.
//!
//! ## JWT 페이로드 매핑
//!
//! - 한 번만 등장하는 타입 → JSON 문자열
//! - 여러 번 등장하는 타입 → 삽입 순서를 유지한 JSON 배열
//! - 단, `sub`는 검증 시 문자열로만 해석되므로 첫 번째 값만 기록
//!
//! ```text
//! [("sub","a@b.com"), ("role","User"), ("role","Admin")]
//!   → {"sub":"a@b.com","role":["User","Admin"]}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 표준 클레임 타입 이름
pub mod claim_types {
    /// 토큰 주체 (이메일)
    pub const SUBJECT: &str = "sub";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    /// 토큰마다 새로 생성되는 고유 식별자
    pub const TOKEN_ID: &str = "jti";
    /// 내부 사용자 ID
    pub const USER_ID: &str = "uid";
    pub const ROLE: &str = "role";

    pub const ISSUER: &str = "iss";
    pub const AUDIENCE: &str = "aud";
    pub const EXPIRATION: &str = "exp";
}

/// 서명기가 직접 채우는 봉투(envelope) 클레임
///
/// 클레임 목록에 같은 타입이 있으면 페이로드에 쓰지 않습니다.
pub const ENVELOPE_CLAIMS: [&str; 3] = [
    claim_types::ISSUER,
    claim_types::AUDIENCE,
    claim_types::EXPIRATION,
];

/// 페이로드에 단일 문자열로만 기록할 수 있는 클레임
///
/// 같은 타입이 반복되면 첫 번째 값만 쓰고 나머지는 건너뜁니다.
pub const SINGLE_VALUED_CLAIMS: [&str; 1] = [claim_types::SUBJECT];

/// 인증 주체에 대한 단일 (타입, 값) 주장
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// 순서 있는 클레임 목록 (중복 허용)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, claim_type: impl Into<String>, value: impl Into<String>) {
        self.claims.push(Claim::new(claim_type, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// 주어진 타입의 첫 번째 값을 반환합니다.
    pub fn first(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
    }

    /// 주어진 타입의 모든 값을 삽입 순서대로 반환합니다.
    pub fn values(&self, claim_type: &str) -> Vec<&str> {
        self.claims
            .iter()
            .filter(|c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
            .collect()
    }

    pub fn contains(&self, claim_type: &str, value: &str) -> bool {
        self.claims
            .iter()
            .any(|c| c.claim_type == claim_type && c.value == value)
    }

    pub fn subject(&self) -> Option<&str> {
        self.first(claim_types::SUBJECT)
    }

    pub fn email(&self) -> Option<&str> {
        self.first(claim_types::EMAIL)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.first(claim_types::USER_ID)
    }

    pub fn token_id(&self) -> Option<&str> {
        self.first(claim_types::TOKEN_ID)
    }

    pub fn roles(&self) -> Vec<&str> {
        self.values(claim_types::ROLE)
    }

    /// JWT 페이로드용 JSON 객체로 변환합니다.
    ///
    /// 봉투 클레임(`iss`, `aud`, `exp`)과 같은 타입은 건너뜁니다.
    /// 단일 값 클레임(`sub`)은 첫 번째 값만 기록합니다.
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();

        for claim in &self.claims {
            if ENVELOPE_CLAIMS.contains(&claim.claim_type.as_str()) {
                log::warn!(
                    "클레임 타입 '{}'은 예약되어 있어 페이로드에서 제외합니다",
                    claim.claim_type
                );
                continue;
            }

            if payload.contains_key(&claim.claim_type)
                && SINGLE_VALUED_CLAIMS.contains(&claim.claim_type.as_str())
            {
                log::warn!(
                    "클레임 타입 '{}'은 단일 값만 허용되어 추가 값을 제외합니다",
                    claim.claim_type
                );
                continue;
            }

            let value = Value::String(claim.value.clone());
            match payload.get_mut(&claim.claim_type) {
                None => {
                    payload.insert(claim.claim_type.clone(), value);
                }
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            }
        }

        payload
    }

    /// 검증된 JWT 페이로드에서 클레임 목록을 복원합니다.
    ///
    /// 봉투 클레임은 제외하며, 배열은 원소마다 하나의 클레임이 됩니다.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let mut set = Self::new();

        for (claim_type, value) in payload {
            if ENVELOPE_CLAIMS.contains(&claim_type.as_str()) {
                continue;
            }
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(v) = scalar_to_string(item) {
                            set.push(claim_type.as_str(), v);
                        }
                    }
                }
                other => {
                    if let Some(v) = scalar_to_string(other) {
                        set.push(claim_type.as_str(), v);
                    }
                }
            }
        }

        set
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl FromIterator<Claim> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = Claim>>(iter: I) -> Self {
        Self {
            claims: iter.into_iter().collect(),
        }
    }
}

impl Extend<Claim> for ClaimSet {
    fn extend<I: IntoIterator<Item = Claim>>(&mut self, iter: I) {
        self.claims.extend(iter);
    }
}
