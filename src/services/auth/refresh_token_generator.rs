//! 리프레시 토큰 생성기
//!
//! 운영체제 CSPRNG(`OsRng`)에서 32바이트를 읽어 base64 문자열로 인코딩합니다.
//! 리프레시 토큰은 별도의 무결성 검증이 없는 베어러 자격 증명이므로
//! 추측 불가능성이 유일한 방어 수단입니다.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::models::token::token::RefreshToken;

/// 리프레시 토큰 엔트로피 (바이트)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// 리프레시 토큰 생성기
#[derive(Debug, Clone, Default)]
pub struct RefreshTokenGenerator;

impl RefreshTokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 새 리프레시 토큰을 생성합니다.
    ///
    /// # Panics
    ///
    /// 운영체제 난수 소스를 읽을 수 없으면 패닉이 발생합니다. 재시도하지 않습니다.
    pub fn generate(&self) -> RefreshToken {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        RefreshToken::new(STANDARD.encode(bytes))
    }
}
