//! # Authentication Configuration Module
//!
//! 액세스 토큰 서명과 갱신 검증에 사용하는 [`SigningConfig`]를 관리하는 모듈입니다.
//! 설정값은 시작 시 한 번 읽어 불변 값으로 만들고, 이후 각 컴포넌트에
//! `Arc<SigningConfig>`로 전달합니다. 서명/검증 경로 안에서는 환경 변수를 조회하지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ISSUER="MarketplaceApi"
//! export JWT_AUDIENCE="MarketplaceApiClient"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export JWT_EXPIRATION_HOURS="1"        # 기본값 1
//! export JWT_GRACE_PERIOD_MINUTES="30"   # 기본값 30
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::{load_env_file, SigningConfig};
//!
//! load_env_file();
//! let config = Arc::new(SigningConfig::from_env()?);
//! let token_service = TokenService::new(config);
//! ```

use std::env;
use std::fmt;

use chrono::Duration;
use validator::Validate;

use crate::config::Environment;
use crate::errors::{AppError, AppResult};

pub const JWT_SECRET_KEY: &str = "JWT_SECRET";
pub const JWT_ISSUER_KEY: &str = "JWT_ISSUER";
pub const JWT_AUDIENCE_KEY: &str = "JWT_AUDIENCE";
pub const JWT_EXPIRATION_HOURS_KEY: &str = "JWT_EXPIRATION_HOURS";
pub const JWT_GRACE_PERIOD_MINUTES_KEY: &str = "JWT_GRACE_PERIOD_MINUTES";

/// 액세스 토큰 기본 유효 시간 (시간)
pub const DEFAULT_LIFETIME_HOURS: i64 = 1;

/// 명목 유효 시간 위에 추가되는 기본 유예 시간 (분)
pub const DEFAULT_GRACE_PERIOD_MINUTES: i64 = 30;

/// HMAC-SHA256 키로 권장되는 최소 길이 (256비트)
pub const MIN_SECRET_BYTES: usize = 32;

/// HMAC 서명 비밀키
///
/// `Debug` 출력에서 내용이 노출되지 않도록 감싼 바이트열입니다.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningSecret([REDACTED; {} bytes])", self.0.len())
    }
}

/// JSON Web Token 서명 설정
///
/// ## 구성 요소
///
/// - `secret`: HMAC-SHA256 서명 비밀키 (비어 있으면 안 됨)
/// - `issuer`: `iss` 클레임 값이자 갱신 검증 시 요구되는 발급자
/// - `audience`: `aud` 클레임 값이자 갱신 검증 시 요구되는 대상
/// - `lifetime`: 액세스 토큰의 명목 유효 시간
/// - `grace_period`: 만료 시각 계산 시 `lifetime` 위에 더해지는 유예 시간
///
/// 만료 시각은 항상 `now + lifetime + grace_period` 입니다.
#[derive(Debug, Clone, Validate)]
pub struct SigningConfig {
    secret: SigningSecret,
    #[validate(length(min = 1, message = "JWT issuer가 필요합니다"))]
    issuer: String,
    #[validate(length(min = 1, message = "JWT audience가 필요합니다"))]
    audience: String,
    lifetime: Duration,
    grace_period: Duration,
}

impl SigningConfig {
    /// 기본 유예 시간(30분)으로 서명 설정을 생성합니다.
    ///
    /// 비밀키가 비어 있어도 생성은 성공하며, 서명/검증 시점에
    /// `AppError::ConfigurationError`로 실패합니다.
    pub fn new(
        secret: impl Into<Vec<u8>>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        Self {
            secret: SigningSecret::new(secret),
            issuer: issuer.into(),
            audience: audience.into(),
            lifetime,
            grace_period: Duration::minutes(DEFAULT_GRACE_PERIOD_MINUTES),
        }
    }

    /// 유예 시간을 변경한 설정을 반환합니다.
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// 프로세스 환경 변수에서 서명 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - `JWT_SECRET` 누락, 발급자/대상 누락,
    ///   잘못된 숫자 값, 프로덕션 환경의 약한 비밀키
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| env::var(key).ok(), &Environment::current())
    }

    /// 임의의 키 조회 함수에서 서명 설정을 읽습니다.
    ///
    /// `Production` 프로파일에서는 32바이트 미만의 비밀키를 거부하고,
    /// 그 외 프로파일에서는 경고 로그만 남깁니다.
    pub fn from_vars<F>(lookup: F, environment: &Environment) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(JWT_SECRET_KEY)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::ConfigurationError("JWT secret not configured".to_string()))?;

        if secret.len() < MIN_SECRET_BYTES {
            if environment.is_production() {
                return Err(AppError::ConfigurationError(format!(
                    "JWT secret must be at least {} bytes in production",
                    MIN_SECRET_BYTES
                )));
            }
            log::warn!(
                "JWT_SECRET is shorter than {} bytes (not secure for production!)",
                MIN_SECRET_BYTES
            );
        }

        let lifetime_hours = parse_non_negative(&lookup, JWT_EXPIRATION_HOURS_KEY, DEFAULT_LIFETIME_HOURS)?;
        let grace_minutes =
            parse_non_negative(&lookup, JWT_GRACE_PERIOD_MINUTES_KEY, DEFAULT_GRACE_PERIOD_MINUTES)?;

        let config = Self::new(
            secret,
            lookup(JWT_ISSUER_KEY).unwrap_or_default(),
            lookup(JWT_AUDIENCE_KEY).unwrap_or_default(),
            Duration::hours(lifetime_hours),
        )
        .with_grace_period(Duration::minutes(grace_minutes));

        config
            .validate()
            .map_err(|e| AppError::ConfigurationError(e.to_string()))?;

        Ok(config)
    }

    /// 서명 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 비밀키가 비어 있는 경우
    pub fn require_secret(&self) -> AppResult<&[u8]> {
        if self.secret.is_empty() {
            return Err(AppError::ConfigurationError("JWT secret not configured".to_string()));
        }
        Ok(self.secret.as_bytes())
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// 발급 시점부터 만료까지의 전체 유효 시간 (`lifetime + grace_period`)
    pub fn effective_lifetime(&self) -> Duration {
        self.lifetime + self.grace_period
    }
}

fn parse_non_negative<F>(lookup: &F, key: &str, default: i64) -> AppResult<i64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(AppError::ConfigurationError(format!(
            "{} must be a non-negative integer, got '{}'",
            key, raw
        ))),
    }
}
