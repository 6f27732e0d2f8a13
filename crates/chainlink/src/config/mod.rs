use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::forms::FormKind;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub submissions: SubmissionConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = SubmissionConfig::default();
        let submissions = SubmissionConfig {
            login_delay: delay_from_env("APP_LOGIN_DELAY_MS", defaults.login_delay)?,
            signup_delay: delay_from_env("APP_SIGNUP_DELAY_MS", defaults.signup_delay)?,
            modal_delay: delay_from_env("APP_MODAL_DELAY_MS", defaults.modal_delay)?,
            forgot_password_delay: delay_from_env(
                "APP_FORGOT_PASSWORD_DELAY_MS",
                defaults.forgot_password_delay,
            )?,
            contact_delay: delay_from_env("APP_CONTACT_DELAY_MS", defaults.contact_delay)?,
        };

        let session_defaults = SessionConfig::default();
        let sessions = SessionConfig {
            ttl: seconds_from_env("APP_SESSION_TTL_SECS", session_defaults.ttl)?,
            sweep_interval: seconds_from_env(
                "APP_SESSION_SWEEP_SECS",
                session_defaults.sweep_interval,
            )?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            submissions,
            sessions,
        })
    }
}

fn delay_from_env(key: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    duration_from_env(key, default, Duration::from_millis)
}

fn seconds_from_env(key: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    duration_from_env(key, default, Duration::from_secs)
}

fn duration_from_env(
    key: &'static str,
    default: Duration,
    unit: fn(u64) -> Duration,
) -> Result<Duration, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(unit)
            .map_err(|_| ConfigError::InvalidDelay { key }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Simulated network latency applied before a validated form is handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub login_delay: Duration,
    pub signup_delay: Duration,
    pub modal_delay: Duration,
    pub forgot_password_delay: Duration,
    pub contact_delay: Duration,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
            signup_delay: Duration::from_millis(2000),
            modal_delay: Duration::from_millis(1000),
            forgot_password_delay: Duration::from_millis(1500),
            contact_delay: Duration::ZERO,
        }
    }
}

impl SubmissionConfig {
    /// Every delay set to zero, handy for tests that only care about outcomes.
    pub fn immediate() -> Self {
        Self {
            login_delay: Duration::ZERO,
            signup_delay: Duration::ZERO,
            modal_delay: Duration::ZERO,
            forgot_password_delay: Duration::ZERO,
            contact_delay: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, kind: FormKind) -> Duration {
        match kind {
            FormKind::Login => self.login_delay,
            FormKind::Signup => self.signup_delay,
            FormKind::ModalLogin | FormKind::ModalSignup => self.modal_delay,
            FormKind::ForgotPassword => self.forgot_password_delay,
            FormKind::Contact => self.contact_delay,
        }
    }
}

/// Lifetime of idle form sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long a session may sit without activity before it is released. Completion counts
    /// as activity, so finished sessions stay readable for one full `ttl`.
    pub ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDelay { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDelay { key } => {
                write!(f, "{key} must be a non-negative whole number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidDelay { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
