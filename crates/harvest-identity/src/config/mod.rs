use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::identity::{AgeWindow, PolicyConfig, Role};

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
    pub policy: PolicyConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            policy: load_policy()?,
        })
    }
}

/// Apply `ELIGIBILITY_<ROLE>_MIN_AGE` / `ELIGIBILITY_<ROLE>_MAX_AGE` over the default windows.
///
/// A max of `none` removes the upper bound.
pub fn load_policy() -> Result<PolicyConfig, ConfigError> {
    let mut policy = PolicyConfig::default();

    for role in Role::ALL {
        let window = policy.window_mut(role);

        let min_key = format!("ELIGIBILITY_{}_MIN_AGE", role.env_key());
        if let Ok(raw) = env::var(&min_key) {
            window.min_age = parse_age(&min_key, &raw)?;
        }

        let max_key = format!("ELIGIBILITY_{}_MAX_AGE", role.env_key());
        if let Ok(raw) = env::var(&max_key) {
            window.max_age = if raw.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_age(&max_key, &raw)?)
            };
        }

        if window.is_inverted() {
            return Err(ConfigError::InvertedWindow {
                role,
                window: *window,
            });
        }
    }

    Ok(policy)
}

fn parse_age(variable: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|source| ConfigError::InvalidAge {
            variable: variable.to_string(),
            value: raw.to_string(),
            source,
        })
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

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidAge {
        variable: String,
        value: String,
        source: std::num::ParseIntError,
    },
    InvertedWindow {
        role: Role,
        window: AgeWindow,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidAge {
                variable, value, ..
            } => write!(f, "{variable} must be a whole number of years, got '{value}'"),
            ConfigError::InvertedWindow { role, window } => write!(
                f,
                "eligibility window for {} has minimum {} above maximum {:?}",
                role.label(),
                window.min_age,
                window.max_age
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvertedWindow { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidAge { source, .. } => Some(source),
        }
    }
}
