//! Application configuration structs
//!
//! Loads configuration from environment variables (and `.env` if present).

use std::env;

use tracing::Level;

use crate::telemetry::TracingConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub roster: RosterConfig,
    pub log: LogConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Initial agent roster
#[derive(Debug, Clone, Default)]
pub struct RosterConfig {
    pub agent_ids: Vec<String>,
}

/// Log output settings
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub json: bool,
}

// Default value functions
fn default_app_name() -> String {
    "desk-presence".to_string()
}

fn default_log_level(env: Environment) -> Level {
    if env.is_development() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn parse_agent_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        let level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidValue("LOG_LEVEL", raw))?,
            None => default_log_level(env),
        };

        let json = match lookup("LOG_JSON") {
            Some(raw) => raw
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue("LOG_JSON", raw))?,
            None => env.is_production(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            roster: RosterConfig {
                agent_ids: lookup("PRESENCE_AGENT_IDS")
                    .map(|s| parse_agent_ids(&s))
                    .unwrap_or_default(),
            },
            log: LogConfig { level, json },
        })
    }

    /// Tracing settings derived from the environment and log options
    #[must_use]
    pub fn tracing(&self) -> TracingConfig {
        let base = match self.app.env {
            Environment::Development => TracingConfig::development(),
            Environment::Production => TracingConfig::production(),
            Environment::Staging => TracingConfig::default(),
        };

        TracingConfig {
            level: self.log.level,
            json: self.log.json,
            ..base
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
