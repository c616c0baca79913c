use std::env;
use std::str::FromStr;

use super::Environment;

/// Runtime configuration, read from the environment with local-development
/// defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub upload: UploadSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment =
            Environment::try_from(env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()))
                .map_err(SettingsError::InvalidEnvironment)?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            environment,
            server: ServerSettings {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("SERVER_PORT", 8000)?,
            },
            database: DatabaseSettings {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            },
            upload: UploadSettings {
                max_file_size_mb: parse_var("MAX_UPLOAD_MB", 20)?,
            },
            cors: CorsSettings { allowed_origins },
            logging: LoggingSettings {
                json_format: env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, SettingsError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => value
            .parse()
            .map_err(|_| SettingsError::InvalidNumber { name, value }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    InvalidEnvironment(String),
    #[error("invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}
