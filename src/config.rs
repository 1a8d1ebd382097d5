use std::env;
use std::time::Duration;

use chrono::FixedOffset;

use crate::registration::application::domain::entities::{viewer_offset_from_minutes, Pricing};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub access_key: String,
    pub timeout: Duration,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub default_offset: FixedOffset,
    pub pricing: Pricing,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let offset_minutes: i32 = parse_or(&lookup, "DASHBOARD_UTC_OFFSET_MINUTES", 0)?;
        let default_offset =
            viewer_offset_from_minutes(offset_minutes).ok_or_else(|| ConfigError::Invalid {
                name: "DASHBOARD_UTC_OFFSET_MINUTES",
                value: offset_minutes.to_string(),
            })?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                access_key: required("DATABASE_ACCESS_KEY")?,
                timeout: Duration::from_secs(parse_or(&lookup, "DATABASE_TIMEOUT_SECS", 10)?),
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
                run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", false)?,
            },
            dashboard: DashboardConfig {
                default_offset,
                pricing: Pricing {
                    premium_price: parse_or(&lookup, "PREMIUM_PRICE", 2750)?,
                    currency: lookup("PRICE_CURRENCY").unwrap_or_else(|| "KES".to_string()),
                },
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
