use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;

pub(crate) const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_path: PathBuf,
    pub database_max_connections: u32,
    pub http_addr: String,
    pub log_level: String,
    pub display_timezone: Tz,
    pub http_request_body_limit_bytes: usize,
}

impl Settings {
    pub fn from_env(port: u16) -> Result<Self> {
        let database_path = PathBuf::from(
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./posts.db".to_string()),
        );
        let database_max_connections = parse_usize_env("DATABASE_MAX_CONNECTIONS", 5)?;
        let database_max_connections = u32::try_from(database_max_connections)
            .context("DATABASE_MAX_CONNECTIONS is too large")?;

        let http_host = std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_addr = format!("{http_host}:{port}");

        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        let display_timezone =
            parse_timezone(&std::env::var("DISPLAY_TIMEZONE").unwrap_or_else(|_| "UTC".into()))?;

        let http_request_body_limit_bytes =
            parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 16 * 1024)?;

        Ok(Self {
            database_path,
            database_max_connections,
            http_addr,
            log_level,
            display_timezone,
            http_request_body_limit_bytes,
        })
    }
}

fn parse_timezone(raw: &str) -> Result<Tz> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|err| anyhow!("invalid DISPLAY_TIMEZONE '{raw}': {err}"))
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
