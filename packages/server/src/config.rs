use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub leave_cooldown_secs: u64,
    pub violation_reset_secs: u64,
    pub dedup_violations: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            leave_cooldown_secs: env::var("LEAVE_COOLDOWN_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("LEAVE_COOLDOWN_SECS must be a valid number")?,
            violation_reset_secs: env::var("VIOLATION_RESET_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .context("VIOLATION_RESET_SECS must be a valid number")?,
            dedup_violations: env::var("VIOLATION_DEDUP")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
