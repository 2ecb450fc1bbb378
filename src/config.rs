use anyhow::Context;

use crate::metrics::DEFAULT_CAPACITY;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Report duplicate item IDs with 404 instead of 409, as older clients expect.
    pub legacy_conflict_status: bool,
    /// How many recent operations the metrics log retains.
    pub metrics_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            legacy_conflict_status: parse_flag(
                &std::env::var("LEGACY_CONFLICT_STATUS").unwrap_or_else(|_| "true".to_string()),
            )
            .context("LEGACY_CONFLICT_STATUS must be true or false")?,
            metrics_capacity: match std::env::var("METRICS_CAPACITY") {
                Ok(raw) => raw
                    .parse()
                    .context("METRICS_CAPACITY must be a positive number")?,
                Err(_) => DEFAULT_CAPACITY,
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            legacy_conflict_status: true,
            metrics_capacity: DEFAULT_CAPACITY,
        }
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("unrecognised flag value {other:?}"),
    }
}
