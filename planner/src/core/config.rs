use std::str::FromStr;

use crate::editor::{DEFAULT_TABLE_FOOTPRINT, EditorConfig};
use crate::geometry::Size;

/// Planner configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PLANNER_GATEWAY_URL | http://localhost:8080 | Base URL of the entity store |
/// | PLANNER_REQUEST_TIMEOUT_SECS | 30 | Gateway request timeout |
/// | PLANNER_TABLE_FOOTPRINT | 112 | Designer table footprint (square side, px) |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | JSON log output |
/// | LOG_DIR | - | Rolling log directory |
/// | ENVIRONMENT | development | development \| production |
///
/// Unparseable values fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub gateway_url: String,
    pub request_timeout_secs: u64,
    /// Side of the square table footprint in the designer
    pub table_footprint: f64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            gateway_url: lookup("PLANNER_GATEWAY_URL")
                .unwrap_or_else(|| "http://localhost:8080".into()),
            request_timeout_secs: parse_var(&lookup, "PLANNER_REQUEST_TIMEOUT_SECS").unwrap_or(30),
            table_footprint: parse_var(&lookup, "PLANNER_TABLE_FOOTPRINT")
                .filter(|v: &f64| v.is_finite() && *v > 0.0)
                .unwrap_or(DEFAULT_TABLE_FOOTPRINT),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_var(&lookup, "LOG_JSON").unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            footprint: Size::square(self.table_footprint),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
