use log::LevelFilter;
use std::env;

/// Runtime settings for the rank API, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    pub bind_addr: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub tls: Option<TlsPaths>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: String,
    pub key: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: resolve_log_level(lookup("API_LOG_LEVEL")),
            log_file: resolve_log_file(lookup("API_LOG_FILE")),
            bind_addr: lookup("API_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: resolve_port(lookup("API_PORT")),
            cors_origin: non_empty(lookup("API_CORS_ORIGIN")),
            tls: match (non_empty(lookup("API_TLS_CERT")), non_empty(lookup("API_TLS_KEY"))) {
                (Some(cert), Some(key)) => Some(TlsPaths { cert, key }),
                _ => None,
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

pub(crate) fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn resolve_log_level(value: Option<String>) -> LevelFilter {
    value
        .as_deref()
        .and_then(parse_log_level)
        .unwrap_or(LevelFilter::Info)
}

fn resolve_log_file(value: Option<String>) -> Option<String> {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => Some("rank-api.log".to_string()),
    }
}

fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(5560)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
