use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::types::CourtProfile;

/// Full application configuration.
/// Values come from the process environment first, then `.env`, then defaults.
#[derive(Debug, Clone)]
pub struct Config {
    // Web
    /// IP address to listen on.
    pub web_bind: String,
    pub web_port: u16,
    pub app_title: String,
    /// Allow any origin on the JSON API.
    pub cors_permissive: bool,

    /// Caption and signing place for drafted motions.
    pub court: CourtProfile,

    // Logging
    /// Number of recent log lines kept for `/api/logs` replay.
    pub log_ring_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

pub(crate) fn parse_dotenv_str(contents: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            let v = v.trim();
            let v = v
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(v);
            map.insert(k.trim().to_string(), v.to_string());
        }
    }
    map
}

fn parse_dotenv() -> HashMap<String, String> {
    match std::fs::read_to_string(".env") {
        Ok(contents) => parse_dotenv_str(&contents),
        Err(_) => HashMap::new(),
    }
}

fn get_str(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn get_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    match lookup(key).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        Some(_) => default,
        None => default,
    }
}

fn get_u16(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn get_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dotenv = parse_dotenv();
        let config =
            Self::from_lookup(|key| std::env::var(key).ok().or_else(|| dotenv.get(key).cloned()));
        config.validate()?;
        Ok(config)
    }

    /// Build from an arbitrary key source. Unparseable numbers and booleans
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let court = CourtProfile::default();
        Config {
            web_bind: get_str(&lookup, "WEB_BIND", "127.0.0.1"),
            web_port: get_u16(&lookup, "WEB_PORT", 8501),
            app_title: get_str(&lookup, "APP_TITLE", "Zimbabwe Paralegal Assistant"),
            cors_permissive: get_bool(&lookup, "CORS_PERMISSIVE", false),
            court: CourtProfile {
                court_name: get_str(&lookup, "COURT_NAME", &court.court_name),
                court_station: get_str(&lookup, "COURT_STATION", &court.court_station),
                signing_place: get_str(&lookup, "SIGNING_PLACE", &court.signing_place),
            },
            log_ring_size: get_usize(&lookup, "LOG_RING_SIZE", 500),
        }
    }

    fn validate(&self) -> Result<()> {
        self.bind_addr()
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("invalid WEB_BIND/WEB_PORT: {}", self.bind_addr()))?;
        anyhow::ensure!(self.log_ring_size > 0, "LOG_RING_SIZE must be positive");
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_bind, self.web_port)
    }
}
