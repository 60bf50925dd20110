//! Runtime configuration read from environment variables.
//!
//! Every setting has a usable default, so an empty environment boots the
//! showcase as shipped. Malformed values are logged and replaced by the
//! default rather than aborting startup.

use chrono::Duration;

/// Settings for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// TCP port to listen on (`PORT`, default 3000).
    pub port: u16,

    /// Override for the invitation allow-list (`RARO_INVITE_CODES`,
    /// comma-separated). `None` keeps the built-in codes.
    pub invite_codes: Option<Vec<String>>,

    /// Validity window for issued grants (`RARO_GRANT_TTL_HOURS`, default 24).
    pub grant_ttl: Duration,
}

impl ApiConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    /// Longest TTL accepted from the environment; anything past a year is
    /// assumed to be a typo.
    const MAX_TTL_HOURS: i64 = 24 * 365;

    pub fn from_env() -> Self {
        Self {
            port: read_port(),
            invite_codes: read_invite_codes(),
            grant_ttl: read_grant_ttl(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            invite_codes: None,
            grant_ttl: Duration::hours(raro_gate::GrantStore::DEFAULT_TTL_HOURS),
        }
    }
}

fn read_port() -> u16 {
    match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "PORT is not a valid port; using default");
            ApiConfig::DEFAULT_PORT
        }),
        Err(_) => ApiConfig::DEFAULT_PORT,
    }
}

fn read_invite_codes() -> Option<Vec<String>> {
    let raw = std::env::var("RARO_INVITE_CODES").ok()?;
    let codes: Vec<String> = raw
        .split(',')
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();
    if codes.is_empty() {
        tracing::warn!("RARO_INVITE_CODES is set but holds no codes; keeping built-in list");
        return None;
    }
    Some(codes)
}

fn read_grant_ttl() -> Duration {
    let default = Duration::hours(raro_gate::GrantStore::DEFAULT_TTL_HOURS);
    match std::env::var("RARO_GRANT_TTL_HOURS") {
        Ok(raw) => match raw.parse::<i64>() {
            Ok(hours) if (1..=ApiConfig::MAX_TTL_HOURS).contains(&hours) => {
                Duration::hours(hours)
            }
            _ => {
                tracing::warn!(value = %raw, "RARO_GRANT_TTL_HOURS is not a sensible hour count; using default");
                default
            }
        },
        Err(_) => default,
    }
}
