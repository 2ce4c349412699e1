use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STORE_FILE: &str = "leaderboard.json";
pub const DEFAULT_PRESENCE_TTL: Duration = Duration::from_secs(45);

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub store_path: PathBuf,
    /// Front-end assets (`index.html`, `assets/logo.svg`, ...).
    pub static_dir: PathBuf,
    pub presence_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            static_dir: PathBuf::from("."),
            presence_ttl: DEFAULT_PRESENCE_TTL,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or("PORT", lookup("PORT"), defaults.port);
        let presence_ttl = Duration::from_secs(parse_or(
            "PRESENCE_TTL_SECS",
            lookup("PRESENCE_TTL_SECS"),
            defaults.presence_ttl.as_secs(),
        ));

        Self {
            port,
            store_path: lookup("LEADERBOARD_STORE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            static_dir: lookup("STATIC_DIR")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            presence_ttl,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(%key, value = %raw, %default, "unparsable setting, using default");
            default
        }),
    }
}
