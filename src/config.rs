use crate::error::ConfigError;
use crate::responder::DelayPolicy;
use crate::storage::default_storage_dir;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5001";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponderMode {
    #[default]
    Local,
    Remote,
}

impl ResponderMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "local" | "static" => Some(ResponderMode::Local),
            "remote" | "server" => Some(ResponderMode::Remote),
            _ => None,
        }
    }
}

/// Runtime settings, read from `PROJBLE_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub responder: ResponderMode,
    pub endpoint: String,
    pub delay: DelayPolicy,
    pub data_dir: PathBuf,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            responder: ResponderMode::Local,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            delay: DelayPolicy::default(),
            data_dir: default_storage_dir(),
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let responder = match lookup("PROJBLE_RESPONDER") {
            Some(raw) => ResponderMode::parse(&raw).ok_or(ConfigError::Invalid {
                key: "PROJBLE_RESPONDER",
                value: raw,
            })?,
            None => defaults.responder,
        };

        let endpoint = lookup("PROJBLE_ENDPOINT")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or(defaults.endpoint);

        let min_ms = read_millis(&lookup, "PROJBLE_DELAY_MIN_MS", defaults.delay.min)?;
        let max_ms = read_millis(&lookup, "PROJBLE_DELAY_MAX_MS", defaults.delay.max)?;
        if min_ms > max_ms {
            return Err(ConfigError::DelayRange { min_ms, max_ms });
        }

        let data_dir = lookup("PROJBLE_DATA_DIR")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        Ok(Self {
            responder,
            endpoint,
            delay: DelayPolicy::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms)),
            data_dir,
        })
    }
}

fn read_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: Duration,
) -> Result<u64, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default.as_millis() as u64),
    }
}
