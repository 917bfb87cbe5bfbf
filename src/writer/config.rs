use log::LevelFilter;
use std::str::FromStr;

/// Environment variable holding the most verbose level forwarded to syslog.
pub const LOG_LEVEL_ENV: &str = "WRITER_LOG_LEVEL";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Runtime settings, resolved from the environment. There is no config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    pub log_level: LevelFilter,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl WriterConfig {
    /// Load settings from the process environment, or return defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary lookup, so tests need not touch the real env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_ENV)
            .and_then(|raw| LevelFilter::from_str(raw.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { log_level }
    }
}
