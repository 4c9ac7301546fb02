//! Runtime configuration loaded from environment variables.

use std::time::Duration;

/// Default number of cached answers.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache knobs. All fields have defaults via `from_env`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssistantConfig {
    /// Max cached answers; `0` disables caching.
    pub cache_capacity: usize,
    /// Entry lifetime; `None` keeps entries until evicted.
    pub cache_ttl: Option<Duration>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: None,
        }
    }
}

impl AssistantConfig {
    /// Build from `ANSWER_CACHE_CAPACITY` and `ANSWER_CACHE_TTL_SECS`.
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            cache_capacity: parse("ANSWER_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY),
            cache_ttl: std::env::var("ANSWER_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs),
        }
    }
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(dflt)
}
