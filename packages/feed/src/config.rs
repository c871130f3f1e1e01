use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_WHEEL_COOLDOWN: Duration = Duration::from_millis(500);
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;
pub const DEFAULT_SHARE_ORIGIN: &str = "https://reels.local";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive number, got {value:?}")]
    NotPositive { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Tuning knobs for the feed. Defaults match the stock mobile behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    /// Minimum vertical drag distance before a swipe pages the feed.
    pub swipe_threshold: f64,
    /// Quiet period after an accepted wheel event.
    pub wheel_cooldown: Duration,
    pub max_upload_bytes: u64,
    /// Prefix for share links (`{origin}/video/{id}`).
    pub share_origin: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            wheel_cooldown: DEFAULT_WHEEL_COOLDOWN,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
        }
    }
}

impl FeedConfig {
    /// Defaults overridden by `REELS_*` environment variables.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("REELS_SWIPE_THRESHOLD") {
            match parse_positive_f64("REELS_SWIPE_THRESHOLD", &raw) {
                Ok(v) => config.swipe_threshold = v,
                Err(e) => warn!("config: {e}; using {}", config.swipe_threshold),
            }
        }
        if let Some(raw) = lookup("REELS_WHEEL_COOLDOWN_MS") {
            match parse_positive_u64("REELS_WHEEL_COOLDOWN_MS", &raw) {
                Ok(ms) => config.wheel_cooldown = Duration::from_millis(ms),
                Err(e) => warn!("config: {e}; using {:?}", config.wheel_cooldown),
            }
        }
        if let Some(raw) = lookup("REELS_MAX_UPLOAD_MB") {
            match parse_positive_u64("REELS_MAX_UPLOAD_MB", &raw) {
                Ok(mb) => config.max_upload_bytes = mb.saturating_mul(1024 * 1024),
                Err(e) => warn!("config: {e}; using {} bytes", config.max_upload_bytes),
            }
        }
        if let Some(raw) = lookup("REELS_SHARE_ORIGIN") {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                warn!(
                    "config: {}; using {}",
                    ConfigError::Empty {
                        key: "REELS_SHARE_ORIGIN"
                    },
                    config.share_origin
                );
            } else {
                config.share_origin = trimmed.trim_end_matches('/').to_string();
            }
        }

        config
    }
}

fn parse_positive_f64(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::NotPositive {
            key,
            value: raw.to_string(),
        }),
    }
}

fn parse_positive_u64(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigError::NotPositive {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(FeedConfig::from_lookup(lookup(&[])), FeedConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("REELS_SWIPE_THRESHOLD", "80"),
            ("REELS_WHEEL_COOLDOWN_MS", "750"),
            ("REELS_MAX_UPLOAD_MB", "10"),
            ("REELS_SHARE_ORIGIN", "https://example.com/"),
        ]));
        assert_eq!(config.swipe_threshold, 80.0);
        assert_eq!(config.wheel_cooldown, Duration::from_millis(750));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.share_origin, "https://example.com");
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("REELS_SWIPE_THRESHOLD", "-3"),
            ("REELS_WHEEL_COOLDOWN_MS", "soon"),
            ("REELS_MAX_UPLOAD_MB", "0"),
            ("REELS_SHARE_ORIGIN", "   "),
        ]));
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_error_messages_name_the_key() {
        let err = parse_positive_u64("REELS_MAX_UPLOAD_MB", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "REELS_MAX_UPLOAD_MB must be a positive number, got \"abc\""
        );
    }
}
