//! # Feed configuration
//!
//! [`NeoFeedConfig`] gathers every tunable of a load cycle. All fields have defaults, so a
//! configuration file only needs the entries it changes:
//!
//! ```toml
//! api_key = "my-api-key"
//! max_candidates = 5
//! start_date = "2024-03-07"
//! ```
//!
//! The api key can also be provided with the `NASA_API_KEY` environment variable, which takes
//! precedence over the file.
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, DEMO_API_KEY, MIN_DIST_AU, NEO_FEED_URL, N_TO_SHOW};
use crate::feed::ranker::RankingParams;
use crate::neo_errors::{config_error, NeoError};
use crate::time::parse_iso_date;

/// Environment variable overriding [`NeoFeedConfig::api_key`]
pub const API_KEY_ENV: &str = "NASA_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoFeedConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Maximum number of objects kept after ranking
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Close approaches must be strictly nearer than this (AU)
    #[serde(default = "default_max_miss_distance")]
    pub max_miss_distance_au: AstronomicalUnit,

    /// `YYYY-MM-DD` start of the feed window, today (UTC) when absent
    #[serde(default)]
    pub start_date: Option<String>,

    /// Fail the load when a record carries non-finite elements
    #[serde(default = "default_reject_invalid_elements")]
    pub reject_invalid_elements: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_feed_url() -> String {
    NEO_FEED_URL.to_string()
}

fn default_api_key() -> String {
    DEMO_API_KEY.to_string()
}

fn default_max_candidates() -> usize {
    N_TO_SHOW
}

fn default_max_miss_distance() -> AstronomicalUnit {
    MIN_DIST_AU
}

fn default_reject_invalid_elements() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NeoFeedConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            api_key: default_api_key(),
            max_candidates: default_max_candidates(),
            max_miss_distance_au: default_max_miss_distance(),
            start_date: None,
            reject_invalid_elements: default_reject_invalid_elements(),
            log_level: default_log_level(),
        }
    }
}

impl NeoFeedConfig {
    /// Read a TOML configuration file, apply the environment override and validate.
    ///
    /// Arguments
    /// ---------
    /// * `path`: location of the TOML file
    ///
    /// Return
    /// ------
    /// * the validated configuration, or the I/O, parsing or validation error
    pub fn from_file(path: &str) -> Result<Self, NeoError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing entries keep their default
    pub fn from_toml_str(content: &str) -> Result<Self, NeoError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the api key with `NASA_API_KEY` when it is set and not empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = key.trim().to_string();
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), NeoError> {
        if self.feed_url.trim().is_empty() {
            return Err(config_error!("feed_url must not be empty"));
        }
        if self.max_candidates == 0 {
            return Err(config_error!("max_candidates must be at least 1"));
        }
        if !(self.max_miss_distance_au.is_finite() && self.max_miss_distance_au > 0.0) {
            return Err(config_error!(
                "max_miss_distance_au must be a positive number, got {}",
                self.max_miss_distance_au
            ));
        }
        if let Some(date) = &self.start_date {
            parse_iso_date(date)?;
        }
        Ok(())
    }

    pub fn ranking_params(&self) -> RankingParams {
        RankingParams {
            max_candidates: self.max_candidates,
            max_miss_distance_au: self.max_miss_distance_au,
        }
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NeoFeedConfig::default();
        assert_eq!(config.feed_url, "https://api.nasa.gov/neo/rest/v1/feed");
        assert_eq!(config.max_candidates, 10);
        assert_eq!(config.max_miss_distance_au, 0.05);
        assert!(config.reject_invalid_elements);
        assert!(config.validate().is_ok());
        assert_eq!(config.ranking_params(), RankingParams::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = NeoFeedConfig::from_toml_str(
            r#"
            api_key = "abc"
            max_candidates = 3
            start_date = "2024-03-07"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.max_candidates, 3);
        assert_eq!(config.start_date.as_deref(), Some("2024-03-07"));
        assert_eq!(config.max_miss_distance_au, MIN_DIST_AU);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());

        assert_eq!(NeoFeedConfig::from_toml_str("").unwrap(), NeoFeedConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = NeoFeedConfig::from_toml_str("max_candidates = \"ten\"").unwrap_err();
        assert!(matches!(err, NeoError::Toml(_)));
    }

    #[test]
    fn test_validation() {
        let bad_count = NeoFeedConfig {
            max_candidates: 0,
            ..NeoFeedConfig::default()
        };
        assert!(matches!(bad_count.validate(), Err(NeoError::Config(_))));

        let bad_distance = NeoFeedConfig {
            max_miss_distance_au: -0.1,
            ..NeoFeedConfig::default()
        };
        assert!(bad_distance.validate().is_err());

        let bad_date = NeoFeedConfig {
            start_date: Some("07/03/2024".into()),
            ..NeoFeedConfig::default()
        };
        assert!(bad_date.validate().is_err());

        let bad_url = NeoFeedConfig {
            feed_url: " ".into(),
            ..NeoFeedConfig::default()
        };
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = NeoFeedConfig::from_file("/nonexistent/neo_feed.toml").unwrap_err();
        assert!(matches!(err, NeoError::Io(_)));
    }
}
