//! Configuration management and validation.
//!
//! Provides the tunables read once when a [`Document`](crate::Document) is
//! constructed: the warning cap, the standard NULL substitute and the
//! fallback row capacity.

use crate::constants::{
    DEFAULT_EXPECTED_POINTS, DEFAULT_MAX_WARNING_COUNT, DEFAULT_NULL, MAX_PREALLOCATED_POINTS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Environment variable overriding [`LasConfig::max_warning_count`]
pub const ENV_MAX_WARNING_COUNT: &str = "LAS_MAX_WARNING_COUNT";
/// Environment variable overriding [`LasConfig::std_null`]
pub const ENV_STD_NULL: &str = "LAS_STD_NULL";
/// Environment variable overriding [`LasConfig::expected_points`]
pub const ENV_EXPECTED_POINTS: &str = "LAS_EXPECTED_POINTS";

/// Reader tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LasConfig {
    /// Maximum number of warnings recorded per document before the limit sentinel
    pub max_warning_count: usize,

    /// NULL value substituted when a file declares NULL = 0
    pub std_null: f64,

    /// Initial row capacity when STRT/STOP/STEP give no usable estimate
    pub expected_points: usize,
}

impl Default for LasConfig {
    fn default() -> Self {
        Self {
            max_warning_count: DEFAULT_MAX_WARNING_COUNT,
            std_null: DEFAULT_NULL,
            expected_points: DEFAULT_EXPECTED_POINTS,
        }
    }
}

impl LasConfig {
    /// Set the warning cap
    pub fn with_max_warning_count(mut self, count: usize) -> Self {
        self.max_warning_count = count;
        self
    }

    /// Set the standard NULL substitute
    pub fn with_std_null(mut self, null: f64) -> Self {
        self.std_null = null;
        self
    }

    /// Set the fallback row capacity
    pub fn with_expected_points(mut self, points: usize) -> Self {
        self.expected_points = points;
        self
    }

    /// Validate the tunables
    pub fn validate(&self) -> Result<()> {
        if self.expected_points == 0 {
            return Err(Error::configuration("expected_points must be greater than 0"));
        }
        if self.expected_points > MAX_PREALLOCATED_POINTS {
            return Err(Error::configuration(format!(
                "expected_points must not exceed {}, got {}",
                MAX_PREALLOCATED_POINTS, self.expected_points
            )));
        }
        if !self.std_null.is_finite() {
            return Err(Error::configuration(format!(
                "std_null must be a finite number, got {}",
                self.std_null
            )));
        }
        if self.std_null == 0.0 {
            return Err(Error::configuration("std_null must not be 0"));
        }
        Ok(())
    }

    /// Build a configuration from the defaults overlaid with `LAS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Used by [`LasConfig::from_env`]; separated so the overlay rules can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_WARNING_COUNT) {
            config.max_warning_count = parse_setting(ENV_MAX_WARNING_COUNT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STD_NULL) {
            config.std_null = parse_setting(ENV_STD_NULL, &raw)?;
        }
        if let Some(raw) = lookup(ENV_EXPECTED_POINTS) {
            config.expected_points = parse_setting(ENV_EXPECTED_POINTS, &raw)?;
        }

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_setting<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| Error::configuration(format!("{} has invalid value '{}'", key, raw)))
}
