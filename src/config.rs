//! Matchmaking configuration.
//!
//! [`MatchConfig`] holds the admin-tunable parameters of one matching run.
//! Values come from an external key-value settings store, reached through
//! the [`SettingsSource`] trait. Missing or invalid keys fall back to the
//! defaults.
//!
//! # Settings keys
//!
//! | Key | Field | Accepted |
//! |-----|-------|----------|
//! | `matchmaking_buffer_minutes` | `buffer_minutes` | int > 0 |
//! | `matchmaking_max_jobs_per_day` | `max_jobs_per_day` | int > 0 |
//! | `matchmaking_load_balance_weight` | `load_balance_weight` | float ≥ 0 |
//! | `matchmaking_max_results` | `max_results` | int > 0 |
//! | `matchmaking_min_available_count` | `min_available_count` | int ≥ 0 |

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::time::MINUTE_US;

/// Settings key for [`MatchConfig::buffer_minutes`].
pub const KEY_BUFFER_MINUTES: &str = "matchmaking_buffer_minutes";
/// Settings key for [`MatchConfig::max_jobs_per_day`].
pub const KEY_MAX_JOBS_PER_DAY: &str = "matchmaking_max_jobs_per_day";
/// Settings key for [`MatchConfig::load_balance_weight`].
pub const KEY_LOAD_BALANCE_WEIGHT: &str = "matchmaking_load_balance_weight";
/// Settings key for [`MatchConfig::max_results`].
pub const KEY_MAX_RESULTS: &str = "matchmaking_max_results";
/// Settings key for [`MatchConfig::min_available_count`].
pub const KEY_MIN_AVAILABLE_COUNT: &str = "matchmaking_min_available_count";

/// Read access to an admin key-value settings store.
///
/// Implemented for in-memory maps; callers backed by a database
/// implement it over their own query layer.
pub trait SettingsSource {
    /// Raw value stored under `key`, if any.
    fn get_setting(&self, key: &str) -> Option<String>;
}

impl SettingsSource for HashMap<String, String> {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl SettingsSource for BTreeMap<String, String> {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Tunable parameters of one matching run.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Idle minutes required before and after each existing booking.
    pub buffer_minutes: u32,
    /// Daily job cap per worker. 0 disables the cap.
    pub max_jobs_per_day: usize,
    /// Workload penalty weight. 0 disables load balancing.
    pub load_balance_weight: f64,
    /// Maximum suggestions returned by a ranking. 0 = unlimited.
    pub max_results: usize,
    /// Fewer available candidates than this signals a wider search.
    pub min_available_count: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            buffer_minutes: 15,
            max_jobs_per_day: 6,
            load_balance_weight: 10.0,
            max_results: 5,
            min_available_count: 5,
        }
    }
}

impl MatchConfig {
    /// Buffer between jobs in microseconds.
    #[inline]
    pub fn buffer_us(&self) -> i64 {
        i64::from(self.buffer_minutes) * MINUTE_US
    }

    /// Loads configuration from a settings store.
    ///
    /// Each key is read independently; absent keys keep their default and
    /// rejected values keep their default with a warning.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use u_matchmaking::config::MatchConfig;
    ///
    /// let mut settings = HashMap::new();
    /// settings.insert("matchmaking_buffer_minutes".to_string(), "30".to_string());
    ///
    /// let config = MatchConfig::from_settings(&settings);
    /// assert_eq!(config.buffer_minutes, 30);
    /// assert_eq!(config.max_jobs_per_day, 6);
    /// ```
    pub fn from_settings<S: SettingsSource + ?Sized>(source: &S) -> Self {
        let mut config = Self::default();

        if let Some(v) = read_setting(source, KEY_BUFFER_MINUTES, |n: &u32| *n > 0) {
            config.buffer_minutes = v;
        }
        if let Some(v) = read_setting(source, KEY_MAX_JOBS_PER_DAY, |n: &usize| *n > 0) {
            config.max_jobs_per_day = v;
        }
        if let Some(v) = read_setting(source, KEY_LOAD_BALANCE_WEIGHT, |f: &f64| {
            f.is_finite() && *f >= 0.0
        }) {
            config.load_balance_weight = v;
        }
        if let Some(v) = read_setting(source, KEY_MAX_RESULTS, |n: &usize| *n > 0) {
            config.max_results = v;
        }
        if let Some(v) = read_setting(source, KEY_MIN_AVAILABLE_COUNT, |_: &usize| true) {
            config.min_available_count = v;
        }

        info!(
            buffer_minutes = config.buffer_minutes,
            max_jobs_per_day = config.max_jobs_per_day,
            load_balance_weight = config.load_balance_weight,
            max_results = config.max_results,
            min_available_count = config.min_available_count,
            "Matchmaking config loaded"
        );

        config
    }
}

/// Reads and parses one setting, applying an acceptance check.
///
/// Unsigned targets reject negative input at parse time, which covers the
/// `>= 0` rule for counts.
fn read_setting<S, T, F>(source: &S, key: &str, accept: F) -> Option<T>
where
    S: SettingsSource + ?Sized,
    T: FromStr + std::fmt::Debug,
    F: Fn(&T) -> bool,
{
    let raw = source.get_setting(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => Some(value),
        Ok(value) => {
            warn!(key, value = ?value, "Setting out of range, using default");
            None
        }
        Err(_) => {
            warn!(key, raw = %raw, "Setting not parseable, using default");
            None
        }
    }
}
