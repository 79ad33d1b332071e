//! Rest policy configuration
//!
//! Controls how much incoming experience is banked and how the flush
//! scale is derived from a rest event. The buffer itself never reads
//! any of this; it only receives the final scale factor.

use serde::{Deserialize, Serialize};

use crate::core::error::{RestgainError, Result};
use std::fs;
use std::path::Path;

/// Settings governing the rest-to-gain pipeline
///
/// Percentages are clamped to [0, 1] on load, matching the behavior of
/// hand-edited config files where users type values like "1.5" or "-0.2".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestSettings {
    /// If false, any rest at all releases the full scheduled fraction.
    pub enable_rest_time_requirement: bool,

    /// Days of rest needed for a full-strength flush.
    ///
    /// Configured in hours; stored here as days because the host reports
    /// rest duration in days.
    pub min_days_rest_needed: f32,

    /// Share of each incoming experience delta that is banked instead of
    /// applied immediately. 1.0 = all progression waits for rest.
    pub percent_exp_requires_rest: f32,

    /// Scale applied on top when the rest was interrupted.
    pub interrupted_penalty_percent: f32,
}

impl Default for RestSettings {
    fn default() -> Self {
        Self {
            enable_rest_time_requirement: false,
            min_days_rest_needed: 7.0 / 24.0,
            percent_exp_requires_rest: 1.0,
            interrupted_penalty_percent: 1.0,
        }
    }
}

impl RestSettings {
    /// Load settings from a TOML file, falling back to defaults for
    /// missing keys.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from TOML text. Unknown keys are ignored.
    pub fn parse(content: &str) -> Result<Self> {
        let toml: toml::Value = content.parse()?;
        let mut settings = Self::default();

        let Some(general) = toml.get("general").and_then(|v| v.as_table()) else {
            return Ok(settings);
        };

        if let Some(enabled) = general
            .get("enable_rest_time_requirement")
            .and_then(|v| v.as_bool())
        {
            settings.enable_rest_time_requirement = enabled;
        }

        if let Some(hours) = general.get("min_hours_rest_needed").and_then(as_f32) {
            settings.min_days_rest_needed = hours.abs() / 24.0;
        }

        if let Some(percent) = general.get("percent_exp_requires_rest").and_then(as_f32) {
            settings.percent_exp_requires_rest = percent.abs().min(1.0);
        }

        if let Some(penalty) = general
            .get("interrupted_penalty_percent")
            .and_then(as_f32)
        {
            settings.interrupted_penalty_percent = penalty.abs().min(1.0);
        }

        Ok(settings)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.enable_rest_time_requirement && self.min_days_rest_needed <= 0.0 {
            return Err(RestgainError::InvalidConfig(format!(
                "min_days_rest_needed ({}) must be positive when the rest time requirement is enabled",
                self.min_days_rest_needed
            )));
        }
        Ok(())
    }

    /// Compute the flush scale factor for a rest event.
    ///
    /// `days_rested` below the configured minimum scales the flush down
    /// proportionally; resting longer never scales above 1. Interrupted
    /// rest applies the penalty on top.
    pub fn flush_scale(&self, days_rested: f32, interrupted: bool) -> f32 {
        let rest_factor = if self.enable_rest_time_requirement {
            (days_rested / self.min_days_rest_needed).min(1.0)
        } else {
            1.0
        };
        let penalty = if interrupted {
            self.interrupted_penalty_percent
        } else {
            1.0
        };
        rest_factor * penalty
    }
}

fn as_f32(value: &toml::Value) -> Option<f32> {
    match value {
        toml::Value::Float(f) => Some(*f as f32),
        toml::Value::Integer(i) => Some(*i as f32),
        _ => None,
    }
}
