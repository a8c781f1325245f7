//! Runtime configuration
//!
//! Read once from the environment at startup.

use std::env;

use thiserror::Error;
use tracing::info;

use crate::measurement::MeasurementSystem;
use crate::models::UserPreference;

pub const MEASUREMENT_SYSTEM_VAR: &str = "MISE_MEASUREMENT_SYSTEM";
pub const FRACTION_DISPLAY_VAR: &str = "MISE_FRACTION_DISPLAY";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': expected one of metric, imperial, us")]
    MeasurementSystem { key: &'static str, value: String },

    #[error("Invalid {key} value '{value}': expected true or false")]
    FractionDisplay { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Preference applied when a tool call does not carry one
    pub default_preference: UserPreference,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = UserPreference::default();

        let measurement_system = match lookup(MEASUREMENT_SYSTEM_VAR) {
            Some(value) => MeasurementSystem::parse(&value).ok_or(ConfigError::MeasurementSystem {
                key: MEASUREMENT_SYSTEM_VAR,
                value,
            })?,
            None => {
                info!(
                    "{} not set, using default: {}",
                    MEASUREMENT_SYSTEM_VAR,
                    defaults.measurement_system.as_str()
                );
                defaults.measurement_system
            }
        };

        let fraction_display = match lookup(FRACTION_DISPLAY_VAR) {
            Some(value) => parse_bool(&value).ok_or(ConfigError::FractionDisplay {
                key: FRACTION_DISPLAY_VAR,
                value,
            })?,
            None => {
                info!(
                    "{} not set, using default: {}",
                    FRACTION_DISPLAY_VAR, defaults.fraction_display
                );
                defaults.fraction_display
            }
        };

        Ok(Self {
            default_preference: UserPreference::new(measurement_system, fraction_display),
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
