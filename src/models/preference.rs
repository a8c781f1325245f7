//! User display preference
//!
//! Owned by the settings store; read here to decide how quantities render.

use serde::{Deserialize, Serialize};

use crate::measurement::MeasurementSystem;

/// How a user wants quantities displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    #[serde(default)]
    pub measurement_system: MeasurementSystem,
    #[serde(default = "default_fraction_display")]
    pub fraction_display: bool,
}

fn default_fraction_display() -> bool {
    true
}

impl Default for UserPreference {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::default(),
            fraction_display: default_fraction_display(),
        }
    }
}

impl UserPreference {
    pub fn new(measurement_system: MeasurementSystem, fraction_display: bool) -> Self {
        Self {
            measurement_system,
            fraction_display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pref = UserPreference::default();
        assert_eq!(pref.measurement_system, MeasurementSystem::Us);
        assert!(pref.fraction_display);
    }

    #[test]
    fn test_deserialize_settings_row() {
        let pref: UserPreference =
            serde_json::from_str(r#"{"measurement_system": "metric", "fraction_display": false}"#)
                .unwrap();
        assert_eq!(pref, UserPreference::new(MeasurementSystem::Metric, false));

        let pref: UserPreference = serde_json::from_str(r#"{"measurement_system": "imperial"}"#).unwrap();
        assert!(pref.fraction_display);
    }
}
