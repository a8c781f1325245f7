//! Measurement system conversion
//!
//! Maps an ingredient quantity into the user's measurement system through
//! the cooking conversion table. Conversion only ever improves the display:
//! anything it cannot handle comes back unconverted.

use serde::Serialize;

use super::format::format_quantity;
use super::precision::round_for_display;
use super::units::{conversion_for, normalize_unit, MeasurementSystem};

/// Outcome of converting one quantity
///
/// `Converted` carries the pre-conversion value so callers can show both,
/// e.g. "250 ml (1 cup)". Serializes flat; the `original_*` keys only
/// appear for converted results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConversionResult {
    Unconverted {
        quantity: f64,
        unit: String,
        display_quantity: String,
    },
    Converted {
        quantity: f64,
        unit: String,
        display_quantity: String,
        original_quantity: f64,
        original_unit: String,
        original_display_quantity: String,
    },
}

impl ConversionResult {
    pub fn quantity(&self) -> f64 {
        match self {
            ConversionResult::Unconverted { quantity, .. }
            | ConversionResult::Converted { quantity, .. } => *quantity,
        }
    }

    pub fn unit(&self) -> &str {
        match self {
            ConversionResult::Unconverted { unit, .. } | ConversionResult::Converted { unit, .. } => {
                unit
            }
        }
    }

    pub fn display_quantity(&self) -> &str {
        match self {
            ConversionResult::Unconverted {
                display_quantity, ..
            }
            | ConversionResult::Converted {
                display_quantity, ..
            } => display_quantity,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionResult::Converted { .. })
    }

    /// Kitchen label: "250 ml (1 cup)" or "5 bunches"
    pub fn label(&self) -> String {
        match self {
            ConversionResult::Unconverted {
                unit,
                display_quantity,
                ..
            } => format!("{} {}", display_quantity, unit),
            ConversionResult::Converted {
                unit,
                display_quantity,
                original_unit,
                original_display_quantity,
                ..
            } => format!(
                "{} {} ({} {})",
                display_quantity, unit, original_display_quantity, original_unit
            ),
        }
    }

    /// The pre-conversion label, for converted results only
    pub fn original_label(&self) -> Option<String> {
        match self {
            ConversionResult::Unconverted { .. } => None,
            ConversionResult::Converted {
                original_unit,
                original_display_quantity,
                ..
            } => Some(format!("{} {}", original_display_quantity, original_unit)),
        }
    }
}

/// Convert a quantity into `to_system`, displaying fractions
///
/// Returns `None` when there is nothing to convert (zero or NaN quantity,
/// blank unit).
pub fn convert_measurement(
    quantity: f64,
    from_unit: &str,
    to_system: MeasurementSystem,
) -> Option<ConversionResult> {
    convert_measurement_with(quantity, from_unit, to_system, true)
}

/// Convert a quantity into `to_system` with the given fraction preference
pub fn convert_measurement_with(
    quantity: f64,
    from_unit: &str,
    to_system: MeasurementSystem,
    use_fractions: bool,
) -> Option<ConversionResult> {
    if quantity == 0.0 || quantity.is_nan() {
        return None;
    }
    // Whitespace-only units are as empty as ""
    if from_unit.trim().is_empty() {
        return None;
    }

    let canonical = normalize_unit(from_unit);
    let Some(conversion) = conversion_for(&canonical) else {
        tracing::debug!("No cooking conversion for unit '{}', passing through", from_unit);
        return Some(unconverted(quantity, from_unit, use_fractions));
    };

    let factor = conversion.factor_for(to_system);
    let converted = round_for_display(quantity * factor.amount);
    if !converted.is_finite() {
        tracing::warn!(
            "Conversion of {} {} to {} produced {}, showing original",
            quantity,
            from_unit,
            to_system.as_str(),
            converted
        );
        return Some(unconverted(quantity, from_unit, use_fractions));
    }

    // Only an exact spelling match is a no-op: "cups" under us still reports
    // the original so the caller can show both
    if factor.unit == from_unit {
        return Some(ConversionResult::Unconverted {
            quantity: converted,
            unit: from_unit.to_string(),
            display_quantity: format_quantity(converted, use_fractions),
        });
    }

    Some(ConversionResult::Converted {
        quantity: converted,
        unit: factor.unit.to_string(),
        display_quantity: format_quantity(converted, use_fractions),
        original_quantity: quantity,
        original_unit: from_unit.to_string(),
        original_display_quantity: format_quantity(quantity, use_fractions),
    })
}

fn unconverted(quantity: f64, unit: &str, use_fractions: bool) -> ConversionResult {
    ConversionResult::Unconverted {
        quantity,
        unit: unit.to_string(),
        display_quantity: format_quantity(quantity, use_fractions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_to_convert() {
        assert_eq!(convert_measurement(0.0, "cup", MeasurementSystem::Metric), None);
        assert_eq!(convert_measurement(f64::NAN, "cup", MeasurementSystem::Metric), None);
        assert_eq!(convert_measurement(2.0, "", MeasurementSystem::Metric), None);
        assert_eq!(convert_measurement(2.0, "   ", MeasurementSystem::Us), None);
    }

    #[test]
    fn test_non_finite_result_degrades_to_original() {
        let result = convert_measurement(f64::MAX, "cup", MeasurementSystem::Metric).unwrap();
        match &result {
            ConversionResult::Unconverted {
                quantity,
                unit,
                display_quantity,
            } => {
                assert_eq!(*quantity, f64::MAX);
                assert_eq!(unit, "cup");
                assert!(!display_quantity.contains('/'));
                assert!(!display_quantity.contains("18446744073709551615"));
                assert!(display_quantity.ends_with(".0"));
            }
            other => panic!("expected unconverted result, got {:?}", other),
        }
    }

    #[test]
    fn test_cup_to_metric() {
        let result = convert_measurement(1.0, "cup", MeasurementSystem::Metric).unwrap();
        assert_eq!(
            result,
            ConversionResult::Converted {
                quantity: 250.0,
                unit: "ml".to_string(),
                display_quantity: "250".to_string(),
                original_quantity: 1.0,
                original_unit: "cup".to_string(),
                original_display_quantity: "1".to_string(),
            }
        );
        assert_eq!(result.label(), "250 ml (1 cup)");
    }

    #[test]
    fn test_same_system_is_a_no_op() {
        let result = convert_measurement(1.0, "cup", MeasurementSystem::Us).unwrap();
        assert_eq!(
            result,
            ConversionResult::Unconverted {
                quantity: 1.0,
                unit: "cup".to_string(),
                display_quantity: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_other_spellings_report_the_original() {
        let result = convert_measurement(2.0, "cups", MeasurementSystem::Us).unwrap();
        assert_eq!(
            result,
            ConversionResult::Converted {
                quantity: 2.0,
                unit: "cup".to_string(),
                display_quantity: "2".to_string(),
                original_quantity: 2.0,
                original_unit: "cups".to_string(),
                original_display_quantity: "2".to_string(),
            }
        );

        let result = convert_measurement(250.0, "milliliters", MeasurementSystem::Metric).unwrap();
        assert!(result.is_converted());
        assert_eq!(result.label(), "250 ml (250 milliliters)");

        let result = convert_measurement(2.0, "Cup", MeasurementSystem::Imperial).unwrap();
        assert_eq!(result.original_label(), Some("2 Cup".to_string()));
    }

    #[test]
    fn test_unrecognized_unit_passes_through() {
        let result = convert_measurement(5.0, "bunches", MeasurementSystem::Metric).unwrap();
        assert_eq!(
            result,
            ConversionResult::Unconverted {
                quantity: 5.0,
                unit: "bunches".to_string(),
                display_quantity: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_temperature_is_never_converted() {
        let result = convert_measurement(180.0, "°C", MeasurementSystem::Us).unwrap();
        assert!(!result.is_converted());
        assert_eq!(result.quantity(), 180.0);
    }

    #[test]
    fn test_round_trip_is_approximate() {
        let metric = convert_measurement(1.0, "cup", MeasurementSystem::Metric).unwrap();
        let back = convert_measurement(metric.quantity(), metric.unit(), MeasurementSystem::Us).unwrap();
        assert_eq!(back.unit(), "cup");
        assert!((back.quantity() - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_weight_conversions() {
        let result = convert_measurement(1.0, "pound", MeasurementSystem::Metric).unwrap();
        assert_eq!(result.quantity(), 454.0);
        assert_eq!(result.unit(), "g");
        assert_eq!(result.original_label(), Some("1 pound".to_string()));

        let result = convert_measurement(500.0, "grams", MeasurementSystem::Us).unwrap();
        assert_eq!(result.quantity(), 18.0);
        assert_eq!(result.unit(), "oz");
    }

    #[test]
    fn test_small_volumes_keep_fractions() {
        let result = convert_measurement(0.5, "tsp", MeasurementSystem::Metric).unwrap();
        assert_eq!(result.display_quantity(), "2 1/2");
        assert_eq!(result.label(), "2 1/2 ml (1/2 tsp)");
    }

    #[test]
    fn test_decimal_preference() {
        let result =
            convert_measurement_with(0.5, "tsp", MeasurementSystem::Metric, false).unwrap();
        assert_eq!(result.label(), "2.5 ml (0.5 tsp)");
    }

    #[test]
    fn test_serializes_flat_without_spurious_original_fields() {
        let plain = convert_measurement(1.0, "cup", MeasurementSystem::Us).unwrap();
        let json = serde_json::to_value(&plain).unwrap();
        assert_eq!(json["unit"], "cup");
        assert!(json.get("original_unit").is_none());

        let converted = convert_measurement(1.0, "cup", MeasurementSystem::Metric).unwrap();
        let json = serde_json::to_value(&converted).unwrap();
        assert_eq!(json["original_unit"], "cup");
        assert_eq!(json["display_quantity"], "250");
    }
}
