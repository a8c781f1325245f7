//! Measurement MCP Tools
//!
//! Tools for scaling, converting and formatting single quantities.

use serde::Serialize;

use crate::measurement::{
    conversion_for, convert_measurement_with, format_quantity, scale_recipe, ConversionResult,
    MeasurementSystem, ScaledQuantity, UnitKind, UNITS,
};

/// Response for convert_measurement
#[derive(Debug, Serialize)]
pub struct ConvertMeasurementResponse {
    pub system: MeasurementSystem,
    /// None when there was nothing to convert (zero amount or blank unit)
    pub result: Option<ConversionResult>,
    pub label: Option<String>,
}

/// Response for format_quantity
#[derive(Debug, Serialize)]
pub struct FormatQuantityResponse {
    pub quantity: f64,
    pub use_fractions: bool,
    pub display: String,
}

/// One row of the list_units response
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub unit: &'static str,
    pub kind: UnitKind,
    pub synonyms: &'static [&'static str],
    pub metric: Option<String>,
    pub customary: Option<String>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitSummary>,
    pub count: usize,
}

// ============================================================================
// Measurement Tools
// ============================================================================

/// Scale a single quantity
pub fn scale_quantity(quantity: f64, scale_factor: f64) -> Result<ScaledQuantity, String> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err("quantity must be a non-negative number".to_string());
    }
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err("scale_factor must be greater than 0".to_string());
    }
    Ok(scale_recipe(quantity, scale_factor))
}

/// Convert a quantity into a measurement system
pub fn convert(
    quantity: f64,
    unit: &str,
    system: &str,
    use_fractions: bool,
) -> Result<ConvertMeasurementResponse, String> {
    let system = parse_system(system)?;
    let result = convert_measurement_with(quantity, unit, system, use_fractions);
    let label = result.as_ref().map(ConversionResult::label);
    Ok(ConvertMeasurementResponse {
        system,
        result,
        label,
    })
}

/// Format a quantity for display
pub fn format_display(quantity: f64, use_fractions: bool) -> FormatQuantityResponse {
    FormatQuantityResponse {
        quantity,
        use_fractions,
        display: format_quantity(quantity, use_fractions),
    }
}

/// List the unit vocabulary and its cooking conversions
pub fn list_units() -> ListUnitsResponse {
    let units: Vec<UnitSummary> = UNITS
        .iter()
        .map(|def| {
            let row = conversion_for(def.canonical);
            UnitSummary {
                unit: def.canonical,
                kind: def.kind,
                synonyms: def.synonyms,
                metric: row.map(|c| format!("{} {}", c.metric.amount, c.metric.unit)),
                customary: row.map(|c| format!("{} {}", c.customary.amount, c.customary.unit)),
            }
        })
        .collect();

    let count = units.len();
    ListUnitsResponse { units, count }
}

pub(crate) fn parse_system(system: &str) -> Result<MeasurementSystem, String> {
    MeasurementSystem::parse(system).ok_or_else(|| {
        format!(
            "Unknown measurement system '{}'. Use metric, imperial, or us",
            system
        )
    })
}
