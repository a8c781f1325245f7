//! Serving-size scaling
//!
//! Multiplies ingredient quantities by the ratio of desired to base servings.

use serde::Serialize;
use thiserror::Error;

use super::format::format_quantity;
use super::precision::round_for_display;

/// Errors raised when deriving a scale factor
#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("Invalid servings: {field} must be a positive number, got {value}")]
    InvalidServings { field: &'static str, value: f64 },
}

/// A scaled quantity with its display form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledQuantity {
    pub quantity: f64,
    pub display_quantity: String,
}

/// Scale a quantity by `scale_factor` and round it for display
///
/// The factor is not validated; use [`scale_factor`] to derive one safely.
pub fn scale_recipe(quantity: f64, scale_factor: f64) -> ScaledQuantity {
    let quantity = round_for_display(quantity * scale_factor);
    ScaledQuantity {
        quantity,
        display_quantity: format_quantity(quantity, true),
    }
}

/// Ratio of desired servings to the recipe's base servings
pub fn scale_factor(desired_servings: f64, base_servings: f64) -> Result<f64, ScaleError> {
    check_servings("desired_servings", desired_servings)?;
    check_servings("base_servings", base_servings)?;
    Ok(desired_servings / base_servings)
}

fn check_servings(field: &'static str, value: f64) -> Result<(), ScaleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScaleError::InvalidServings { field, value })
    }
}
