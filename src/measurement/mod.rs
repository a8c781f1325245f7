//! Measurement module
//!
//! Scaling, unit conversion and quantity formatting for recipe display.
//! Everything here is pure: no I/O and no shared mutable state.

pub mod converter;
pub mod format;
pub mod precision;
pub mod scaler;
pub mod units;

pub use converter::{convert_measurement, convert_measurement_with, ConversionResult};
pub use format::{format_quantity, to_fraction};
pub use precision::round_for_display;
pub use scaler::{scale_factor, scale_recipe, ScaleError, ScaledQuantity};
pub use units::{
    conversion_for, normalize_unit, unit_kind, Conversion, Factor, MeasurementSystem, UnitDef,
    UnitKind, COOKING_CONVERSIONS, UNITS,
};
