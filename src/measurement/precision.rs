//! Display precision for cooking quantities
//!
//! Small amounts keep two decimals (a quarter teaspoon matters), mid-range
//! amounts keep one, and anything from 10 up is a whole number.

/// Round a quantity to the precision appropriate for its magnitude
pub fn round_for_display(value: f64) -> f64 {
    if value < 1.0 {
        (value * 100.0).round() / 100.0
    } else if value < 10.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}

/// Size of one rounding step at the magnitude of `value`
pub fn rounding_step(value: f64) -> f64 {
    if value < 1.0 {
        0.01
    } else if value < 10.0 {
        0.1
    } else {
        1.0
    }
}
