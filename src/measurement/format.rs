//! Quantity formatting
//!
//! Renders quantities the way a cook reads them: "2", "3/4", "1 1/2".

use fraction::Fraction;

use super::precision::round_for_display;

/// Largest denominator that still maps onto a measuring cup or spoon
pub const MAX_NICE_DENOMINATOR: u64 = 16;

/// Measuring-tool denominators tried when the exact fraction is not one
const MEASURING_DENOMINATORS: [u64; 4] = [2, 4, 8, 16];

/// Format a quantity for display
///
/// The value is rounded first. With `use_fractions`, whole numbers print
/// as integers, values below 1 as a simple fraction, and larger values as
/// a mixed number when the fraction is a cooking fraction (denominator up
/// to 16). Anything else prints with one decimal place.
pub fn format_quantity(quantity: f64, use_fractions: bool) -> String {
    if quantity < 0.0 {
        return format!("-{}", format_quantity(-quantity, use_fractions));
    }

    let rounded = round_for_display(quantity);
    if rounded == 0.0 {
        return "0".to_string();
    }

    if !use_fractions {
        return format!("{}", rounded);
    }

    render_fraction(rounded).unwrap_or_else(|| format!("{:.1}", rounded))
}

/// Convert a quantity to the fraction shown for it
///
/// Thirds win when they round back to the same value (2.3 reads as 7/3,
/// 0.33 as 1/3). Otherwise the exact decimal fraction is used (1.2 is 6/5),
/// unless its denominator is beyond 16, in which case a halves to
/// sixteenths fraction that rounds back to the value is preferred (0.13 is
/// 1/8). Values too large for the fraction type return `None`.
pub fn to_fraction(value: f64) -> Option<Fraction> {
    if !value.is_finite() || value < 0.0 || value * 100.0 > u64::MAX as f64 {
        return None;
    }
    let value = round_for_display(value);

    if let Some(thirds) = snap(value, 3) {
        return Some(thirds);
    }

    let exact = Fraction::new((value * 100.0).round() as u64, 100u64);
    if *exact.denom()? <= MAX_NICE_DENOMINATOR {
        return Some(exact);
    }

    MEASURING_DENOMINATORS
        .iter()
        .find_map(|&denom| snap(value, denom))
        .or(Some(exact))
}

/// Nearest `n/denom` to `value`, if it displays as `value`
fn snap(value: f64, denom: u64) -> Option<Fraction> {
    let numer = (value * denom as f64).round();
    if numer <= 0.0 {
        return None;
    }
    if round_for_display(numer / denom as f64) != value {
        return None;
    }
    Some(Fraction::new(numer as u64, denom))
}

fn render_fraction(rounded: f64) -> Option<String> {
    let fraction = to_fraction(rounded)?;
    let numer = *fraction.numer()?;
    let denom = *fraction.denom()?;
    if denom == 0 {
        return None;
    }

    if denom == 1 {
        return Some(numer.to_string());
    }

    if rounded < 1.0 {
        return Some(format!("{}/{}", numer, denom));
    }

    if denom > MAX_NICE_DENOMINATOR {
        return None;
    }

    let whole = numer / denom;
    let remainder = numer % denom;
    if remainder == 0 {
        Some(whole.to_string())
    } else {
        Some(format!("{} {}/{}", whole, remainder, denom))
    }
}
