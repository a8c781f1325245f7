//! Unit vocabulary and the cooking conversion table
//!
//! Provides the measurement systems, the synonym table used to normalize
//! free-text units, and the fixed per-system conversion factors.

use serde::{Deserialize, Serialize};

/// Target system for displaying ingredient quantities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
    #[default]
    Us,
}

impl MeasurementSystem {
    /// Parse from a preference string ("metric", "imperial", "us")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Some(MeasurementSystem::Metric),
            "imperial" => Some(MeasurementSystem::Imperial),
            "us" | "us customary" => Some(MeasurementSystem::Us),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::Us => "us",
        }
    }
}

/// What a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Volume,
    Weight,
    /// Recognized but never converted (oven temperatures)
    Temperature,
    /// Recognized but never converted (pan sizes, cut sizes)
    Length,
}

/// A canonical unit and the spellings that normalize to it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnitDef {
    pub canonical: &'static str,
    pub synonyms: &'static [&'static str],
    pub kind: UnitKind,
}

/// Multiplier and label for one target system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Factor {
    pub amount: f64,
    pub unit: &'static str,
}

/// One row of the cooking conversion table
///
/// Imperial and US share the `customary` column: both display cups, ounces
/// and pounds rather than UK-specific volumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub metric: Factor,
    pub customary: Factor,
}

impl Conversion {
    pub fn factor_for(&self, system: MeasurementSystem) -> Factor {
        match system {
            MeasurementSystem::Metric => self.metric,
            MeasurementSystem::Imperial | MeasurementSystem::Us => self.customary,
        }
    }
}

const fn factor(amount: f64, unit: &'static str) -> Factor {
    Factor { amount, unit }
}

const fn row(metric: Factor, customary: Factor) -> Conversion {
    Conversion { metric, customary }
}

// ============================================================================
// Unit Vocabulary
// ============================================================================

pub static UNITS: &[UnitDef] = &[
    UnitDef {
        canonical: "tsp",
        synonyms: &["tsp", "tsps", "teaspoon", "teaspoons"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "tbsp",
        synonyms: &["tbsp", "tbsps", "tbs", "tablespoon", "tablespoons"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "cup",
        synonyms: &["cup", "cups"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "fl-oz",
        synonyms: &["fl-oz", "fl oz", "floz", "fluid ounce", "fluid ounces"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "pint",
        synonyms: &["pint", "pints", "pt"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "quart",
        synonyms: &["quart", "quarts", "qt"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "gallon",
        synonyms: &["gallon", "gallons", "gal"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "ml",
        synonyms: &["ml", "mls", "milliliter", "milliliters", "millilitre", "millilitres"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "l",
        synonyms: &["l", "liter", "liters", "litre", "litres"],
        kind: UnitKind::Volume,
    },
    UnitDef {
        canonical: "g",
        synonyms: &["g", "gram", "grams", "gramme", "grammes"],
        kind: UnitKind::Weight,
    },
    UnitDef {
        canonical: "kg",
        synonyms: &["kg", "kgs", "kilogram", "kilograms"],
        kind: UnitKind::Weight,
    },
    UnitDef {
        canonical: "oz",
        synonyms: &["oz", "ounce", "ounces"],
        kind: UnitKind::Weight,
    },
    UnitDef {
        canonical: "lb",
        synonyms: &["lb", "lbs", "pound", "pounds"],
        kind: UnitKind::Weight,
    },
    UnitDef {
        canonical: "c",
        synonyms: &["°c", "celsius", "degrees celsius"],
        kind: UnitKind::Temperature,
    },
    UnitDef {
        canonical: "f",
        synonyms: &["°f", "fahrenheit", "degrees fahrenheit"],
        kind: UnitKind::Temperature,
    },
    UnitDef {
        canonical: "cm",
        synonyms: &["cm", "centimeter", "centimeters", "centimetre", "centimetres"],
        kind: UnitKind::Length,
    },
    UnitDef {
        canonical: "mm",
        synonyms: &["mm", "millimeter", "millimeters", "millimetre", "millimetres"],
        kind: UnitKind::Length,
    },
    UnitDef {
        canonical: "in",
        synonyms: &["in", "inch", "inches"],
        kind: UnitKind::Length,
    },
];

// ============================================================================
// Cooking Conversion Table
// ============================================================================

pub static COOKING_CONVERSIONS: &[(&str, Conversion)] = &[
    ("tsp", row(factor(5.0, "ml"), factor(1.0, "tsp"))),
    ("tbsp", row(factor(15.0, "ml"), factor(1.0, "tbsp"))),
    ("cup", row(factor(250.0, "ml"), factor(1.0, "cup"))),
    ("fl-oz", row(factor(30.0, "ml"), factor(1.0, "fl-oz"))),
    ("pint", row(factor(473.0, "ml"), factor(1.0, "pint"))),
    ("quart", row(factor(946.0, "ml"), factor(1.0, "quart"))),
    ("gallon", row(factor(3.785, "l"), factor(1.0, "gallon"))),
    ("ml", row(factor(1.0, "ml"), factor(0.004, "cup"))),
    ("l", row(factor(1.0, "l"), factor(4.0, "cup"))),
    ("g", row(factor(1.0, "g"), factor(0.035, "oz"))),
    ("kg", row(factor(1.0, "kg"), factor(2.2, "lb"))),
    ("oz", row(factor(28.35, "g"), factor(1.0, "oz"))),
    ("lb", row(factor(454.0, "g"), factor(1.0, "lb"))),
];

/// Normalize a free-text unit to its canonical short form
///
/// Case, surrounding whitespace, periods ("Tbsp.") and repeated inner
/// spaces are ignored. Unrecognized units come back lower-cased.
pub fn normalize_unit(unit: &str) -> String {
    let cleaned = clean_unit(unit);
    match lookup_unit(&cleaned) {
        Some(def) => def.canonical.to_string(),
        None => cleaned,
    }
}

/// Kind of a unit, if it is part of the vocabulary
pub fn unit_kind(unit: &str) -> Option<UnitKind> {
    lookup_unit(&clean_unit(unit)).map(|def| def.kind)
}

/// Conversion row for an already-normalized unit
pub fn conversion_for(canonical: &str) -> Option<&'static Conversion> {
    COOKING_CONVERSIONS
        .iter()
        .find(|(unit, _)| *unit == canonical)
        .map(|(_, conversion)| conversion)
}

fn clean_unit(unit: &str) -> String {
    unit.to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup_unit(cleaned: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|def| def.synonyms.contains(&cleaned))
}
