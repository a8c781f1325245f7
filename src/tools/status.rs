//! Mise Status Tool
//!
//! Provides runtime status information about the Mise service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::measurement::MeasurementSystem;
use crate::models::UserPreference;

/// Measurement tool instructions for AI assistants
pub const MEASUREMENT_INSTRUCTIONS: &str = r#"
# Mise Measurement Instructions

Mise scales recipes to a serving count and shows quantities in the cook's
measurement system.

## Tools

| Tool | Use it for |
|------|------------|
| `scale_recipe` | A whole recipe: servings, ingredients, preferences |
| `scale_quantity` | One amount times a scale factor |
| `convert_measurement` | One amount and unit into metric, imperial or us |
| `format_quantity` | Showing a number as a kitchen fraction |
| `list_units` | Which units are understood and how they convert |

## Scaling a Recipe

Pass the recipe as stored:

```json
{
  "recipe": {
    "servings": 4,
    "ingredients": [
      {"amount": 2, "unit": "cups", "name": "flour", "preparation": "sifted"},
      {"amount": null, "unit": null, "name": "salt"}
    ]
  },
  "desired_servings": 6,
  "measurement_system": "metric"
}
```

Each ingredient comes back with a `text` line ready to show, e.g.
`750 ml (3 cups) flour, sifted`. The part in parentheses is the original
amount and appears whenever the shown unit differs from the recipe's
spelling, so `cups` under us reads `4 cup (4 cups)`.

## Rules

- Scale factor = desired servings / recipe servings. Both must be positive.
- Amounts under 1 keep two decimals, 1 to 10 keep one, 10 and up are whole.
- Fractions are exact (1.2 reads 1 1/5). Thirds, and eighths or sixteenths
  for small amounts, are used when they round to the same number (2.3 reads
  2 1/3, 0.13 reads 1/8).
- Only volume and weight units convert. Temperatures, lengths and anything
  unrecognized (bunch, clove, pinch) are shown unchanged.
- Imperial and US both use cups, ounces and pounds.
- A missing amount shows the ingredient name only.
"#;

/// Status response structure
#[derive(Debug, Serialize)]
pub struct MiseStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Preference applied when a call does not carry one
    pub default_measurement_system: MeasurementSystem,
    pub default_fraction_display: bool,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    default_preference: UserPreference,
}

impl StatusTracker {
    pub fn new(default_preference: UserPreference) -> Self {
        Self {
            start_time: Instant::now(),
            default_preference,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> MiseStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MiseStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_measurement_system: self.default_preference.measurement_system,
            default_fraction_display: self.default_preference.fraction_display,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
