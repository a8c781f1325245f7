//! Recipe MCP Tools
//!
//! Renders a whole recipe at a new serving count in the user's system.

use crate::models::{Recipe, RenderedRecipe, UserPreference};
use crate::tools::measurements::parse_system;

/// Per-call overrides for the configured preference
#[derive(Debug, Clone, Default)]
pub struct PreferenceOverride {
    pub measurement_system: Option<String>,
    pub fraction_display: Option<bool>,
}

impl PreferenceOverride {
    /// Merge with the configured default preference
    pub fn resolve(&self, defaults: &UserPreference) -> Result<UserPreference, String> {
        let measurement_system = match self.measurement_system.as_deref() {
            Some(system) => parse_system(system)?,
            None => defaults.measurement_system,
        };
        Ok(UserPreference::new(
            measurement_system,
            self.fraction_display.unwrap_or(defaults.fraction_display),
        ))
    }
}

// ============================================================================
// Recipe Tools
// ============================================================================

/// Scale and convert every ingredient of a recipe
pub fn scale_recipe(
    recipe: &Recipe,
    desired_servings: Option<f64>,
    overrides: &PreferenceOverride,
    defaults: &UserPreference,
) -> Result<RenderedRecipe, String> {
    if recipe.ingredients.iter().any(|i| i.name.trim().is_empty()) {
        return Err("Every ingredient needs a name".to_string());
    }

    let pref = overrides.resolve(defaults)?;
    recipe
        .render(desired_servings, &pref)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::MeasurementSystem;
    use crate::models::Ingredient;

    fn soup() -> Recipe {
        Recipe {
            title: Some("Soup".to_string()),
            servings: 4.0,
            ingredients: vec![
                Ingredient {
                    amount: Some(2.0),
                    unit: Some("cups".to_string()),
                    name: "stock".to_string(),
                    preparation: None,
                },
                Ingredient {
                    amount: Some(1.0),
                    unit: Some("lb".to_string()),
                    name: "carrots".to_string(),
                    preparation: Some("diced".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_overrides_beat_defaults() {
        let overrides = PreferenceOverride {
            measurement_system: Some("metric".to_string()),
            fraction_display: None,
        };
        let rendered = scale_recipe(&soup(), Some(6.0), &overrides, &UserPreference::default()).unwrap();
        assert_eq!(rendered.measurement_system, MeasurementSystem::Metric);
        assert_eq!(rendered.ingredients[0].text, "750 ml (3 cups) stock");
        assert_eq!(rendered.ingredients[1].text, "681 g (1 1/2 lb) carrots, diced");
    }

    #[test]
    fn test_defaults_apply_without_overrides() {
        let defaults = UserPreference::new(MeasurementSystem::Us, false);
        let rendered =
            scale_recipe(&soup(), Some(8.0), &PreferenceOverride::default(), &defaults).unwrap();
        // customary table labels are singular, so "cups" is reported as a conversion
        assert_eq!(rendered.ingredients[0].text, "4 cup (4 cups) stock");
        assert_eq!(rendered.ingredients[1].text, "2 lb carrots, diced");

        let rendered =
            scale_recipe(&soup(), Some(2.0), &PreferenceOverride::default(), &defaults).unwrap();
        assert_eq!(rendered.ingredients[1].text, "0.5 lb carrots, diced");
    }

    #[test]
    fn test_errors_are_reported() {
        let overrides = PreferenceOverride {
            measurement_system: Some("cubits".to_string()),
            fraction_display: None,
        };
        assert!(scale_recipe(&soup(), None, &overrides, &UserPreference::default()).is_err());

        let err = scale_recipe(&soup(), Some(0.0), &PreferenceOverride::default(), &UserPreference::default())
            .unwrap_err();
        assert!(err.contains("desired_servings"));

        let mut unnamed = soup();
        unnamed.ingredients[0].name = " ".to_string();
        assert!(scale_recipe(&unnamed, None, &PreferenceOverride::default(), &UserPreference::default()).is_err());
    }
}
