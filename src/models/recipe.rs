//! Recipe model
//!
//! The recipe record as stored by the backend, and its rendering at a
//! chosen serving count in the user's measurement system.

use serde::{Deserialize, Serialize};

use super::UserPreference;
use crate::measurement::{
    convert_measurement_with, format_quantity, scale_factor, scale_recipe, MeasurementSystem,
    ScaleError,
};

/// A recipe as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: Option<String>,
    pub servings: f64,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// One ingredient row of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub name: String,
    #[serde(default)]
    pub preparation: Option<String>,
}

/// An ingredient ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub display_quantity: Option<String>,
    /// Pre-conversion amount, e.g. "3 cups", when the unit was converted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// The full kitchen line, e.g. "750 ml (3 cups) flour, sifted"
    pub text: String,
}

/// A recipe rendered at a serving count
#[derive(Debug, Clone, Serialize)]
pub struct RenderedRecipe {
    pub title: Option<String>,
    pub base_servings: f64,
    pub servings: f64,
    pub scale_factor: f64,
    pub measurement_system: MeasurementSystem,
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Render every ingredient for `desired_servings` (base servings if None)
    pub fn render(
        &self,
        desired_servings: Option<f64>,
        pref: &UserPreference,
    ) -> Result<RenderedRecipe, ScaleError> {
        let servings = desired_servings.unwrap_or(self.servings);
        let factor = scale_factor(servings, self.servings)?;

        let ingredients: Vec<IngredientLine> = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.render(factor, pref))
            .collect();

        tracing::debug!(
            "Rendered {} ingredients at {} servings (factor {})",
            ingredients.len(),
            servings,
            factor
        );

        Ok(RenderedRecipe {
            title: self.title.clone(),
            base_servings: self.servings,
            servings,
            scale_factor: factor,
            measurement_system: pref.measurement_system,
            ingredients,
        })
    }
}

impl Ingredient {
    /// Scale, convert and format this ingredient
    pub fn render(&self, scale_factor: f64, pref: &UserPreference) -> IngredientLine {
        let preparation = self
            .preparation
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        let unit = self
            .unit
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());

        let mut line = IngredientLine {
            name: self.name.clone(),
            preparation,
            quantity: None,
            unit: unit.map(str::to_string),
            display_quantity: None,
            original: None,
            text: String::new(),
        };

        let Some(amount) = self.amount else {
            line.text = with_preparation(self.name.clone(), line.preparation.as_deref());
            return line;
        };

        let scaled = scale_recipe(amount, scale_factor);
        let converted = unit.and_then(|u| {
            convert_measurement_with(
                scaled.quantity,
                u,
                pref.measurement_system,
                pref.fraction_display,
            )
        });

        let amount_text = match converted {
            Some(result) => {
                line.quantity = Some(result.quantity());
                line.unit = Some(result.unit().to_string());
                line.display_quantity = Some(result.display_quantity().to_string());
                line.original = result.original_label();
                result.label()
            }
            None => {
                let display = format_quantity(scaled.quantity, pref.fraction_display);
                line.quantity = Some(scaled.quantity);
                line.display_quantity = Some(display.clone());
                match unit {
                    Some(u) => format!("{} {}", display, u),
                    None => display,
                }
            }
        };

        line.text = with_preparation(
            format!("{} {}", amount_text, self.name),
            line.preparation.as_deref(),
        );
        line
    }
}

fn with_preparation(text: String, preparation: Option<&str>) -> String {
    match preparation {
        Some(prep) => format!("{}, {}", text, prep),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(amount: Option<f64>, unit: Option<&str>, name: &str) -> Ingredient {
        Ingredient {
            amount,
            unit: unit.map(str::to_string),
            name: name.to_string(),
            preparation: None,
        }
    }

    fn metric() -> UserPreference {
        UserPreference::new(MeasurementSystem::Metric, true)
    }

    #[test]
    fn test_scaled_metric_scenario() {
        let recipe = Recipe {
            title: Some("Pancakes".to_string()),
            servings: 4.0,
            ingredients: vec![ingredient(Some(2.0), Some("cups"), "flour")],
        };

        let rendered = recipe.render(Some(6.0), &metric()).unwrap();
        assert_eq!(rendered.scale_factor, 1.5);
        assert_eq!(rendered.servings, 6.0);

        let line = &rendered.ingredients[0];
        assert_eq!(line.quantity, Some(750.0));
        assert_eq!(line.unit.as_deref(), Some("ml"));
        assert_eq!(line.original.as_deref(), Some("3 cups"));
        assert_eq!(line.text, "750 ml (3 cups) flour");
    }

    #[test]
    fn test_default_servings_keep_quantities() {
        let recipe = Recipe {
            title: None,
            servings: 2.0,
            ingredients: vec![ingredient(Some(1.5), Some("tbsp"), "butter")],
        };
        let rendered = recipe.render(None, &UserPreference::default()).unwrap();
        assert_eq!(rendered.scale_factor, 1.0);
        assert_eq!(rendered.ingredients[0].text, "1 1/2 tbsp butter");
        assert_eq!(rendered.ingredients[0].original, None);
    }

    #[test]
    fn test_invalid_servings_are_rejected() {
        let recipe = Recipe {
            title: None,
            servings: 0.0,
            ingredients: vec![],
        };
        assert!(recipe.render(Some(4.0), &metric()).is_err());

        let recipe = Recipe {
            title: None,
            servings: 4.0,
            ingredients: vec![],
        };
        assert!(recipe.render(Some(-2.0), &metric()).is_err());
    }

    #[test]
    fn test_missing_amount_renders_name_only() {
        let mut salt = ingredient(None, None, "salt");
        salt.preparation = Some("to taste".to_string());
        let line = salt.render(2.0, &metric());
        assert_eq!(line.quantity, None);
        assert_eq!(line.text, "salt, to taste");
    }

    #[test]
    fn test_missing_unit_renders_count() {
        let line = ingredient(Some(3.0), None, "eggs").render(0.5, &metric());
        assert_eq!(line.quantity, Some(1.5));
        assert_eq!(line.text, "1 1/2 eggs");

        let line = ingredient(Some(2.0), Some("  "), "lemons").render(1.0, &metric());
        assert_eq!(line.unit, None);
        assert_eq!(line.text, "2 lemons");
    }

    #[test]
    fn test_unknown_unit_and_decimal_preference() {
        let pref = UserPreference::new(MeasurementSystem::Metric, false);
        let line = ingredient(Some(1.0), Some("bunch"), "parsley").render(2.5, &pref);
        assert_eq!(line.text, "2.5 bunch parsley");
        assert_eq!(line.original, None);
    }

    #[test]
    fn test_zero_amount_displays_unconverted() {
        let line = ingredient(Some(0.0), Some("cup"), "water").render(2.0, &metric());
        assert_eq!(line.quantity, Some(0.0));
        assert_eq!(line.text, "0 cup water");
    }

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{
            "servings": 4,
            "ingredients": [
                {"amount": 2, "unit": "cups", "name": "flour", "preparation": "sifted"},
                {"amount": null, "unit": null, "name": "salt"}
            ]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.ingredients.len(), 2);

        let rendered = recipe.render(Some(6.0), &metric()).unwrap();
        assert_eq!(rendered.ingredients[0].text, "750 ml (3 cups) flour, sifted");
        assert_eq!(rendered.ingredients[1].text, "salt");
    }
}
