//! Data models
//!
//! Records handed to us by the recipe backend and the settings store.

mod preference;
mod recipe;

pub use preference::UserPreference;
pub use recipe::{Ingredient, IngredientLine, Recipe, RenderedRecipe};
