//! Mise MCP Server Implementation
//!
//! Implements the MCP server with all Mise tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{Ingredient, Recipe};
use crate::tools::measurements;
use crate::tools::recipes::{self, PreferenceOverride};
use crate::tools::status::StatusTracker;

/// Mise MCP Service
#[derive(Clone)]
pub struct MiseService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Arc<Config>,
    tool_router: ToolRouter<MiseService>,
}

impl MiseService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.default_preference))),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Measurement Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleQuantityParams {
    /// Amount to scale (non-negative)
    pub quantity: f64,
    /// Desired servings divided by base servings (must be > 0)
    pub scale_factor: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertMeasurementParams {
    /// Amount in the given unit
    pub quantity: f64,
    /// Unit as written in the recipe, e.g. "cups", "tbsp", "grams"
    pub unit: String,
    /// Target system: metric, imperial, or us
    pub system: String,
    /// Show fractions (default from server configuration)
    pub fraction_display: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatQuantityParams {
    pub quantity: f64,
    /// Show fractions like "1 1/2" (default true)
    #[serde(default = "default_true")]
    pub use_fractions: bool,
}

fn default_true() -> bool { true }

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    /// Amount, or null for "to taste" style ingredients
    pub amount: Option<f64>,
    /// Unit, or null for counted ingredients ("2 eggs")
    pub unit: Option<String>,
    pub name: String,
    pub preparation: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeParams {
    pub title: Option<String>,
    /// Servings the recipe was written for
    pub servings: f64,
    pub ingredients: Vec<IngredientParams>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    pub recipe: RecipeParams,
    /// Servings to cook (defaults to the recipe's servings)
    pub desired_servings: Option<f64>,
    /// metric, imperial, or us (default from server configuration)
    pub measurement_system: Option<String>,
    /// Show fractions (default from server configuration)
    pub fraction_display: Option<bool>,
}

impl From<RecipeParams> for Recipe {
    fn from(p: RecipeParams) -> Self {
        Recipe {
            title: p.title,
            servings: p.servings,
            ingredients: p
                .ingredients
                .into_iter()
                .map(|i| Ingredient {
                    amount: i.amount,
                    unit: i.unit,
                    name: i.name,
                    preparation: i.preparation,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MiseService {
    // --- Status ---

    #[tool(description = "Get the current status of the Mise service including build info, default preferences, and process information")]
    async fn mise_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for scaling recipes and converting measurements. Call this when unsure how to use the Mise tools.")]
    fn measurement_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MEASUREMENT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MEASUREMENT_INSTRUCTIONS)]))
    }

    // --- Measurements ---

    #[tool(description = "Scale a single quantity by a factor and round it for display")]
    fn scale_quantity(&self, Parameters(p): Parameters<ScaleQuantityParams>) -> Result<CallToolResult, McpError> {
        let result = measurements::scale_quantity(p.quantity, p.scale_factor)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert a cooking quantity into metric, imperial, or us units. The result includes the original amount when the unit changed.")]
    fn convert_measurement(&self, Parameters(p): Parameters<ConvertMeasurementParams>) -> Result<CallToolResult, McpError> {
        let use_fractions = p.fraction_display.unwrap_or(self.config.default_preference.fraction_display);
        let result = measurements::convert(p.quantity, &p.unit, &p.system, use_fractions)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Format a quantity as a kitchen-friendly string such as \"1 1/2\" or \"3/4\"")]
    fn format_quantity(&self, Parameters(p): Parameters<FormatQuantityParams>) -> Result<CallToolResult, McpError> {
        to_json(&measurements::format_display(p.quantity, p.use_fractions))
    }

    #[tool(description = "List recognized units, their synonyms, and how each converts to metric and us/imperial")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        to_json(&measurements::list_units())
    }

    // --- Recipes ---

    #[tool(description = "Scale a recipe to a serving count and convert every ingredient into the requested measurement system")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let overrides = PreferenceOverride {
            measurement_system: p.measurement_system,
            fraction_display: p.fraction_display,
        };
        let recipe = Recipe::from(p.recipe);
        let result = recipes::scale_recipe(&recipe, p.desired_servings, &overrides, &self.config.default_preference)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MiseService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mise".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Mise".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Mise - Recipe scaling and cooking measurement conversion. \
                 Call measurement_instructions first if unsure. \
                 Recipes: scale_recipe. \
                 Quantities: scale_quantity, convert_measurement, format_quantity. \
                 Reference: list_units, mise_status."
                    .into(),
            ),
        }
    }
}
