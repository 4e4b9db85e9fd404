//! NutriCoach MCP Server Implementation
//!
//! Exposes the nutrition calculations as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::error::NutritionError;
use crate::nutrition;
use crate::tools::nutrition as nutrition_tools;
use crate::tools::nutrition::RawConsumedItem;
use crate::tools::status::{StatusTracker, NUTRITION_INSTRUCTIONS};

/// NutriCoach MCP Service
#[derive(Clone)]
pub struct NutricoachService {
    status_tracker: Arc<StatusTracker>,
    config: Arc<Config>,
    tool_router: ToolRouter<NutricoachService>,
}

impl NutricoachService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(&config)),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid_params(err: NutritionError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeFoodParams {
    /// Raw food record (English or stored column names)
    pub food: Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleFoodParams {
    /// Raw food record
    pub food: Value,
    /// Quantity eaten, in the food's reference unit (g or ml)
    pub quantity: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConsumedItemParam {
    /// Raw food record
    pub food: Value,
    /// Quantity eaten, in the food's reference unit (g or ml)
    pub quantity: f64,
    /// Optional meal label, e.g. "breakfast"
    pub meal: Option<String>,
}

impl From<ConsumedItemParam> for RawConsumedItem {
    fn from(p: ConsumedItemParam) -> Self {
        Self {
            food: p.food,
            quantity: p.quantity,
            meal: p.meal,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AggregateConsumptionParams {
    /// Items eaten or planned
    pub items: Vec<ConsumedItemParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeDietParams {
    /// Items of the diet plan, labeled by meal
    pub items: Vec<ConsumedItemParam>,
    /// Daily calorie target (optional, must be positive when given)
    pub target_calories: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EnergyBreakdownParams {
    /// Carbohydrate grams
    pub carbs: f64,
    /// Protein grams
    pub protein: f64,
    /// Fat grams
    pub fat: f64,
    /// Percentages are taken against this when given and non-zero
    pub target_calories: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ValidateCalorieTargetParams {
    /// Calories of the plan
    pub total_calories: f64,
    /// Calorie target, must be positive
    pub target_calories: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FindSubstitutesParams {
    /// Raw record of the food being replaced
    pub current_food: Value,
    /// Quantity of the food being replaced
    pub current_quantity: f64,
    /// Raw food records to choose from
    pub pool: Vec<Value>,
    /// "calories" (default) or "carbs"
    #[serde(default = "default_criterion")]
    pub criterion: String,
    /// Maximum results (server default when omitted)
    pub limit: Option<usize>,
}

fn default_criterion() -> String { "calories".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckFiberParams {
    /// Total daily fiber in grams
    pub total_fiber: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeTargetsParams {
    /// Body weight in kg
    pub weight_kg: f64,
    /// Prescribed kcal per kg of body weight
    pub kcal_per_kg: f64,
    /// Prescribed protein grams per kg of body weight
    pub protein_per_kg: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutricoachService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriCoach service including build and process information")]
    fn nutricoach_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for passing food records and using the nutrition tools. Call this first when unsure how the tools read food data.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    // --- Foods ---

    #[tool(description = "Normalize a raw food record into the canonical form, with its dominant macro group and an energy consistency warning if any")]
    fn normalize_food(&self, Parameters(p): Parameters<NormalizeFoodParams>) -> Result<CallToolResult, McpError> {
        json_result(&nutrition_tools::normalize_food(&p.food))
    }

    #[tool(description = "Calories, carbs, protein and fat for a quantity of a food")]
    fn scale_food(&self, Parameters(p): Parameters<ScaleFoodParams>) -> Result<CallToolResult, McpError> {
        json_result(&nutrition_tools::scale_food(&p.food, p.quantity))
    }

    #[tool(description = "Check whether a food's declared calories match its macros (4/4/9 kcal per gram, 10% tolerance)")]
    fn check_energy_consistency(&self, Parameters(p): Parameters<NormalizeFoodParams>) -> Result<CallToolResult, McpError> {
        let food = nutrition::normalize(&p.food);
        json_result(&nutrition::check_energy_consistency(&food))
    }

    // --- Totals ---

    #[tool(description = "Total calories and macros of a list of eaten items, overall and per meal")]
    fn aggregate_consumption(&self, Parameters(p): Parameters<AggregateConsumptionParams>) -> Result<CallToolResult, McpError> {
        let items: Vec<RawConsumedItem> = p.items.into_iter().map(Into::into).collect();
        json_result(&nutrition_tools::aggregate_consumption(&items))
    }

    #[tool(description = "Full diet report: totals, per-meal totals, energy split, animal vs non-animal protein and, with a target, the 5% tolerance check")]
    fn summarize_diet(&self, Parameters(p): Parameters<SummarizeDietParams>) -> Result<CallToolResult, McpError> {
        let items: Vec<RawConsumedItem> = p.items.into_iter().map(Into::into).collect();
        let summary = nutrition_tools::summarize_diet(&items, p.target_calories).map_err(invalid_params)?;
        json_result(&summary)
    }

    #[tool(description = "Share of energy from carbs, protein and fat (4/4/9 kcal per gram), against the calorie target when given")]
    fn energy_breakdown(&self, Parameters(p): Parameters<EnergyBreakdownParams>) -> Result<CallToolResult, McpError> {
        json_result(&nutrition::energy_breakdown(p.carbs, p.protein, p.fat, p.target_calories))
    }

    #[tool(description = "Check whether total calories are within 5% of the calorie target")]
    fn validate_calorie_target(&self, Parameters(p): Parameters<ValidateCalorieTargetParams>) -> Result<CallToolResult, McpError> {
        let check = nutrition::validate_against_target(p.total_calories, p.target_calories).map_err(invalid_params)?;
        json_result(&check)
    }

    #[tool(description = "Check daily fiber against the 30 g ceiling")]
    fn check_fiber(&self, Parameters(p): Parameters<CheckFiberParams>) -> Result<CallToolResult, McpError> {
        json_result(&nutrition::check_fiber(p.total_fiber))
    }

    // --- Substitution ---

    #[tool(description = "Find same-group foods to replace a food, with the quantity that keeps calories or carbs equal, closest quantity first")]
    fn find_substitutes(&self, Parameters(p): Parameters<FindSubstitutesParams>) -> Result<CallToolResult, McpError> {
        let limit = p.limit.unwrap_or(self.config.substitution_limit);
        let response = nutrition_tools::find_substitutes(&p.current_food, p.current_quantity, &p.pool, &p.criterion, limit)
            .map_err(invalid_params)?;
        json_result(&response)
    }

    // --- Targets ---

    #[tool(description = "Daily calorie, protein and water targets from body weight and per-kg prescriptions")]
    fn compute_targets(&self, Parameters(p): Parameters<ComputeTargetsParams>) -> Result<CallToolResult, McpError> {
        let targets = nutrition::compute_targets(p.weight_kg, p.kcal_per_kg, p.protein_per_kg).map_err(invalid_params)?;
        json_result(&targets)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutricoachService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutricoach".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriCoach".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriCoach - stateless nutrition calculations for diet plans. \
                 Call nutrition_instructions first. \
                 Foods: normalize_food, scale_food, check_energy_consistency. \
                 Totals: aggregate_consumption, summarize_diet, energy_breakdown, validate_calorie_target, check_fiber. \
                 Substitution: find_substitutes (criterion calories or carbs). \
                 Targets: compute_targets. Status: nutricoach_status."
                    .into(),
            ),
        }
    }
}
