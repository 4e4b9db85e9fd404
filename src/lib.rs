//! NutriCoach Library
//!
//! Nutrition calculations for diet coaching: food normalization, macro
//! scaling and totals, energy checks, coaching targets and food substitution.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use error::{NutritionError, NutritionResult};
