//! NutriCoach Tools module
//!
//! MCP tool implementations.

pub mod nutrition;
pub mod status;
