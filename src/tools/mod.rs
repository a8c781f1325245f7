//! Mise Tools module
//!
//! MCP tool implementations for recipe scaling and measurement conversion.

pub mod measurements;
pub mod recipes;
pub mod status;
