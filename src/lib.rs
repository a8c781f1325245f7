//! Mise Library
//!
//! Recipe scaling, cooking measurement conversion and quantity formatting.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod measurement;
pub mod models;
pub mod tools;
