//! # bygg-schema
//!
//! JSON Schema generation, validation, and registry for ByggKoll.
//!
//! Entity and response types are defined in `bygg-core` with
//! `#[derive(JsonSchema)]`. This crate builds their schemas once and validates
//! arbitrary JSON against them; `bygg-analysis` relies on it to hold the AI
//! service to its output contract.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;

/// Registry name of the AI analysis result schema.
pub const AI_ANALYSIS: &str = "ai_analysis";
