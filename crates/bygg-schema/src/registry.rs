//! Central schema registry for all ByggKoll types.
//!
//! Schemas are generated at construction time with [`schemars::schema_for!`]
//! and compiled into `jsonschema` validators once, so repeated validation of
//! AI responses does not recompile anything.

use std::collections::BTreeMap;

use jsonschema::Validator;
use schemars::schema_for;

use crate::error::SchemaError;

struct Entry {
    schema: serde_json::Value,
    validator: Validator,
}

/// Central store of all JSON Schemas in the ByggKoll system.
pub struct SchemaRegistry {
    entries: BTreeMap<&'static str, Entry>,
}

/// Generate, compile, and insert one schema.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {{
        let schema = serde_json::to_value(schema_for!($ty))
            .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?;
        $map.insert($name, Entry { schema, validator });
    }};
}

impl SchemaRegistry {
    /// Build a registry containing every entity and response schema from
    /// `bygg-core`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Generation`] if a generated schema cannot be
    /// serialized or compiled.
    pub fn new() -> Result<Self, SchemaError> {
        let mut entries = BTreeMap::new();

        // --- Entities (4) ---
        register!(entries, "project", bygg_core::entities::Project);
        register!(entries, "time_entry", bygg_core::entities::TimeEntry);
        register!(entries, "new_time_entry", bygg_core::entities::NewTimeEntry);
        register!(entries, crate::AI_ANALYSIS, bygg_core::entities::AiAnalysis);

        // --- Dashboard responses (4) ---
        register!(entries, "project_hours", bygg_core::responses::ProjectHours);
        register!(entries, "work_type_hours", bygg_core::responses::WorkTypeHours);
        register!(entries, "dashboard_summary", bygg_core::responses::DashboardSummary);
        register!(entries, "project_overview", bygg_core::responses::ProjectOverview);

        Ok(Self { entries })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.entries.get(name).map(|entry| &entry.schema)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = entry
            .validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bygg_core::sample::sample_entries;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().expect("registry builds")
    }

    #[test]
    fn registry_has_expected_count() {
        // 4 entities + 4 responses
        assert_eq!(registry().schema_count(), 8);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_existing_and_missing_schema() {
        let reg = registry();
        assert!(reg.get("ai_analysis").is_some());
        assert!(reg.get("time_entry").is_some());
        assert!(reg.get("finding").is_none());
    }

    #[test]
    fn validate_unknown_name_is_not_found() {
        let err = registry().validate("finding", &json!({})).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(name) if name == "finding"));
    }

    #[test]
    fn validates_serialized_time_entry() {
        let instance = serde_json::to_value(&sample_entries()[0]).unwrap();
        assert!(registry().validate("time_entry", &instance).is_ok());
    }

    #[test]
    fn accepts_well_formed_analysis() {
        let instance = json!({
            "summary": "Arbetet går enligt plan.",
            "efficiency": "God effektivitet.",
            "recommendations": ["Följ upp ÄTA-arbetet."]
        });
        assert!(registry().validate(crate::AI_ANALYSIS, &instance).is_ok());
    }

    #[test]
    fn rejects_analysis_missing_recommendations() {
        let instance = json!({
            "summary": "Arbetet går enligt plan.",
            "efficiency": "God effektivitet."
        });
        let err = registry()
            .validate(crate::AI_ANALYSIS, &instance)
            .unwrap_err();
        match err {
            SchemaError::ValidationFailed { errors } => {
                assert!(errors.iter().any(|e| e.contains("recommendations")));
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn rejects_analysis_with_unexpected_field() {
        let instance = json!({
            "summary": "s",
            "efficiency": "e",
            "recommendations": [],
            "confidence": 0.9
        });
        assert!(registry().validate(crate::AI_ANALYSIS, &instance).is_err());
    }

    #[test]
    fn rejects_analysis_that_is_not_an_object() {
        let instance = json!(["summary", "efficiency"]);
        assert!(registry().validate(crate::AI_ANALYSIS, &instance).is_err());
    }
}
