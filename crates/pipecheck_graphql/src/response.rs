//! Wire responses from the validation service.
//!
//! Every union in the schema is discriminated by `__typename`, which maps
//! onto internally tagged enums here.

use pipecheck_config::ErrorReason;
use serde::{Deserialize, Serialize};

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Query result, absent when execution failed outright.
    pub data: Option<T>,
    /// Execution errors reported by the server.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A GraphQL execution error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Error message.
    pub message: String,
}

/// Data returned by the config check query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfigData {
    /// Validity verdict for the submitted config.
    pub is_pipeline_config_valid: ConfigValidity,
}

/// Validity verdict for a submitted config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum ConfigValidity {
    /// The config is valid.
    #[serde(rename = "PipelineConfigValidationValid")]
    Valid,
    /// The config failed validation.
    #[serde(rename = "PipelineConfigValidationInvalid")]
    Invalid {
        /// Errors found in the config.
        errors: Vec<RawValidationError>,
    },
    /// Any other outcome, such as an unknown pipeline.
    #[serde(other)]
    Other,
}

/// A validation error as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValidationError {
    /// Reason code.
    pub reason: ErrorReason,
    /// Human-readable message.
    pub message: String,
    /// Where in the config the error occurred.
    pub stack: EvaluationStack,
}

/// Location trail of a validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStack {
    /// Entries, outermost first.
    pub entries: Vec<StackEntry>,
}

/// One step in an evaluation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum StackEntry {
    /// Descent into a named field.
    #[serde(rename = "EvaluationStackPathEntry")]
    Field {
        /// The field descended into.
        field: FieldRef,
    },
    /// Descent into a list item.
    #[serde(rename = "EvaluationStackListItemEntry")]
    ListItem {
        /// Position within the list.
        #[serde(rename = "listIndex")]
        list_index: usize,
    },
}

/// Reference to a config field by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    /// Field name.
    pub name: String,
}

/// Data returned by the pipeline types query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTypesData {
    /// The pipeline, or the reason it could not be loaded.
    pub pipeline_or_error: PipelineOrError,
}

/// A pipeline lookup result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum PipelineOrError {
    /// The pipeline was found.
    Pipeline {
        /// All config types reachable from the pipeline.
        types: Vec<ConfigTypeInfo>,
    },
    /// No pipeline with that name.
    #[serde(rename = "PipelineNotFoundError")]
    NotFound {
        /// Service message.
        message: String,
    },
    /// Any other error typename.
    #[serde(other)]
    Other,
}

/// A config type exposed by a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum ConfigTypeInfo {
    /// A type with named fields.
    CompositeType {
        /// Type name.
        name: String,
        /// Fields of the type.
        fields: Vec<TypeFieldInfo>,
    },
    /// Scalars, enums, lists and other non-composite kinds.
    #[serde(other)]
    Other,
}

/// A field of a composite config type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeFieldInfo {
    /// Field name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub field_type: TypeRef,
}

/// Reference to a config type by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRef {
    /// Type name; anonymous types such as lists have none.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_invalid_response() {
        let envelope: GraphQlResponse<CheckConfigData> = serde_json::from_value(json!({
            "data": {
                "isPipelineConfigValid": {
                    "__typename": "PipelineConfigValidationInvalid",
                    "errors": [{
                        "reason": "FIELD_NOT_DEFINED",
                        "message": "Field \"nope\" is not defined",
                        "stack": {"entries": [
                            {"__typename": "EvaluationStackPathEntry", "field": {"name": "solids"}},
                            {"__typename": "EvaluationStackListItemEntry", "listIndex": 0}
                        ]}
                    }]
                }
            }
        }))
        .unwrap();

        let validity = envelope.data.unwrap().is_pipeline_config_valid;
        let ConfigValidity::Invalid { errors } = validity else {
            panic!("expected invalid verdict");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].reason, ErrorReason::FieldNotDefined);
        assert_eq!(
            errors[0].stack.entries,
            vec![
                StackEntry::Field {
                    field: FieldRef {
                        name: "solids".to_string()
                    }
                },
                StackEntry::ListItem { list_index: 0 },
            ]
        );
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn parses_valid_and_unknown_typenames() {
        let valid: ConfigValidity =
            serde_json::from_value(json!({"__typename": "PipelineConfigValidationValid"})).unwrap();
        assert_eq!(valid, ConfigValidity::Valid);

        let other: ConfigValidity =
            serde_json::from_value(json!({"__typename": "PipelineNotFoundError"})).unwrap();
        assert_eq!(other, ConfigValidity::Other);
    }

    #[test]
    fn rejects_unknown_stack_entry() {
        let result: Result<StackEntry, _> =
            serde_json::from_value(json!({"__typename": "EvaluationStackMapEntry"}));
        assert!(result.is_err());
    }

    #[test]
    fn parses_pipeline_types() {
        let data: PipelineTypesData = serde_json::from_value(json!({
            "pipelineOrError": {
                "__typename": "Pipeline",
                "types": [
                    {"__typename": "RegularType", "name": "Int"},
                    {"__typename": "CompositeType", "name": "Env", "fields": [
                        {"name": "solids", "type": {"name": "Env.Solids"}},
                        {"name": "tags", "type": {"name": null}}
                    ]}
                ]
            }
        }))
        .unwrap();

        let PipelineOrError::Pipeline { types } = data.pipeline_or_error else {
            panic!("expected pipeline");
        };
        assert_eq!(types.len(), 2);
        assert!(matches!(types[0], ConfigTypeInfo::Other));
        assert!(matches!(&types[1], ConfigTypeInfo::CompositeType { fields, .. } if fields.len() == 2));
    }

    #[test]
    fn parses_pipeline_not_found() {
        let data: PipelineTypesData = serde_json::from_value(json!({
            "pipelineOrError": {"__typename": "PipelineNotFoundError", "message": "no such pipeline"}
        }))
        .unwrap();
        assert!(matches!(data.pipeline_or_error, PipelineOrError::NotFound { message } if message == "no such pipeline"));
    }
}
