//! GraphQL query documents and variable builders.

use pipecheck_config::ConfigDocument;
use serde_json::{json, Value};

/// Checks a config document against a pipeline's config schema.
pub const CHECK_CONFIG_QUERY: &str = r"query CheckConfigQuery($executionParams: PipelineExecutionParams!) {
  isPipelineConfigValid(executionParams: $executionParams) {
    __typename
    ... on PipelineConfigValidationInvalid {
      errors {
        reason
        message
        stack {
          entries {
            __typename
            ... on EvaluationStackPathEntry {
              field {
                name
              }
            }
            ... on EvaluationStackListItemEntry {
              listIndex
            }
          }
        }
      }
    }
  }
}";

/// Lists the config types of a pipeline.
pub const PIPELINE_TYPES_QUERY: &str = r"query PipelineTypesQuery($pipelineName: String!) {
  pipelineOrError(name: $pipelineName) {
    __typename
    ... on Pipeline {
      types {
        __typename
        name
        ... on CompositeType {
          fields {
            name
            type {
              name
            }
          }
        }
      }
    }
    ... on PipelineNotFoundError {
      message
    }
  }
}";

/// A GraphQL request body.
#[derive(Debug, serde::Serialize)]
pub struct GraphQlRequest {
    /// Query document.
    pub query: &'static str,
    /// Query variables.
    pub variables: Value,
}

/// Builds the request for [`CHECK_CONFIG_QUERY`].
pub fn check_config_request(pipeline_name: &str, config: &ConfigDocument) -> GraphQlRequest {
    GraphQlRequest {
        query: CHECK_CONFIG_QUERY,
        variables: json!({
            "executionParams": {
                "pipelineName": pipeline_name,
                "config": config,
            }
        }),
    }
}

/// Builds the request for [`PIPELINE_TYPES_QUERY`].
pub fn pipeline_types_request(pipeline_name: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: PIPELINE_TYPES_QUERY,
        variables: json!({ "pipelineName": pipeline_name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_config_request_wraps_execution_params() {
        let mut config = ConfigDocument::new();
        config.insert("solids".to_string(), json!({"sum": {"inputs": {"num": 1}}}));

        let request = check_config_request("math", &config);
        assert_eq!(request.query, CHECK_CONFIG_QUERY);
        assert_eq!(
            request.variables,
            json!({
                "executionParams": {
                    "pipelineName": "math",
                    "config": {"solids": {"sum": {"inputs": {"num": 1}}}}
                }
            })
        );
    }

    #[test]
    fn check_config_query_selects_both_stack_entry_kinds() {
        assert!(CHECK_CONFIG_QUERY.contains("... on EvaluationStackPathEntry"));
        assert!(CHECK_CONFIG_QUERY.contains("... on EvaluationStackListItemEntry"));
    }

    #[test]
    fn pipeline_types_request_serializes() {
        let body = serde_json::to_value(pipeline_types_request("math")).unwrap();
        assert_eq!(body["variables"], json!({"pipelineName": "math"}));
        assert!(body["query"].as_str().unwrap().contains("pipelineOrError"));
    }
}
