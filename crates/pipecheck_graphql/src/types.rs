//! Type config for editor autocompletion.
//!
//! Flattens a pipeline's config types into field lists keyed by type name,
//! plus the field list of the environment (root) type.

use crate::response::ConfigTypeInfo;
use serde::Serialize;
use std::collections::BTreeMap;

/// A field of a composite type, by name and type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldType {
    /// Field name.
    pub name: String,
    /// Name of the field's type, if it has one.
    pub type_name: Option<String>,
}

/// Field lists of every composite type in a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeConfig {
    /// Fields of the environment type; empty if it is not composite.
    pub environment: Vec<FieldType>,
    /// Fields of each composite type.
    pub types: BTreeMap<String, Vec<FieldType>>,
}

/// Builds a [`TypeConfig`] from a pipeline's config types.
pub fn build_type_config(types: &[ConfigTypeInfo], environment_type_name: &str) -> TypeConfig {
    let types: BTreeMap<String, Vec<FieldType>> = types
        .iter()
        .filter_map(|info| match info {
            ConfigTypeInfo::CompositeType { name, fields } => {
                let fields = fields
                    .iter()
                    .map(|field| FieldType {
                        name: field.name.clone(),
                        type_name: field.field_type.name.clone(),
                    })
                    .collect();
                Some((name.clone(), fields))
            }
            ConfigTypeInfo::Other => None,
        })
        .collect();

    TypeConfig {
        environment: types.get(environment_type_name).cloned().unwrap_or_default(),
        types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{TypeFieldInfo, TypeRef};

    fn composite(name: &str, fields: &[(&str, Option<&str>)]) -> ConfigTypeInfo {
        ConfigTypeInfo::CompositeType {
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(field, type_name)| TypeFieldInfo {
                    name: (*field).to_string(),
                    field_type: TypeRef {
                        name: type_name.map(ToString::to_string),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn collects_composite_types_only() {
        let types = vec![
            ConfigTypeInfo::Other,
            composite("Env", &[("solids", Some("Env.Solids")), ("context", Some("Env.Context"))]),
            composite("Env.Solids", &[("sum", Some("Sum.Config"))]),
        ];

        let config = build_type_config(&types, "Env");
        assert_eq!(config.types.len(), 2);
        assert_eq!(
            config.environment,
            vec![
                FieldType {
                    name: "solids".to_string(),
                    type_name: Some("Env.Solids".to_string()),
                },
                FieldType {
                    name: "context".to_string(),
                    type_name: Some("Env.Context".to_string()),
                },
            ]
        );
    }

    #[test]
    fn missing_environment_type_yields_empty_fields() {
        let types = vec![composite("Other", &[("a", None)])];
        let config = build_type_config(&types, "Env");
        assert!(config.environment.is_empty());
        assert_eq!(config.types["Other"][0].type_name, None);
    }

    #[test]
    fn serializes_camel_case() {
        let config = build_type_config(&[composite("Env", &[("solids", Some("S"))])], "Env");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["environment"][0]["typeName"], "S");
    }
}
