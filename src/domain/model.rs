// Copyright 2025 The Reporting Server Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Report definition entity and its nested reference types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A report definition: a named, parameterized description of a report,
/// optionally scoped by a base cohort and composed of named data set slots.
///
/// Retirement is soft delete: a retired definition stays queryable (with
/// `include_retired`) until it is purged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinition {
    /// Stable unique identifier. Assigned by the definition service on first
    /// save when empty.
    #[serde(default)]
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Optional base filter. Absent means the definition applies to everyone
    /// ("All Patients" in the rendered representation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_cohort: Option<Mapped>,
    /// Named data set slots, each referencing a data set definition. The wire
    /// name matches the rendered representation property.
    #[serde(
        default,
        rename = "dataSetDefinitions",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub dataset_definitions: IndexMap<String, Mapped>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retire_reason: Option<String>,
}

impl ReportDefinition {
    /// Explicit soft-delete transition: returns a retired copy carrying the
    /// given reason. The original is consumed rather than mutated in place.
    pub fn retire(self, reason: impl Into<String>) -> Self {
        Self {
            retired: true,
            retire_reason: Some(reason.into()),
            ..self
        }
    }

    /// Text the search operation indexes: name plus description.
    pub fn indexed_text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }
}

/// A named report parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub datatype: String,
}

/// A reference to another definition together with parameter mappings that
/// wire the referencing definition's parameters into the referenced one.
///
/// Either link in the chain may be absent or incomplete; consumers deriving
/// display values must tolerate that and fall back rather than fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapped {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameterizable: Option<DefinitionRef>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameter_mappings: IndexMap<String, String>,
}

impl Mapped {
    /// Display name of the referenced definition, when the whole chain is
    /// present.
    pub fn referenced_name(&self) -> Option<&str> {
        self.parameterizable
            .as_ref()
            .and_then(|r| r.name.as_deref())
    }
}

/// Identity and display name of a referenced definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRef {
    #[serde(default)]
    pub uuid: String,
    /// Display name. Optional so that malformed references deserialize
    /// instead of failing the whole definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str) -> ReportDefinition {
        ReportDefinition {
            uuid: "abc-123".to_string(),
            name: name.to_string(),
            description: "A test definition".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_retire_returns_retired_copy() {
        let retired = definition("Monthly Attendance").retire("superseded");
        assert!(retired.retired);
        assert_eq!(retired.retire_reason.as_deref(), Some("superseded"));
        assert_eq!(retired.uuid, "abc-123");
        assert_eq!(retired.name, "Monthly Attendance");
    }

    #[test]
    fn test_indexed_text_covers_name_and_description() {
        let def = definition("Monthly Attendance");
        let text = def.indexed_text();
        assert!(text.contains("Monthly Attendance"));
        assert!(text.contains("A test definition"));
    }

    #[test]
    fn test_referenced_name_requires_full_chain() {
        let mut mapped = Mapped::default();
        assert_eq!(mapped.referenced_name(), None);

        mapped.parameterizable = Some(DefinitionRef {
            uuid: "ref-1".to_string(),
            name: None,
        });
        assert_eq!(mapped.referenced_name(), None);

        mapped.parameterizable = Some(DefinitionRef {
            uuid: "ref-1".to_string(),
            name: Some("Adult Patients".to_string()),
        });
        assert_eq!(mapped.referenced_name(), Some("Adult Patients"));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let mut def = definition("Monthly Attendance");
        def.dataset_definitions.insert(
            "visits".to_string(),
            Mapped {
                parameterizable: Some(DefinitionRef {
                    uuid: "ds-1".to_string(),
                    name: Some("Visit Data Set".to_string()),
                }),
                parameter_mappings: IndexMap::new(),
            },
        );
        let json = serde_json::to_string(&def).expect("serialize");
        assert!(json.contains("\"dataSetDefinitions\""));
        assert!(!json.contains("\"dataset_definitions\""));
        assert!(!json.contains("\"retireReason\""));
    }
}
