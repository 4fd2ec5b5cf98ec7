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

//! Data Transfer Objects for API requests.
//!
//! Create and update requests share one DTO with every field optional. On
//! create, absent fields fall back to defaults; on update, absent fields leave
//! the existing value untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DefinitionRef, Mapped, Parameter, ReportDefinition};

/// Request body for creating or updating a report definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDefinitionDto {
    /// Display name. Required on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub base_cohort: Option<MappedDto>,
    #[serde(
        default,
        rename = "dataSetDefinitions",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Object)]
    pub dataset_definitions: Option<IndexMap<String, MappedDto>>,
}

/// A named report parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDto {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub datatype: String,
}

/// A reference to another definition plus parameter mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MappedDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameterizable: Option<DefinitionRefDto>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schema(value_type = Object)]
    pub parameter_mappings: IndexMap<String, String>,
}

/// Identity and display name of a referenced definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionRefDto {
    #[serde(default)]
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ReportDefinitionDto {
    /// Build a fresh definition from the request. The uuid is left empty and
    /// assigned by the definition service on save.
    pub fn into_definition(self) -> ReportDefinition {
        let mut definition = ReportDefinition::default();
        self.apply_to(&mut definition);
        definition
    }

    /// Apply the request on top of an existing definition. Only fields the
    /// request carries are overwritten.
    pub fn apply_to(self, definition: &mut ReportDefinition) {
        if let Some(name) = self.name {
            definition.name = name;
        }
        if let Some(description) = self.description {
            definition.description = description;
        }
        if let Some(parameters) = self.parameters {
            definition.parameters = parameters.into_iter().map(ParameterDto::into_domain).collect();
        }
        if let Some(base_cohort) = self.base_cohort {
            definition.base_cohort = Some(base_cohort.into_domain());
        }
        if let Some(dataset_definitions) = self.dataset_definitions {
            definition.dataset_definitions = dataset_definitions
                .into_iter()
                .map(|(slot, mapped)| (slot, mapped.into_domain()))
                .collect();
        }
    }
}

impl ParameterDto {
    fn into_domain(self) -> Parameter {
        Parameter {
            name: self.name,
            label: self.label,
            datatype: self.datatype,
        }
    }
}

impl MappedDto {
    fn into_domain(self) -> Mapped {
        Mapped {
            parameterizable: self.parameterizable.map(|r| DefinitionRef {
                uuid: r.uuid,
                name: r.name,
            }),
            parameter_mappings: self.parameter_mappings,
        }
    }
}
