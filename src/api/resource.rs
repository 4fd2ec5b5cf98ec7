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

//! The report definition resource adapter.
//!
//! Translates between the definition service's domain objects and the JSON
//! representations the REST surface exposes. Which fields a response carries
//! is driven by the requested representation level: the default level keeps
//! payloads small, the full level adds derived fields (base cohort name, data
//! set mapping, type classifier).
//!
//! The adapter is stateless aside from its static configuration; every
//! operation runs inside one request.

use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::ApiSettings;
use crate::domain::{DefinitionService, ReportDefinition};

/// Display name substituted when a definition has no usable base cohort.
pub const ALL_PATIENTS_LABEL: &str = "All Patients";

/// Representation level requested via the `v` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Default,
    Full,
}

impl Representation {
    /// Parse the raw `v` parameter. Absence means the default level;
    /// unrecognized values yield `None` and must never produce a body.
    pub fn parse(raw: Option<&str>) -> Option<Representation> {
        match raw {
            None => Some(Representation::Default),
            Some(s) if s.eq_ignore_ascii_case("default") => Some(Representation::Default),
            Some(s) if s.eq_ignore_ascii_case("full") => Some(Representation::Full),
            Some(_) => None,
        }
    }
}

/// Link directives attached to a rendered representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRel {
    /// Self link, present at every level.
    SelfLink,
    /// Link to the full representation. Only added at the default level; the
    /// full level carries a self link alone.
    FullView,
}

/// Accessor producing one property of the rendered representation.
pub type PropertyAccessor = fn(&DefinitionResourceAdapter, &ReportDefinition) -> Value;

/// The ordered property set and link directives for one representation level.
pub struct ResourceDescription {
    pub properties: &'static [(&'static str, PropertyAccessor)],
    pub links: &'static [LinkRel],
}

impl ResourceDescription {
    pub fn property_names(&self) -> Vec<&'static str> {
        self.properties.iter().map(|(name, _)| *name).collect()
    }
}

/// Errors the adapter itself can raise. Service failures are not translated
/// here; they pass through to the API boundary untouched.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource name metadata is missing; cannot construct URIs")]
    MissingResourceName,
}

/// Maps REST verbs and representation levels onto the definition service.
pub struct DefinitionResourceAdapter {
    service: Arc<dyn DefinitionService>,
    resource_name: String,
    presentation_prefix: String,
}

impl DefinitionResourceAdapter {
    const DEFAULT_PROPERTIES: &'static [(&'static str, PropertyAccessor)] = &[
        ("uuid", Self::prop_uuid),
        ("name", Self::prop_name),
        ("description", Self::prop_description),
        ("parameters", Self::prop_parameters),
    ];

    const FULL_PROPERTIES: &'static [(&'static str, PropertyAccessor)] = &[
        ("uuid", Self::prop_uuid),
        ("name", Self::prop_name),
        ("description", Self::prop_description),
        ("parameters", Self::prop_parameters),
        ("baseCohort", Self::prop_base_cohort),
        ("dataSetDefinitions", Self::prop_dataset_definitions),
        ("type", Self::prop_type),
    ];

    pub fn new(service: Arc<dyn DefinitionService>, api: ApiSettings) -> Self {
        Self {
            service,
            resource_name: api.resource_name,
            presentation_prefix: api.presentation_prefix,
        }
    }

    pub fn service(&self) -> &Arc<dyn DefinitionService> {
        &self.service
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// The declared property set and links for a representation level.
    pub fn describe_representation(rep: Representation) -> ResourceDescription {
        match rep {
            Representation::Default => ResourceDescription {
                properties: Self::DEFAULT_PROPERTIES,
                links: &[LinkRel::SelfLink, LinkRel::FullView],
            },
            Representation::Full => ResourceDescription {
                properties: Self::FULL_PROPERTIES,
                links: &[LinkRel::SelfLink],
            },
        }
    }

    /// Describe the representation a client asked for by raw `v` value.
    /// Unrecognized levels have no description.
    pub fn describe_requested(raw: Option<&str>) -> Option<ResourceDescription> {
        Representation::parse(raw).map(Self::describe_representation)
    }

    /// Render a definition at the given representation level: the declared
    /// properties in order, plus the level's hyperlinks.
    pub fn render(
        &self,
        definition: &ReportDefinition,
        rep: Representation,
    ) -> Result<Value, ResourceError> {
        let description = Self::describe_representation(rep);
        let mut object = serde_json::Map::new();
        for (name, accessor) in description.properties {
            object.insert((*name).to_string(), accessor(self, definition));
        }

        let self_uri = self.uri_for(Some(definition))?;
        let links: Vec<Value> = description
            .links
            .iter()
            .map(|rel| match rel {
                LinkRel::SelfLink => json!({ "rel": "self", "uri": self_uri }),
                LinkRel::FullView => json!({ "rel": "full", "uri": format!("{self_uri}?v=full") }),
            })
            .collect();
        object.insert("links".to_string(), Value::Array(links));

        Ok(Value::Object(object))
    }

    /// Display name of the definition's base cohort, when the reference chain
    /// is intact. Composes with [`ALL_PATIENTS_LABEL`] at the call site; this
    /// is a best-effort enrichment and never fails.
    pub fn base_cohort_name(&self, definition: &ReportDefinition) -> Option<String> {
        definition
            .base_cohort
            .as_ref()
            .and_then(|mapped| mapped.referenced_name())
            .map(str::to_string)
    }

    /// Mapping from each data set slot to its referenced definition's display
    /// name. Absent when any slot is malformed; never fails.
    pub fn dataset_mapping(
        &self,
        definition: &ReportDefinition,
    ) -> Option<indexmap::IndexMap<String, String>> {
        let mut mapping = indexmap::IndexMap::new();
        for (slot, mapped) in &definition.dataset_definitions {
            let name = mapped.referenced_name()?;
            mapping.insert(slot.clone(), name.to_string());
        }
        Some(mapping)
    }

    /// Presentation URI for a definition:
    /// `<presentation-prefix>/<resource-name>/<uuid>`. `None` yields the
    /// empty string. An empty resource name is a configuration defect and
    /// surfaces as an unrecoverable error.
    pub fn uri_for(&self, definition: Option<&ReportDefinition>) -> Result<String, ResourceError> {
        let Some(definition) = definition else {
            return Ok(String::new());
        };
        Ok(format!("{}/{}", self.collection_uri()?, definition.uuid))
    }

    /// Presentation URI for the collection itself.
    pub fn collection_uri(&self) -> Result<String, ResourceError> {
        if self.resource_name.trim().is_empty() {
            return Err(ResourceError::MissingResourceName);
        }
        Ok(format!(
            "{}/{}",
            self.presentation_prefix.trim_end_matches('/'),
            self.resource_name
        ))
    }

    fn prop_uuid(&self, definition: &ReportDefinition) -> Value {
        Value::String(definition.uuid.clone())
    }

    fn prop_name(&self, definition: &ReportDefinition) -> Value {
        Value::String(definition.name.clone())
    }

    fn prop_description(&self, definition: &ReportDefinition) -> Value {
        Value::String(definition.description.clone())
    }

    fn prop_parameters(&self, definition: &ReportDefinition) -> Value {
        serde_json::to_value(&definition.parameters).unwrap_or(Value::Null)
    }

    fn prop_base_cohort(&self, definition: &ReportDefinition) -> Value {
        Value::String(
            self.base_cohort_name(definition)
                .unwrap_or_else(|| ALL_PATIENTS_LABEL.to_string()),
        )
    }

    fn prop_dataset_definitions(&self, definition: &ReportDefinition) -> Value {
        match self.dataset_mapping(definition) {
            Some(mapping) => serde_json::to_value(mapping).unwrap_or(Value::Null),
            None => Value::Null,
        }
    }

    fn prop_type(&self, _definition: &ReportDefinition) -> Value {
        Value::String(self.service.definition_type().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DefinitionRef, InMemoryDefinitionStore, Mapped};
    use pretty_assertions::assert_eq;

    fn adapter() -> DefinitionResourceAdapter {
        let service: Arc<dyn DefinitionService> = Arc::new(InMemoryDefinitionStore::new());
        DefinitionResourceAdapter::new(service, ApiSettings::default())
    }

    fn definition() -> ReportDefinition {
        ReportDefinition {
            uuid: "abc-123".to_string(),
            name: "Monthly Attendance".to_string(),
            description: "Attendance counts per month".to_string(),
            ..Default::default()
        }
    }

    fn mapped_ref(name: Option<&str>) -> Mapped {
        Mapped {
            parameterizable: Some(DefinitionRef {
                uuid: "ref-1".to_string(),
                name: name.map(str::to_string),
            }),
            parameter_mappings: indexmap::IndexMap::new(),
        }
    }

    #[test]
    fn test_representation_parse() {
        assert_eq!(Representation::parse(None), Some(Representation::Default));
        assert_eq!(
            Representation::parse(Some("default")),
            Some(Representation::Default)
        );
        assert_eq!(
            Representation::parse(Some("FULL")),
            Some(Representation::Full)
        );
        assert_eq!(Representation::parse(Some("ref")), None);
    }

    #[test]
    fn test_default_description_properties_and_links() {
        let description =
            DefinitionResourceAdapter::describe_representation(Representation::Default);
        assert_eq!(
            description.property_names(),
            vec!["uuid", "name", "description", "parameters"]
        );
        assert_eq!(description.links, &[LinkRel::SelfLink, LinkRel::FullView]);
    }

    #[test]
    fn test_full_description_properties_and_links() {
        let description = DefinitionResourceAdapter::describe_representation(Representation::Full);
        assert_eq!(
            description.property_names(),
            vec![
                "uuid",
                "name",
                "description",
                "parameters",
                "baseCohort",
                "dataSetDefinitions",
                "type"
            ]
        );
        // The full level carries a self link only
        assert_eq!(description.links, &[LinkRel::SelfLink]);
    }

    #[test]
    fn test_unrecognized_level_has_no_description() {
        assert!(DefinitionResourceAdapter::describe_requested(Some("ref")).is_none());
        assert!(DefinitionResourceAdapter::describe_requested(Some("custom:(uuid)")).is_none());
        assert!(DefinitionResourceAdapter::describe_requested(None).is_some());
    }

    #[test]
    fn test_render_default_representation() {
        let rendered = adapter()
            .render(&definition(), Representation::Default)
            .unwrap();
        let object = rendered.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["description", "links", "name", "parameters", "uuid"]
        );

        let links = object["links"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0]["rel"], "self");
        assert_eq!(
            links[0]["uri"],
            "/reporting/v1/reportingrest/reportDefinition/abc-123"
        );
        assert_eq!(links[1]["rel"], "full");
        assert_eq!(
            links[1]["uri"],
            "/reporting/v1/reportingrest/reportDefinition/abc-123?v=full"
        );
    }

    #[test]
    fn test_render_full_representation() {
        let rendered = adapter()
            .render(&definition(), Representation::Full)
            .unwrap();
        let object = rendered.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "baseCohort",
                "dataSetDefinitions",
                "description",
                "links",
                "name",
                "parameters",
                "type",
                "uuid"
            ]
        );

        assert_eq!(object["baseCohort"], ALL_PATIENTS_LABEL);
        assert_eq!(object["type"], "ReportDefinition");

        let links = object["links"].as_array().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0]["rel"], "self");
    }

    #[test]
    fn test_base_cohort_name_fallback() {
        let adapter = adapter();
        let mut def = definition();
        assert_eq!(adapter.base_cohort_name(&def), None);

        def.base_cohort = Some(mapped_ref(None));
        assert_eq!(adapter.base_cohort_name(&def), None);

        def.base_cohort = Some(mapped_ref(Some("Adult Patients")));
        assert_eq!(
            adapter.base_cohort_name(&def).as_deref(),
            Some("Adult Patients")
        );

        let rendered = adapter.render(&def, Representation::Full).unwrap();
        assert_eq!(rendered["baseCohort"], "Adult Patients");
    }

    #[test]
    fn test_dataset_mapping_per_slot() {
        let adapter = adapter();
        let mut def = definition();
        def.dataset_definitions
            .insert("visits".to_string(), mapped_ref(Some("Visit Data Set")));
        def.dataset_definitions
            .insert("labs".to_string(), mapped_ref(Some("Lab Data Set")));

        let mapping = adapter.dataset_mapping(&def).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["visits"], "Visit Data Set");
        assert_eq!(mapping["labs"], "Lab Data Set");
    }

    #[test]
    fn test_dataset_mapping_absent_when_malformed() {
        let adapter = adapter();
        let mut def = definition();
        def.dataset_definitions
            .insert("visits".to_string(), mapped_ref(Some("Visit Data Set")));
        def.dataset_definitions
            .insert("broken".to_string(), mapped_ref(None));

        assert!(adapter.dataset_mapping(&def).is_none());

        let rendered = adapter.render(&def, Representation::Full).unwrap();
        assert_eq!(rendered["dataSetDefinitions"], Value::Null);
    }

    #[test]
    fn test_uri_for_none_is_empty() {
        assert_eq!(adapter().uri_for(None).unwrap(), "");
    }

    #[test]
    fn test_uri_uses_presentation_prefix() {
        let uri = adapter().uri_for(Some(&definition())).unwrap();
        assert!(uri.contains("/reporting/"));
        assert!(!uri.contains("/rest/"));
        assert!(uri.ends_with("/abc-123"));
    }

    #[test]
    fn test_missing_resource_name_is_fatal() {
        let service: Arc<dyn DefinitionService> = Arc::new(InMemoryDefinitionStore::new());
        let adapter = DefinitionResourceAdapter::new(
            service,
            ApiSettings {
                resource_name: String::new(),
                presentation_prefix: "/reporting/v1/reportingrest".to_string(),
            },
        );
        assert!(matches!(
            adapter.uri_for(Some(&definition())),
            Err(ResourceError::MissingResourceName)
        ));
    }
}
