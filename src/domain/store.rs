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

//! In-memory definition store.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::DefinitionError;
use super::model::ReportDefinition;
use super::service::DefinitionService;

/// Registered type classifier for the definitions this store manages.
pub const REPORT_DEFINITION_TYPE: &str = "ReportDefinition";

/// In-memory `DefinitionService` implementation backed by an insertion-ordered
/// map keyed by uuid. All locking lives here; callers stay stateless.
#[derive(Default)]
pub struct InMemoryDefinitionStore {
    definitions: RwLock<IndexMap<String, ReportDefinition>>,
}

impl InMemoryDefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with the given definitions. Definitions without a
    /// uuid are assigned one.
    pub fn with_definitions(definitions: Vec<ReportDefinition>) -> Self {
        let mut map = IndexMap::new();
        for mut definition in definitions {
            if definition.uuid.is_empty() {
                definition.uuid = Uuid::new_v4().to_string();
            }
            map.insert(definition.uuid.clone(), definition);
        }
        Self {
            definitions: RwLock::new(map),
        }
    }
}

#[async_trait]
impl DefinitionService for InMemoryDefinitionStore {
    async fn get_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<ReportDefinition>, DefinitionError> {
        Ok(self.definitions.read().await.get(uuid).cloned())
    }

    async fn save(
        &self,
        mut definition: ReportDefinition,
    ) -> Result<ReportDefinition, DefinitionError> {
        if definition.name.trim().is_empty() {
            return Err(DefinitionError::validation("name must not be empty"));
        }
        if definition.uuid.is_empty() {
            definition.uuid = Uuid::new_v4().to_string();
        }
        self.definitions
            .write()
            .await
            .insert(definition.uuid.clone(), definition.clone());
        Ok(definition)
    }

    async fn retire(
        &self,
        definition: ReportDefinition,
    ) -> Result<ReportDefinition, DefinitionError> {
        let mut definitions = self.definitions.write().await;
        if !definitions.contains_key(&definition.uuid) {
            return Err(DefinitionError::not_found(&definition.uuid));
        }
        definitions.insert(definition.uuid.clone(), definition.clone());
        Ok(definition)
    }

    async fn purge(&self, uuid: &str) -> Result<(), DefinitionError> {
        // shift_remove keeps the remaining definitions in insertion order
        match self.definitions.write().await.shift_remove(uuid) {
            Some(_) => Ok(()),
            None => Err(DefinitionError::not_found(uuid)),
        }
    }

    async fn search(
        &self,
        query: &str,
        include_retired: bool,
    ) -> Result<Vec<ReportDefinition>, DefinitionError> {
        let needle = query.to_lowercase();
        Ok(self
            .definitions
            .read()
            .await
            .values()
            .filter(|d| include_retired || !d.retired)
            .filter(|d| d.indexed_text().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_all(
        &self,
        include_retired: bool,
    ) -> Result<Vec<ReportDefinition>, DefinitionError> {
        Ok(self
            .definitions
            .read()
            .await
            .values()
            .filter(|d| include_retired || !d.retired)
            .cloned()
            .collect())
    }

    fn definition_type(&self) -> &'static str {
        REPORT_DEFINITION_TYPE
    }
}
