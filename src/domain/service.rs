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

//! The definition service contract.

use async_trait::async_trait;

use super::error::DefinitionError;
use super::model::ReportDefinition;

/// Management contract for report definitions. The REST resource delegates
/// every persistence and query concern here; it never stores state itself.
#[async_trait]
pub trait DefinitionService: Send + Sync {
    /// Look up a definition by its unique id. `None` signals absence.
    async fn get_by_uuid(&self, uuid: &str)
        -> Result<Option<ReportDefinition>, DefinitionError>;

    /// Save or update a definition. A definition without a uuid is assigned
    /// one; the persisted (possibly re-identified) definition is returned.
    async fn save(
        &self,
        definition: ReportDefinition,
    ) -> Result<ReportDefinition, DefinitionError>;

    /// Store a retired definition (soft delete). The definition stays
    /// queryable as retired until purged.
    async fn retire(
        &self,
        definition: ReportDefinition,
    ) -> Result<ReportDefinition, DefinitionError>;

    /// Hard-delete a definition by unique id.
    async fn purge(&self, uuid: &str) -> Result<(), DefinitionError>;

    /// Case-insensitive text search over the definitions' indexed text.
    async fn search(
        &self,
        query: &str,
        include_retired: bool,
    ) -> Result<Vec<ReportDefinition>, DefinitionError>;

    /// All definitions, optionally including retired ones.
    async fn get_all(
        &self,
        include_retired: bool,
    ) -> Result<Vec<ReportDefinition>, DefinitionError>;

    /// The registered type classifier for the definitions this service
    /// manages.
    fn definition_type(&self) -> &'static str;
}
