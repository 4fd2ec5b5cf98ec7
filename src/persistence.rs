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

//! File-backed persistence for report definitions.
//!
//! The store itself is in-memory; this module snapshots it to a YAML file
//! after API mutations and loads it back at startup. Persistence failures are
//! logged, never surfaced to the request that triggered them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{DefinitionService, ReportDefinition};

/// Errors raised while loading or saving the definitions file.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to access definitions file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse definitions file: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Snapshot-based persistence keyed to a single definitions file.
pub struct DefinitionPersistence {
    path: PathBuf,
}

impl DefinitionPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all definitions from the file. A missing file is an empty store,
    /// not an error.
    pub fn load(&self) -> Result<Vec<ReportDefinition>, PersistenceError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the full definition set, retired definitions included, to the
    /// file.
    pub fn save(&self, definitions: &[ReportDefinition]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_yaml::to_string(definitions)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Persist the service's current definitions after a successful operation.
/// Logs errors but does not fail the request - persistence is best-effort.
pub async fn persist_after_operation(
    persistence: &Option<Arc<DefinitionPersistence>>,
    service: &Arc<dyn DefinitionService>,
    operation: &str,
) {
    let Some(persistence) = persistence else {
        return;
    };
    match service.get_all(true).await {
        Ok(definitions) => {
            if let Err(e) = persistence.save(&definitions) {
                log::error!("Failed to persist definitions after {operation}: {e}");
            }
        }
        Err(e) => {
            log::error!("Failed to snapshot definitions after {operation}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InMemoryDefinitionStore;

    fn definition(name: &str) -> ReportDefinition {
        ReportDefinition {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = DefinitionPersistence::new(dir.path().join("definitions.yaml"));
        assert!(persistence.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = DefinitionPersistence::new(dir.path().join("definitions.yaml"));

        let defs = vec![
            definition("Monthly Attendance"),
            definition("Weekly Summary").retire("superseded"),
        ];
        persistence.save(&defs).unwrap();

        let loaded = persistence.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Monthly Attendance");
        assert!(loaded[1].retired);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let persistence =
            DefinitionPersistence::new(dir.path().join("nested/dir/definitions.yaml"));
        persistence.save(&[definition("Monthly Attendance")]).unwrap();
        assert_eq!(persistence.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_persist_after_operation_includes_retired() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = Some(Arc::new(DefinitionPersistence::new(
            dir.path().join("definitions.yaml"),
        )));

        let store = InMemoryDefinitionStore::new();
        let saved = store.save(definition("Monthly Attendance")).await.unwrap();
        store.retire(saved.retire("obsolete")).await.unwrap();
        let service: Arc<dyn DefinitionService> = Arc::new(store);

        persist_after_operation(&persistence, &service, "retiring definition").await;

        let loaded = persistence.as_ref().unwrap().load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].retired);
    }
}
