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

//! Type-safe configuration structures.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::ReportDefinition;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportingServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub store: StoreSettings,
    /// Definitions seeded into the store at startup when no definitions file
    /// is configured (or the file does not exist yet).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<ReportDefinition>,
}

impl ReportingServerConfig {
    /// Validate the configuration. Invalid resource metadata is fatal here so
    /// that URI construction can never fail at request time for that reason.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }
        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host must not be empty");
        }
        self.api.validate()?;
        for definition in &self.definitions {
            if definition.name.trim().is_empty() {
                anyhow::bail!("seed definitions must have a non-empty name");
            }
        }
        Ok(())
    }
}

/// Host/port/logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

/// Resource metadata and link construction settings.
///
/// Routes are served under the REST prefix (`/rest/v1/<namespace>`), while
/// hyperlinks in responses are rendered under `presentation_prefix`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Resource name used both in the route and in constructed URIs.
    #[serde(default = "default_resource_name")]
    pub resource_name: String,
    /// Prefix under which resource URIs are presented to clients.
    #[serde(default = "default_presentation_prefix")]
    pub presentation_prefix: String,
}

impl ApiSettings {
    pub fn validate(&self) -> Result<()> {
        if self.resource_name.trim().is_empty() {
            anyhow::bail!("api.resource_name must not be empty");
        }
        if self.resource_name.contains('/') {
            anyhow::bail!("api.resource_name must not contain '/'");
        }
        if !self.presentation_prefix.starts_with('/') {
            anyhow::bail!("api.presentation_prefix must start with '/'");
        }
        if self.presentation_prefix.contains("/rest/") {
            anyhow::bail!("api.presentation_prefix must not contain the served '/rest/' prefix");
        }
        Ok(())
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            resource_name: default_resource_name(),
            presentation_prefix: default_presentation_prefix(),
        }
    }
}

/// Definition store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Optional YAML file the store is loaded from at startup and persisted
    /// to after mutations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions_file: Option<PathBuf>,
    /// Set to false to keep API mutations in memory only.
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            definitions_file: None,
            persist: default_persist(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_resource_name() -> String {
    "reportDefinition".to_string()
}

fn default_presentation_prefix() -> String {
    "/reporting/v1/reportingrest".to_string()
}

fn default_persist() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReportingServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.resource_name, "reportDefinition");
        assert_eq!(config.api.presentation_prefix, "/reporting/v1/reportingrest");
    }

    #[test]
    fn test_default_store_settings_persist() {
        // Must agree with the serde default applied when the key is omitted
        let config = ReportingServerConfig::default();
        assert!(config.store.persist);

        let parsed: StoreSettings = serde_json::from_str("{}").unwrap();
        assert!(parsed.persist);
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let mut config = ReportingServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_resource_name_is_rejected() {
        let mut config = ReportingServerConfig::default();
        config.api.resource_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_presentation_prefix_must_not_be_rest() {
        let mut config = ReportingServerConfig::default();
        config.api.presentation_prefix = "/rest/v1/reportingrest".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unnamed_seed_definition_is_rejected() {
        let mut config = ReportingServerConfig::default();
        config.definitions.push(ReportDefinition::default());
        assert!(config.validate().is_err());
    }
}
