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

//! Server assembly: wires the definition store, resource adapter, and API
//! routers together and runs the HTTP listener.

use anyhow::Result;
use axum::{routing::get, Router};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api::resource::DefinitionResourceAdapter;
use crate::api::version::API_CURRENT_VERSION;
use crate::config::{load_config_file, ReportingServerConfig};
use crate::domain::{DefinitionService, InMemoryDefinitionStore};
use crate::persistence::DefinitionPersistence;

pub struct ReportingServer {
    config: ReportingServerConfig,
    config_file_path: Option<String>,
}

impl ReportingServer {
    /// Create a server from an already-loaded configuration.
    pub fn new(config: ReportingServerConfig) -> Self {
        Self {
            config,
            config_file_path: None,
        }
    }

    /// Create a server from a configuration file.
    pub fn from_config_file(config_path: PathBuf) -> Result<Self> {
        let config = load_config_file(&config_path)?;
        Ok(Self {
            config,
            config_file_path: Some(config_path.to_string_lossy().to_string()),
        })
    }

    /// Override the listen port (CLI flag beats the config file).
    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub async fn run(self) -> Result<()> {
        info!("Initializing Reporting Server");
        if let Some(config_file) = &self.config_file_path {
            info!("Config file: {config_file}");
        }

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let app = build_app(self.config)?;

        let docs_prefix = API_CURRENT_VERSION.path_prefix();
        info!("Starting web API on {addr}");
        info!("API v1 available at http://{addr}{docs_prefix}/reportingrest/");
        info!("Swagger UI available at http://{addr}{docs_prefix}/docs/");

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Reporting Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutting down Reporting Server");
}

/// Build the full application router from a validated configuration.
///
/// Seeds the definition store from the configured definitions file when one
/// exists, otherwise from the config's inline seed definitions. Exposed so
/// integration tests can drive the exact router the binary serves.
pub fn build_app(config: ReportingServerConfig) -> Result<Router> {
    let store_file = config
        .store
        .definitions_file
        .as_ref()
        .map(|path| DefinitionPersistence::new(path.clone()));

    let mut definitions = config.definitions.clone();
    if let Some(file) = &store_file {
        let stored = file.load()?;
        if stored.is_empty() {
            if !definitions.is_empty() {
                info!(
                    "Definitions file {} is empty; seeding {} definition(s) from config",
                    file.path().display(),
                    definitions.len()
                );
            }
        } else {
            if !definitions.is_empty() {
                warn!("Definitions file takes precedence over inline seed definitions");
            }
            definitions = stored;
        }
    }
    info!("Loaded {} report definition(s)", definitions.len());

    // persist: false keeps the file read-only; mutations stay in memory
    let persistence = store_file.filter(|_| config.store.persist).map(Arc::new);

    let service: Arc<dyn DefinitionService> =
        Arc::new(InMemoryDefinitionStore::with_definitions(definitions));
    let adapter = Arc::new(DefinitionResourceAdapter::new(service, config.api));

    let openapi_v1 = api::ApiDocV1::openapi();
    let v1_router = api::build_v1_router(adapter, persistence);

    let rest_prefix = format!(
        "{}/{}",
        API_CURRENT_VERSION.path_prefix(),
        api::REPORTING_REST_NAMESPACE
    );

    Ok(Router::new()
        // Health check at root level (operational endpoint, not versioned)
        .route("/health", get(api::v1::handlers::health_check))
        // API versions endpoint
        .route("/api/versions", get(api::v1::handlers::list_api_versions))
        // Nest v1 resource routes under /rest/v1/reportingrest
        .nest(&rest_prefix, v1_router)
        // Swagger UI and OpenAPI spec for v1
        .merge(SwaggerUi::new("/rest/v1/docs").url("/rest/v1/openapi.json", openapi_v1))
        .layer(CorsLayer::permissive()))
}
