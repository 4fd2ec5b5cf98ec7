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

//! API v1 route definitions.
//!
//! This module provides the route builder for API v1 endpoints.
//! All routes are designed to be nested under `/rest/v1/reportingrest`.

use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;

use super::handlers;
use crate::api::resource::DefinitionResourceAdapter;
use crate::persistence::DefinitionPersistence;

/// Build the complete v1 API router.
///
/// The resource route segment comes from the adapter's configured resource
/// name, so the served route and the URIs in rendered links always agree on
/// the name.
pub fn build_v1_router(
    adapter: Arc<DefinitionResourceAdapter>,
    persistence: Option<Arc<DefinitionPersistence>>,
) -> Router {
    let resource = adapter.resource_name().to_string();

    Router::new()
        .route(
            &format!("/{resource}"),
            get(handlers::get_definitions).post(handlers::create_definition),
        )
        .route(
            &format!("/{resource}/:uuid"),
            get(handlers::get_definition)
                .post(handlers::update_definition)
                .delete(handlers::delete_definition),
        )
        .layer(Extension(adapter))
        .layer(Extension(persistence))
}
