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

//! API v1 handler functions with OpenAPI documentation.
//!
//! These handlers wrap the shared handler implementations with v1-specific
//! path annotations for OpenAPI documentation. The actual business logic
//! is implemented in the shared handlers module.
//!
//! The documented paths use the default resource name `reportDefinition`;
//! the served route segment follows `api.resource_name` from configuration.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::models::ReportDefinitionDto;
use crate::api::resource::DefinitionResourceAdapter;
use crate::api::shared::handlers::{DeleteQuery, ListQuery, ViewQuery};
use crate::api::shared::{ApiVersionsResponse, ErrorResponse, HealthResponse, PagedResponse};
use crate::persistence::DefinitionPersistence;

// Re-export shared handler implementations
use crate::api::shared::handlers as shared;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Check server health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    shared::health_check().await
}

/// List available API versions
#[utoipa::path(
    get,
    path = "/api/versions",
    responses(
        (status = 200, description = "List of available API versions", body = ApiVersionsResponse),
    ),
    tag = "API"
)]
pub async fn list_api_versions() -> Json<ApiVersionsResponse> {
    shared::list_api_versions().await
}

/// List or search report definitions
#[utoipa::path(
    get,
    path = "/rest/v1/reportingrest/reportDefinition",
    params(
        ("q" = Option<String>, Query, description = "Text search over name and description"),
        ("v" = Option<String>, Query, description = "Representation level (default or full)"),
        ("startIndex" = Option<usize>, Query, description = "Zero-based index of the first result"),
        ("limit" = Option<usize>, Query, description = "Maximum number of results per page"),
    ),
    responses(
        (status = 200, description = "Paged list of report definitions", body = PagedResponse),
        (status = 400, description = "Unrecognized representation level", body = ErrorResponse),
    ),
    tag = "Report Definitions"
)]
pub async fn get_definitions(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PagedResponse>, ApiError> {
    shared::get_definitions(Extension(adapter), Query(params)).await
}

/// Fetch one report definition by uuid
#[utoipa::path(
    get,
    path = "/rest/v1/reportingrest/reportDefinition/{uuid}",
    params(
        ("uuid" = String, Path, description = "Report definition uuid"),
        ("v" = Option<String>, Query, description = "Representation level (default or full)"),
    ),
    responses(
        (status = 200, description = "The report definition"),
        (status = 400, description = "Unrecognized representation level", body = ErrorResponse),
        (status = 404, description = "Report definition not found", body = ErrorResponse),
    ),
    tag = "Report Definitions"
)]
pub async fn get_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Path(uuid): Path<String>,
    Query(params): Query<ViewQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    shared::get_definition(Extension(adapter), Path(uuid), Query(params)).await
}

/// Create a report definition
#[utoipa::path(
    post,
    path = "/rest/v1/reportingrest/reportDefinition",
    request_body = ReportDefinitionDto,
    responses(
        (status = 201, description = "Report definition created"),
        (status = 400, description = "Invalid report definition", body = ErrorResponse),
    ),
    tag = "Report Definitions"
)]
pub async fn create_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Extension(persistence): Extension<Option<Arc<DefinitionPersistence>>>,
    Json(request): Json<ReportDefinitionDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    shared::create_definition(Extension(adapter), Extension(persistence), Json(request)).await
}

/// Update an existing report definition
#[utoipa::path(
    post,
    path = "/rest/v1/reportingrest/reportDefinition/{uuid}",
    params(
        ("uuid" = String, Path, description = "Report definition uuid"),
    ),
    request_body = ReportDefinitionDto,
    responses(
        (status = 200, description = "Report definition updated"),
        (status = 404, description = "Report definition not found", body = ErrorResponse),
    ),
    tag = "Report Definitions"
)]
pub async fn update_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Extension(persistence): Extension<Option<Arc<DefinitionPersistence>>>,
    Path(uuid): Path<String>,
    Json(request): Json<ReportDefinitionDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    shared::update_definition(
        Extension(adapter),
        Extension(persistence),
        Path(uuid),
        Json(request),
    )
    .await
}

/// Retire or purge a report definition
#[utoipa::path(
    delete,
    path = "/rest/v1/reportingrest/reportDefinition/{uuid}",
    params(
        ("uuid" = String, Path, description = "Report definition uuid"),
        ("reason" = Option<String>, Query, description = "Retire reason (soft delete)"),
        ("purge" = Option<bool>, Query, description = "Set to true to remove outright"),
    ),
    responses(
        (status = 204, description = "Report definition retired or purged"),
        (status = 404, description = "Report definition not found", body = ErrorResponse),
    ),
    tag = "Report Definitions"
)]
pub async fn delete_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Extension(persistence): Extension<Option<Arc<DefinitionPersistence>>>,
    Path(uuid): Path<String>,
    Query(params): Query<DeleteQuery>,
) -> Result<StatusCode, ApiError> {
    shared::delete_definition(
        Extension(adapter),
        Extension(persistence),
        Path(uuid),
        Query(params),
    )
    .await
}
