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

//! Shared handler implementations used by all API versions.
//!
//! Version modules wrap these with their own OpenAPI path annotations; the
//! business logic lives here.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::models::ReportDefinitionDto;
use crate::api::resource::{DefinitionResourceAdapter, Representation};
use crate::api::shared::error::{error_codes, ErrorResponse};
use crate::api::shared::paging::PageRequest;
use crate::api::shared::responses::{
    ApiVersionsResponse, HealthResponse, PagedResponse,
};
use crate::api::version::{ApiVersion, API_CURRENT_VERSION};
use crate::domain::{DefinitionError, ReportDefinition};
use crate::persistence::{persist_after_operation, DefinitionPersistence};

/// Retire reason recorded when a DELETE request does not carry one.
const DEFAULT_RETIRE_REASON: &str = "web service call";

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Query parameters for list/search requests
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Text search query; absent means list all
    pub q: Option<String>,
    /// Requested representation level
    pub v: Option<String>,
    #[serde(rename = "startIndex")]
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}

/// Query parameters for single-resource GET requests
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub v: Option<String>,
}

/// Query parameters for DELETE requests
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub reason: Option<String>,
    pub purge: Option<bool>,
}

fn parse_representation(raw: Option<&str>) -> Result<Representation, ApiError> {
    Representation::parse(raw).ok_or_else(|| {
        ErrorResponse::new(
            error_codes::INVALID_REQUEST,
            format!(
                "Unrecognized representation '{}'",
                raw.unwrap_or_default()
            ),
        )
        .with_status()
    })
}

fn service_error(err: DefinitionError) -> ApiError {
    ErrorResponse::from(err).with_status()
}

/// Check server health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List available API versions
pub async fn list_api_versions() -> Json<ApiVersionsResponse> {
    Json(ApiVersionsResponse {
        versions: ApiVersion::all_strings(),
        current: API_CURRENT_VERSION.to_string(),
    })
}

/// List or search report definitions.
///
/// Without `q` this lists all non-retired definitions; with `q` it runs a
/// text search over them. Results are paged and carry a `next` link when more
/// remain.
pub async fn get_definitions(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<PagedResponse>, ApiError> {
    let rep = parse_representation(params.v.as_deref())?;

    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    let definitions = if query.is_empty() {
        adapter.service().get_all(false).await
    } else {
        adapter.service().search(query, false).await
    }
    .map_err(service_error)?;

    let page = PageRequest::new(params.start_index, params.limit);
    let (page_items, has_more) = page.slice(&definitions);

    let mut results = Vec::with_capacity(page_items.len());
    for definition in page_items {
        results.push(
            adapter
                .render(definition, rep)
                .map_err(|e| ErrorResponse::from(e).with_status())?,
        );
    }

    let mut response = PagedResponse::new(results);
    if has_more {
        let mut next = format!(
            "{}?startIndex={}&limit={}",
            adapter
                .collection_uri()
                .map_err(|e| ErrorResponse::from(e).with_status())?,
            page.next_start_index(),
            page.limit
        );
        // Echoed parameters go back through the URL, so re-encode them
        if !query.is_empty() {
            next.push_str(&format!("&q={}", urlencoding::encode(query)));
        }
        if let Some(v) = &params.v {
            next.push_str(&format!("&v={}", urlencoding::encode(v)));
        }
        response = response.with_next(next);
    }

    Ok(Json(response))
}

/// Fetch one report definition by uuid.
pub async fn get_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Path(uuid): Path<String>,
    Query(params): Query<ViewQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rep = parse_representation(params.v.as_deref())?;

    let definition = adapter
        .service()
        .get_by_uuid(&uuid)
        .await
        .map_err(service_error)?
        .ok_or_else(|| service_error(DefinitionError::not_found(&uuid)))?;

    let rendered = adapter
        .render(&definition, rep)
        .map_err(|e| ErrorResponse::from(e).with_status())?;
    Ok(Json(rendered))
}

/// Create a new report definition.
pub async fn create_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Extension(persistence): Extension<Option<Arc<DefinitionPersistence>>>,
    Json(request): Json<ReportDefinitionDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let saved = adapter
        .service()
        .save(request.into_definition())
        .await
        .map_err(service_error)?;

    persist_after_operation(&persistence, adapter.service(), "creating definition").await;

    let rendered = adapter
        .render(&saved, Representation::Default)
        .map_err(|e| ErrorResponse::from(e).with_status())?;
    Ok((StatusCode::CREATED, Json(rendered)))
}

/// Update an existing report definition. Fields absent from the request keep
/// their current values.
pub async fn update_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Extension(persistence): Extension<Option<Arc<DefinitionPersistence>>>,
    Path(uuid): Path<String>,
    Json(request): Json<ReportDefinitionDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut definition: ReportDefinition = adapter
        .service()
        .get_by_uuid(&uuid)
        .await
        .map_err(service_error)?
        .ok_or_else(|| service_error(DefinitionError::not_found(&uuid)))?;

    request.apply_to(&mut definition);

    let saved = adapter
        .service()
        .save(definition)
        .await
        .map_err(service_error)?;

    persist_after_operation(&persistence, adapter.service(), "updating definition").await;

    let rendered = adapter
        .render(&saved, Representation::Default)
        .map_err(|e| ErrorResponse::from(e).with_status())?;
    Ok(Json(rendered))
}

/// Delete a report definition.
///
/// The default is a soft delete: the definition is retired with the given
/// `reason` and drops out of lists and searches, but stays fetchable by uuid.
/// With `purge=true` the definition is removed outright.
pub async fn delete_definition(
    Extension(adapter): Extension<Arc<DefinitionResourceAdapter>>,
    Extension(persistence): Extension<Option<Arc<DefinitionPersistence>>>,
    Path(uuid): Path<String>,
    Query(params): Query<DeleteQuery>,
) -> Result<StatusCode, ApiError> {
    if params.purge.unwrap_or(false) {
        adapter
            .service()
            .purge(&uuid)
            .await
            .map_err(service_error)?;
        persist_after_operation(&persistence, adapter.service(), "purging definition").await;
        return Ok(StatusCode::NO_CONTENT);
    }

    let definition = adapter
        .service()
        .get_by_uuid(&uuid)
        .await
        .map_err(service_error)?
        .ok_or_else(|| service_error(DefinitionError::not_found(&uuid)))?;

    let reason = params
        .reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_RETIRE_REASON.to_string());

    adapter
        .service()
        .retire(definition.retire(reason))
        .await
        .map_err(service_error)?;

    persist_after_operation(&persistence, adapter.service(), "retiring definition").await;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiSettings;
    use crate::domain::{DefinitionService, InMemoryDefinitionStore};

    async fn adapter_with(names: &[&str]) -> Arc<DefinitionResourceAdapter> {
        let store = InMemoryDefinitionStore::new();
        for name in names {
            store
                .save(ReportDefinition {
                    name: name.to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        let service: Arc<dyn DefinitionService> = Arc::new(store);
        Arc::new(DefinitionResourceAdapter::new(
            service,
            ApiSettings::default(),
        ))
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_list_api_versions() {
        let Json(response) = list_api_versions().await;
        assert_eq!(response.versions, vec!["v1"]);
        assert_eq!(response.current, "v1");
    }

    #[tokio::test]
    async fn test_get_definitions_unrecognized_representation() {
        let adapter = adapter_with(&["Monthly Attendance"]).await;
        let result = get_definitions(
            Extension(adapter),
            Query(ListQuery {
                q: None,
                v: Some("ref".to_string()),
                start_index: None,
                limit: None,
            }),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, error_codes::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_get_definitions_pages_with_next_link() {
        let adapter = adapter_with(&["One", "Two", "Three"]).await;
        let Json(response) = get_definitions(
            Extension(adapter),
            Query(ListQuery {
                q: None,
                v: None,
                start_index: None,
                limit: Some(2),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.links.len(), 1);
        assert_eq!(response.links[0].rel, "next");
        assert!(response.links[0].uri.contains("startIndex=2"));
        assert!(response.links[0].uri.contains("limit=2"));
    }

    #[tokio::test]
    async fn test_search_next_link_percent_encodes_query() {
        let adapter = adapter_with(&["Monthly Report A", "Monthly Report B", "Monthly Report C"]).await;
        let Json(response) = get_definitions(
            Extension(adapter),
            Query(ListQuery {
                q: Some("Monthly Report".to_string()),
                v: None,
                start_index: None,
                limit: Some(2),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.results.len(), 2);
        let next = &response.links[0].uri;
        assert!(next.contains("q=Monthly%20Report"), "next link: {next}");
        assert!(!next.contains(' '));
    }

    #[tokio::test]
    async fn test_get_definition_not_found() {
        let adapter = adapter_with(&[]).await;
        let result = get_definition(
            Extension(adapter),
            Path("missing".to_string()),
            Query(ViewQuery { v: None }),
        )
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, error_codes::DEFINITION_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_without_reason_uses_default() {
        let adapter = adapter_with(&["Monthly Attendance"]).await;
        let all = adapter.service().get_all(false).await.unwrap();
        let uuid = all[0].uuid.clone();

        let status = delete_definition(
            Extension(adapter.clone()),
            Extension(None),
            Path(uuid.clone()),
            Query(DeleteQuery {
                reason: None,
                purge: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let retired = adapter
            .service()
            .get_by_uuid(&uuid)
            .await
            .unwrap()
            .unwrap();
        assert!(retired.retired);
        assert_eq!(retired.retire_reason.as_deref(), Some(DEFAULT_RETIRE_REASON));
    }
}
