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

//! OpenAPI Integration Tests
//!
//! Verifies that the OpenAPI spec correctly documents all endpoints and schemas.

#![allow(clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use reporting_server::api::ApiDocV1;
use reporting_server::config::ReportingServerConfig;
use reporting_server::server::build_app;
use tower::ServiceExt;
use utoipa::OpenApi;

#[test]
fn test_openapi_documents_resource_endpoints() {
    let openapi = ApiDocV1::openapi();
    let json = serde_json::to_value(&openapi).unwrap();

    let collection = &json["paths"]["/rest/v1/reportingrest/reportDefinition"];
    assert!(
        collection["get"].is_object(),
        "GET on the collection should be documented"
    );
    assert!(
        collection["post"].is_object(),
        "POST on the collection should be documented"
    );

    let item = &json["paths"]["/rest/v1/reportingrest/reportDefinition/{uuid}"];
    assert!(item["get"].is_object(), "GET by uuid should be documented");
    assert!(
        item["post"].is_object(),
        "POST by uuid should be documented"
    );
    assert!(
        item["delete"].is_object(),
        "DELETE by uuid should be documented"
    );

    assert!(json["paths"]["/health"]["get"].is_object());
    assert!(json["paths"]["/api/versions"]["get"].is_object());
}

#[test]
fn test_openapi_definition_schema_uses_camel_case() {
    let openapi = ApiDocV1::openapi();
    let json = serde_json::to_value(&openapi).unwrap();

    let schema = &json["components"]["schemas"]["ReportDefinitionDto"];
    assert!(
        schema.is_object(),
        "ReportDefinitionDto schema should exist in components/schemas"
    );

    let properties = &schema["properties"];
    // uuid is assigned by the server, never part of the request schema
    assert!(properties.get("uuid").is_none());
    assert!(properties["name"].is_object());
    assert!(properties["description"].is_object());
    assert!(properties["parameters"].is_object());
    assert!(
        properties["baseCohort"].is_object(),
        "baseCohort should be camelCase. Properties: {:?}",
        properties.as_object().map(|o| o.keys().collect::<Vec<_>>())
    );
    assert!(properties["dataSetDefinitions"].is_object());
}

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let mut config = ReportingServerConfig::default();
    config.store.definitions_file = None;
    let app = build_app(config).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/rest/v1/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["info"]["title"], "Reporting Server API");
    assert!(json["paths"]["/rest/v1/reportingrest/reportDefinition"].is_object());
}
