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

//! OpenAPI documentation for API v1.
//!
//! This module defines the OpenAPI specification for the v1 API.
//! The spec is available at `/rest/v1/openapi.json` and the Swagger UI
//! is served at `/rest/v1/docs/`.

use utoipa::OpenApi;

use crate::api::models::{DefinitionRefDto, MappedDto, ParameterDto, ReportDefinitionDto};
use crate::api::shared::{
    ApiVersionsResponse, ErrorResponse, HealthResponse, LinkDto, PagedResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::health_check,
        super::handlers::list_api_versions,
        super::handlers::get_definitions,
        super::handlers::get_definition,
        super::handlers::create_definition,
        super::handlers::update_definition,
        super::handlers::delete_definition,
    ),
    components(
        schemas(
            HealthResponse,
            ApiVersionsResponse,
            ErrorResponse,
            LinkDto,
            PagedResponse,
            ReportDefinitionDto,
            ParameterDto,
            MappedDto,
            DefinitionRefDto,
        )
    ),
    tags(
        (name = "API", description = "API version information"),
        (name = "Health", description = "Health check endpoints"),
        (name = "Report Definitions", description = "Report definition management"),
    ),
    info(
        title = "Reporting Server API",
        version = "1.0.0",
        description = "Reporting Server REST API v1.\n\nExposes report definitions as a REST resource with representation levels.\n\n## API Versioning\n\nThis API uses URL-based versioning. All resource endpoints are prefixed with `/rest/v1/reportingrest/`.\n\n## Representations\n\nThe `v` query parameter selects the representation level:\n- `default` (or absent) - uuid, name, description, parameters, plus self and full links\n- `full` - adds baseCohort, dataSetDefinitions and type, with a self link only",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDocV1;
