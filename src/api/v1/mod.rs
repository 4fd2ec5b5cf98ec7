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

//! API Version 1 (v1) implementation.
//!
//! This module contains the v1 API handlers, routes, and OpenAPI documentation.
//! All v1 resource endpoints are accessible under the `/rest/v1/reportingrest/`
//! prefix (with the default resource name `reportDefinition`):
//!
//! - `GET /rest/v1/reportingrest/reportDefinition` - List or search definitions
//! - `POST /rest/v1/reportingrest/reportDefinition` - Create a definition
//! - `GET /rest/v1/reportingrest/reportDefinition/{uuid}` - Fetch one definition
//! - `POST /rest/v1/reportingrest/reportDefinition/{uuid}` - Update a definition
//! - `DELETE /rest/v1/reportingrest/reportDefinition/{uuid}` - Retire (or purge) a definition

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use openapi::ApiDocV1;
pub use routes::build_v1_router;
