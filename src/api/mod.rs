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

//! REST API implementation for the reporting server.
//!
//! This module provides the HTTP endpoints for managing report definitions.
//! The API uses URL-based versioning with resource endpoints served under
//! `/rest/v1/reportingrest/`, while hyperlinks in responses are rendered
//! under the configured presentation prefix.
//!
//! ## API Structure
//!
//! ```text
//! /health                                        - Health check (unversioned)
//! /api/versions                                  - List available API versions
//! /rest/v1/reportingrest/reportDefinition        - Report definition collection
//! /rest/v1/reportingrest/reportDefinition/{uuid} - Single report definition
//! ```
//!
//! ## Module Organization
//!
//! - `resource` - The definition resource adapter (representations, links, URIs)
//! - `shared` - Common types and handlers shared across API versions
//! - `v1` - API version 1 implementation
//! - `version` - Version constants and utilities
//! - `models` - Data Transfer Objects (DTOs) for API requests

pub mod models;
pub mod resource;
pub mod shared;
pub mod v1;
pub mod version;

/// Namespace segment the resource routes live under.
pub const REPORTING_REST_NAMESPACE: &str = "reportingrest";

// Re-export commonly used types from shared module
pub use shared::error::*;
pub use shared::responses::*;

// Re-export the resource adapter and v1 surface for convenience
pub use resource::{DefinitionResourceAdapter, Representation};
pub use v1::openapi::ApiDocV1;
pub use v1::routes::build_v1_router;

// Re-export version utilities
pub use version::{ApiVersion, API_CURRENT_VERSION};
