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

//! Error types and error handling utilities shared across API versions.

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::resource::ResourceError;
use crate::domain::DefinitionError;

/// Error codes for API responses
pub mod error_codes {
    pub const DEFINITION_NOT_FOUND: &str = "DEFINITION_NOT_FOUND";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const RESOURCE_URI_FAILED: &str = "RESOURCE_URI_FAILED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Convert to a specific status code
    pub fn with_status(self) -> (StatusCode, axum::Json<Self>) {
        let status = status_from_code(&self.code);
        (status, axum::Json(self))
    }
}

/// Convert an error code to an HTTP status code
fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::DEFINITION_NOT_FOUND => StatusCode::NOT_FOUND,
        error_codes::INVALID_REQUEST => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert DefinitionError to ErrorResponse. Service failures pass through
/// the resource adapter untranslated and get mapped here at the HTTP boundary.
impl From<DefinitionError> for ErrorResponse {
    fn from(err: DefinitionError) -> Self {
        match &err {
            DefinitionError::NotFound { uuid } => ErrorResponse::new(
                error_codes::DEFINITION_NOT_FOUND,
                format!("Report definition '{uuid}' not found"),
            ),
            DefinitionError::Validation { message } => {
                ErrorResponse::new(error_codes::INVALID_REQUEST, message.clone())
            }
            DefinitionError::Storage { message } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, message.clone())
            }
        }
    }
}

impl From<ResourceError> for ErrorResponse {
    fn from(err: ResourceError) -> Self {
        ErrorResponse::new(error_codes::RESOURCE_URI_FAILED, err.to_string())
    }
}
