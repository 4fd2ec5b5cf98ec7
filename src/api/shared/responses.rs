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

//! Common response types shared across API versions.

use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status of the server
    pub status: String,
    /// Current server timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Response listing available API versions
#[derive(Serialize, ToSchema)]
pub struct ApiVersionsResponse {
    /// List of available API versions
    pub versions: Vec<String>,
    /// The current/latest API version
    pub current: String,
}

/// A hypermedia link attached to a response
#[derive(Debug, Serialize, ToSchema)]
pub struct LinkDto {
    /// Link relation (self, full, next)
    pub rel: String,
    /// Link target
    pub uri: String,
}

/// Paging container for list responses. Carries a `next` link when more
/// results remain past the requested page.
#[derive(Serialize, ToSchema)]
pub struct PagedResponse {
    /// Rendered representations for the requested page
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<serde_json::Value>,
    /// Paging links, omitted when the page is the whole result set
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDto>,
}

impl PagedResponse {
    pub fn new(results: Vec<serde_json::Value>) -> Self {
        Self {
            results,
            links: Vec::new(),
        }
    }

    pub fn with_next(mut self, uri: String) -> Self {
        self.links.push(LinkDto {
            rel: "next".to_string(),
            uri,
        });
        self
    }
}
