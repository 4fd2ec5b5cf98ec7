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

//! Definition service error type.

/// Errors raised by the definition service. These propagate unchanged to the
/// API boundary, which maps them onto transport-level error responses.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("report definition '{uuid}' not found")]
    NotFound { uuid: String },

    #[error("invalid report definition: {message}")]
    Validation { message: String },

    #[error("definition store failure: {message}")]
    Storage { message: String },
}

impl DefinitionError {
    pub fn not_found(uuid: impl Into<String>) -> Self {
        Self::NotFound { uuid: uuid.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
