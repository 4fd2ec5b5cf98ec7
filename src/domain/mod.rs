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

//! Report definition domain layer.
//!
//! This module owns the `ReportDefinition` entity and the definition service
//! contract the REST resource delegates to:
//!
//! - `model` - the definition entity and its nested reference types
//! - `error` - definition service error type
//! - `service` - the `DefinitionService` trait (get/save/retire/purge/search)
//! - `store` - in-memory `DefinitionService` implementation

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::DefinitionError;
pub use model::{DefinitionRef, Mapped, Parameter, ReportDefinition};
pub use service::DefinitionService;
pub use store::InMemoryDefinitionStore;
