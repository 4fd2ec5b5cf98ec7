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

pub mod api;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod server;

// Main exports for library users
pub use api::resource::{DefinitionResourceAdapter, Representation};
pub use config::{load_config_file, save_config_file, ReportingServerConfig};
pub use domain::{DefinitionError, DefinitionService, InMemoryDefinitionStore, ReportDefinition};
pub use persistence::DefinitionPersistence;
pub use server::{build_app, ReportingServer};
