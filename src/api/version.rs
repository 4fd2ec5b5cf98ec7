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

//! API version constants.
//!
//! The API is versioned through the URL: every resource route lives under the
//! version's path prefix. There is a single version today; `/api/versions`
//! reports what is available.

use std::fmt;

/// The current/latest API version.
pub const API_CURRENT_VERSION: ApiVersion = ApiVersion::V1;

/// Available API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
}

impl ApiVersion {
    /// URL path prefix the version's routes are served under.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "/rest/v1",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }

    pub fn all() -> &'static [ApiVersion] {
        &[ApiVersion::V1]
    }

    /// Version strings for the `/api/versions` response.
    pub fn all_strings() -> Vec<String> {
        Self::all().iter().map(|v| v.as_str().to_string()).collect()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_path_prefix() {
        assert_eq!(ApiVersion::V1.path_prefix(), "/rest/v1");
    }

    #[test]
    fn test_version_strings() {
        assert_eq!(ApiVersion::V1.as_str(), "v1");
        assert_eq!(ApiVersion::V1.to_string(), "v1");
        assert_eq!(ApiVersion::all_strings(), vec!["v1"]);
    }

    #[test]
    fn test_all_versions() {
        assert!(ApiVersion::all().contains(&ApiVersion::V1));
    }
}
