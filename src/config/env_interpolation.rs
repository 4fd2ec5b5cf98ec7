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

//! Environment variable interpolation for configuration files.
//!
//! Provides transparent environment variable interpolation in YAML/JSON
//! configuration strings using POSIX-style syntax:
//! - `${VAR_NAME}` - Simple variable substitution
//! - `${VAR_NAME:-default}` - Variable with default value if unset/empty

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::env;

/// Maximum length for interpolated strings to prevent runaway expansion
const MAX_INTERPOLATED_LENGTH: usize = 10_000_000; // 10MB

lazy_static! {
    /// Regex pattern for matching environment variable references.
    /// Captures:
    /// - Group 1: Variable name (POSIX naming: [A-Za-z_][A-Za-z0-9_]*)
    /// - Group 2: Full default syntax (:-default) if present
    /// - Group 3: Default value (everything after :-) if present
    static ref ENV_VAR_PATTERN: Regex = Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}"
    ).expect("Invalid regex pattern");
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Interpolate environment variables in the input string.
///
/// Replaces all occurrences of `${VAR_NAME}` with the value of the environment
/// variable `VAR_NAME`. If the variable is not set and no `:-default` is
/// given, returns an error. Only well-formed `${...}` patterns are processed;
/// there is no recursive expansion.
///
/// # Examples
///
/// ```
/// use reporting_server::config::env_interpolation::interpolate;
/// use std::env;
///
/// env::set_var("REPORTING_HOST", "localhost");
///
/// let result = interpolate("host: ${REPORTING_HOST}").unwrap();
/// assert_eq!(result, "host: localhost");
///
/// let result = interpolate("port: ${REPORTING_MISSING_PORT:-8080}").unwrap();
/// assert_eq!(result, "port: 8080");
/// ```
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut result = String::with_capacity(input.len());
    let mut last_match_end = 0;
    let mut variables_used = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let full_match = caps.get(0).expect("capture 0 always present");
        let var_name = caps.get(1).expect("variable name group").as_str();
        let default_value = caps.get(3).map(|m| m.as_str());

        result.push_str(&input[last_match_end..full_match.start()]);

        let value = match env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => match default_value {
                Some(default) => default.to_string(),
                None => {
                    return Err(InterpolationError::MissingVariable {
                        name: var_name.to_string(),
                    })
                }
            },
        };

        result.push_str(&value);
        variables_used.push(var_name.to_string());
        last_match_end = full_match.end();

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }

    result.push_str(&input[last_match_end..]);

    if !variables_used.is_empty() {
        debug!("Interpolated environment variables: {variables_used:?}");
    }

    Ok(result)
}
