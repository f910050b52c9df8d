// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration structures for the Rapyd HTTP client.

use std::str::FromStr;

use crate::common::{
    consts::{
        ENV_ACCESS_KEY, ENV_BASE_URL, ENV_ENVIRONMENT, ENV_SECRET_KEY, RAPYD_DEFAULT_TIMEOUT_SECS,
    },
    enums::{RapydEnvironment, rapyd_http_base_url},
};

/// Configuration for the Rapyd HTTP client.
#[derive(Clone, Debug)]
pub struct RapydHttpClientConfig {
    /// Access key issued by Rapyd.
    pub access_key: String,
    /// Secret key issued by Rapyd.
    pub secret_key: String,
    /// Override for the REST base URL.
    pub base_url_http: Option<String>,
    /// Gateway environment used when no override is set.
    pub environment: RapydEnvironment,
    /// Default per-call timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Default for RapydHttpClientConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            base_url_http: None,
            environment: RapydEnvironment::Sandbox,
            http_timeout_secs: RAPYD_DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RapydHttpClientConfig {
    /// Creates a new configuration with the provided credentials.
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }

    /// Loads the configuration from `RAPYD_ACCESS_KEY`, `RAPYD_SECRET_KEY`,
    /// and the optional `RAPYD_BASE_URL` and `RAPYD_ENVIRONMENT` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the environment name is unknown.
    pub fn from_env() -> anyhow::Result<Self> {
        let access_key = get_env_var(ENV_ACCESS_KEY)?;
        let secret_key = get_env_var(ENV_SECRET_KEY)?;
        let base_url_http = std::env::var(ENV_BASE_URL).ok().filter(|v| !v.trim().is_empty());
        let environment = match std::env::var(ENV_ENVIRONMENT) {
            Ok(value) => RapydEnvironment::from_str(value.trim()).map_err(|_| {
                anyhow::anyhow!("environment variable '{ENV_ENVIRONMENT}' has unknown value '{value}'")
            })?,
            Err(_) => RapydEnvironment::default(),
        };

        Ok(Self {
            access_key,
            secret_key,
            base_url_http,
            environment,
            ..Self::default()
        })
    }

    /// Returns `true` when both keys are populated.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.access_key.trim().is_empty() && !self.secret_key.trim().is_empty()
    }

    /// Returns the REST base URL, respecting the environment and overrides.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.base_url_http
            .clone()
            .unwrap_or_else(|| rapyd_http_base_url(self.environment).to_string())
    }
}

/// Returns the environment variable for the given `key`.
///
/// # Errors
///
/// Returns an error if the environment variable is not set.
pub fn get_env_var(key: &str) -> anyhow::Result<String> {
    match std::env::var(key) {
        Ok(var) => Ok(var),
        Err(_) => anyhow::bail!("environment variable '{key}' must be set"),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
