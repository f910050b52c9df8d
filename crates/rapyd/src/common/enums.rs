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

//! Enumerations shared across the Rapyd client.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::consts::{RAPYD_HTTP_SANDBOX_URL, RAPYD_HTTP_URL};

/// Rapyd gateway environment.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum RapydEnvironment {
    /// Sandbox gateway used for integration testing.
    #[default]
    Sandbox,
    /// Live gateway.
    Production,
}

/// Returns the base HTTP endpoint for the given environment.
#[must_use]
pub const fn rapyd_http_base_url(environment: RapydEnvironment) -> &'static str {
    match environment {
        RapydEnvironment::Sandbox => RAPYD_HTTP_SANDBOX_URL,
        RapydEnvironment::Production => RAPYD_HTTP_URL,
    }
}

/// Whether the request body participates in the signature.
///
/// GET requests never carry a body and POST/PUT requests always sign it.
/// DELETE requests choose per call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodySigning {
    /// Append the body to the signing string when it is non-empty.
    #[default]
    Include,
    /// Leave the body out of the signing string even if one is sent.
    Omit,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
