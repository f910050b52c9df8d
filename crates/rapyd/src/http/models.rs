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

//! Data transfer objects for the Rapyd gateway envelope and raw HTTP exchanges.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::consts::RAPYD_STATUS_SUCCESS;

/// Raw response from a completed HTTP exchange, before any interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// HTTP status code returned by the gateway.
    pub status: StatusCode,
    /// Undecoded response body.
    pub body: Bytes,
}

/// Uniform output of the dispatcher.
///
/// `response` is `Some` whenever the HTTP exchange completed, including 4xx and 5xx
/// answers; `status_message` is then `"success"`. When the exchange did not
/// complete `response` is `None` and `status_message` names the URL and cause.
#[derive(Clone, Debug)]
pub struct CallResult {
    pub response: Option<RawResponse>,
    pub status_message: String,
}

impl CallResult {
    /// Marker placed in `status_message` when the exchange completed.
    pub const SUCCESS: &'static str = "success";

    /// Creates a [`CallResult`] for a completed exchange.
    #[must_use]
    pub fn completed(response: RawResponse) -> Self {
        Self {
            response: Some(response),
            status_message: Self::SUCCESS.to_string(),
        }
    }

    /// Creates a [`CallResult`] for an exchange that did not complete.
    #[must_use]
    pub fn failed(status_message: impl Into<String>) -> Self {
        Self {
            response: None,
            status_message: status_message.into(),
        }
    }
}

/// The `status` block of every Rapyd response envelope.
///
/// # References
/// - <https://docs.rapyd.net/en/response-status.html>
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RapydStatus {
    /// `SUCCESS` for approved operations, otherwise `ERROR` or another marker.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

impl RapydStatus {
    /// Returns `true` if the gateway approved the operation.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == RAPYD_STATUS_SUCCESS
    }
}

/// Standard Rapyd response envelope.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RapydEnvelope {
    pub status: RapydStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
