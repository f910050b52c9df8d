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

//! Interpretation of dispatcher results into gateway envelopes.
//!
//! Every endpoint goes through [`parse_envelope`] and then applies its fixed
//! projection ([`RapydEnvelope::into_data`] or [`RapydEnvelope::into_status`]).

use serde_json::Value;

use super::{
    error::RapydHttpError,
    models::{CallResult, RapydEnvelope, RapydStatus},
};

/// Interprets a dispatcher result as a successful gateway envelope.
///
/// The body is decoded exactly once.
///
/// # Errors
///
/// - [`RapydHttpError::Transport`] if the exchange did not complete.
/// - [`RapydHttpError::MalformedResponse`] if the body is empty or not an envelope.
/// - [`RapydHttpError::Business`] if the envelope status is not `SUCCESS`.
pub fn parse_envelope(result: CallResult) -> Result<RapydEnvelope, RapydHttpError> {
    let Some(response) = result.response else {
        return Err(RapydHttpError::Transport(result.status_message));
    };

    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(RapydHttpError::MalformedResponse(format!(
            "empty body (HTTP {})",
            response.status.as_u16()
        )));
    }

    let envelope: RapydEnvelope = serde_json::from_slice(&response.body).map_err(|e| {
        RapydHttpError::MalformedResponse(format!(
            "body is not a Rapyd envelope (HTTP {}): {e}",
            response.status.as_u16()
        ))
    })?;

    if !envelope.status.is_success() {
        return Err(envelope.status.into());
    }

    Ok(envelope)
}

impl RapydEnvelope {
    /// Projects the envelope onto its `data` payload.
    ///
    /// A present payload is returned as is, including empty objects and arrays.
    ///
    /// # Errors
    ///
    /// Returns [`RapydHttpError::MalformedResponse`] if the envelope has no `data`.
    pub fn into_data(self) -> Result<Value, RapydHttpError> {
        match self.data {
            Some(Value::Null) | None => Err(RapydHttpError::MalformedResponse(
                "SUCCESS envelope without data".to_string(),
            )),
            Some(data) => Ok(data),
        }
    }

    /// Projects the envelope onto its `status` block.
    #[must_use]
    pub fn into_status(self) -> RapydStatus {
        self.status
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
