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

//! Observability hooks injected into the HTTP client.
//!
//! The client reports every request, completed exchange, and failure to a
//! [`RapydObserver`] supplied at construction instead of writing to a global
//! logger. [`TracingObserver`] is the default and emits `tracing` events.

use std::fmt::Debug;

use reqwest::{Method, StatusCode};

use crate::http::error::RapydHttpError;

/// Receives lifecycle events for requests issued by the client.
///
/// Implementations must be cheap and must not block; hooks run inline on the
/// request path.
pub trait RapydObserver: Send + Sync + Debug {
    /// Called once the request is signed and about to be dispatched.
    fn on_request(&self, method: &Method, uri: &str) {
        let _ = (method, uri);
    }

    /// Called when the HTTP exchange completed, whatever the status code.
    fn on_response(&self, method: &Method, uri: &str, status: StatusCode) {
        let _ = (method, uri, status);
    }

    /// Called when the request failed for any reason.
    fn on_failure(&self, method: &Method, uri: &str, error: &RapydHttpError);
}

/// Default observer which forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl RapydObserver for TracingObserver {
    fn on_request(&self, method: &Method, uri: &str) {
        tracing::debug!(%method, uri, "Dispatching request");
    }

    fn on_response(&self, method: &Method, uri: &str, status: StatusCode) {
        tracing::debug!(%method, uri, status = status.as_u16(), "Received response");
    }

    fn on_failure(&self, method: &Method, uri: &str, error: &RapydHttpError) {
        match error {
            RapydHttpError::Signing(_) | RapydHttpError::MalformedResponse(_) => {
                tracing::error!(%method, uri, "{error}");
            }
            RapydHttpError::Business { .. } => {
                tracing::warn!(%method, uri, "{error}");
            }
            _ => tracing::warn!(%method, uri, "{error}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
