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

//! Uniform HTTP dispatch against the configured Rapyd base endpoint.
//!
//! [`RapydDispatcher`] performs exactly one HTTP exchange per call and never
//! returns an error: completed exchanges (any status code) and transport
//! failures are both reported through [`CallResult`]. It does not retry and does
//! not look at the payload.

use std::{collections::HashMap, time::Duration};

use reqwest::{
    Method,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tokio_util::sync::CancellationToken;
use url::Url;

use super::{
    error::RapydConfigError,
    models::{CallResult, RawResponse},
};
use crate::common::consts::RAPYD_USER_AGENT;

/// Issues HTTP requests against a single base endpoint.
#[derive(Clone, Debug)]
pub struct RapydDispatcher {
    base_url: String,
    client: reqwest::Client,
}

impl RapydDispatcher {
    /// Creates a new [`RapydDispatcher`] for the given base URL.
    ///
    /// A trailing `/` on `base_url` is dropped so that request paths can always start with `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is blank, not an absolute http(s) URL, or
    /// if the HTTP stack cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, RapydConfigError> {
        let base_url = normalize_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(RAPYD_USER_AGENT)
            .build()
            .map_err(|e| RapydConfigError::HttpClient(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one request with `method` against `base_url + uri`.
    ///
    /// `uri` must already carry its query string. The returned [`CallResult`]
    /// holds the raw response whenever the exchange completed.
    pub async fn dispatch(
        &self,
        method: Method,
        uri: &str,
        headers: &HashMap<String, String>,
        body: Option<String>,
        timeout: Duration,
        cancellation_token: &CancellationToken,
    ) -> CallResult {
        let url = format!("{}{uri}", self.base_url);

        let header_map = match to_header_map(headers) {
            Ok(map) => map,
            Err(e) => {
                return CallResult::failed(format!("Failed to process this request {url} {e}"));
            }
        };

        let mut request = self
            .client
            .request(method, &url)
            .headers(header_map)
            .timeout(timeout);
        if let Some(body) = body {
            request = request.body(body);
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(RawResponse { status, body })
        };

        tokio::select! {
            biased;
            () = cancellation_token.cancelled() => {
                CallResult::failed(format!("Request canceled {url}"))
            }
            result = exchange => match result {
                Ok(response) => CallResult::completed(response),
                Err(e) => CallResult::failed(format!(
                    "Failed to process this request {url} {}",
                    describe_reqwest_error(&e)
                )),
            }
        }
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, RapydConfigError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(RapydConfigError::MissingBaseUrl);
    }

    let parsed =
        Url::parse(trimmed).map_err(|_| RapydConfigError::InvalidBaseUrl(trimmed.to_string()))?;
    // Requests are signed over the path only, so the base must be a bare origin
    let valid_scheme = matches!(parsed.scheme(), "http" | "https");
    let bare_origin = parsed.host_str().is_some()
        && parsed.username().is_empty()
        && parsed.password().is_none()
        && parsed.path() == "/"
        && parsed.query().is_none()
        && parsed.fragment().is_none();
    if !valid_scheme || !bare_origin {
        return Err(RapydConfigError::InvalidBaseUrl(trimmed.to_string()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, String> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| format!("invalid header name '{name}': {e}"))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| format!("invalid value for header '{name}': {e}"))?;
        map.insert(name, value);
    }
    Ok(map)
}

fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let kind = if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connection error"
    } else if error.is_builder() {
        "invalid request"
    } else {
        "request error"
    };

    match std::error::Error::source(error) {
        Some(source) => format!("({kind}) {error}: {source}"),
        None => format!("({kind}) {error}"),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
