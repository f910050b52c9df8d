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

//! Error structures and enumerations for the Rapyd client.
//!
//! Construction failures are reported through [`RapydConfigError`]. Everything
//! that can go wrong once a client exists is a [`RapydHttpError`] value, so
//! callers can tell a network failure apart from a rejected operation and
//! from a response that could not be understood.

use thiserror::Error;

use super::models::RapydStatus;

/// Configuration error raised when a client cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RapydConfigError {
    /// Base URL is empty.
    #[error("Missing required base URL")]
    MissingBaseUrl,
    /// Access key is empty.
    #[error("Missing required access key")]
    MissingAccessKey,
    /// Secret key is empty.
    #[error("Missing required secret key")]
    MissingSecretKey,
    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
    /// The underlying HTTP stack could not be initialized.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Build error for request parameter validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RapydBuildError {
    /// A required field was not supplied.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}

impl From<derive_builder::UninitializedFieldError> for RapydBuildError {
    fn from(error: derive_builder::UninitializedFieldError) -> Self {
        Self::MissingField(error.field_name())
    }
}

/// A typed error enumeration for the Rapyd HTTP client.
#[derive(Debug, Clone, Error)]
pub enum RapydHttpError {
    /// The request signature could not be produced; nothing was sent.
    #[error("Signing error: {0}")]
    Signing(String),
    /// The HTTP exchange did not complete (connection, DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),
    /// Request was canceled through its cancellation token.
    #[error("Request canceled: {0}")]
    Canceled(String),
    /// A response arrived but its body is absent or not a gateway envelope.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// The gateway answered with a status other than `SUCCESS`.
    #[error("Rapyd error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Business {
        status: String,
        error_code: Option<String>,
        response_code: Option<String>,
        message: Option<String>,
        operation_id: Option<String>,
    },
    /// Parameter validation error.
    #[error("Parameter validation error: {0}")]
    Validation(String),
    /// Failure while serializing the request body.
    #[error("JSON error: {0}")]
    Json(String),
    /// Build error for request parameters.
    #[error("Build error: {0}")]
    Build(#[from] RapydBuildError),
}

impl RapydHttpError {
    /// Returns `true` if the HTTP exchange itself failed.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Canceled(_))
    }

    /// Returns `true` if the gateway rejected the operation.
    #[must_use]
    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business { .. })
    }

    /// Returns `true` if the response could not be interpreted.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Returns the gateway supplied message for a business failure.
    #[must_use]
    pub fn business_message(&self) -> Option<&str> {
        match self {
            Self::Business { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<RapydStatus> for RapydHttpError {
    fn from(status: RapydStatus) -> Self {
        Self::Business {
            status: status.status,
            error_code: status.error_code.filter(|c| !c.is_empty()),
            response_code: status.response_code.filter(|c| !c.is_empty()),
            message: status.message.filter(|m| !m.is_empty()),
            operation_id: status.operation_id,
        }
    }
}

impl From<serde_json::Error> for RapydHttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<String> for RapydHttpError {
    fn from(error: String) -> Self {
        Self::Validation(error)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::common::testing::load_test_json;

    #[rstest]
    fn test_config_error_display() {
        assert_eq!(
            RapydConfigError::MissingSecretKey.to_string(),
            "Missing required secret key"
        );
        assert_eq!(
            RapydConfigError::InvalidBaseUrl("ftp://x".to_string()).to_string(),
            "Invalid base URL 'ftp://x'"
        );
    }

    #[rstest]
    fn test_business_error_from_status() {
        let json = load_test_json("http_error_invalid_country.json");
        let envelope: serde_json::Value = serde_json::from_str(&json).unwrap();
        let status: RapydStatus = serde_json::from_value(envelope["status"].clone()).unwrap();

        let error: RapydHttpError = status.into();
        assert!(error.is_business());
        assert_eq!(error.business_message(), Some("invalid country"));
        assert_eq!(error.to_string(), "Rapyd error ERROR: invalid country");
    }

    #[rstest]
    fn test_business_error_without_message() {
        let error = RapydHttpError::Business {
            status: "ERROR".to_string(),
            error_code: None,
            response_code: None,
            message: None,
            operation_id: None,
        };
        assert_eq!(error.to_string(), "Rapyd error ERROR: no message");
        assert_eq!(error.business_message(), None);
    }

    #[rstest]
    fn test_error_classification() {
        assert!(RapydHttpError::Transport("x".to_string()).is_transport());
        assert!(RapydHttpError::Canceled("x".to_string()).is_transport());
        assert!(RapydHttpError::MalformedResponse("x".to_string()).is_malformed());
        assert!(!RapydHttpError::MalformedResponse("x".to_string()).is_business());
        assert!(!RapydHttpError::Signing("x".to_string()).is_transport());
    }

    #[rstest]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: RapydHttpError = json_err.into();
        assert!(error.to_string().starts_with("JSON error"));
    }

    #[rstest]
    fn test_from_build_error() {
        let error: RapydHttpError = RapydBuildError::MissingField("beneficiary_country").into();
        assert_eq!(
            error.to_string(),
            "Build error: Missing required field 'beneficiary_country'"
        );
    }
}
