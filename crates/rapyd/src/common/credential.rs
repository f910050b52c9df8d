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

//! Rapyd API credential storage and request signing.
//!
//! The signing string is the concatenation, without separators, of
//! `method`, `uri`, `salt`, `timestamp`, `access_key`, `secret_key` and, when
//! non-empty, the raw `body`. The HMAC-SHA256 digest is rendered as lowercase hex
//! and the hex text itself is then base64url encoded. The gateway verifies that
//! exact double encoding.

#![allow(unused_assignments)] // Fields are used in methods, false positive from nightly

use std::{collections::HashMap, fmt::Debug};

use aws_lc_rs::hmac;
use base64::prelude::*;
use ustr::Ustr;
use zeroize::ZeroizeOnDrop;

use super::{
    consts::{
        CONTENT_TYPE_JSON, HEADER_ACCESS_KEY, HEADER_CONTENT_TYPE, HEADER_SALT, HEADER_SIGNATURE,
        HEADER_TIMESTAMP,
    },
    nonce::Nonce,
};
use crate::http::error::{RapydConfigError, RapydHttpError};

/// API credentials required for signing Rapyd REST requests.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credential {
    #[zeroize(skip)]
    access_key: Ustr,
    secret_key: Box<[u8]>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credential))
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Credential {
    /// Creates a new [`Credential`] instance from the access and secret keys.
    ///
    /// # Errors
    ///
    /// Returns an error if either key is empty or only whitespace.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, RapydConfigError> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();

        if access_key.trim().is_empty() {
            return Err(RapydConfigError::MissingAccessKey);
        }
        if secret_key.trim().is_empty() {
            return Err(RapydConfigError::MissingSecretKey);
        }

        Ok(Self {
            access_key: Ustr::from(access_key.as_str()),
            secret_key: secret_key.into_bytes().into_boxed_slice(),
        })
    }

    /// Returns the access key associated with this credential.
    #[must_use]
    pub fn access_key(&self) -> &Ustr {
        &self.access_key
    }

    /// Produces the Rapyd signature for a request.
    ///
    /// `method` must be the lowercase HTTP verb and `uri` the path including any
    /// query string, exactly as sent. A `body` of `None` or `Some("")` leaves the
    /// body segment out of the signing string.
    ///
    /// # Errors
    ///
    /// Returns [`RapydHttpError::Signing`] if any input cannot form a valid signing string.
    pub fn sign(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
        nonce: &Nonce,
    ) -> Result<String, RapydHttpError> {
        validate_signing_input(method, uri, nonce)?;

        let body = body.filter(|b| !b.is_empty());
        let mut message = Vec::with_capacity(
            method.len()
                + uri.len()
                + nonce.salt().len()
                + nonce.timestamp().len()
                + self.access_key.len()
                + self.secret_key.len()
                + body.map_or(0, str::len),
        );

        message.extend_from_slice(method.as_bytes());
        message.extend_from_slice(uri.as_bytes());
        message.extend_from_slice(nonce.salt().as_bytes());
        message.extend_from_slice(nonce.timestamp().as_bytes());
        message.extend_from_slice(self.access_key.as_bytes());
        message.extend_from_slice(&self.secret_key);
        if let Some(body) = body {
            message.extend_from_slice(body.as_bytes());
        }

        let key = hmac::Key::new(hmac::HMAC_SHA256, &self.secret_key);
        let tag = hmac::sign(&key, &message);
        let hex_digest = hex::encode(tag.as_ref());
        Ok(BASE64_URL_SAFE.encode(hex_digest.as_bytes()))
    }

    /// Signs the request and bundles the result with the headers the gateway requires.
    ///
    /// # Errors
    ///
    /// Returns [`RapydHttpError::Signing`] if the signature cannot be produced.
    pub fn auth_headers(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
        nonce: &Nonce,
    ) -> Result<AuthHeaders, RapydHttpError> {
        let signature = self.sign(method, uri, body, nonce)?;
        Ok(AuthHeaders {
            signature,
            salt: nonce.salt().to_string(),
            timestamp: nonce.timestamp().to_string(),
            access_key: self.access_key.to_string(),
        })
    }
}

fn validate_signing_input(method: &str, uri: &str, nonce: &Nonce) -> Result<(), RapydHttpError> {
    if method.is_empty() || !method.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(RapydHttpError::Signing(format!(
            "HTTP method must be a lowercase verb, was '{method}'"
        )));
    }
    if !uri.starts_with('/') || uri.starts_with("//") {
        return Err(RapydHttpError::Signing(format!(
            "URI must be a path without scheme or host, was '{uri}'"
        )));
    }
    if nonce.salt().is_empty() {
        return Err(RapydHttpError::Signing("salt is empty".to_string()));
    }
    let timestamp = nonce.timestamp();
    if timestamp.is_empty() || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RapydHttpError::Signing(format!(
            "timestamp must be decimal Unix seconds, was '{timestamp}'"
        )));
    }
    Ok(())
}

/// Authentication headers attached to every outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthHeaders {
    pub signature: String,
    pub salt: String,
    pub timestamp: String,
    pub access_key: String,
}

impl AuthHeaders {
    /// Returns the header bundle keyed by the lowercase names the gateway expects.
    #[must_use]
    pub fn into_headers(self) -> HashMap<String, String> {
        HashMap::from([
            (HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string()),
            (HEADER_SIGNATURE.to_string(), self.signature),
            (HEADER_SALT.to_string(), self.salt),
            (HEADER_TIMESTAMP.to_string(), self.timestamp),
            (HEADER_ACCESS_KEY.to_string(), self.access_key),
        ])
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
