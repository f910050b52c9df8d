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

//! Per-request nonce material (salt and timestamp) mixed into every signature.
//!
//! A [`Nonce`] is created for exactly one outgoing request and dropped with it.
//! The client never stores one, so concurrent requests sharing a client cannot
//! observe each other's material.

use chrono::Utc;
use rand::Rng;

use super::consts::RAPYD_SALT_LEN;

/// Salt and timestamp for a single signed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nonce {
    salt: String,
    timestamp: String,
}

impl Nonce {
    /// Creates a [`Nonce`] from explicit material.
    #[must_use]
    pub fn new(salt: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Generates fresh material: a random lowercase salt and the current Unix time in seconds.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            salt: generate_salt(),
            timestamp: Utc::now().timestamp().to_string(),
        }
    }

    #[must_use]
    pub fn salt(&self) -> &str {
        &self.salt
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Returns [`RAPYD_SALT_LEN`] letters drawn uniformly (with replacement) from `a..=z`.
#[must_use]
pub fn generate_salt() -> String {
    let mut rng = rand::rng();
    (0..RAPYD_SALT_LEN)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
