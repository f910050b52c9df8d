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

//! Core constants shared across the Rapyd client components.

pub const RAPYD_HTTP_URL: &str = "https://api.rapyd.net";
pub const RAPYD_HTTP_SANDBOX_URL: &str = "https://sandboxapi.rapyd.net";

pub const RAPYD_USER_AGENT: &str = concat!("rapyd-client/", env!("CARGO_PKG_VERSION"));

/// Value of `status.status` in a gateway envelope for an approved operation.
pub const RAPYD_STATUS_SUCCESS: &str = "SUCCESS";

/// Default bounded timeout applied to every call unless overridden.
pub const RAPYD_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of lowercase letters in a request salt.
pub const RAPYD_SALT_LEN: usize = 8;

pub const HEADER_CONTENT_TYPE: &str = "content-type";
pub const HEADER_SIGNATURE: &str = "signature";
pub const HEADER_SALT: &str = "salt";
pub const HEADER_TIMESTAMP: &str = "timestamp";
pub const HEADER_ACCESS_KEY: &str = "access_key";

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const ENV_ACCESS_KEY: &str = "RAPYD_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "RAPYD_SECRET_KEY";
pub const ENV_BASE_URL: &str = "RAPYD_BASE_URL";
pub const ENV_ENVIRONMENT: &str = "RAPYD_ENVIRONMENT";
