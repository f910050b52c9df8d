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

//! Client library for the [Rapyd](https://rapyd.net) payment gateway REST API.
//!
//! The `rapyd-client` crate signs requests with the Rapyd HMAC scheme, sends them
//! over HTTPS, and turns the gateway's `{status, data}` envelope into either the
//! requested payload or a typed error. It covers wallets, identity verification,
//! payout senders and beneficiaries, payouts, transfers, and balance holds.
//!
//! The official Rapyd API reference can be found at <https://docs.rapyd.net/en/api-reference.html>.
//!
//! # Configuration
//!
//! [`http::client::RapydHttpClient::from_env`] reads `RAPYD_ACCESS_KEY` and
//! `RAPYD_SECRET_KEY`, plus the optional `RAPYD_BASE_URL` and `RAPYD_ENVIRONMENT`
//! (`sandbox` or `production`).
//!
//! # Logging
//!
//! Request lifecycle events go to the injected [`common::observer::RapydObserver`].
//! The default observer emits `tracing` events and never logs credentials.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
// #![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;

pub use crate::{
    common::{enums::BodySigning, observer::RapydObserver},
    config::RapydHttpClientConfig,
    http::{
        client::{CallOptions, RapydHttpClient},
        error::{RapydConfigError, RapydHttpError},
        models::RapydStatus,
    },
};
