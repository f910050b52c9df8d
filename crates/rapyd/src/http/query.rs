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

//! Builder types for Rapyd REST query parameters and request bodies.

use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use super::error::RapydBuildError;

/// Query parameters for `GET /v1/user/{ewallet}/transactions`.
///
/// # References
/// - <https://docs.rapyd.net/en/list-wallet-transactions.html>
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Builder)]
#[builder(default)]
#[builder(setter(into, strip_option))]
#[builder(build_fn(error = "RapydBuildError"))]
pub struct WalletTransactionsParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query parameters for `GET /v1/payouts/supported_types`.
///
/// # References
/// - <https://docs.rapyd.net/en/list-payout-method-types.html>
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Builder)]
#[builder(default)]
#[builder(setter(into, strip_option))]
#[builder(build_fn(error = "RapydBuildError"))]
pub struct PayoutMethodTypesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_entity: Option<String>,
}

/// Query parameters for `GET /v1/payouts/{payout_method_type}/details`.
///
/// Every field is required by the gateway.
///
/// # References
/// - <https://docs.rapyd.net/en/get-payout-required-fields.html>
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
#[builder(build_fn(error = "RapydBuildError"))]
pub struct PayoutRequiredFieldsParams {
    pub beneficiary_country: String,
    pub beneficiary_entity_type: String,
    pub amount: Decimal,
    pub payout_currency: String,
    pub sender_country: String,
    pub sender_currency: String,
    pub sender_entity_type: String,
}

/// Body for `POST /v1/hosted/idv`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
#[builder(build_fn(error = "RapydBuildError"))]
pub struct IdentityVerificationParams {
    pub country: String,
    pub ewallet: String,
    pub reference_id: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Body for `POST /v1/account/balance/hold` and `POST /v1/account/balance/release`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
#[builder(build_fn(error = "RapydBuildError"))]
pub struct BalanceHoldParams {
    pub ewallet: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

/// Body for `POST /v1/account/transfer`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Builder)]
#[builder(setter(into))]
#[builder(build_fn(error = "RapydBuildError"))]
pub struct TransferFundsParams {
    pub source_ewallet: String,
    pub destination_ewallet: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Reply of the destination wallet to a pending transfer.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransferResponseStatus {
    Accept,
    Decline,
    Cancel,
}

/// Body for `POST /v1/account/transfer/response`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransferResponseParams {
    pub id: String,
    pub status: TransferResponseStatus,
}

/// Body for `PUT /v1/user/enable` and `PUT /v1/user/disable`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletStatusParams {
    pub ewallet: String,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
