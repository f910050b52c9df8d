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

//! Provides the HTTP client integration for the [Rapyd](https://rapyd.net) REST API.
//!
//! This module defines [`RapydHttpClient`], which signs every request with fresh
//! nonce material, sends it through the [`RapydDispatcher`], and interprets the
//! gateway envelope into the endpoint's fixed projection or a [`RapydHttpError`].
//!
//! # Quick links to official docs
//! | Domain                               | Rapyd reference                                                |
//! |--------------------------------------|----------------------------------------------------------------|
//! | Request signatures                   | <https://docs.rapyd.net/en/request-signatures.html>            |
//! | Wallets                              | <https://docs.rapyd.net/en/wallet.html>                        |
//! | Payouts                              | <https://docs.rapyd.net/en/payout.html>                        |

use std::{fmt::Debug, sync::Arc, time::Duration};

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::{
    dispatch::RapydDispatcher,
    error::{RapydConfigError, RapydHttpError},
    models::{CallResult, RapydEnvelope, RapydStatus},
    parse::parse_envelope,
    query::{
        BalanceHoldParams, IdentityVerificationParams, PayoutMethodTypesParams,
        PayoutRequiredFieldsParams, TransferFundsParams, TransferResponseParams,
        TransferResponseStatus, WalletStatusParams, WalletTransactionsParams,
    },
};
use crate::{
    common::{
        consts::RAPYD_DEFAULT_TIMEOUT_SECS,
        credential::Credential,
        enums::BodySigning,
        nonce::Nonce,
        observer::{RapydObserver, TracingObserver},
    },
    config::RapydHttpClientConfig,
};

/// Per-call overrides for timeout and cancellation.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
    /// Timeout for the whole exchange; the client default applies when `None`.
    pub timeout: Option<Duration>,
    /// Token which aborts the call when cancelled.
    pub cancellation_token: Option<CancellationToken>,
}

impl CallOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }
}

/// Provides an HTTP client for the [Rapyd](https://rapyd.net) REST API.
///
/// The client holds only immutable state (base URL, credential, observer and
/// defaults) and is cheap to clone, so one instance can be shared by concurrent
/// tasks. Salt, timestamp and signature are computed inside each call.
#[derive(Clone)]
pub struct RapydHttpClient {
    dispatcher: RapydDispatcher,
    credential: Arc<Credential>,
    observer: Arc<dyn RapydObserver>,
    default_timeout: Duration,
    cancellation_token: CancellationToken,
    call_options: CallOptions,
}

impl Debug for RapydHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(RapydHttpClient))
            .field("base_url", &self.dispatcher.base_url())
            .field("credential", &self.credential)
            .field("default_timeout", &self.default_timeout)
            .field("call_options", &self.call_options)
            .finish_non_exhaustive()
    }
}

impl RapydHttpClient {
    /// Creates a new [`RapydHttpClient`] for the given gateway and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three values is blank or the base URL is invalid.
    pub fn new(
        base_url: &str,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, RapydConfigError> {
        let dispatcher = RapydDispatcher::new(base_url)?;
        let credential = Credential::new(access_key, secret_key)?;

        Ok(Self {
            dispatcher,
            credential: Arc::new(credential),
            observer: Arc::new(TracingObserver),
            default_timeout: Duration::from_secs(RAPYD_DEFAULT_TIMEOUT_SECS),
            cancellation_token: CancellationToken::new(),
            call_options: CallOptions::default(),
        })
    }

    /// Creates a new [`RapydHttpClient`] from a [`RapydHttpClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is missing credentials or holds an invalid URL.
    pub fn from_config(config: &RapydHttpClientConfig) -> Result<Self, RapydConfigError> {
        let mut client = Self::new(
            &config.http_url(),
            config.access_key.clone(),
            config.secret_key.clone(),
        )?;
        client.default_timeout = Duration::from_secs(config.http_timeout_secs);
        Ok(client)
    }

    /// Creates a new [`RapydHttpClient`] using credentials from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = RapydHttpClientConfig::from_env()?;
        Ok(Self::from_config(&config)?)
    }

    /// Replaces the observer receiving request lifecycle events.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RapydObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns a clone of this client whose calls use `options`.
    ///
    /// The original client is unaffected.
    #[must_use]
    pub fn with_call_options(&self, options: CallOptions) -> Self {
        let mut client = self.clone();
        client.call_options = options;
        client
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    /// Returns the access key used to sign requests.
    #[must_use]
    pub fn access_key(&self) -> &str {
        self.credential.access_key().as_str()
    }

    /// Cancel all pending HTTP requests issued through this client and its clones.
    pub fn cancel_all_requests(&self) {
        self.cancellation_token.cancel();
    }

    /// Get the cancellation token for this client.
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Signs and sends one request, then interprets the gateway envelope.
    ///
    /// `uri` is the path plus query string. The body is serialized once and the
    /// same bytes are signed and sent. `body_signing` only matters for DELETE;
    /// GET requests cannot carry a body and POST/PUT bodies are always signed.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails, the exchange does not complete, the
    /// response is malformed, or the gateway rejects the operation.
    pub async fn send_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        uri: &str,
        body: Option<&B>,
        body_signing: BodySigning,
    ) -> Result<RapydEnvelope, RapydHttpError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| self.report(&method, uri, e.into()))?;

        if body.is_some() && method == Method::GET {
            return Err(self.report(
                &method,
                uri,
                RapydHttpError::Validation("GET requests cannot carry a body".to_string()),
            ));
        }
        if body_signing == BodySigning::Omit && method != Method::DELETE {
            return Err(self.report(
                &method,
                uri,
                RapydHttpError::Validation(format!(
                    "body signing can only be omitted for DELETE, was {method}"
                )),
            ));
        }

        let signed_body = match body_signing {
            BodySigning::Include => body.as_deref(),
            BodySigning::Omit => None,
        };

        let nonce = Nonce::generate();
        let verb = method.as_str().to_ascii_lowercase();
        let headers = self
            .credential
            .auth_headers(&verb, uri, signed_body, &nonce)
            .map_err(|e| self.report(&method, uri, e))?
            .into_headers();

        let timeout = self.call_options.timeout.unwrap_or(self.default_timeout);
        let call_token = self
            .call_options
            .cancellation_token
            .clone()
            .unwrap_or_else(|| self.cancellation_token.child_token());

        self.observer.on_request(&method, uri);

        let dispatch = self
            .dispatcher
            .dispatch(method.clone(), uri, &headers, body, timeout, &call_token);
        let result = tokio::select! {
            biased;
            () = self.cancellation_token.cancelled() => {
                CallResult::failed(format!("Request canceled {}{uri}", self.base_url()))
            }
            result = dispatch => result,
        };

        match &result.response {
            Some(response) => self.observer.on_response(&method, uri, response.status),
            None if call_token.is_cancelled() || self.cancellation_token.is_cancelled() => {
                return Err(self.report(
                    &method,
                    uri,
                    RapydHttpError::Canceled(result.status_message),
                ));
            }
            None => {}
        }

        parse_envelope(result).map_err(|e| self.report(&method, uri, e))
    }

    fn report(&self, method: &Method, uri: &str, error: RapydHttpError) -> RapydHttpError {
        self.observer.on_failure(method, uri, &error);
        error
    }

    async fn get_data(&self, uri: &str) -> Result<Value, RapydHttpError> {
        self.send_request::<Value>(Method::GET, uri, None, BodySigning::Include)
            .await?
            .into_data()
    }

    async fn post_data<B: Serialize + ?Sized>(
        &self,
        uri: &str,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.send_request(Method::POST, uri, Some(body), BodySigning::Include)
            .await?
            .into_data()
    }

    async fn put_data<B: Serialize + ?Sized>(
        &self,
        uri: &str,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.send_request(Method::PUT, uri, Some(body), BodySigning::Include)
            .await?
            .into_data()
    }

    async fn put_status<B: Serialize + ?Sized>(
        &self,
        uri: &str,
        body: &B,
    ) -> Result<RapydStatus, RapydHttpError> {
        Ok(self
            .send_request(Method::PUT, uri, Some(body), BodySigning::Include)
            .await?
            .into_status())
    }

    async fn delete_status(&self, uri: &str) -> Result<RapydStatus, RapydHttpError> {
        Ok(self
            .send_request::<Value>(Method::DELETE, uri, None, BodySigning::Include)
            .await?
            .into_status())
    }

    // =========================================================================
    // Identity verification
    // =========================================================================

    /// Lists the identity document types accepted for a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    ///
    /// # References
    ///
    /// - <https://docs.rapyd.net/en/list-official-id-documents.html>
    pub async fn http_get_identity_types(&self, country: &str) -> Result<Value, RapydHttpError> {
        let path = build_path("/v1/identities/types", &[("country", country)])?;
        self.get_data(&path).await
    }

    /// Starts a hosted identity verification for a wallet contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_verify_identity(
        &self,
        params: &IdentityVerificationParams,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/hosted/idv", params).await
    }

    // =========================================================================
    // Wallets
    // =========================================================================

    /// Creates a wallet, optionally together with its first contact.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    ///
    /// # References
    ///
    /// - <https://docs.rapyd.net/en/create-wallet.html>
    pub async fn http_create_wallet<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/user", body).await
    }

    /// Updates a wallet's details. The body must carry the `ewallet` identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_update_wallet<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.put_data("/v1/user", body).await
    }

    /// Retrieves a wallet, e.g. `ewallet_db405029bac88de81f3072f31fcf0442`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_wallet(&self, wallet_id: &str) -> Result<Value, RapydHttpError> {
        let wallet_id = path_segment("wallet_id", wallet_id)?;
        self.get_data(&format!("/v1/user/{wallet_id}")).await
    }

    /// Deletes a wallet. Returns the status block since the operation has no resource body.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_delete_wallet(&self, wallet_id: &str) -> Result<RapydStatus, RapydHttpError> {
        let wallet_id = path_segment("wallet_id", wallet_id)?;
        self.delete_status(&format!("/v1/user/{wallet_id}")).await
    }

    /// Disables a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_disable_wallet(
        &self,
        wallet_id: &str,
    ) -> Result<RapydStatus, RapydHttpError> {
        let params = WalletStatusParams {
            ewallet: path_segment("wallet_id", wallet_id)?.to_string(),
        };
        self.put_status("/v1/user/disable", &params).await
    }

    /// Re-enables a disabled wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_enable_wallet(&self, wallet_id: &str) -> Result<RapydStatus, RapydHttpError> {
        let params = WalletStatusParams {
            ewallet: path_segment("wallet_id", wallet_id)?.to_string(),
        };
        self.put_status("/v1/user/enable", &params).await
    }

    /// Lists the transactions of a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_wallet_transactions(
        &self,
        wallet_id: &str,
        params: &WalletTransactionsParams,
    ) -> Result<Value, RapydHttpError> {
        let wallet_id = path_segment("wallet_id", wallet_id)?;
        let path = build_query_path(&format!("/v1/user/{wallet_id}/transactions"), params)?;
        self.get_data(&path).await
    }

    /// Lists the currency accounts and balances of a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_wallet_balances(&self, wallet_id: &str) -> Result<Value, RapydHttpError> {
        let wallet_id = path_segment("wallet_id", wallet_id)?;
        self.get_data(&format!("/v1/user/{wallet_id}/accounts"))
            .await
    }

    /// Adds a contact to a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_add_wallet_contact<B: Serialize + ?Sized>(
        &self,
        wallet_id: &str,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        let wallet_id = path_segment("wallet_id", wallet_id)?;
        self.post_data(&format!("/v1/ewallets/{wallet_id}/contacts"), body)
            .await
    }

    /// Lists the contacts of a wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_wallet_contacts(&self, wallet_id: &str) -> Result<Value, RapydHttpError> {
        let wallet_id = path_segment("wallet_id", wallet_id)?;
        self.get_data(&format!("/v1/ewallets/{wallet_id}/contacts"))
            .await
    }

    // =========================================================================
    // Transfers and balance holds
    // =========================================================================

    /// Transfers funds between two wallets.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_transfer_funds(
        &self,
        params: &TransferFundsParams,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/account/transfer", params).await
    }

    /// Accepts, declines, or cancels a pending transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_set_transfer_response(
        &self,
        transfer_id: &str,
        status: TransferResponseStatus,
    ) -> Result<Value, RapydHttpError> {
        let params = TransferResponseParams {
            id: path_segment("transfer_id", transfer_id)?.to_string(),
            status,
        };
        self.post_data("/v1/account/transfer/response", &params)
            .await
    }

    /// Puts funds of a wallet on hold.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_put_balance_hold(
        &self,
        params: &BalanceHoldParams,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/account/balance/hold", params).await
    }

    /// Releases funds previously put on hold.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_release_balance_hold(
        &self,
        params: &BalanceHoldParams,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/account/balance/release", params).await
    }

    // =========================================================================
    // Payouts
    // =========================================================================

    /// Creates a payout sender.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_create_payout_sender<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/payouts/sender", body).await
    }

    /// Retrieves a payout sender.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_payout_sender(&self, sender_id: &str) -> Result<Value, RapydHttpError> {
        let sender_id = path_segment("sender_id", sender_id)?;
        self.get_data(&format!("/v1/payouts/sender/{sender_id}"))
            .await
    }

    /// Deletes a payout sender.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_delete_payout_sender(
        &self,
        sender_id: &str,
    ) -> Result<RapydStatus, RapydHttpError> {
        let sender_id = path_segment("sender_id", sender_id)?;
        self.delete_status(&format!("/v1/payouts/sender/{sender_id}"))
            .await
    }

    /// Creates a payout beneficiary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_create_payout_beneficiary<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/payouts/beneficiary", body).await
    }

    /// Retrieves a payout beneficiary.
    ///
    /// # Errors
    ///
    /// Returns an error if the beneficiary id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_payout_beneficiary(
        &self,
        beneficiary_id: &str,
    ) -> Result<Value, RapydHttpError> {
        let beneficiary_id = path_segment("beneficiary_id", beneficiary_id)?;
        self.get_data(&format!("/v1/payouts/beneficiary/{beneficiary_id}"))
            .await
    }

    /// Deletes a payout beneficiary.
    ///
    /// # Errors
    ///
    /// Returns an error if the beneficiary id is invalid, the request fails, or the gateway rejects it.
    pub async fn http_delete_payout_beneficiary(
        &self,
        beneficiary_id: &str,
    ) -> Result<RapydStatus, RapydHttpError> {
        let beneficiary_id = path_segment("beneficiary_id", beneficiary_id)?;
        self.delete_status(&format!("/v1/payouts/beneficiary/{beneficiary_id}"))
            .await
    }

    /// Creates a payout, e.g. to a beneficiary's bank account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_create_payout<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<Value, RapydHttpError> {
        self.post_data("/v1/payouts", body).await
    }

    /// Lists the payout method types matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway rejects it.
    pub async fn http_get_payout_method_types(
        &self,
        params: &PayoutMethodTypesParams,
    ) -> Result<Value, RapydHttpError> {
        let path = build_query_path("/v1/payouts/supported_types", params)?;
        self.get_data(&path).await
    }

    /// Retrieves the sender and beneficiary fields required by a payout method type.
    ///
    /// # Errors
    ///
    /// Returns an error if the method type is invalid, the request fails, or the gateway rejects it.
    pub async fn http_get_payout_required_fields(
        &self,
        payout_method_type: &str,
        params: &PayoutRequiredFieldsParams,
    ) -> Result<Value, RapydHttpError> {
        let payout_method_type = path_segment("payout_method_type", payout_method_type)?;
        let path = build_query_path(&format!("/v1/payouts/{payout_method_type}/details"), params)?;
        self.get_data(&path).await
    }
}

/// Checks that `value` can be used verbatim as one path segment.
///
/// Only ASCII alphanumerics, `_`, `-` and `.` are accepted, and the dot segments
/// `.` and `..` are rejected, so the URL parser never rewrites the signed path.
fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str, RapydHttpError> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || !value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'));
    if invalid {
        return Err(RapydHttpError::Validation(format!(
            "invalid {name} '{value}'"
        )));
    }
    Ok(value)
}

fn build_query_path<S: Serialize + ?Sized>(
    base: &str,
    params: &S,
) -> Result<String, RapydHttpError> {
    let query = serde_urlencoded::to_string(params)
        .map_err(|e| RapydHttpError::Validation(e.to_string()))?;
    if query.is_empty() {
        Ok(base.to_owned())
    } else {
        Ok(format!("{base}?{query}"))
    }
}

fn build_path(base: &str, params: &[(&str, &str)]) -> Result<String, RapydHttpError> {
    build_query_path(base, params)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
