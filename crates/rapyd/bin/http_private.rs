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

use rapyd_client::http::{client::RapydHttpClient, query::PayoutMethodTypesParamsBuilder};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let client = RapydHttpClient::from_env()?;

    // Request identity document types
    match client.http_get_identity_types("US").await {
        Ok(resp) => tracing::info!("{resp}"),
        Err(e) => tracing::error!("{e}"),
    }

    // Request payout method types
    let params = PayoutMethodTypesParamsBuilder::default()
        .beneficiary_country("US")
        .payout_currency("USD")
        .build()?;
    match client.http_get_payout_method_types(&params).await {
        Ok(resp) => tracing::info!("{resp}"),
        Err(e) => tracing::error!("{e}"),
    }

    // Request a wallet which does not exist
    match client.http_get_wallet("ewallet_does_not_exist").await {
        Ok(resp) => tracing::info!("{resp}"),
        Err(e) if e.is_business() => {
            tracing::warn!("Rejected: {}", e.business_message().unwrap_or_default());
        }
        Err(e) => tracing::error!("{e}"),
    }

    Ok(())
}
