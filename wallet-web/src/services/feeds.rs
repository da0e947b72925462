//! HTTP data sources: Solana JSON-RPC balance, CoinGecko price, transaction history.

use std::cell::Cell;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use lib_session::{
    BalanceSource, Cluster, HistorySource, PriceSource, PublicKey, Result, SessionConfig,
    SessionError, TransactionSummary,
};
use serde::de::DeserializeOwned;
use shared::dto::{
    history_query, BalanceResult, RpcRequest, RpcResponse, SimplePriceResponse, TransactionRecord,
};

fn transport_error(err: gloo_net::Error) -> SessionError {
    match err {
        gloo_net::Error::SerdeError(e) => SessionError::Decode(e.to_string()),
        other => SessionError::Network(other.to_string()),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        return Err(SessionError::Network(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }
    response.json::<T>().await.map_err(transport_error)
}

/// JSON-RPC connection to one cluster. Created once and reused for every poll.
pub struct RpcConnection {
    url: String,
    next_id: Cell<u64>,
}

impl RpcConnection {
    pub fn new(cluster: Cluster) -> Self {
        Self {
            url: cluster.rpc_url().to_string(),
            next_id: Cell::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        id
    }
}

#[async_trait(?Send)]
impl BalanceSource for RpcConnection {
    async fn get_balance(&self, address: &PublicKey) -> Result<u64> {
        let request = RpcRequest::get_balance(self.next_id(), address.as_str());
        let response = Request::post(&self.url)
            .json(&request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let body: RpcResponse<BalanceResult> = read_json(response).await?;
        if let Some(error) = body.error {
            return Err(SessionError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        body.result
            .map(|result| result.value)
            .ok_or_else(|| SessionError::Decode("getBalance returned no result".to_string()))
    }
}

/// CoinGecko simple price client.
pub struct CoinGeckoPrices {
    url: String,
}

impl CoinGeckoPrices {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            url: config.price_url(),
        }
    }
}

#[async_trait(?Send)]
impl PriceSource for CoinGeckoPrices {
    async fn get_sol_price(&self) -> Result<f64> {
        let response = Request::get(&self.url).send().await.map_err(transport_error)?;
        let body: SimplePriceResponse = read_json(response).await?;
        body.sol_usd()
            .ok_or_else(|| SessionError::Decode("price missing from response".to_string()))
    }
}

/// Account transaction history client.
pub struct HistoryClient {
    endpoint: String,
}

impl HistoryClient {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            endpoint: config.history_endpoint.clone(),
        }
    }
}

#[async_trait(?Send)]
impl HistorySource for HistoryClient {
    async fn get_transactions(
        &self,
        address: &PublicKey,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>> {
        let url = format!(
            "{}?{}",
            self.endpoint,
            history_query(&urlencoding::encode(address.as_str()), limit)
        );
        log::debug!("Fetching transactions: {}", url);

        let response = Request::get(&url).send().await.map_err(transport_error)?;
        let records: Vec<TransactionRecord> = read_json(response).await?;
        Ok(records
            .into_iter()
            .take(limit)
            .map(TransactionSummary::from)
            .collect())
    }
}
