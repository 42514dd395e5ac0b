//! HTTP client for the leaderboard endpoints

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ClientError, Resource};
use crate::query::FilterValues;
use crate::types::{Trade, Trader, TraderProfile};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct TraderboardClient {
    client: reqwest::Client,
    base_url: Url,
}

impl TraderboardClient {
    /// Client for a server at `base_url`, e.g. `http://127.0.0.1:5390`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        tracing::debug!(base_url = %parsed, "Traderboard client initialized");
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Base URL with `segments` appended and the filter query attached
    fn endpoint(&self, segments: &[&str], filters: Option<&FilterValues>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        let query = filters.map(FilterValues::to_query_string).unwrap_or_default();
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: Url,
    ) -> Result<T, ClientError> {
        tracing::debug!(%resource, %url, "Fetching");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%resource, %status, "Request failed");
            return Err(ClientError::Status { resource, status });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { resource, source })
    }

    /// `GET /api/traders` with the given bounds
    pub async fn fetch_traders(&self, filters: &FilterValues) -> Result<Vec<Trader>, ClientError> {
        let url = self.endpoint(&["api", "traders"], Some(filters))?;
        self.get_json(Resource::Traders, url).await
    }

    /// `GET /api/traders/{address}`
    pub async fn fetch_profile(&self, address: &str) -> Result<TraderProfile, ClientError> {
        let url = self.endpoint(&["api", "traders", address], None)?;
        self.get_json(Resource::Profile, url).await
    }

    /// `GET /api/traders/{address}/trades` with the given bounds
    pub async fn fetch_trades(
        &self,
        address: &str,
        filters: &FilterValues,
    ) -> Result<Vec<Trade>, ClientError> {
        let url = self.endpoint(&["api", "traders", address, "trades"], Some(filters))?;
        self.get_json(Resource::Trades, url).await
    }
}
