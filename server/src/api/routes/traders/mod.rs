//! Leaderboard, profile and trade history endpoints
//!
//! Every request generates fresh mock records, waits out the configured
//! latency and then applies the `<field>_min` / `<field>_max` range filters
//! from the query string.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tokio::sync::watch;

use crate::api::extractors::{AddressPath, FilterQuery};
use crate::api::types::ApiError;
use crate::core::config::{FiltersConfig, MockConfig};
use crate::domain::MockDataService;
use crate::domain::filters::{
    FilterField, FilterParams, RangeFilter, TradeField, TraderField, apply_filters,
    parse_range_filters, validate_bounds,
};
use crate::domain::types::{Trade, Trader, TraderProfile};

/// Shared state for trader endpoints
#[derive(Clone)]
pub struct TradersApiState {
    pub mock: Arc<MockDataService>,
    pub mock_config: MockConfig,
    pub strict_filters: bool,
    pub shutdown_rx: watch::Receiver<bool>,
}

/// Build trader routes (nested under `/api/traders`)
pub fn routes(
    mock: Arc<MockDataService>,
    mock_config: MockConfig,
    filters: &FiltersConfig,
    shutdown_rx: watch::Receiver<bool>,
) -> Router<()> {
    let state = TradersApiState {
        mock,
        mock_config,
        strict_filters: filters.strict,
        shutdown_rx,
    };

    Router::new()
        .route("/", get(list_traders))
        .route("/{address}", get(get_trader_profile))
        .route("/{address}/trades", get(list_trader_trades))
        .with_state(state)
}

impl TradersApiState {
    fn range_filters<F: FilterField>(
        &self,
        params: &FilterParams,
    ) -> Result<Vec<RangeFilter<F>>, ApiError> {
        let filters = parse_range_filters::<F>(params);
        if self.strict_filters {
            validate_bounds(&filters)?;
        }
        Ok(filters)
    }

    /// Sleep for `delay` unless shutdown fires first
    async fn simulate_latency(&self, delay: Duration) -> Result<(), ApiError> {
        if delay.is_zero() {
            return Ok(());
        }
        let mut shutdown_rx = self.shutdown_rx.clone();
        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            Ok(_) = shutdown_rx.wait_for(|&v| v) => {
                Err(ApiError::service_unavailable("Server is shutting down"))
            }
        }
    }
}

/// List leaderboard traders
#[utoipa::path(
    get,
    path = "/api/traders",
    tag = "traders",
    params(
        ("rank_min" = Option<String>, Query, description = "Minimum rank"),
        ("rank_max" = Option<String>, Query, description = "Maximum rank"),
        ("followers_min" = Option<String>, Query, description = "Minimum followers"),
        ("followers_max" = Option<String>, Query, description = "Maximum followers"),
        ("tokens_min" = Option<String>, Query, description = "Minimum token count"),
        ("tokens_max" = Option<String>, Query, description = "Maximum token count"),
        ("winRate_min" = Option<String>, Query, description = "Minimum win rate (%)"),
        ("winRate_max" = Option<String>, Query, description = "Maximum win rate (%)"),
        ("avgBuy_min" = Option<String>, Query, description = "Minimum average buy"),
        ("avgBuy_max" = Option<String>, Query, description = "Maximum average buy"),
        ("avgEntry_min" = Option<String>, Query, description = "Minimum average entry"),
        ("avgEntry_max" = Option<String>, Query, description = "Maximum average entry"),
        ("realizedPNL_min" = Option<String>, Query, description = "Minimum realized PNL"),
        ("realizedPNL_max" = Option<String>, Query, description = "Maximum realized PNL")
    ),
    responses(
        (status = 200, description = "Traders matching every bound", body = [Trader]),
        (status = 400, description = "Non-numeric bound (strict filters only)")
    )
)]
pub async fn list_traders(
    State(state): State<TradersApiState>,
    FilterQuery(params): FilterQuery,
) -> Result<Json<Vec<Trader>>, ApiError> {
    let filters = state.range_filters::<TraderField>(&params)?;
    state
        .simulate_latency(state.mock_config.delay.traders())
        .await?;

    let traders = state.mock.traders(state.mock_config.traders_count);
    let generated = traders.len();
    let traders = apply_filters(traders, &filters);

    tracing::debug!(
        generated,
        returned = traders.len(),
        filters = filters.len(),
        "Listed traders"
    );
    Ok(Json(traders))
}

/// Get a trader profile
#[utoipa::path(
    get,
    path = "/api/traders/{address}",
    tag = "traders",
    params(
        ("address" = String, Path, description = "Wallet address, echoed in the response")
    ),
    responses(
        (status = 200, description = "Trader profile", body = TraderProfile),
        (status = 400, description = "Invalid address")
    )
)]
pub async fn get_trader_profile(
    State(state): State<TradersApiState>,
    path: AddressPath,
) -> Result<Json<TraderProfile>, ApiError> {
    state
        .simulate_latency(state.mock_config.delay.profile())
        .await?;

    tracing::debug!(address = %path.address, "Generated trader profile");
    Ok(Json(state.mock.profile(&path.address)))
}

/// List a trader's trade history
#[utoipa::path(
    get,
    path = "/api/traders/{address}/trades",
    tag = "traders",
    params(
        ("address" = String, Path, description = "Wallet address"),
        ("marketCap_min" = Option<String>, Query, description = "Minimum market cap"),
        ("marketCap_max" = Option<String>, Query, description = "Maximum market cap"),
        ("invested_min" = Option<String>, Query, description = "Minimum invested"),
        ("invested_max" = Option<String>, Query, description = "Maximum invested"),
        ("holding_min" = Option<String>, Query, description = "Minimum holding"),
        ("holding_max" = Option<String>, Query, description = "Maximum holding"),
        ("avgBuy_min" = Option<String>, Query, description = "Minimum average buy"),
        ("avgBuy_max" = Option<String>, Query, description = "Maximum average buy"),
        ("avgSell_min" = Option<String>, Query, description = "Minimum average sell"),
        ("avgSell_max" = Option<String>, Query, description = "Maximum average sell"),
        ("roi_min" = Option<String>, Query, description = "Minimum ROI (%)"),
        ("roi_max" = Option<String>, Query, description = "Maximum ROI (%)"),
        ("lastTrade_min" = Option<String>, Query, description = "Minimum minutes since last trade"),
        ("lastTrade_max" = Option<String>, Query, description = "Maximum minutes since last trade"),
        ("held_min" = Option<String>, Query, description = "Minimum minutes held"),
        ("held_max" = Option<String>, Query, description = "Maximum minutes held"),
        ("realizedPNL_min" = Option<String>, Query, description = "Minimum realized PNL value"),
        ("realizedPNL_max" = Option<String>, Query, description = "Maximum realized PNL value"),
        ("winRate_min" = Option<String>, Query, description = "Minimum win rate (%)"),
        ("winRate_max" = Option<String>, Query, description = "Maximum win rate (%)"),
        ("pnlPercentage_min" = Option<String>, Query, description = "Minimum realized PNL (%)"),
        ("pnlPercentage_max" = Option<String>, Query, description = "Maximum realized PNL (%)")
    ),
    responses(
        (status = 200, description = "Trades matching every bound", body = [Trade]),
        (status = 400, description = "Invalid address or non-numeric bound (strict filters only)")
    )
)]
pub async fn list_trader_trades(
    State(state): State<TradersApiState>,
    path: AddressPath,
    FilterQuery(params): FilterQuery,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let filters = state.range_filters::<TradeField>(&params)?;
    state
        .simulate_latency(state.mock_config.delay.trades())
        .await?;

    // History is not scoped to the address; any valid address gets random trades
    let trades = state.mock.trades(state.mock_config.trades_count);
    let generated = trades.len();
    let trades = apply_filters(trades, &filters);

    tracing::debug!(
        address = %path.address,
        generated,
        returned = trades.len(),
        filters = filters.len(),
        "Listed trades"
    );
    Ok(Json(trades))
}
