//! Records returned by the Traderboard API

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    pub won: u32,
    pub total: u32,
}

/// Leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trader {
    pub rank: u32,
    pub name: String,
    pub address: String,
    pub avatar: String,
    pub followers: u32,
    pub handle: String,
    pub tokens: u32,
    pub win_rate: u32,
    pub trades: TradeStats,
    pub avg_buy: f64,
    pub avg_entry: f64,
    pub avg_hold: String,
    #[serde(rename = "realizedPNL")]
    pub realized_pnl: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealizedPnl {
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastTrade {
    pub time: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub count: u32,
    pub avg_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderProfile {
    pub name: String,
    pub address: String,
    pub avatar: String,
    pub handle: String,
    pub followers: u32,
    pub last_trade: LastTrade,
    pub tokens: TokenSummary,
    pub win_rate: u32,
    pub trades: TradeStats,
    pub avg_entry: f64,
    pub avg_hold: String,
    #[serde(rename = "realizedPNL")]
    pub realized_pnl: RealizedPnl,
    pub total_invested: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub name: String,
    pub address: String,
    pub avatar: String,
}

/// One token position in a trader's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub token: TokenInfo,
    pub last_trade: String,
    pub market_cap: f64,
    pub invested: f64,
    #[serde(rename = "realizedPNL")]
    pub realized_pnl: RealizedPnl,
    pub roi: f64,
    pub trades: TradeStats,
    pub holding: f64,
    pub avg_buy: f64,
    pub avg_sell: f64,
    pub held: String,
}
