//! Leaderboard record types
//!
//! Field names serialize in camelCase to match what the table frontend reads.
//! `realizedPNL` keeps its acronym casing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Won/total trade counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TradeStats {
    pub won: u32,
    pub total: u32,
}

impl TradeStats {
    /// Win rate as `won / total * 100`, rounded to a whole percent.
    ///
    /// NaN when `total` is zero, so any bound compared against it fails.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        (self.won as f64 / self.total as f64 * 100.0).round()
    }
}

/// Leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
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
    /// Free text, `"<N> minutes"`
    pub avg_hold: String,
    #[serde(rename = "realizedPNL")]
    pub realized_pnl: f64,
}

/// Realized profit and loss as an absolute value plus percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RealizedPnl {
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LastTrade {
    pub time: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub count: u32,
    pub avg_price: f64,
}

/// Trader detail header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenInfo {
    pub name: String,
    pub address: String,
    pub avatar: String,
}

/// One token position in a trader's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub token: TokenInfo,
    /// Free text, `"<N> min"`
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
    /// Free text, `"<N> min"`
    pub held: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate_rounds() {
        let stats = TradeStats { won: 2, total: 3 };
        assert_eq!(stats.win_rate(), 67.0);
        let stats = TradeStats { won: 1, total: 8 };
        assert_eq!(stats.win_rate(), 13.0);
    }

    #[test]
    fn test_win_rate_zero_total_is_nan() {
        let stats = TradeStats { won: 0, total: 0 };
        assert!(stats.win_rate().is_nan());
    }

    #[test]
    fn test_trader_serializes_camel_case() {
        let trader = Trader {
            rank: 1,
            name: "Trader 1".to_string(),
            address: "0xabc".to_string(),
            avatar: "a".to_string(),
            followers: 10,
            handle: "@sol1".to_string(),
            tokens: 5,
            win_rate: 50,
            trades: TradeStats { won: 1, total: 2 },
            avg_buy: 1.5,
            avg_entry: 2.5,
            avg_hold: "30 minutes".to_string(),
            realized_pnl: -3.25,
        };
        let json = serde_json::to_value(&trader).unwrap();
        assert_eq!(json["winRate"], 50);
        assert_eq!(json["avgHold"], "30 minutes");
        assert_eq!(json["realizedPNL"], -3.25);
        assert_eq!(json["trades"]["total"], 2);
        assert!(json.get("win_rate").is_none());
    }

    #[test]
    fn test_last_trade_side_serializes_as_type() {
        let last = LastTrade {
            time: "now".to_string(),
            side: TradeSide::Sell,
        };
        let json = serde_json::to_value(&last).unwrap();
        assert_eq!(json["type"], "sell");
    }
}
