//! Filterable fields per record type
//!
//! Each field knows its query-string name and how to read a comparable number
//! off a record. Derived fields (durations, win rate) compute the number here.

use std::fmt::Debug;

use super::coerce::parse_leading_int;
use crate::domain::types::{Trade, Trader};

/// A numeric field that accepts `<name>_min` / `<name>_max` bounds
pub trait FilterField: Copy + Debug + Send + Sync + 'static {
    type Record;

    /// Every filterable field, in the order filters are applied
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Comparable value; NaN when it cannot be derived
    fn value(self, record: &Self::Record) -> f64;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Leaderboard filter fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraderField {
    Rank,
    Followers,
    Tokens,
    WinRate,
    AvgBuy,
    AvgEntry,
    RealizedPnl,
}

impl FilterField for TraderField {
    type Record = Trader;

    const ALL: &'static [Self] = &[
        Self::Rank,
        Self::Followers,
        Self::Tokens,
        Self::WinRate,
        Self::AvgBuy,
        Self::AvgEntry,
        Self::RealizedPnl,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Followers => "followers",
            Self::Tokens => "tokens",
            Self::WinRate => "winRate",
            Self::AvgBuy => "avgBuy",
            Self::AvgEntry => "avgEntry",
            Self::RealizedPnl => "realizedPNL",
        }
    }

    fn value(self, trader: &Trader) -> f64 {
        match self {
            Self::Rank => trader.rank as f64,
            Self::Followers => trader.followers as f64,
            Self::Tokens => trader.tokens as f64,
            Self::WinRate => trader.trades.win_rate(),
            Self::AvgBuy => trader.avg_buy,
            Self::AvgEntry => trader.avg_entry,
            Self::RealizedPnl => trader.realized_pnl,
        }
    }
}

/// Trade history filter fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeField {
    MarketCap,
    Invested,
    Holding,
    AvgBuy,
    AvgSell,
    Roi,
    LastTrade,
    Held,
    RealizedPnl,
    WinRate,
    PnlPercentage,
}

impl FilterField for TradeField {
    type Record = Trade;

    const ALL: &'static [Self] = &[
        Self::MarketCap,
        Self::Invested,
        Self::Holding,
        Self::AvgBuy,
        Self::AvgSell,
        Self::Roi,
        Self::LastTrade,
        Self::Held,
        Self::RealizedPnl,
        Self::WinRate,
        Self::PnlPercentage,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::MarketCap => "marketCap",
            Self::Invested => "invested",
            Self::Holding => "holding",
            Self::AvgBuy => "avgBuy",
            Self::AvgSell => "avgSell",
            Self::Roi => "roi",
            Self::LastTrade => "lastTrade",
            Self::Held => "held",
            Self::RealizedPnl => "realizedPNL",
            Self::WinRate => "winRate",
            Self::PnlPercentage => "pnlPercentage",
        }
    }

    fn value(self, trade: &Trade) -> f64 {
        match self {
            Self::MarketCap => trade.market_cap,
            Self::Invested => trade.invested,
            Self::Holding => trade.holding,
            Self::AvgBuy => trade.avg_buy,
            Self::AvgSell => trade.avg_sell,
            Self::Roi => trade.roi,
            Self::LastTrade => parse_leading_int(&trade.last_trade),
            Self::Held => parse_leading_int(&trade.held),
            Self::RealizedPnl => trade.realized_pnl.value,
            Self::WinRate => trade.trades.win_rate(),
            Self::PnlPercentage => trade.realized_pnl.percentage,
        }
    }
}
