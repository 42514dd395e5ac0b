use rand::Rng;
use rand::seq::SliceRandom;

use super::{avatar_url, base58_address, round2};
use crate::domain::types::{RealizedPnl, TokenInfo, Trade, TradeStats};

const TOKEN_NAMES: &[&str] = &[
    "BONK", "WIF", "POPCAT", "MEW", "BOME", "SLERF", "MYRO", "PONKE", "GIGA", "MOODENG", "PNUT",
    "FWOG", "RETARDIO", "MICHI", "SC",
];

/// Solana mint addresses are 43-44 base58 characters
const TOKEN_ADDRESS_LEN: usize = 44;

pub(super) fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Trade> {
    (0..count).map(|_| trade(rng)).collect()
}

fn trade<R: Rng + ?Sized>(rng: &mut R) -> Trade {
    let name = TOKEN_NAMES.choose(rng).copied().unwrap_or("BONK").to_string();
    let address = base58_address(rng, TOKEN_ADDRESS_LEN);
    let invested = round2(rng.gen_range(0.1..100.0));
    let pnl_value = round2(rng.gen_range(-50.0..150.0));
    let total = rng.gen_range(1..50);
    let won = rng.gen_range(0..=total);

    Trade {
        token: TokenInfo {
            avatar: avatar_url("identicon", &address),
            name,
            address,
        },
        last_trade: format!("{} min", rng.gen_range(1..1_440)),
        market_cap: round2(rng.gen_range(10_000.0..50_000_000.0)),
        invested,
        realized_pnl: RealizedPnl {
            value: pnl_value,
            percentage: round2(pnl_value / invested * 100.0),
        },
        roi: round2(rng.gen_range(-100.0..500.0)),
        trades: TradeStats { won, total },
        holding: round2(rng.gen_range(0.0..1_000_000.0)),
        avg_buy: round2(rng.gen_range(0.01..10.0)),
        avg_sell: round2(rng.gen_range(0.01..10.0)),
        held: format!("{} min", rng.gen_range(1..10_080)),
    }
}
