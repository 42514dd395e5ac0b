use rand::Rng;

use super::{avatar_url, handle, hex_address, round2, trade_stats};
use crate::domain::types::Trader;

/// Hold times span 5 minutes to 14 days
const MAX_HOLD_MINUTES: u32 = 20_160;

pub(super) fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Trader> {
    (0..count).map(|i| trader(rng, i)).collect()
}

fn trader<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Trader {
    let trades = trade_stats(rng);
    let avg_buy = round2(rng.gen_range(0.5..15.5));
    let avg_entry = round2(rng.gen_range(0.8..20.8));
    let hold_minutes = rng.gen_range(5..MAX_HOLD_MINUTES + 5);
    let realized_pnl = round2(rng.gen_range(-50.0..150.0));
    let followers = rng.gen_range(100..50_000);
    let tokens = rng.gen_range(5..200);
    let address = hex_address(rng);
    let handle = handle(rng);
    let rank = index as u32 + 1;

    Trader {
        rank,
        name: format!("Trader {}", rank),
        address,
        avatar: avatar_url("avataaars", index),
        followers,
        handle,
        tokens,
        win_rate: trades.win_rate() as u32,
        trades,
        avg_buy,
        avg_entry,
        avg_hold: format!("{} minutes", hold_minutes),
        realized_pnl,
    }
}
