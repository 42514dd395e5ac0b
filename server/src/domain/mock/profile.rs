use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;

use super::{avatar_url, handle, hex_address, round2, trade_stats};
use crate::domain::types::{LastTrade, RealizedPnl, TokenSummary, TradeSide, TraderProfile};

pub(super) fn generate<R: Rng + ?Sized>(rng: &mut R) -> TraderProfile {
    let address = hex_address(rng);
    let trades = trade_stats(rng);
    let minutes_ago = rng.gen_range(1..1_440);
    let side = if rng.gen_bool(0.5) {
        TradeSide::Buy
    } else {
        TradeSide::Sell
    };
    let pnl_value = round2(rng.gen_range(-50.0..150.0));
    let total_invested = round2(rng.gen_range(10.0..1_000.0));

    TraderProfile {
        name: format!("Trader {}", rng.gen_range(1..100)),
        avatar: avatar_url("avataaars", &address),
        address,
        handle: handle(rng),
        followers: rng.gen_range(100..50_000),
        last_trade: LastTrade {
            time: (Utc::now() - Duration::minutes(minutes_ago))
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            side,
        },
        tokens: TokenSummary {
            count: rng.gen_range(5..200),
            avg_price: round2(rng.gen_range(0.5..15.5)),
        },
        win_rate: trades.win_rate() as u32,
        trades,
        avg_entry: round2(rng.gen_range(0.8..20.8)),
        avg_hold: format!("{} minutes", rng.gen_range(5..20_165)),
        realized_pnl: RealizedPnl {
            value: pnl_value,
            percentage: round2(pnl_value / total_invested * 100.0),
        },
        total_invested,
        roi: round2(rng.gen_range(0.0..300.0)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_profile_fields_are_consistent() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let p = generate(&mut rng);
            assert!(p.trades.won <= p.trades.total);
            assert_eq!(p.win_rate as f64, p.trades.win_rate());
            assert!(p.total_invested >= 10.0);
            assert!(p.roi >= 0.0);
            assert!(DateTime::parse_from_rfc3339(&p.last_trade.time).is_ok());
            assert!(p.handle.starts_with('@'));
        }
    }
}
