//! Min/max range filters built from query parameters

use super::coerce::coerce_number;
use super::fields::FilterField;

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid bound for {param}: '{value}' is not a number")]
    InvalidBound { param: String, value: String },
}

/// Raw `<field>_min` / `<field>_max` query pairs in request order
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pairs: Vec<(String, String)>,
}

impl FilterParams {
    /// Keeps every bound-shaped pair; other keys never reach the filters
    pub fn new(mut pairs: Vec<(String, String)>) -> Self {
        pairs.retain(|(k, _)| k.ends_with("_min") || k.ends_with("_max"));
        Self { pairs }
    }

    /// First value for `key`, as `URLSearchParams::get` would return it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Vec<(String, String)>> for FilterParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// A present (non-empty) bound and its coerced value
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub raw: String,
    pub value: f64,
}

impl Bound {
    /// Empty strings count as "no bound"
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            value: coerce_number(raw),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RangeFilter<F> {
    pub field: F,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

impl<F: FilterField> RangeFilter<F> {
    /// `min <= value` and `value <= max` for whichever bounds are present.
    /// NaN on either side fails the comparison.
    pub fn matches(&self, record: &F::Record) -> bool {
        let value = self.field.value(record);
        let above_min = self.min.as_ref().is_none_or(|b| value >= b.value);
        let below_max = self.max.as_ref().is_none_or(|b| value <= b.value);
        above_min && below_max
    }

    fn bounds(&self) -> impl Iterator<Item = (&'static str, &Bound)> {
        self.min
            .iter()
            .map(|b| ("min", b))
            .chain(self.max.iter().map(|b| ("max", b)))
    }
}

/// Build one filter per known field that has at least one present bound.
///
/// Keys that do not name a field of `F` are ignored.
pub fn parse_range_filters<F: FilterField>(params: &FilterParams) -> Vec<RangeFilter<F>> {
    F::ALL
        .iter()
        .filter_map(|&field| {
            let min = params
                .get(&format!("{}_min", field.name()))
                .and_then(Bound::parse);
            let max = params
                .get(&format!("{}_max", field.name()))
                .and_then(Bound::parse);
            if min.is_none() && max.is_none() {
                return None;
            }
            Some(RangeFilter { field, min, max })
        })
        .collect()
}

/// Reject bounds that did not coerce to a number
pub fn validate_bounds<F: FilterField>(filters: &[RangeFilter<F>]) -> Result<(), FilterError> {
    for filter in filters {
        for (suffix, bound) in filter.bounds() {
            if bound.value.is_nan() {
                return Err(FilterError::InvalidBound {
                    param: format!("{}_{}", filter.field.name(), suffix),
                    value: bound.raw.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Apply filters one after another; a record survives only if every filter matches
pub fn apply_filters<F: FilterField>(
    mut records: Vec<F::Record>,
    filters: &[RangeFilter<F>],
) -> Vec<F::Record> {
    for filter in filters {
        let before = records.len();
        records.retain(|r| filter.matches(r));
        tracing::debug!(
            field = filter.field.name(),
            min = filter.min.as_ref().map(|b| b.raw.as_str()),
            max = filter.max.as_ref().map(|b| b.raw.as_str()),
            before,
            after = records.len(),
            "Applied range filter"
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::fields::{TradeField, TraderField};
    use crate::domain::types::{RealizedPnl, TokenInfo, Trade, TradeStats, Trader};

    fn params(pairs: &[(&str, &str)]) -> FilterParams {
        FilterParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_params_ignore_unrelated_keys_in_any_number() {
        let mut pairs: Vec<(String, String)> =
            (0..300).map(|i| (format!("junk{}", i), "1".to_string())).collect();
        pairs.push(("rank_max".to_string(), "3".to_string()));
        let params = FilterParams::new(pairs);

        assert_eq!(params.get("rank_max"), Some("3"));
        assert_eq!(params.get("junk0"), None);
        assert_eq!(parse_range_filters::<TraderField>(&params).len(), 1);
    }

    fn trader(rank: u32, followers: u32, won: u32, total: u32, pnl: f64) -> Trader {
        Trader {
            rank,
            name: format!("Trader {}", rank),
            address: format!("0x{:040x}", rank),
            avatar: String::new(),
            followers,
            handle: "@degen1".to_string(),
            tokens: 10,
            win_rate: TradeStats { won, total }.win_rate() as u32,
            trades: TradeStats { won, total },
            avg_buy: 1.0,
            avg_entry: 2.0,
            avg_hold: "60 minutes".to_string(),
            realized_pnl: pnl,
        }
    }

    fn trade(last_trade: &str, held: &str, won: u32, total: u32) -> Trade {
        Trade {
            token: TokenInfo {
                name: "WIF".to_string(),
                address: "Wif111".to_string(),
                avatar: String::new(),
            },
            last_trade: last_trade.to_string(),
            market_cap: 5_000.0,
            invested: 1.0,
            realized_pnl: RealizedPnl {
                value: 1.0,
                percentage: 10.0,
            },
            roi: 10.0,
            trades: TradeStats { won, total },
            holding: 1.0,
            avg_buy: 1.0,
            avg_sell: 1.0,
            held: held.to_string(),
        }
    }

    fn sample_traders() -> Vec<Trader> {
        vec![
            trader(1, 100, 50, 100, 10.0),
            trader(2, 5_000, 90, 100, -20.0),
            trader(3, 20_000, 10, 100, 150.0),
            trader(4, 49_999, 75, 100, 0.0),
        ]
    }

    fn ranks(traders: &[Trader]) -> Vec<u32> {
        traders.iter().map(|t| t.rank).collect()
    }

    #[test]
    fn test_params_get_returns_first_occurrence() {
        let p = params(&[("rank_min", "2"), ("rank_min", "3")]);
        assert_eq!(p.get("rank_min"), Some("2"));
        assert_eq!(p.get("rank_max"), None);
    }

    #[test]
    fn test_parse_skips_fields_without_bounds() {
        let p = params(&[("rank_min", "2"), ("followers_max", "100")]);
        let filters = parse_range_filters::<TraderField>(&p);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].field, TraderField::Rank);
        assert_eq!(filters[0].min.as_ref().unwrap().value, 2.0);
        assert!(filters[0].max.is_none());
        assert_eq!(filters[1].field, TraderField::Followers);
    }

    #[test]
    fn test_parse_empty_bound_is_absent() {
        let p = params(&[("rank_min", ""), ("rank_max", "")]);
        assert!(parse_range_filters::<TraderField>(&p).is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let p = params(&[("handle_min", "1"), ("rank", "3"), ("page", "2")]);
        assert!(parse_range_filters::<TraderField>(&p).is_empty());
    }

    #[test]
    fn test_inclusive_range() {
        let p = params(&[("rank_min", "2"), ("rank_max", "3")]);
        let filters = parse_range_filters::<TraderField>(&p);
        let out = apply_filters(sample_traders(), &filters);
        assert_eq!(ranks(&out), vec![2, 3]);
    }

    #[test]
    fn test_min_only_and_max_only() {
        let p = params(&[("followers_min", "5000")]);
        let out = apply_filters(
            sample_traders(),
            &parse_range_filters::<TraderField>(&p),
        );
        assert_eq!(ranks(&out), vec![2, 3, 4]);

        let p = params(&[("realizedPNL_max", "0")]);
        let out = apply_filters(
            sample_traders(),
            &parse_range_filters::<TraderField>(&p),
        );
        assert_eq!(ranks(&out), vec![2, 4]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let p = params(&[("followers_min", "1000"), ("winRate_min", "70")]);
        let out = apply_filters(
            sample_traders(),
            &parse_range_filters::<TraderField>(&p),
        );
        assert_eq!(ranks(&out), vec![2, 4]);
    }

    #[test]
    fn test_no_bounds_keeps_everything() {
        let out = apply_filters(
            sample_traders(),
            &parse_range_filters::<TraderField>(&params(&[])),
        );
        assert_eq!(out, sample_traders());
    }

    #[test]
    fn test_unknown_params_do_not_change_result() {
        let base = params(&[("rank_max", "3")]);
        let noisy = params(&[("rank_max", "3"), ("name_min", "z"), ("foo", "bar")]);
        let a = apply_filters(sample_traders(), &parse_range_filters::<TraderField>(&base));
        let b = apply_filters(
            sample_traders(),
            &parse_range_filters::<TraderField>(&noisy),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_bound_excludes_all() {
        let p = params(&[("rank_min", "abc")]);
        let filters = parse_range_filters::<TraderField>(&p);
        assert_eq!(filters.len(), 1);
        assert!(apply_filters(sample_traders(), &filters).is_empty());
    }

    #[test]
    fn test_validate_bounds_reports_param() {
        let p = params(&[("rank_min", "1"), ("avgBuy_max", "lots")]);
        let filters = parse_range_filters::<TraderField>(&p);
        let err = validate_bounds(&filters).unwrap_err();
        match err {
            FilterError::InvalidBound { param, value } => {
                assert_eq!(param, "avgBuy_max");
                assert_eq!(value, "lots");
            }
        }

        let ok = parse_range_filters::<TraderField>(&params(&[("rank_min", " 2 ")]));
        assert!(validate_bounds(&ok).is_ok());
    }

    #[test]
    fn test_trade_duration_filter() {
        let trades = vec![
            trade("45 min", "10 min", 1, 2),
            trade("90 min", "600 min", 1, 2),
            trade("bad", "30 min", 1, 2),
        ];
        let p = params(&[("lastTrade_min", "30"), ("lastTrade_max", "60")]);
        let out = apply_filters(trades.clone(), &parse_range_filters::<TradeField>(&p));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].last_trade, "45 min");

        let p = params(&[("held_max", "100")]);
        let out = apply_filters(trades, &parse_range_filters::<TradeField>(&p));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_trade_win_rate_is_rounded_derivation() {
        // 2/3 -> 66.67 -> 67, 1/3 -> 33.33 -> 33
        let trades = vec![trade("1 min", "1 min", 2, 3), trade("1 min", "1 min", 1, 3)];
        let p = params(&[("winRate_min", "67")]);
        let out = apply_filters(trades.clone(), &parse_range_filters::<TradeField>(&p));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].trades.won, 2);

        let p = params(&[("winRate_max", "33")]);
        let out = apply_filters(trades, &parse_range_filters::<TradeField>(&p));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].trades.won, 1);
    }
}
