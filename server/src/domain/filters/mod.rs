//! Range filter system
//!
//! Every filterable numeric field accepts `<field>_min` and `<field>_max`
//! query parameters. Bounds are inclusive, fields compose with AND, and keys
//! that do not name a field are ignored.
//!
//! ## Usage
//!
//! ```no_run
//! use traderboard_server::domain::filters::{FilterParams, TraderField, apply_filters, parse_range_filters};
//!
//! let params = FilterParams::new(vec![("rank_max".to_string(), "10".to_string())]);
//! let filters = parse_range_filters::<TraderField>(&params);
//! let top = apply_filters(Vec::new(), &filters);
//! # let _ = top;
//! ```

mod coerce;
mod fields;
mod range;

pub use coerce::{coerce_number, parse_leading_int};
pub use fields::{FilterField, TradeField, TraderField};
pub use range::{
    Bound, FilterError, FilterParams, RangeFilter, apply_filters, parse_range_filters,
    validate_bounds,
};
