//! # Traderboard
//!
//! Client for the Traderboard leaderboard API.
//!
//! - [`query`]: min/max filter values and their query string form
//! - [`client`]: typed fetches for traders, profiles and trades
//! - [`view`]: loading/error/data state that ignores superseded responses
//! - [`table`]: sorting, fuzzy global search and pagination
//! - [`format`]: money, duration and address formatting for cells
//!
//! ```no_run
//! use traderboard::{BoundKind, FilterValues, Table, TraderboardClient, trader_columns};
//!
//! # async fn run() -> Result<(), traderboard::ClientError> {
//! let client = TraderboardClient::new("http://127.0.0.1:5390")?;
//!
//! let mut filters = FilterValues::traders();
//! filters.set("winRate", BoundKind::Min, "60");
//! let traders = client.fetch_traders(&filters).await?;
//!
//! let mut table = Table::new(trader_columns());
//! table.set_global_filter("whale");
//! for trader in table.row_model(&traders).page_rows {
//!     println!("{} {}", trader.rank, trader.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
mod error;
pub mod format;
pub mod query;
pub mod table;
pub mod types;
pub mod view;

pub use client::TraderboardClient;
pub use error::{ClientError, Resource};
pub use query::{BoundKind, FilterValues, RangeInput};
pub use table::{ColumnSort, SortDirection, Table, trade_columns, trader_columns};
pub use types::{Trade, Trader, TraderProfile};
pub use view::{FetchOutcome, ViewState, fetch_into};
