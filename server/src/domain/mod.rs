//! Domain logic for the trader leaderboard
//!
//! - `filters` - min/max range filters parsed from query parameters
//! - `mock` - random trader, profile and trade generation
//! - `types` - record shapes served by the API

pub mod filters;
pub mod mock;
pub mod types;

pub use mock::MockDataService;
