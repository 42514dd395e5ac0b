//! Traderboard server: mock leaderboard API with numeric range filters

pub mod api;
pub mod core;
pub mod domain;
pub mod utils;

mod app;
