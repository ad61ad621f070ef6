//! Daily exchange-rate streak analytics.
//!
//! Takes a batch of (currency, date, rate) observations and reports which
//! currencies show the strongest average gain across runs of consecutive
//! daily increases, alongside each currency's rank in the same computation
//! with the latest day excluded.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod report;
pub mod streaks;

pub use error::FxtrendError;
