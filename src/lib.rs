#![doc(test(attr(deny(warnings))))]

//! Daily Budget keeps dated records against a daily limit and reports what is
//! left, either as calories or as cash in one of a few fixed currencies.

pub mod config;
pub mod currency;
pub mod errors;
pub mod tracker;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use tracker::{Calculator, CaloriesTracker, CashTracker, Record, Tracker};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Budget tracing initialized.");
    });
}
