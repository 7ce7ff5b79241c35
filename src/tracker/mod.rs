//! Record storage and the calorie and cash trackers built on top of it.

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod record;

pub use calculator::{Calculator, Tracker, DAYS_IN_WEEK};
pub use calories::{CaloriesTracker, ENOUGH_EATING};
pub use cash::{CashTracker, NO_MONEY};
pub use record::{parse_date, Record, DATE_FORMAT};
