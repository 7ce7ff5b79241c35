use chrono::NaiveDate;

use super::calculator::{Calculator, Tracker};
use super::record::today;

pub const ENOUGH_EATING: &str = "Хватит есть!";

/// Tracks consumed calories against a daily limit.
#[derive(Debug, Clone, Default)]
pub struct CaloriesTracker {
    inner: Tracker,
}

impl CaloriesTracker {
    pub fn new(limit: i64) -> Self {
        Self {
            inner: Tracker::new(limit),
        }
    }

    pub fn get_calories_remained(&self) -> String {
        self.get_calories_remained_on(today())
    }

    pub fn get_calories_remained_on(&self, reference: NaiveDate) -> String {
        let remained = self.inner.remained_on(reference);
        tracing::debug!(remained, "calories remained");
        if remained > 0 {
            format!(
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {remained} кКал"
            )
        } else {
            ENOUGH_EATING.to_string()
        }
    }
}

impl Calculator for CaloriesTracker {
    fn tracker(&self) -> &Tracker {
        &self.inner
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.inner
    }
}
