use chrono::{Datelike, Duration, NaiveDate};

use super::record::{today, Record};

/// Length of the trailing window used by week stats, in days.
pub const DAYS_IN_WEEK: i64 = 7;

/// Append-only store of records measured against a fixed limit.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    limit: i64,
    records: Vec<Record>,
}

impl Tracker {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            records: Vec::new(),
        }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "appending record"
        );
        self.records.push(record);
    }

    /// Sums records sharing `reference`'s day of month.
    ///
    /// Only the day number is compared, so a record from another month or
    /// year that falls on the same day number is counted as well. Week stats
    /// compare full dates.
    pub fn today_stats_on(&self, reference: NaiveDate) -> i64 {
        let day = reference.day();
        self.records
            .iter()
            .filter(|record| record.date().day() == day)
            .map(Record::amount)
            .fold(0, i64::saturating_add)
    }

    /// Sums records dated within `[reference - 7 days, reference]`.
    pub fn week_stats_on(&self, reference: NaiveDate) -> i64 {
        let week_ago = reference - Duration::days(DAYS_IN_WEEK);
        self.records
            .iter()
            .filter(|record| (week_ago..=reference).contains(&record.date()))
            .map(Record::amount)
            .fold(0, i64::saturating_add)
    }

    pub fn remained_on(&self, reference: NaiveDate) -> i64 {
        self.limit.saturating_sub(self.today_stats_on(reference))
    }
}

/// Shared aggregation surface of every tracker flavour.
pub trait Calculator {
    fn tracker(&self) -> &Tracker;
    fn tracker_mut(&mut self) -> &mut Tracker;

    fn limit(&self) -> i64 {
        self.tracker().limit()
    }

    fn add_record(&mut self, record: Record) {
        self.tracker_mut().add_record(record);
    }

    fn get_today_stats(&self) -> i64 {
        self.tracker().today_stats_on(today())
    }

    fn get_week_stats(&self) -> i64 {
        self.tracker().week_stats_on(today())
    }

    /// Limit minus today's total; negative once over budget.
    fn get_remained(&self) -> i64 {
        self.tracker().remained_on(today())
    }
}

impl Calculator for Tracker {
    fn tracker(&self) -> &Tracker {
        self
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        self
    }
}
