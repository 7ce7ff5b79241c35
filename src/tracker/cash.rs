use chrono::NaiveDate;

use super::calculator::{Calculator, Tracker};
use super::record::today;
use crate::currency::Currency;
use crate::errors::Result;

pub const NO_MONEY: &str = "Денег нет, держись";

/// Tracks spending in rubles and reports what is left in any known currency.
#[derive(Debug, Clone, Default)]
pub struct CashTracker {
    inner: Tracker,
}

impl CashTracker {
    pub fn new(limit: i64) -> Self {
        Self {
            inner: Tracker::new(limit),
        }
    }

    /// Reports today's balance in the currency named by `currency_code`.
    ///
    /// Fails with [`TrackerError::UnknownCurrency`](crate::errors::TrackerError::UnknownCurrency)
    /// for codes outside `eur`, `usd` and `rub`.
    pub fn get_today_cash_remained(&self, currency_code: &str) -> Result<String> {
        let currency = currency_code.parse()?;
        Ok(self.cash_remained_in(currency))
    }

    pub fn get_today_cash_remained_on(
        &self,
        currency_code: &str,
        reference: NaiveDate,
    ) -> Result<String> {
        let currency = currency_code.parse()?;
        Ok(self.cash_remained_in_on(currency, reference))
    }

    pub fn cash_remained_in(&self, currency: Currency) -> String {
        self.cash_remained_in_on(currency, today())
    }

    pub fn cash_remained_in_on(&self, currency: Currency, reference: NaiveDate) -> String {
        let converted = currency.convert(self.inner.remained_on(reference));
        tracing::debug!(%currency, converted, "cash remained");
        let label = currency.label();
        if converted > 0.0 {
            format!("На сегодня осталось {converted:.2} {label}")
        } else if converted < 0.0 {
            let debt = converted.abs();
            format!("{NO_MONEY}: твой долг - {debt:.2} {label}")
        } else {
            NO_MONEY.to_string()
        }
    }
}

impl Calculator for CashTracker {
    fn tracker(&self) -> &Tracker {
        &self.inner
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TrackerError;
    use crate::tracker::Record;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn reports_debt_in_rubles() {
        let mut tracker = CashTracker::new(1000);
        tracker.add_record(Record::on(1200, "rent", day(20)));
        assert_eq!(
            tracker.cash_remained_in_on(Currency::Rub, day(20)),
            "Денег нет, держись: твой долг - 200.00 руб"
        );
    }

    #[test]
    fn converts_remaining_to_dollars() {
        let tracker = CashTracker::new(1000);
        assert_eq!(
            tracker.get_today_cash_remained_on("usd", day(1)).unwrap(),
            "На сегодня осталось 16.67 USD"
        );
    }

    #[test]
    fn converts_debt_to_euro() {
        let mut tracker = CashTracker::new(0);
        tracker.add_record(Record::on(105, "taxi", day(5)));
        assert_eq!(
            tracker.cash_remained_in_on(Currency::Eur, day(5)),
            "Денег нет, держись: твой долг - 1.50 Euro"
        );
    }

    #[test]
    fn spent_exactly_the_limit() {
        let mut tracker = CashTracker::new(100);
        tracker.add_record(Record::on(100, "groceries", day(7)));
        for currency in Currency::ALL {
            assert_eq!(tracker.cash_remained_in_on(currency, day(7)), NO_MONEY);
        }
    }

    #[test]
    fn unknown_currency_is_an_error() {
        let tracker = CashTracker::new(100);
        assert!(matches!(
            tracker.get_today_cash_remained("gbp"),
            Err(TrackerError::UnknownCurrency(code)) if code == "gbp"
        ));
    }
}
