use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

pub const EURO_RATE: f64 = 70.0;
pub const USD_RATE: f64 = 60.0;
pub const RUB_RATE: f64 = 1.0;

/// Currencies understood by the cash tracker. Rates convert from rubles,
/// the tracker's native unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Eur,
    Usd,
    Rub,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Rub];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "eur",
            Currency::Usd => "usd",
            Currency::Rub => "rub",
        }
    }

    /// Label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Eur => "Euro",
            Currency::Usd => "USD",
            Currency::Rub => "руб",
        }
    }

    pub fn rate(self) -> f64 {
        match self {
            Currency::Eur => EURO_RATE,
            Currency::Usd => USD_RATE,
            Currency::Rub => RUB_RATE,
        }
    }

    /// Converts an amount in the native unit into this currency.
    pub fn convert(self, native_amount: i64) -> f64 {
        native_amount as f64 / self.rate()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| {
                tracing::warn!(code = s, "unknown currency requested");
                TrackerError::UnknownCurrency(s.to_string())
            })
    }
}
