use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::errors::Result;
use crate::tracker::{CaloriesTracker, CashTracker};

pub const DEFAULT_CALORIE_LIMIT: i64 = 2000;
pub const DEFAULT_CASH_LIMIT: i64 = 1000;

/// Limits and display currency used to seed new trackers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub calorie_limit: i64,
    pub cash_limit: i64,
    pub currency: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            calorie_limit: DEFAULT_CALORIE_LIMIT,
            cash_limit: DEFAULT_CASH_LIMIT,
            currency: Currency::Rub.code().into(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Reads a JSON config, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn currency(&self) -> Result<Currency> {
        self.currency.parse()
    }

    pub fn calories_tracker(&self) -> CaloriesTracker {
        CaloriesTracker::new(self.calorie_limit)
    }

    pub fn cash_tracker(&self) -> CashTracker {
        CashTracker::new(self.cash_limit)
    }
}
