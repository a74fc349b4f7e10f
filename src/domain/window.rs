use chrono::{Days, NaiveDate};

use crate::error::{AppError, AppResult};

const CUTOFF_FORMAT: &str = "%Y-%m-%d";

/// Number of whole calendar days to look back from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow(u32);

impl LookbackWindow {
    pub fn new(days: u32) -> AppResult<Self> {
        if days == 0 {
            return Err(AppError::Configuration(
                "lookback window must be at least one day".to_string(),
            ));
        }
        Ok(Self(days))
    }

    /// The first calendar day inside the window. Time of day is not part of it.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.0)))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn cutoff_string(&self, today: NaiveDate) -> String {
        self.cutoff(today).format(CUTOFF_FORMAT).to_string()
    }

    pub fn describe(&self) -> String {
        match self.0 {
            1 => "1 day".to_string(),
            days => format!("{days} days"),
        }
    }
}
