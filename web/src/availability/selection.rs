use chrono::NaiveDate;
use shared_types::DATE_FORMAT;

use crate::notify::{CarriedValue, HookError, HookResult};

/// Arrival and departure dates as typed into the dialog, `dd/mm/yyyy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    pub start_date: String,
    pub end_date: String,
}

impl DateRangeSelection {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Accepts blank selections (they resolve as an empty confirm) and
    /// well-formed ranges whose end is not before their start.
    pub fn validate(&self) -> HookResult {
        if self.is_blank() {
            return Ok(());
        }
        let start = parse_date(&self.start_date, "arrival")?;
        let end = parse_date(&self.end_date, "departure")?;
        if end < start {
            return Err(HookError::Invalid(
                "Departure date must not be before the arrival date".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_date(value: &str, which: &str) -> HookResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        HookError::Invalid(format!(
            "The {which} date must be written as dd/mm/yyyy, got \"{value}\""
        ))
    })
}

impl CarriedValue for DateRangeSelection {
    fn is_blank(&self) -> bool {
        self.start_date.trim().is_empty() || self.end_date.trim().is_empty()
    }

    fn from_confirm(_input: Option<String>) -> Self {
        Self::default()
    }
}
