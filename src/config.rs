use std::ops::RangeInclusive;

use crate::models::DosesUnit;

/// Application-level constants
pub const APP_NAME: &str = "MedAlarm";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Picker ranges for the doses-interval dialog.
///
/// The valid magnitude range depends on the selected unit; the minutes
/// picker applies only to the hours unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalPickerConfig {
    pub hours: RangeInclusive<u32>,
    pub minutes: RangeInclusive<u32>,
    pub days: RangeInclusive<u32>,
    pub weeks: RangeInclusive<u32>,
    pub months: RangeInclusive<u32>,
}

impl Default for IntervalPickerConfig {
    fn default() -> Self {
        Self {
            hours: 0..=23,
            minutes: 0..=59,
            days: 1..=31,
            weeks: 1..=20,
            months: 1..=12,
        }
    }
}

impl IntervalPickerConfig {
    /// Magnitude range for one unit.
    pub fn magnitude_range(&self, unit: DosesUnit) -> RangeInclusive<u32> {
        match unit {
            DosesUnit::Hours => self.hours.clone(),
            DosesUnit::Days => self.days.clone(),
            DosesUnit::Weeks => self.weeks.clone(),
            DosesUnit::Months => self.months.clone(),
        }
    }

    /// Minutes range (hours unit only).
    pub fn minutes_range(&self) -> RangeInclusive<u32> {
        self.minutes.clone()
    }
}
