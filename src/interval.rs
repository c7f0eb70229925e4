//! Dosing intervals: the canonical descriptor and the three-picker
//! selection model behind the "select doses interval" dialog.
//!
//! A descriptor is the machine-readable form persisted with a medicine
//! (`"3:DAYS"`, `"1:30:HOURS"`); the label is the human-readable rendering
//! shown on the add/edit screen ("every 3 days", "every 1:30 hours").

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::IntervalPickerConfig;
use crate::models::{DosesUnit, ModelError};

// ═══════════════════════════════════════════════════════════
// DosesInterval — canonical descriptor
// ═══════════════════════════════════════════════════════════

/// Canonical (unit, magnitude[, minutes]) encoding of dosing frequency.
///
/// Minutes exist only for the hours unit; the other units carry a bare
/// magnitude. Serialized as the descriptor string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DosesInterval {
    Hours { hours: u32, minutes: u32 },
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl DosesInterval {
    pub fn unit(&self) -> DosesUnit {
        match self {
            Self::Hours { .. } => DosesUnit::Hours,
            Self::Days(_) => DosesUnit::Days,
            Self::Weeks(_) => DosesUnit::Weeks,
            Self::Months(_) => DosesUnit::Months,
        }
    }

    pub fn magnitude(&self) -> u32 {
        match self {
            Self::Hours { hours, .. } => *hours,
            Self::Days(n) | Self::Weeks(n) | Self::Months(n) => *n,
        }
    }

    /// Sub-value of the descriptor; only the hours unit has one.
    pub fn minutes(&self) -> Option<u32> {
        match self {
            Self::Hours { minutes, .. } => Some(*minutes),
            _ => None,
        }
    }

    /// Human-readable label for the add/edit screen.
    ///
    /// English templates; locale indirection stays in the UI layer.
    pub fn label(&self) -> String {
        match self {
            Self::Hours { hours, minutes } => format!("every {hours}:{minutes:02} hours"),
            Self::Days(n) => format!("every {n} day{}", plural(*n)),
            Self::Weeks(n) => format!("every {n} week{}", plural(*n)),
            Self::Months(n) => format!("every {n} month{}", plural(*n)),
        }
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for DosesInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours { hours, minutes } => {
                write!(f, "{hours}:{minutes:02}:{}", DosesUnit::Hours.as_str())
            }
            other => write!(f, "{}:{}", other.magnitude(), other.unit().as_str()),
        }
    }
}

impl FromStr for DosesInterval {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidInterval(s.to_string());
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [magnitude, unit] => {
                let magnitude: u32 = magnitude.parse().map_err(|_| invalid())?;
                match DosesUnit::from_str(unit).map_err(|_| invalid())? {
                    // The hours descriptor always carries minutes.
                    DosesUnit::Hours => Err(invalid()),
                    DosesUnit::Days => Ok(Self::Days(magnitude)),
                    DosesUnit::Weeks => Ok(Self::Weeks(magnitude)),
                    DosesUnit::Months => Ok(Self::Months(magnitude)),
                }
            }
            [hours, minutes, unit] => {
                if DosesUnit::from_str(unit).map_err(|_| invalid())? != DosesUnit::Hours {
                    return Err(invalid());
                }
                let hours: u32 = hours.parse().map_err(|_| invalid())?;
                let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
                if minutes > 59 {
                    return Err(invalid());
                }
                Ok(Self::Hours { hours, minutes })
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for DosesInterval {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DosesInterval> for String {
    fn from(interval: DosesInterval) -> Self {
        interval.to_string()
    }
}

// ═══════════════════════════════════════════════════════════
// IntervalSelector — three-picker dialog model
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    unit: DosesUnit,
    magnitude: u32,
    minutes: u32,
}

impl Selection {
    fn interval(&self) -> DosesInterval {
        match self.unit {
            DosesUnit::Hours => DosesInterval::Hours {
                hours: self.magnitude,
                minutes: self.minutes,
            },
            DosesUnit::Days => DosesInterval::Days(self.magnitude),
            DosesUnit::Weeks => DosesInterval::Weeks(self.magnitude),
            DosesUnit::Months => DosesInterval::Months(self.magnitude),
        }
    }
}

/// State of the doses-interval dialog: a magnitude picker, a minutes picker
/// shown only for hours, and a unit picker.
///
/// Edits accumulate in a pending selection. `confirm` commits it (the
/// dialog's positive button); `cancel` discards it, leaving the previously
/// confirmed interval untouched (the negative button).
#[derive(Debug, Clone)]
pub struct IntervalSelector {
    cfg: IntervalPickerConfig,
    pending: Selection,
    confirmed: Option<Selection>,
}

impl IntervalSelector {
    /// Opens on the hours unit with both pickers at their range minimum.
    pub fn new(cfg: IntervalPickerConfig) -> Self {
        let pending = Selection {
            unit: DosesUnit::Hours,
            magnitude: *cfg.magnitude_range(DosesUnit::Hours).start(),
            minutes: *cfg.minutes_range().start(),
        };
        Self {
            cfg,
            pending,
            confirmed: None,
        }
    }

    pub fn unit(&self) -> DosesUnit {
        self.pending.unit
    }

    pub fn magnitude(&self) -> u32 {
        self.pending.magnitude
    }

    pub fn minutes(&self) -> u32 {
        self.pending.minutes
    }

    /// Valid magnitude range for the currently selected unit.
    pub fn magnitude_range(&self) -> RangeInclusive<u32> {
        self.cfg.magnitude_range(self.pending.unit)
    }

    /// The minutes picker is shown only while the hours unit is selected.
    pub fn minutes_visible(&self) -> bool {
        self.pending.unit == DosesUnit::Hours
    }

    /// Switches the unit, resetting the magnitude to the new unit's range
    /// minimum. The previous magnitude is not preserved or rescaled.
    pub fn select_unit(&mut self, unit: DosesUnit) {
        if unit == self.pending.unit {
            return;
        }
        self.pending.unit = unit;
        self.pending.magnitude = *self.cfg.magnitude_range(unit).start();
    }

    /// Sets the magnitude, clamped into the active unit's range.
    pub fn set_magnitude(&mut self, magnitude: u32) {
        let range = self.magnitude_range();
        self.pending.magnitude = magnitude.clamp(*range.start(), *range.end());
    }

    /// Sets the minutes sub-value, clamped into its range. Retained but
    /// ignored while a non-hours unit is selected.
    pub fn set_minutes(&mut self, minutes: u32) {
        let range = self.cfg.minutes_range();
        self.pending.minutes = minutes.clamp(*range.start(), *range.end());
    }

    /// Commits the pending selection and returns the confirmed interval.
    pub fn confirm(&mut self) -> DosesInterval {
        self.confirmed = Some(self.pending);
        self.pending.interval()
    }

    /// Discards pending edits, restoring the last confirmed selection (or
    /// the initial state if nothing was ever confirmed).
    pub fn cancel(&mut self) {
        self.pending = match self.confirmed {
            Some(selection) => selection,
            None => Self::new(self.cfg.clone()).pending,
        };
    }

    /// The last confirmed interval, if any.
    pub fn confirmed(&self) -> Option<DosesInterval> {
        self.confirmed.map(|selection| selection.interval())
    }
}

impl Default for IntervalSelector {
    fn default() -> Self {
        Self::new(IntervalPickerConfig::default())
    }
}
