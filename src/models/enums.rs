use crate::models::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ReminderMode {
    Notification => "notification",
    Alarm => "alarm",
});

// Unit tokens are uppercase: they appear verbatim in the canonical
// doses-interval descriptor ("3:DAYS", "1:30:HOURS").
str_enum!(DosesUnit {
    Hours => "HOURS",
    Days => "DAYS",
    Weeks => "WEEKS",
    Months => "MONTHS",
});

impl Default for ReminderMode {
    fn default() -> Self {
        Self::Notification
    }
}

impl ReminderMode {
    /// Integer code used by the legacy store (0 = notification, 1 = alarm).
    pub fn code(&self) -> i32 {
        match self {
            Self::Notification => 0,
            Self::Alarm => 1,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, ModelError> {
        match code {
            0 => Ok(Self::Notification),
            1 => Ok(Self::Alarm),
            _ => Err(ModelError::InvalidEnum {
                field: "ReminderMode".into(),
                value: code.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn reminder_mode_round_trip() {
        for (variant, s) in [
            (ReminderMode::Notification, "notification"),
            (ReminderMode::Alarm, "alarm"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ReminderMode::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn doses_unit_round_trip() {
        for (variant, s) in [
            (DosesUnit::Hours, "HOURS"),
            (DosesUnit::Days, "DAYS"),
            (DosesUnit::Weeks, "WEEKS"),
            (DosesUnit::Months, "MONTHS"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(DosesUnit::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn reminder_mode_legacy_codes() {
        assert_eq!(ReminderMode::Notification.code(), 0);
        assert_eq!(ReminderMode::Alarm.code(), 1);
        assert_eq!(ReminderMode::from_code(0).unwrap(), ReminderMode::Notification);
        assert_eq!(ReminderMode::from_code(1).unwrap(), ReminderMode::Alarm);
        assert!(ReminderMode::from_code(2).is_err());
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(ReminderMode::from_str("buzzer").is_err());
        assert!(DosesUnit::from_str("days").is_err());
        assert!(DosesUnit::from_str("").is_err());
    }

    #[test]
    fn default_reminder_is_notification() {
        assert_eq!(ReminderMode::default(), ReminderMode::Notification);
    }
}
