use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ModelError, ReminderMode};
use crate::interval::DosesInterval;

/// Immutable model for a medicine prescription.
///
/// A medicine always belongs to one patient (by store key) and carries the
/// schedule needed to fire reminders: first dose date/time, the interval
/// between doses, and an optional last dose. A medicine with no end date
/// and no end time is chronic (open-ended).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    name: String,
    patient_key: String,
    start_date: NaiveDate,
    start_time: NaiveTime,
    doses_interval: DosesInterval,
    end_date: Option<NaiveDate>,
    end_time: Option<NaiveTime>,
    reminder: ReminderMode,
    /// Packed ARGB display color; -1 when the user never picked one.
    color: i32,
    has_photo: bool,
}

impl Medicine {
    /// Starts a builder from the required fields.
    ///
    /// Optional fields (end schedule, reminder mode, color, photo flag) are
    /// set through the fluent builder; [`MedicineBuilder::build`] validates
    /// the result.
    pub fn builder(
        name: impl Into<String>,
        patient_key: impl Into<String>,
        start_date: NaiveDate,
        start_time: NaiveTime,
        doses_interval: DosesInterval,
    ) -> MedicineBuilder {
        MedicineBuilder {
            name: name.into(),
            patient_key: patient_key.into(),
            start_date,
            start_time,
            doses_interval,
            end_date: None,
            end_time: None,
            reminder: ReminderMode::default(),
            color: -1,
            has_photo: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patient_key(&self) -> &str {
        &self.patient_key
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn doses_interval(&self) -> &DosesInterval {
        &self.doses_interval
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    pub fn reminder(&self) -> ReminderMode {
        self.reminder
    }

    pub fn color(&self) -> i32 {
        self.color
    }

    pub fn has_photo(&self) -> bool {
        self.has_photo
    }

    /// True when the schedule has no end: doses repeat indefinitely.
    pub fn is_chronic(&self) -> bool {
        self.end_date.is_none() && self.end_time.is_none()
    }

    /// Flat wire map of field names to primitive values, as stored by the
    /// document store.
    pub fn to_map(&self) -> Result<Map<String, Value>, ModelError> {
        match serde_json::to_value(self).map_err(ModelError::Serialization)? {
            Value::Object(map) => Ok(map),
            other => Err(ModelError::Serialization(serde::ser::Error::custom(
                format!("expected an object, got {other}"),
            ))),
        }
    }

    /// Rebuilds a medicine from its wire map, re-checking the construction
    /// invariants.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, ModelError> {
        let medicine: Self =
            serde_json::from_value(Value::Object(map)).map_err(ModelError::Deserialization)?;
        medicine.validate()?;
        Ok(medicine)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if self.end_date.is_some() != self.end_time.is_some() {
            return Err(ModelError::PartialEndSchedule);
        }
        Ok(())
    }
}

/// Fluent builder for [`Medicine`].
///
/// Each setter overwrites any previous value for that field and returns the
/// builder for chaining.
#[derive(Debug, Clone)]
pub struct MedicineBuilder {
    name: String,
    patient_key: String,
    start_date: NaiveDate,
    start_time: NaiveTime,
    doses_interval: DosesInterval,
    end_date: Option<NaiveDate>,
    end_time: Option<NaiveTime>,
    reminder: ReminderMode,
    color: i32,
    has_photo: bool,
}

impl MedicineBuilder {
    /// Date of the last dose. Leave unset for a chronic medicine.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Time of the last dose. Leave unset for a chronic medicine.
    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn reminder(mut self, reminder: ReminderMode) -> Self {
        self.reminder = reminder;
        self
    }

    pub fn color(mut self, color: i32) -> Self {
        self.color = color;
        self
    }

    pub fn photo(mut self, has_photo: bool) -> Self {
        self.has_photo = has_photo;
        self
    }

    /// Finalizes the medicine, failing fast on an empty name or an end
    /// date/time set without its counterpart.
    pub fn build(self) -> Result<Medicine, ModelError> {
        let medicine = Medicine {
            name: self.name,
            patient_key: self.patient_key,
            start_date: self.start_date,
            start_time: self.start_time,
            doses_interval: self.doses_interval,
            end_date: self.end_date,
            end_time: self.end_time,
            reminder: self.reminder,
            color: self.color,
            has_photo: self.has_photo,
        };
        medicine.validate()?;
        Ok(medicine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn ibuprofen() -> MedicineBuilder {
        Medicine::builder(
            "Ibuprofen",
            "patient-1",
            date(2017, 6, 2),
            time(8, 0),
            DosesInterval::Days(3),
        )
    }

    #[test]
    fn start_only_medicine_is_chronic() {
        let medicine = ibuprofen().build().unwrap();
        assert!(medicine.is_chronic());
        assert_eq!(medicine.end_date(), None);
        assert_eq!(medicine.end_time(), None);
    }

    #[test]
    fn full_end_schedule_is_not_chronic() {
        let medicine = ibuprofen()
            .end_date(date(2017, 6, 12))
            .end_time(time(20, 0))
            .build()
            .unwrap();
        assert!(!medicine.is_chronic());
    }

    #[test]
    fn dangling_end_date_is_rejected() {
        let err = ibuprofen().end_date(date(2017, 6, 12)).build().unwrap_err();
        assert!(matches!(err, ModelError::PartialEndSchedule));

        let err = ibuprofen().end_time(time(20, 0)).build().unwrap_err();
        assert!(matches!(err, ModelError::PartialEndSchedule));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Medicine::builder(
            "  ",
            "patient-1",
            date(2017, 6, 2),
            time(8, 0),
            DosesInterval::Days(3),
        )
        .build()
        .unwrap_err();
        assert!(matches!(err, ModelError::EmptyName));
    }

    #[test]
    fn setters_overwrite_previous_values() {
        let medicine = ibuprofen()
            .color(0x00ff0000)
            .color(0x0000ff00)
            .reminder(ReminderMode::Alarm)
            .reminder(ReminderMode::Notification)
            .build()
            .unwrap();
        assert_eq!(medicine.color(), 0x0000ff00);
        assert_eq!(medicine.reminder(), ReminderMode::Notification);
    }

    #[test]
    fn defaults_match_an_untouched_form() {
        let medicine = ibuprofen().build().unwrap();
        assert_eq!(medicine.reminder(), ReminderMode::Notification);
        assert_eq!(medicine.color(), -1);
        assert!(!medicine.has_photo());
    }

    #[test]
    fn map_round_trip() {
        let medicine = ibuprofen()
            .end_date(date(2017, 6, 12))
            .end_time(time(20, 0))
            .reminder(ReminderMode::Alarm)
            .color(0x00336699)
            .photo(true)
            .build()
            .unwrap();

        let map = medicine.to_map().unwrap();
        assert_eq!(map.get("name").unwrap(), "Ibuprofen");
        assert_eq!(map.get("doses_interval").unwrap(), "3:DAYS");
        assert_eq!(map.get("start_date").unwrap(), "2017-06-02");

        assert_eq!(Medicine::from_map(map).unwrap(), medicine);
    }

    #[test]
    fn from_map_rejects_partial_end_schedule() {
        let medicine = ibuprofen().build().unwrap();
        let mut map = medicine.to_map().unwrap();
        map.insert("end_date".into(), Value::String("2017-06-12".into()));

        let err = Medicine::from_map(map).unwrap_err();
        assert!(matches!(err, ModelError::PartialEndSchedule));
    }
}
