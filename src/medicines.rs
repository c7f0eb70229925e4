//! Add/edit medicine flow: accumulates the form state field by field and
//! submits it as one immutable [`Medicine`] through the gateway.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::gateway::{GatewayError, PatientsGateway};
use crate::interval::DosesInterval;
use crate::models::{Medicine, ModelError, ReminderMode};

#[derive(Error, Debug)]
pub enum SubmitMedicineError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Mutable form state for the add/edit medicine screen.
///
/// Fields mirror the form controls; everything stays optional until
/// [`MedicineForm::submit`], which reports the first missing required
/// field instead of building a half-filled record.
#[derive(Debug, Clone, Default)]
pub struct MedicineForm {
    pub patient_key: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    /// The interval confirmed in the doses-interval dialog.
    pub doses_interval: Option<DosesInterval>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub reminder: ReminderMode,
    pub color: Option<i32>,
    pub has_photo: bool,
}

impl MedicineForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the medicine from the form and saves it for its patient.
    pub async fn submit<G: PatientsGateway>(
        &self,
        gateway: &G,
    ) -> Result<Medicine, SubmitMedicineError> {
        let patient_key = self
            .patient_key
            .as_deref()
            .ok_or(SubmitMedicineError::MissingField("patient"))?;
        let name = self
            .name
            .as_deref()
            .ok_or(SubmitMedicineError::MissingField("name"))?;
        let start_date = self
            .start_date
            .ok_or(SubmitMedicineError::MissingField("start date"))?;
        let start_time = self
            .start_time
            .ok_or(SubmitMedicineError::MissingField("start time"))?;
        let doses_interval = self
            .doses_interval
            .ok_or(SubmitMedicineError::MissingField("doses interval"))?;

        let mut builder = Medicine::builder(name, patient_key, start_date, start_time, doses_interval)
            .reminder(self.reminder)
            .photo(self.has_photo);
        if let Some(end_date) = self.end_date {
            builder = builder.end_date(end_date);
        }
        if let Some(end_time) = self.end_time {
            builder = builder.end_time(end_time);
        }
        if let Some(color) = self.color {
            builder = builder.color(color);
        }
        let medicine = builder.build()?;

        match gateway.save_medicine(patient_key, &medicine).await {
            Ok(saved) => {
                tracing::info!(%patient_key, name = saved.name(), "medicine saved");
                Ok(saved)
            }
            Err(error) => {
                tracing::error!(%patient_key, %error, "failed to save medicine");
                Err(error.into())
            }
        }
    }
}
