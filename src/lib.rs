//! MedAlarm core: patients, medicines, dosing intervals, and the
//! asynchronous gateway to the patients document store.
//!
//! The UI shell (screens, dialogs, reminder delivery) lives elsewhere and
//! talks to this crate through [`PatientDirectory`], [`MedicineForm`], and
//! [`IntervalSelector`], with a [`PatientsGateway`] implementation injected
//! for persistence.

pub mod config;
pub mod gateway;
pub mod interval;
pub mod medicines;
pub mod models;
pub mod patients;

use tracing_subscriber::EnvFilter;

pub use config::IntervalPickerConfig;
pub use gateway::{GatewayError, MemoryGateway, PatientsGateway};
pub use interval::{DosesInterval, IntervalSelector};
pub use medicines::{MedicineForm, SubmitMedicineError};
pub use models::{
    DosesUnit, Medicine, MedicineBuilder, ModelError, Patient, ReminderMode,
};
pub use patients::{AddPatientError, PatientDirectory};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, falling back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
