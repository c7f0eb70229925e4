//! Data model: patients, medicines, and their string-mapped enums.

pub mod enums;
pub mod medicine;
pub mod patient;

pub use enums::*;
pub use medicine::{Medicine, MedicineBuilder};
pub use patient::Patient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Medicine name must not be empty")]
    EmptyName,

    #[error("End date and end time must be set together")]
    PartialEndSchedule,

    #[error("Invalid doses interval: {0}")]
    InvalidInterval(String),

    #[error("Failed to serialize record: {0}")]
    Serialization(serde_json::Error),

    #[error("Failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
}
