//! Asynchronous gateway to the patients document store.
//!
//! The store is an external collaborator: a remote document-oriented
//! key-value service that assigns opaque keys on insert. Every operation
//! resolves exactly once, either with its value or with a single opaque
//! failure description — the store exposes no richer error taxonomy, and
//! the gateway does not retry.
//!
//! A gateway handle is injected into whatever needs persistence (see
//! [`crate::patients::PatientDirectory`]); there is no process-wide
//! singleton accessor.

pub mod memory;

pub use memory::MemoryGateway;

use std::future::Future;

use thiserror::Error;

use crate::models::{Medicine, Patient};

/// Opaque failure description for a single gateway operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{description}")]
pub struct GatewayError {
    description: String,
}

impl GatewayError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Main entry point for accessing patients data.
///
/// Callers must not assume ordering between concurrent calls; each
/// operation is an independent single-shot request.
pub trait PatientsGateway {
    /// Fetches all patients with their store-assigned keys, in arbitrary
    /// order.
    fn get_patients(
        &self,
    ) -> impl Future<Output = Result<Vec<(String, Patient)>, GatewayError>> + Send;

    /// Saves a patient under a freshly generated key and echoes the saved
    /// patient back with it.
    fn save_patient(
        &self,
        patient: &Patient,
    ) -> impl Future<Output = Result<(String, Patient), GatewayError>> + Send;

    /// Saves a medicine under a freshly generated key, writing both the
    /// per-patient medicines index and the flat medicines collection.
    ///
    /// The two writes are independent: the index write reports nothing
    /// upstream, and only the flat-collection write drives the result, so
    /// a late failure can leave the index entry behind.
    fn save_medicine(
        &self,
        patient_key: &str,
        medicine: &Medicine,
    ) -> impl Future<Output = Result<Medicine, GatewayError>> + Send;
}

// A borrowed gateway handle works wherever an owned one does.
impl<G: PatientsGateway + Sync> PatientsGateway for &G {
    async fn get_patients(&self) -> Result<Vec<(String, Patient)>, GatewayError> {
        (**self).get_patients().await
    }

    async fn save_patient(&self, patient: &Patient) -> Result<(String, Patient), GatewayError> {
        (**self).save_patient(patient).await
    }

    async fn save_medicine(
        &self,
        patient_key: &str,
        medicine: &Medicine,
    ) -> Result<Medicine, GatewayError> {
        (**self).save_medicine(patient_key, medicine).await
    }
}
