//! Patient directory flows: listing patients and registering new ones.

use thiserror::Error;

use crate::gateway::{GatewayError, PatientsGateway};
use crate::models::Patient;

#[derive(Error, Debug)]
pub enum AddPatientError {
    /// The one validation surfaced inline to the user: a patient cannot be
    /// saved without a name. Checked locally, before any store call.
    #[error("Patient name is required")]
    NameRequired,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Patient operations against an injected store gateway.
pub struct PatientDirectory<G> {
    gateway: G,
}

impl<G: PatientsGateway> PatientDirectory<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetches all patients with their store keys, in arbitrary order.
    pub async fn load_patients(&self) -> Result<Vec<(String, Patient)>, GatewayError> {
        match self.gateway.get_patients().await {
            Ok(patients) => {
                tracing::debug!(count = patients.len(), "patients loaded");
                Ok(patients)
            }
            Err(error) => {
                tracing::error!(%error, "failed to load patients");
                Err(error)
            }
        }
    }

    /// Validates and saves a new patient, returning the generated key and
    /// the saved patient.
    pub async fn add_patient(
        &self,
        name: &str,
        photo: Option<String>,
    ) -> Result<(String, Patient), AddPatientError> {
        if name.trim().is_empty() {
            return Err(AddPatientError::NameRequired);
        }

        let patient = Patient::new(Some(name.trim().to_string()), photo);
        match self.gateway.save_patient(&patient).await {
            Ok((key, saved)) => {
                tracing::info!(%key, "patient saved");
                Ok((key, saved))
            }
            Err(error) => {
                tracing::error!(%error, "failed to save patient");
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemoryGateway;
    use crate::models::Medicine;

    #[tokio::test]
    async fn add_patient_trims_and_saves() {
        let directory = PatientDirectory::new(MemoryGateway::new());

        let (key, saved) = directory.add_patient("  Alba ", None).await.unwrap();
        assert!(!key.is_empty());
        assert_eq!(saved.name.as_deref(), Some("Alba"));

        let listed = directory.load_patients().await.unwrap();
        assert_eq!(listed, vec![(key, saved)]);
    }

    #[tokio::test]
    async fn blank_name_never_reaches_the_store() {
        let gateway = MemoryGateway::new();
        let directory = PatientDirectory::new(&gateway);

        for name in ["", "   "] {
            let err = directory.add_patient(name, None).await.unwrap_err();
            assert!(matches!(err, AddPatientError::NameRequired));
        }
        assert_eq!(gateway.patient_count().await, 0);
    }

    #[tokio::test]
    async fn store_failure_is_propagated() {
        let gateway = MemoryGateway::new();
        gateway.fail_writes_after(0).await;
        let directory = PatientDirectory::new(gateway);

        let err = directory.add_patient("Alba", None).await.unwrap_err();
        assert!(matches!(err, AddPatientError::Gateway(_)));
    }

    #[tokio::test]
    async fn load_failure_is_propagated() {
        struct DownGateway;

        impl PatientsGateway for DownGateway {
            async fn get_patients(&self) -> Result<Vec<(String, Patient)>, GatewayError> {
                Err(GatewayError::new("store unreachable"))
            }

            async fn save_patient(
                &self,
                _patient: &Patient,
            ) -> Result<(String, Patient), GatewayError> {
                Err(GatewayError::new("store unreachable"))
            }

            async fn save_medicine(
                &self,
                _patient_key: &str,
                _medicine: &Medicine,
            ) -> Result<Medicine, GatewayError> {
                Err(GatewayError::new("store unreachable"))
            }
        }

        let directory = PatientDirectory::new(DownGateway);
        let err = directory.load_patients().await.unwrap_err();
        assert_eq!(err.description(), "store unreachable");
    }
}
