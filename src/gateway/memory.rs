//! In-memory document store implementing [`PatientsGateway`].
//!
//! Mirrors the layout of the remote store: three top-level nodes —
//! `patients`, `medicines`, and the `patient-medicines` index — all keyed
//! by store-generated opaque strings. Used as the test double and as a
//! standalone backend for offline runs.
//!
//! Write fault injection (`fail_writes_after`) makes the non-atomic
//! two-write save_medicine sequence observable: failing the second write
//! leaves the index entry behind with no flat-collection counterpart.

use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use super::{GatewayError, PatientsGateway};
use crate::models::{Medicine, Patient};

#[derive(Debug, Default)]
struct Store {
    patients: HashMap<String, Patient>,
    medicines: HashMap<String, Medicine>,
    patient_medicines: HashMap<String, HashMap<String, Medicine>>,
    /// Remaining writes before injected failure; `None` disables injection.
    writes_left: Option<u32>,
}

impl Store {
    /// Consumes one unit of write budget, failing once it is exhausted.
    fn check_write(&mut self) -> Result<(), GatewayError> {
        match self.writes_left {
            None => Ok(()),
            Some(0) => Err(GatewayError::new("simulated store write failure")),
            Some(ref mut n) => {
                *n -= 1;
                Ok(())
            }
        }
    }
}

/// In-memory [`PatientsGateway`].
#[derive(Debug, Default)]
pub struct MemoryGateway {
    store: Mutex<Store>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// After `successes` more node writes, every further write fails with
    /// an opaque store error. Reads are unaffected.
    pub async fn fail_writes_after(&self, successes: u32) {
        self.store.lock().await.writes_left = Some(successes);
    }

    /// Lifts any injected write failure.
    pub async fn clear_write_failures(&self) {
        self.store.lock().await.writes_left = None;
    }

    // ── Test/diagnostic inspection ──────────────────────────

    pub async fn patient_count(&self) -> usize {
        self.store.lock().await.patients.len()
    }

    /// Medicines in the flat collection.
    pub async fn medicines_count(&self) -> usize {
        self.store.lock().await.medicines.len()
    }

    /// Medicines in one patient's index node.
    pub async fn indexed_medicines(&self, patient_key: &str) -> Vec<Medicine> {
        self.store
            .lock()
            .await
            .patient_medicines
            .get(patient_key)
            .map(|node| node.values().cloned().collect())
            .unwrap_or_default()
    }
}

fn push_key() -> String {
    Uuid::new_v4().simple().to_string()
}

impl PatientsGateway for MemoryGateway {
    async fn get_patients(&self) -> Result<Vec<(String, Patient)>, GatewayError> {
        let store = self.store.lock().await;
        Ok(store
            .patients
            .iter()
            .map(|(key, patient)| (key.clone(), patient.clone()))
            .collect())
    }

    async fn save_patient(&self, patient: &Patient) -> Result<(String, Patient), GatewayError> {
        let mut store = self.store.lock().await;
        store.check_write()?;

        let key = push_key();
        store.patients.insert(key.clone(), patient.clone());
        Ok((key, patient.clone()))
    }

    async fn save_medicine(
        &self,
        patient_key: &str,
        medicine: &Medicine,
    ) -> Result<Medicine, GatewayError> {
        let mut store = self.store.lock().await;
        let key = push_key();

        // The index write carries no completion callback; its failure is
        // logged and never propagated. Only the flat-collection write
        // drives the result the caller sees.
        match store.check_write() {
            Ok(()) => {
                store
                    .patient_medicines
                    .entry(patient_key.to_string())
                    .or_default()
                    .insert(key.clone(), medicine.clone());
            }
            Err(error) => {
                tracing::warn!(%patient_key, %error, "medicine index write failed");
            }
        }

        // Flat-collection write: the one whose outcome the caller sees.
        store.check_write()?;
        store.medicines.insert(key, medicine.clone());
        Ok(medicine.clone())
    }
}
