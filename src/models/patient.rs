use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ModelError;

/// Immutable model for a patient.
///
/// Carries no key of its own: the store assigns an opaque key when the
/// patient is first saved (see [`crate::gateway::PatientsGateway`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: Option<String>,
    /// Opaque reference to an image resource.
    pub photo: Option<String>,
}

impl Patient {
    pub fn new(name: Option<String>, photo: Option<String>) -> Self {
        Self { name, photo }
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

    /// Rebuilds a patient from its wire map.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, ModelError> {
        serde_json::from_value(Value::Object(map)).map_err(ModelError::Deserialization)
    }
}
