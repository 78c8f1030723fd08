use crate::error::LifecycleError;
use chrono::{DateTime, Utc};
use digiurban_domain::ModuleType;
use digiurban_store::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw field bag submitted with a protocol, keyed by form field name.
pub type FormData = Map<String, Value>;

/// A department record linked to a protocol and a citizen.
///
/// Lifecycle attributes are typed; kind-specific values are flattened next to them, so the
/// serialized form is the flat record stored by the [`EntityStore`](digiurban_store::EntityStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEntity {
    pub id: String,
    pub module_type: ModuleType,
    pub protocol_id: String,
    pub citizen_id: String,
    pub status: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DepartmentEntity {
    /// Decodes a stored record.
    ///
    /// # Errors
    /// [`LifecycleError::Decode`] when lifecycle attributes are missing or mistyped.
    pub fn from_record(record: Record) -> Result<Self, LifecycleError> {
        Ok(serde_json::from_value(Value::Object(record))?)
    }

    /// Encodes the entity into its flat stored form.
    ///
    /// # Errors
    /// [`LifecycleError::Internal`] if serialization does not produce an object.
    pub fn to_record(&self) -> Result<Record, LifecycleError> {
        match serde_json::to_value(self)? {
            Value::Object(record) => Ok(record),
            _ => Err("entity did not serialize to an object".into()),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
