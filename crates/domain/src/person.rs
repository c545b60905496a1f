//! Person — a schema-less record identified by an integer `id`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::PersonId;

/// Name of the field holding the record identifier.
pub const ID_FIELD: &str = "id";

/// A single person record.
///
/// Besides `id`, any field a client sends is kept as-is. Field order is the
/// insertion order, so records round-trip through the store unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    fields: Map<String, Value>,
}

impl Person {
    /// Parse a request body into a record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJson`] when `body` is not valid JSON
    /// and [`ValidationError::NotAnObject`] when it is valid JSON of another
    /// shape.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body).map_err(ValidationError::InvalidJson)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ValidationError::NotAnObject),
        }
    }

    /// The record id, when the `id` field holds an integer.
    #[must_use]
    pub fn id(&self) -> Option<PersonId> {
        self.fields
            .get(ID_FIELD)
            .and_then(Value::as_i64)
            .map(PersonId::new)
    }

    /// Whether this record carries the given id.
    #[must_use]
    pub fn has_id(&self, id: PersonId) -> bool {
        self.id() == Some(id)
    }

    pub(crate) fn set_id(&mut self, id: PersonId) {
        self.fields.insert(ID_FIELD.to_string(), Value::from(id.get()));
    }

    /// Shallow-merge `patch` over this record.
    ///
    /// Fields present in `patch` overwrite existing ones, absent fields are
    /// retained. The patch's `id` is ignored: ids never change after creation.
    pub fn merge(&mut self, patch: Self) {
        for (key, value) in patch.fields {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
