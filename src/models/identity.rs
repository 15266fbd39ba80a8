//! Identity snapshot value type.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppResult;

/// Denormalized identity snapshot embedded in records at write time.
///
/// This is a copy, not a reference: renaming a user later does not rewrite
/// the snapshots already stamped onto historical records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Serialize the snapshot into the JSON column representation.
    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
        })
    }

    /// Deserialize a snapshot from a stored JSON column.
    pub fn from_json(value: &JsonValue) -> AppResult<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}
