//! Persisted form of a matrix.
//!
//! The payload is an ordered array of
//! `{ "resourceName": ..., "read": ..., "write": ... }` objects. Leaf values
//! are `"none" | "allow" | "deny"`; `"mixed"` is rejected on decode because
//! aggregates are never persisted.

use crate::error::MatrixResult;
use crate::PermissionMatrix;
use accessgrid_types::{Permission, PermissionCell};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One persisted resource row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    pub resource_name: String,
    pub read: Permission,
    pub write: Permission,
}

impl ResourceEntry {
    #[must_use]
    pub fn cell(&self) -> PermissionCell {
        PermissionCell::new(self.read, self.write)
    }
}

/// Ordered list of resource rows as handed to the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatrixPayload(pub Vec<ResourceEntry>);

impl MatrixPayload {
    /// Parses a payload from JSON text.
    pub fn from_json(json: &str) -> MatrixResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the payload as pretty-printed JSON.
    pub fn to_json(&self) -> MatrixResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.0
    }
}

impl PermissionMatrix {
    /// Snapshot of the leaves in persisted form.
    #[must_use]
    pub fn to_payload(&self) -> MatrixPayload {
        MatrixPayload(
            self.rows()
                .map(|(name, cell)| ResourceEntry {
                    resource_name: name.to_string(),
                    read: cell.read,
                    write: cell.write,
                })
                .collect(),
        )
    }

    /// Rebuilds a matrix from a payload, revalidating resource names.
    pub fn from_payload(payload: &MatrixPayload) -> MatrixResult<Self> {
        debug!(rows = payload.0.len(), "Loading matrix from payload");
        Self::with_cells(
            payload
                .0
                .iter()
                .map(|entry| (entry.resource_name.clone(), entry.cell())),
        )
    }

    pub fn to_json(&self) -> MatrixResult<String> {
        self.to_payload().to_json()
    }

    pub fn from_json(json: &str) -> MatrixResult<Self> {
        Self::from_payload(&MatrixPayload::from_json(json)?)
    }
}
