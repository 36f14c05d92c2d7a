use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loaded map document: the `data` array of a map dump.
///
/// Entries are kept as raw JSON. Turning them into typed polylines is the
/// renderer's job, so a malformed point is reported where it is drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Polyline entries, in drawing order.
    pub data: Vec<Value>,
}

impl MapDocument {
    pub fn polyline_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Value> {
        self.data.iter()
    }

    // ── Serialization ────────────────────────────────────────────────

    /// Parse a map dump. Only the outer shape (a `data` array) is checked.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
