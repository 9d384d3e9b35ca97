//! The slot boundary record and the identifier probe.

use serde::{Deserialize, Serialize};

/// A lesson slot as supplied by the caller: an opaque identifier, a
/// `YYYY-MM-DD HH:MM` time string, and a reservation flag.
///
/// The engine only ever reads `time` and `reserved`; it never mutates a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub time: String,
    pub reserved: bool,
}

/// Character count of a slot identifier.
///
/// Diagnostic helper with no validation beyond the type; kept for interface
/// completeness with the reservation API.
pub fn analyze_slot(id: &str) -> usize {
    id.chars().count()
}
