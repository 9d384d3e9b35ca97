//! Widest free gap between adjacent unreserved slots.
//!
//! Scans adjacent pairs in the order the caller supplies them — the caller is
//! responsible for chronological ordering, and this module does not sort. An
//! unsorted list yields a result reflecting input order, not true
//! chronological adjacency.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slot::Slot;
use crate::time::{parse_time, Timestamp};

/// A slot boiled down to what the gap scan needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotInstant {
    pub timestamp: Timestamp,
    pub reserved: bool,
}

/// The widest gap found between two adjacent unreserved slots.
///
/// The all-zero default is the designed "no qualifying gap" sentinel —
/// returned for fewer than two slots or when every adjacent pair touches a
/// reserved slot. It is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapResult {
    /// Left endpoint of the widest gap, in minutes since the UTC epoch.
    pub optimal_time_stamp: Timestamp,
    /// Width of the gap in minutes.
    pub gap_minutes: i64,
}

/// Scan adjacent pairs for the largest separation between two unreserved
/// slots. The first maximum wins on ties.
pub fn widest_gap(slots: &[SlotInstant]) -> GapResult {
    let mut best = GapResult::default();

    for pair in slots.windows(2) {
        if pair[0].reserved || pair[1].reserved {
            continue;
        }
        let gap = pair[1].timestamp - pair[0].timestamp;
        if gap > best.gap_minutes {
            best = GapResult {
                optimal_time_stamp: pair[0].timestamp,
                gap_minutes: gap,
            };
        }
    }

    best
}

/// Parse every slot time (order preserved) and find the widest gap between
/// adjacent unreserved slots.
///
/// # Errors
/// Returns `SlotError::InvalidFormat` / `SlotError::Conversion` if any slot
/// time fails to parse — a bad slot never silently drops out of the scan.
pub fn find_optimal_gap(slots: &[Slot]) -> Result<GapResult> {
    let instants = slots
        .iter()
        .map(|slot| {
            let timestamp = parse_time(&slot.time)?;
            Ok(SlotInstant {
                timestamp,
                reserved: slot.reserved,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(widest_gap(&instants))
}
