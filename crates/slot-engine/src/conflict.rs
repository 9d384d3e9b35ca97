//! Conflict detection for candidate bookings against reserved sessions.
//!
//! Sorts the reserved set by start time, binary-searches to the first
//! interval that can still matter, then scans only the window around the
//! candidate. Intervals ending before `candidate.start - min_gap` and
//! intervals starting after `candidate.end + min_gap` can neither overlap
//! the candidate nor violate its spacing, so both regions are skipped.

use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::slot::Slot;
use crate::time::{parse_time, Timestamp};

/// Scheduling policy knobs: how long a session runs and how much spacing a
/// candidate must keep from every reserved session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub duration_minutes: i64,
    pub min_gap_minutes: i64,
}

impl Default for SessionPolicy {
    /// 60-minute lessons, booked at least 60 minutes apart.
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            min_gap_minutes: 60,
        }
    }
}

/// Decide whether placing `candidate` would overlap a reserved session or
/// come closer to one than `min_gap_minutes`.
///
/// The reserved sequence is not assumed sorted; a private copy is sorted on
/// every call. Pure function — no shared state, no side effects.
///
/// All sessions share one duration, so sorting by start also orders the ends
/// and the binary-search threshold on `end` stays monotone.
pub fn has_conflict(candidate: &Interval, reserved: &[Interval], min_gap_minutes: i64) -> bool {
    if reserved.is_empty() {
        return false;
    }

    let mut sorted: Vec<&Interval> = reserved.iter().collect();
    sorted.sort_unstable_by_key(|iv| iv.start);

    let lower = candidate.start - min_gap_minutes;
    let upper = candidate.end + min_gap_minutes;

    // First interval whose end reaches the candidate's window; everything
    // before it ends too early to overlap or crowd the candidate.
    let first = sorted.partition_point(|iv| iv.end < lower);

    for iv in &sorted[first..] {
        if iv.start > upper {
            // Sorted by start: no later interval can qualify either.
            break;
        }
        if candidate.overlaps(iv) || candidate.distance_to(iv) < min_gap_minutes {
            return true;
        }
    }

    false
}

/// Check a candidate time against a slot list under the default policy
/// (60-minute sessions, 60-minute minimum gap).
///
/// # Errors
/// Returns `SlotError::InvalidInput` if `candidate_time` is empty,
/// `SlotError::InvalidFormat` / `SlotError::Conversion` if the candidate or
/// any reserved slot time fails to parse. A malformed reserved slot fails the
/// whole call — it is never silently treated as non-conflicting.
pub fn check_conflict(slots: &[Slot], candidate_time: &str) -> Result<bool> {
    check_conflict_with_policy(slots, candidate_time, SessionPolicy::default())
}

/// Check a candidate time against a slot list under an explicit policy.
///
/// Filters the list to `reserved == true`, parses every reserved time and the
/// candidate into fixed-duration intervals, then runs [`has_conflict`].
pub fn check_conflict_with_policy(
    slots: &[Slot],
    candidate_time: &str,
    policy: SessionPolicy,
) -> Result<bool> {
    if candidate_time.is_empty() {
        return Err(SlotError::InvalidInput(
            "candidate time must not be empty".to_string(),
        ));
    }

    let start = parse_time(candidate_time)?;
    let candidate = Interval::session("candidate", start, policy.duration_minutes);

    let reserved = reserved_intervals(slots, policy.duration_minutes)?;

    Ok(has_conflict(&candidate, &reserved, policy.min_gap_minutes))
}

/// Parse the reserved slots of a list into session intervals.
fn reserved_intervals(slots: &[Slot], duration_minutes: i64) -> Result<Vec<Interval>> {
    slots
        .iter()
        .filter(|slot| slot.reserved)
        .map(|slot| {
            let start: Timestamp = parse_time(&slot.time)?;
            Ok(Interval::session(slot.id.clone(), start, duration_minutes))
        })
        .collect()
}
