//! Strict time-string parsing into minute-resolution UTC timestamps.
//!
//! Reservation times travel as `YYYY-MM-DD HH:MM` strings. Parsing normalizes
//! them to whole minutes since the UTC epoch so that every downstream
//! comparison is plain integer arithmetic — no floats, no timezone ambiguity.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, SlotError};

/// Minutes since the UTC epoch.
pub type Timestamp = i64;

/// Byte length of a well-formed `YYYY-MM-DD HH:MM` string.
const TIME_LEN: usize = 16;

/// Parse a `YYYY-MM-DD HH:MM` string into a UTC minute timestamp.
///
/// Parsing is strict: four-digit year, two-digit month/day/hour/minute,
/// single space separator, nothing trailing. Calendar fields are interpreted
/// as UTC and converted to epoch seconds, then divided by 60 (truncating).
///
/// # Errors
/// Returns `SlotError::InvalidFormat` if the string does not match the
/// pattern exactly. Returns `SlotError::Conversion` if the fields match the
/// pattern but do not name a representable UTC instant (e.g., month 13).
pub fn parse_time(text: &str) -> Result<Timestamp> {
    let bytes = text.as_bytes();
    if bytes.len() != TIME_LEN
        || bytes[4] != b'-'
        || bytes[7] != b'-'
        || bytes[10] != b' '
        || bytes[13] != b':'
    {
        return Err(SlotError::InvalidFormat(text.to_string()));
    }

    let year = field(text, 0..4)?;
    let month = field(text, 5..7)?;
    let day = field(text, 8..10)?;
    let hour = field(text, 11..13)?;
    let minute = field(text, 14..16)?;

    let date = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| SlotError::Conversion(text.to_string()))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| SlotError::Conversion(text.to_string()))?;

    let seconds = NaiveDateTime::new(date, time).and_utc().timestamp();
    Ok(seconds / 60)
}

/// Extract one fixed-width decimal field. Every byte must be an ASCII digit.
fn field(text: &str, range: std::ops::Range<usize>) -> Result<u32> {
    let raw = &text[range];
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SlotError::InvalidFormat(text.to_string()));
    }
    // All-digit slices of width <= 4 always fit in u32.
    raw.parse::<u32>()
        .map_err(|_| SlotError::InvalidFormat(text.to_string()))
}
