//! Check-in call-time arithmetic.
//!
//! Check-in templates store a relative offset (minutes before the production
//! start); the instantiated entry stores the absolute instant. Both operands
//! are UTC instants, so the subtraction is correct across midnight and
//! daylight-saving transitions. The stored instant is a snapshot: it is not
//! recomputed when the production's start time is edited later.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Absolute call time for a check-in: `starts_at` minus the template offset.
pub fn call_time(starts_at: Timestamp, minutes_before_start: i32) -> Timestamp {
    starts_at - Duration::minutes(i64::from(minutes_before_start))
}

/// Offsets are relative to the start and may not be negative.
pub fn validate_minutes_before_start(minutes: i32) -> Result<(), CoreError> {
    if minutes < 0 {
        return Err(CoreError::Validation(format!(
            "minutes_before_start must be >= 0, got {minutes}"
        )));
    }
    Ok(())
}
