//! Conversion of platform timestamps and durations.
//!
//! The platform expresses points in time as 100-nanosecond ticks since
//! 1601-01-01T00:00:00Z (the FILETIME epoch) and durations as the same
//! 100 ns ticks.

use time::{OffsetDateTime, PrimitiveDateTime};

const TICKS_PER_SECOND: i64 = 10_000_000;

/// Seconds between the platform epoch (1601-01-01) and the Unix epoch.
const EPOCH_OFFSET_SECONDS: i64 = 11_644_473_600;

/// Formats a platform timestamp as `YYYY-MM-DDTHH:MM:SSZ` (UTC, second
/// precision). Sub-second ticks are discarded. Ticks outside the
/// representable calendar range clamp to its boundary.
pub fn ticks_to_iso8601(ticks: i64) -> String {
    let unix_seconds = ticks
        .div_euclid(TICKS_PER_SECOND)
        .saturating_sub(EPOCH_OFFSET_SECONDS);
    let datetime = match OffsetDateTime::from_unix_timestamp(unix_seconds) {
        Ok(dt) => dt,
        Err(_) if unix_seconds < 0 => PrimitiveDateTime::MIN.assume_utc(),
        Err(_) => PrimitiveDateTime::MAX.assume_utc(),
    };
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        datetime.year(),
        u8::from(datetime.month()),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    )
}

/// Converts a trial-time-remaining tick count to whole seconds, truncating.
pub fn trial_ticks_to_seconds(ticks: i64) -> i64 {
    ticks / TICKS_PER_SECOND
}
