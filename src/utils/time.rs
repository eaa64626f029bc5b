use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Nepal Standard Time, UTC+05:45.
const LOCAL_OFFSET_MINUTES: i64 = 5 * 60 + 45;

fn to_local(utc: DateTime<Utc>) -> Option<NaiveDateTime> {
    utc.naive_utc()
        .checked_add_signed(TimeDelta::minutes(LOCAL_OFFSET_MINUTES))
}

/// Formats a Unix timestamp as `YYYY-MM-DD hh:mm AM/PM` in local time.
pub fn format_epoch(secs: i64) -> Option<String> {
    let utc = DateTime::from_timestamp(secs, 0)?;
    let local = to_local(utc)?;
    Some(local.format("%Y-%m-%d %I:%M %p").to_string())
}

pub fn format_clock(now: DateTime<Utc>) -> String {
    match to_local(now) {
        Some(local) => local.format("%I:%M %p").to_string(),
        None => now.format("%I:%M %p").to_string(),
    }
}

#[cfg(test)]
#[path = "tests/time.rs"]
mod tests;
