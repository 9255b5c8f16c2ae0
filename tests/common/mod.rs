use chrono::{DateTime, TimeZone, Utc};

/// Builds a UTC timestamp at noon on the given date.
pub fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}
