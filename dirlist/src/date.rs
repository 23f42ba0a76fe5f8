use chrono::prelude::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Short month names used in long listings, indexed from January.
pub const MONTHS: [&str; 12] = [
    "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
];

/// Renders a unix timestamp (seconds) in the local time zone as
/// `<month> <day:2> <hour:02>:<minute:02>`.
pub fn format_date(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0).earliest() {
        Some(datetime) => format_datetime(&datetime),
        // Out of range for the local zone; fall back to UTC, then to the raw value.
        None => DateTime::from_timestamp(timestamp, 0)
            .map_or_else(|| timestamp.to_string(), |datetime| format_datetime(&datetime)),
    }
}

pub fn format_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String {
    format!(
        "{} {:2} {:02}:{:02}",
        MONTHS[datetime.month0() as usize],
        datetime.day(),
        datetime.hour(),
        datetime.minute()
    )
}
