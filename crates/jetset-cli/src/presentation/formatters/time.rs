use jetset_types::Timestamp;

/// Day/month/year and hour:minute, e.g. `05/02/24 08:00`
pub const FLIGHT_TIME_FORMAT: &str = "%d/%m/%y %H:%M";

/// Format a feed timestamp in the offset it was given in.
///
/// Unparsable values render as `Invalid date`.
pub fn format_flight_time(ts: &Timestamp) -> String {
    match ts.instant() {
        Some(instant) => instant.format(FLIGHT_TIME_FORMAT).to_string(),
        None => "Invalid date".to_string(),
    }
}
