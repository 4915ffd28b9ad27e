//! Timestamp rendering in the operator's timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Same format in an explicit timezone.
    pub fn in_zone(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime(FORMAT).to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.in_zone(TimeZone::system()))
    }
}
