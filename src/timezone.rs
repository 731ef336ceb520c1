//! Resolves the configured local timezone.

use axum::extract::FromRef;
use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::AppState;

/// Get the current UTC offset for a canonical timezone name, e.g. "Asia/Jakarta".
///
/// Returns `None` if `canonical_timezone` is not a known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The local timezone of the user as a canonical timezone name.
#[derive(Debug, Clone)]
pub struct LocalTimezone(pub String);

impl LocalTimezone {
    /// The current UTC offset of the timezone.
    ///
    /// Falls back to UTC if the timezone name is invalid.
    pub fn offset(&self) -> UtcOffset {
        get_local_offset(&self.0).unwrap_or_else(|| {
            tracing::error!("Invalid timezone {}, falling back to UTC", self.0);
            UtcOffset::UTC
        })
    }

    /// Today's date in the timezone.
    pub fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.offset()).date()
    }
}

impl FromRef<AppState> for LocalTimezone {
    fn from_ref(state: &AppState) -> Self {
        Self(state.local_timezone.clone())
    }
}
