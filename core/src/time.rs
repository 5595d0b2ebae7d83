//! Time related utils.

use crate::Error;
use chrono::NaiveDateTime;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Date format: "20220313"
const DATE: &str = "%Y%m%d";

/// Time format for ISO 8601 basic: "20220313T072004Z"
const ISO8601: &str = "%Y%m%dT%H%M%SZ";

/// Create a new DateTime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format(DATE).to_string()
}

/// Format time into ISO 8601 basic: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format(ISO8601).to_string()
}

/// Parse time from ISO 8601 basic: `20220313T072004Z`
pub fn parse_iso8601(s: &str) -> crate::Result<DateTime> {
    NaiveDateTime::parse_from_str(s, ISO8601)
        .map(|v| v.and_utc())
        .map_err(|e| {
            Error::request_invalid(format!("timestamp {s:?} is not in ISO 8601 basic format"))
                .with_source(e)
        })
}
