/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::primitives::AcceptDatetimeFormat;
use chrono::{DateTime, SecondsFormat, Utc};

/// Parses a wire timestamp in either RFC3339 or UNIX (`seconds.nanos`) form.
///
/// Entities keep their `time` fields as the raw strings the API sent; this
/// turns one into a `DateTime<Utc>` on demand.
pub fn parse_time(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();
    if value.contains('T') {
        return DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| AppError::Deserialization(format!("invalid RFC3339 time {value}: {e}")));
    }

    let (secs, fraction) = value.split_once('.').unwrap_or((value, ""));
    let secs: i64 = secs
        .parse()
        .map_err(|_| AppError::Deserialization(format!("invalid UNIX time {value}")))?;
    if fraction.len() > 9 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Deserialization(format!("invalid UNIX time {value}")));
    }
    let nanos: u32 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<9}")
            .parse()
            .map_err(|_| AppError::Deserialization(format!("invalid UNIX time {value}")))?
    };

    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| AppError::Deserialization(format!("UNIX time out of range {value}")))
}

/// Formats a timestamp the way the API expects it for the given datetime format
#[must_use]
pub fn format_time(time: &DateTime<Utc>, format: AcceptDatetimeFormat) -> String {
    match format {
        AcceptDatetimeFormat::Rfc3339 => time.to_rfc3339_opts(SecondsFormat::Nanos, true),
        AcceptDatetimeFormat::Unix => {
            format!("{}.{:09}", time.timestamp(), time.timestamp_subsec_nanos())
        }
    }
}
