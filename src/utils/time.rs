use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 with milliseconds and a `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`.
pub fn to_iso8601(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_milliseconds_and_z() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 8, 5, 3).unwrap();
        assert_eq!(to_iso8601(dt), "2024-06-15T08:05:03.000Z");
    }
}
