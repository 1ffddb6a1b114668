use chrono::{DateTime, NaiveDate, Utc};

/// Current UTC time in RFC 9557 form with millisecond precision.
pub fn current_datetime_rfc9557() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parses a CMS date field.
///
/// Accepts a full RFC 3339 timestamp or a plain `YYYY-MM-DD` date (taken as
/// midnight UTC). Anything else yields `None`.
pub fn parse_posted_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_are_midnight_utc() {
        let ts = parse_posted_date("2026-02-20").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-02-20T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_is_normalised_to_utc() {
        let ts = parse_posted_date("2026-02-20T05:30:00+05:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-02-20T00:00:00+00:00");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_posted_date("last tuesday").is_none());
        assert!(parse_posted_date("").is_none());
    }

    #[test]
    fn rfc9557_stamp_shape() {
        let stamp = current_datetime_rfc9557();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2026-01-01T00:00:00.000Z".len());
    }
}
