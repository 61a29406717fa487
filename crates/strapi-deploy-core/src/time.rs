//! Time, duration, and size utilities.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Format a timestamp as sortable ISO-8601 UTC with milliseconds.
///
/// Produces e.g. `2026-10-16T09:30:00.123Z`.
pub fn iso_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse duration from string (e.g., "10s", "5m", "1h", "2d", or bare seconds).
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let duration = if let Some(n) = s.strip_suffix('s') {
        n.parse::<i64>().ok().map(Duration::seconds)
    } else if let Some(n) = s.strip_suffix('m') {
        n.parse::<i64>().ok().map(Duration::minutes)
    } else if let Some(n) = s.strip_suffix('h') {
        n.parse::<i64>().ok().map(Duration::hours)
    } else if let Some(n) = s.strip_suffix('d') {
        n.parse::<i64>().ok().map(Duration::days)
    } else {
        s.parse::<i64>().ok().map(Duration::seconds)
    };
    duration.filter(|d| *d >= Duration::zero())
}

/// Parse a memory size such as `512M` or `1G` into bytes.
///
/// Suffixes are binary multiples and case-insensitive; a bare number is bytes.
pub fn parse_memory_size(s: &str) -> Option<u64> {
    let s = s.trim();
    let (digits, multiplier) = match s.chars().last()?.to_ascii_uppercase() {
        'K' => (&s[..s.len() - 1], 1u64 << 10),
        'M' => (&s[..s.len() - 1], 1u64 << 20),
        'G' => (&s[..s.len() - 1], 1u64 << 30),
        _ => (s, 1),
    };
    digits.parse::<u64>().ok()?.checked_mul(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
            + Duration::milliseconds(123);
        assert_eq!(iso_timestamp(ts), "2026-10-16T09:30:00.123Z");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("10s"), Some(Duration::seconds(10)));
        assert_eq!(parse_duration("5m"), Some(Duration::minutes(5)));
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("2d"), Some(Duration::days(2)));
        assert_eq!(parse_duration(" 90 "), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("ten seconds"), None);
        assert_eq!(parse_duration("-5s"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn test_parse_memory_size() {
        assert_eq!(parse_memory_size("1G"), Some(1024 * 1024 * 1024));
        assert_eq!(parse_memory_size("512M"), Some(512 * 1024 * 1024));
        assert_eq!(parse_memory_size("200k"), Some(200 * 1024));
        assert_eq!(parse_memory_size("4096"), Some(4096));
        assert_eq!(parse_memory_size("1T"), None);
        assert_eq!(parse_memory_size("G"), None);
        assert_eq!(parse_memory_size(""), None);
    }

    proptest::proptest! {
        #[test]
        fn prop_memory_suffixes_scale(n in 0u64..1_000_000) {
            proptest::prop_assert_eq!(parse_memory_size(&format!("{}K", n)), Some(n * 1024));
            proptest::prop_assert_eq!(parse_memory_size(&format!("{}m", n)), Some(n * 1024 * 1024));
        }

        #[test]
        fn prop_duration_suffixes_agree(n in 0i64..100_000) {
            proptest::prop_assert_eq!(
                parse_duration(&format!("{}m", n)),
                parse_duration(&format!("{}", n * 60))
            );
        }
    }
}
