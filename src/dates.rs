use crate::compat::{String, Vec};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use core::cmp::Ordering;

/// Parse a date-ish query value. Accepts RFC 3339 date-times and plain
/// `YYYY-MM-DD` dates; anything else is unparseable.
fn parse_stamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.naive_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Sort date strings ascending by chronological value. The sort is stable:
/// ties keep their input order, and unparseable entries sort after every
/// parseable one, also in input order.
pub(crate) fn sort_ascending(mut values: Vec<String>) -> Vec<String> {
    values.sort_by(|a, b| match (parse_stamp(a), parse_stamp(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    fn sorted(input: &[&str]) -> Vec<String> {
        sort_ascending(input.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_sorts_plain_dates_ascending() {
        assert_eq!(
            sorted(&["2024-01-03", "2024-01-01", "2024-01-02"]),
            vec!["2024-01-01", "2024-01-02", "2024-01-03"]
        );
    }

    #[test]
    fn test_rfc3339_and_plain_mix() {
        assert_eq!(
            sorted(&["2024-01-02T08:00:00Z", "2024-01-02", "2024-01-01"]),
            vec!["2024-01-01", "2024-01-02", "2024-01-02T08:00:00Z"]
        );
    }

    #[test]
    fn test_unparseable_sorts_last_in_input_order() {
        assert_eq!(
            sorted(&["garbage", "2024-05-01", "also-bad", "2024-04-01"]),
            vec!["2024-04-01", "2024-05-01", "garbage", "also-bad"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(sorted(&[]).is_empty());
    }
}
