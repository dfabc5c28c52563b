//! Human-readable formatting of report values.

use crate::estimate::GroupRecord;

/// Placeholder for an empty feed or spindle list
pub const NOT_AVAILABLE: &str = "N/A";

/// `"<seconds>s (<minutes>m)"`, e.g. `"90s (1.50m)"`
pub fn format_time(seconds: f64) -> String {
    format!("{:.0}s ({:.2}m)", seconds, seconds / 60.0)
}

/// `"<mm> mm"` with two decimals
pub fn format_distance(mm: f64) -> String {
    format!("{:.2} mm", mm)
}

/// Sorted feeds joined with `", "`, or `N/A`
pub fn format_feeds(record: &GroupRecord) -> String {
    join_or_na(record.feed_values_seen.iter().map(ToString::to_string))
}

/// Sorted spindle speeds joined with `", "`, or `N/A`
pub fn format_rpms(record: &GroupRecord) -> String {
    join_or_na(record.rpm_values_seen.iter().map(ToString::to_string))
}

fn join_or_na(values: impl Iterator<Item = String>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(90.0), "90s (1.50m)");
        assert_eq!(format_time(0.0), "0s (0.00m)");
        assert_eq!(format_time(12.0), "12s (0.20m)");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(100.0), "100.00 mm");
        assert_eq!(format_distance(3.14159), "3.14 mm");
    }

    #[test]
    fn test_format_sets() {
        let mut record = GroupRecord::open("g");
        assert_eq!(format_feeds(&record), "N/A");
        assert_eq!(format_rpms(&record), "N/A");

        record.record_feed(1500.0);
        record.record_feed(0.25);
        record.record_rpm(8000.0);
        record.record_rpm(1200.0);
        assert_eq!(format_feeds(&record), "0.25, 1500.0");
        assert_eq!(format_rpms(&record), "1200, 8000");
    }
}
