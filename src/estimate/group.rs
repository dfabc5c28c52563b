//! Group records
//!
//! The unit of output: one named span of the program with the cut time,
//! cut distance, feeds and spindle speeds charged to it.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Tool id of a group that never saw a `T="..."` word
pub const NO_TOOL: &str = "N/A";

/// A feed value with a total order, so it can live in a sorted set
///
/// `-0.0` is stored as `0.0`, so the two collapse into one entry.
#[derive(Debug, Clone, Copy)]
pub struct FeedValue(f64);

impl FeedValue {
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for FeedValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FeedValue {}

impl PartialOrd for FeedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for FeedValue {
    // Shortest round-trip form, always with a decimal point: 500.0, 0.1
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Serialize for FeedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Time, distance, feeds and speeds charged to one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRecord {
    pub tool_id: String,
    pub group_name: String,
    pub cut_time_seconds: f64,
    pub cut_distance_mm: f64,
    pub feed_values_seen: BTreeSet<FeedValue>,
    pub rpm_values_seen: BTreeSet<u64>,
}

impl GroupRecord {
    /// Fresh record for a group that was just opened
    pub fn open(group_name: &str) -> Self {
        Self {
            tool_id: NO_TOOL.to_string(),
            group_name: group_name.to_string(),
            cut_time_seconds: 0.0,
            cut_distance_mm: 0.0,
            feed_values_seen: BTreeSet::new(),
            rpm_values_seen: BTreeSet::new(),
        }
    }

    pub fn record_feed(&mut self, feed: f64) {
        self.feed_values_seen.insert(FeedValue::new(feed));
    }

    /// Record a spindle speed, saturating at `u64::MAX`
    pub fn record_rpm(&mut self, rpm: f64) {
        self.rpm_values_seen.insert(rpm as u64);
    }

    /// Add a cutting move to the accumulators
    pub fn charge(&mut self, distance: f64, seconds: f64) {
        self.cut_distance_mm += distance;
        self.cut_time_seconds += seconds;
    }

    /// Feeds in ascending order
    pub fn feeds(&self) -> impl Iterator<Item = f64> + '_ {
        self.feed_values_seen.iter().map(|f| f.get())
    }
}
