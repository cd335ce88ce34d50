//! Core types for crowdstats

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Highest accepted age; the histogram has one bucket per age in `0..=MAX_AGE`
pub const MAX_AGE: usize = 200;

/// Number of age buckets in a [`Digest`]
pub const AGE_BUCKETS: usize = MAX_AGE + 1;

/// A validated person record
///
/// Only produced by [`validation::validate_person`](crate::validation::validate_person),
/// so the age is always within `0..=200` and both names passed the name checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) age: u8,
}

impl Person {
    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Age in years
    pub fn age(&self) -> u8 {
        self.age
    }

    /// "first last", the form stored as a bucket representative
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Per-source age histogram
///
/// Holds the record count, one counter per age bucket and the first name seen
/// in each populated bucket. Raw records are never retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
    pub(crate) total_count: u64,
    pub(crate) age_counts: [u64; AGE_BUCKETS],
    pub(crate) age_representative: [Option<String>; AGE_BUCKETS],
}

impl Default for Digest {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest {
    /// Create an empty digest
    pub fn new() -> Self {
        Self {
            total_count: 0,
            age_counts: [0; AGE_BUCKETS],
            age_representative: std::array::from_fn(|_| None),
        }
    }

    /// Count one person
    ///
    /// The first person recorded at an age becomes that bucket's representative;
    /// later people at the same age never replace it.
    pub fn record(&mut self, person: &Person) {
        let age = usize::from(person.age);
        self.total_count += 1;
        self.age_counts[age] += 1;
        if self.age_representative[age].is_none() {
            self.age_representative[age] = Some(person.full_name());
        }
    }

    /// Total number of records
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Record counts indexed by age
    pub fn age_counts(&self) -> &[u64; AGE_BUCKETS] {
        &self.age_counts
    }

    /// Representative name for an age bucket, if the bucket is populated
    pub fn representative(&self, age: usize) -> Option<&str> {
        self.age_representative.get(age)?.as_deref()
    }

    /// True when no records were counted
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Population statistics over every valid source
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// False when no valid, non-empty source was found; all other fields are then zero
    pub has_data: bool,
    /// Mean age, truncated to a whole number before conversion
    pub average_age: f32,
    /// Exact median age
    pub median_age: f32,
    /// True when the median is an observed age rather than the mean of two ages
    pub median_is_actual: bool,
    /// A person whose age equals the median (only when `median_is_actual`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub median_person: Option<String>,
}

impl Summary {
    /// Summary for a run without usable data
    pub fn no_data() -> Self {
        Self::default()
    }
}

/// Bookkeeping for one run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Sources that failed to load or validate, in submission order
    pub invalid_source_ids: Vec<String>,
    /// Repeated source ids, in detection order
    pub duplicate_source_ids: Vec<String>,
    /// Number of dropped duplicates
    pub duplicate_count: usize,
    /// Number of workers used by the pool
    pub worker_count: usize,
    /// Wall time of the fetch phase
    #[serde(rename = "elapsed_ms", with = "duration_millis")]
    pub elapsed: Duration,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn person(first: &str, last: &str, age: u8) -> Person {
        Person {
            first_name: first.to_string(),
            last_name: last.to_string(),
            age,
        }
    }

    #[test]
    fn record_keeps_first_representative_per_bucket() {
        let mut digest = Digest::new();
        digest.record(&person("Ken", "Thompson", 31));
        digest.record(&person("Alice", "Wonders", 31));
        digest.record(&person("Rob", "Pike", 15));

        assert_eq!(digest.total_count(), 3);
        assert_eq!(digest.age_counts()[31], 2);
        assert_eq!(digest.age_counts()[15], 1);
        assert_eq!(digest.representative(31), Some("Ken Thompson"));
        assert_eq!(digest.representative(15), Some("Rob Pike"));
        assert_eq!(digest.representative(16), None);
    }

    #[test]
    fn representative_is_set_only_for_populated_buckets() {
        let mut digest = Digest::new();
        digest.record(&person("Old", "Timer", 200));
        digest.record(&person("New", "Born", 0));

        for age in 0..AGE_BUCKETS {
            assert_eq!(
                digest.representative(age).is_some(),
                digest.age_counts()[age] > 0,
                "bucket {age}"
            );
        }
        assert_eq!(digest.age_counts().iter().sum::<u64>(), digest.total_count());
    }

    #[test]
    fn representative_out_of_range_is_none() {
        assert_eq!(Digest::new().representative(AGE_BUCKETS), None);
    }

    #[test]
    fn empty_digest() {
        let digest = Digest::default();
        assert!(digest.is_empty());
        assert_eq!(digest.total_count(), 0);
    }

    #[test]
    fn run_stats_serializes_elapsed_as_millis() {
        let stats = RunStats {
            elapsed: Duration::from_millis(1500),
            worker_count: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["elapsed_ms"], 1500);
        assert_eq!(json["worker_count"], 2);
    }

    #[test]
    fn summary_without_person_omits_field() {
        let json = serde_json::to_value(Summary::no_data()).unwrap();
        assert_eq!(json["has_data"], false);
        assert!(json.get("median_person").is_none());
    }
}
