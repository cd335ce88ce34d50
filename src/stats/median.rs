//! Exact median age over a bounded histogram

use crate::error::StatsError;
use crate::types::{AGE_BUCKETS, MAX_AGE};

/// Median of a population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Median {
    /// Median age; a half-year value when the two middle ages differ
    pub age: f64,
    /// True when the median is an age someone actually has
    pub is_actual: bool,
}

/// Range-bound median calculator for ages `0..=200`
///
/// Ages are tallied per bucket; the median is found by walking the buckets
/// with a running total, so the cost is independent of population size.
#[derive(Debug, Clone)]
pub struct MedianAge {
    age_counts: [u64; AGE_BUCKETS],
    total_count: u64,
}

impl Default for MedianAge {
    fn default() -> Self {
        Self::new()
    }
}

impl MedianAge {
    /// Create a calculator with an empty population
    pub fn new() -> Self {
        Self {
            age_counts: [0; AGE_BUCKETS],
            total_count: 0,
        }
    }

    /// Create a calculator over an existing histogram
    pub fn from_counts(age_counts: &[u64; AGE_BUCKETS]) -> Self {
        Self {
            age_counts: *age_counts,
            total_count: age_counts.iter().sum(),
        }
    }

    /// Add a single age
    pub fn add(&mut self, age: i64) -> Result<(), StatsError> {
        let bucket = usize::try_from(age)
            .ok()
            .filter(|&a| a <= MAX_AGE)
            .ok_or(StatsError::AgeOutOfRange(age))?;
        self.age_counts[bucket] += 1;
        self.total_count += 1;
        Ok(())
    }

    /// Population size
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Compute the median
    ///
    /// For an odd population the middle age is returned. For an even one the
    /// two middle ranks are located; if they share a bucket that age is the
    /// median, otherwise the second age is the next populated bucket and the
    /// median is the mean of the two.
    pub fn calc(&self) -> Result<Median, StatsError> {
        if self.total_count == 0 {
            return Err(StatsError::NoData);
        }

        if self.total_count % 2 == 1 {
            let rank = self.total_count.div_ceil(2);
            let (age, _) = self.ages_at(rank)?;
            return Ok(Median {
                age: age as f64,
                is_actual: true,
            });
        }

        let rank = self.total_count / 2;
        let (first, second) = self.ages_at(rank)?;
        let second = second.ok_or(StatsError::OutOfBounds {
            rank: rank + 1,
            total: self.total_count,
        })?;

        if first == second {
            Ok(Median {
                age: first as f64,
                is_actual: true,
            })
        } else {
            Ok(Median {
                age: (first + second) as f64 / 2.0,
                is_actual: false,
            })
        }
    }

    /// Ages at 1-indexed `rank` and `rank + 1`
    ///
    /// The second age is `None` only when `rank` is the last rank.
    fn ages_at(&self, rank: u64) -> Result<(usize, Option<usize>), StatsError> {
        if rank == 0 || rank > self.total_count {
            return Err(StatsError::OutOfBounds {
                rank,
                total: self.total_count,
            });
        }

        let mut first = None;
        let mut running_total = 0;

        for (age, &count) in self.age_counts.iter().enumerate() {
            match first {
                None => {
                    running_total += count;
                    if running_total >= rank {
                        first = Some(age);
                        if running_total > rank {
                            return Ok((age, Some(age)));
                        }
                    }
                }
                Some(first_age) if count > 0 => return Ok((first_age, Some(age))),
                Some(_) => {}
            }
        }

        first.map(|age| (age, None)).ok_or(StatsError::OutOfBounds {
            rank,
            total: self.total_count,
        })
    }
}
