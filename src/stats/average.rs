//! Average age

use crate::error::StatsError;
use crate::types::AGE_BUCKETS;

/// Mean age over a histogram
///
/// The sum of ages is divided by the population with integer division before
/// conversion, so the result is always a whole number (199 / 6 gives 33.0).
pub fn average_age(age_counts: &[u64; AGE_BUCKETS]) -> Result<f32, StatsError> {
    let mut age_total: u64 = 0;
    let mut total_count: u64 = 0;

    for (age, &count) in age_counts.iter().enumerate() {
        total_count += count;
        age_total += age as u64 * count;
    }

    if total_count == 0 {
        return Err(StatsError::NoData);
    }

    Ok((age_total / total_count) as f32)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn counts_of(ages: &[usize]) -> [u64; AGE_BUCKETS] {
        let mut counts = [0; AGE_BUCKETS];
        for &age in ages {
            counts[age] += 1;
        }
        counts
    }

    #[test]
    fn truncates_before_conversion() {
        let counts = counts_of(&[25, 21, 50, 15, 31, 57]);
        assert_eq!(average_age(&counts), Ok(33.0));
    }

    #[test]
    fn single_value() {
        assert_eq!(average_age(&counts_of(&[50])), Ok(50.0));
    }

    #[test]
    fn extreme_buckets() {
        assert_eq!(average_age(&counts_of(&[0, 200])), Ok(100.0));
        assert_eq!(average_age(&counts_of(&[0, 0, 1])), Ok(0.0));
    }

    #[test]
    fn empty_population_is_no_data() {
        assert_eq!(average_age(&[0; AGE_BUCKETS]), Err(StatsError::NoData));
    }

    #[test]
    fn equals_floor_of_mean_for_random_populations() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let n = rng.gen_range(1..60);
            let ages: Vec<usize> = (0..n).map(|_| rng.gen_range(0..AGE_BUCKETS)).collect();
            let expected = (ages.iter().sum::<usize>() / ages.len()) as f32;
            assert_eq!(average_age(&counts_of(&ages)), Ok(expected), "{ages:?}");
        }
    }
}
