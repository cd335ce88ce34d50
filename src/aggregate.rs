//! Digest aggregation
//!
//! Digests are combined with a pairwise tournament: at stride `s` every digest
//! at index `i` (stepping by `2s`) absorbs the one at `i + s`, then the stride
//! doubles until the result settles at index 0. Counts come out the same as a
//! left fold; representatives keep left-to-right precedence, so the earliest
//! submitted source wins each age bucket.

use crate::types::{AGE_BUCKETS, Digest};

/// Merge two digests into a new one
///
/// Counts add up bucket by bucket. Each bucket's representative comes from `a`
/// when `a` has one, otherwise from `b`.
pub fn merge(a: &Digest, b: &Digest) -> Digest {
    let mut merged = Digest::new();
    merged.total_count = a.total_count + b.total_count;

    for age in 0..AGE_BUCKETS {
        merged.age_counts[age] = a.age_counts[age] + b.age_counts[age];
        merged.age_representative[age] = a.age_representative[age]
            .as_ref()
            .or(b.age_representative[age].as_ref())
            .cloned();
    }

    merged
}

/// Tournament-merge all digests; `None` for an empty input
pub fn aggregate(mut digests: Vec<Digest>) -> Option<Digest> {
    let k = digests.len();
    let mut stride = 1;

    while stride < k {
        let mut i = 0;
        while i + stride < k {
            digests[i] = merge(&digests[i], &digests[i + stride]);
            i += stride * 2;
        }
        stride *= 2;
    }

    digests.into_iter().next()
}

/// Left-to-right fold of all digests; `None` for an empty input
pub fn aggregate_sequential(digests: &[Digest]) -> Option<Digest> {
    let (first, rest) = digests.split_first()?;
    Some(rest.iter().fold(first.clone(), |acc, d| merge(&acc, d)))
}
