//! Population statistics computed straight from age histograms
//!
//! Neither calculator sorts or stores individual ages; both walk the fixed
//! 201-bucket count array of a [`Digest`](crate::types::Digest).

mod average;
mod median;

pub use average::average_age;
pub use median::{Median, MedianAge};
