//! Review aggregation.

use crate::domain::records::ReviewRecord;

/// Derived rating aggregate over a course's review set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    /// Arithmetic mean of the stored ratings; exactly 0.0 for an empty set.
    pub average: f64,
    pub count: u32,
}

/// Compute the review count and average rating.
///
/// The empty collection is guarded explicitly: the result is 0.0/0, never
/// NaN. Stored ratings are not clamped; a value outside 1-5 would flow into
/// the average, which is a storage invariant this layer trusts.
pub fn summarize(reviews: &[ReviewRecord]) -> RatingSummary {
    let count = reviews.len() as u32;
    if count == 0 {
        return RatingSummary::default();
    }

    let sum: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    RatingSummary {
        average: sum / f64::from(count),
        count,
    }
}
