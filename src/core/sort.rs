use std::cmp::Ordering;

use crate::models::{LawyerRecord, SortKey};

/// Compare two records under a single sort key.
///
/// Rating and experience order best-first, the fee keys order by price
/// in the requested direction. Float comparisons fall back to equal on
/// incomparable values so the sort never panics.
#[inline]
pub fn compare_by_key(a: &LawyerRecord, b: &LawyerRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => b
            .rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal),
        SortKey::Experience => b.experience.cmp(&a.experience),
        SortKey::FeesLow => a
            .fees_per_hearing
            .partial_cmp(&b.fees_per_hearing)
            .unwrap_or(Ordering::Equal),
        SortKey::FeesHigh => b
            .fees_per_hearing
            .partial_cmp(&a.fees_per_hearing)
            .unwrap_or(Ordering::Equal),
    }
}

/// Return a copy of the records ordered by the given key.
///
/// The sort is stable, so records that compare equal keep their input
/// order. Sorting twice by the same key changes nothing.
pub fn sort_records(records: &[LawyerRecord], key: SortKey) -> Vec<LawyerRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_by_key(a, b, key));
    sorted
}
