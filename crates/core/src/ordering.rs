//! Ordering of object summaries by modification time

use crate::traits::ObjectSummary;

/// Sort summaries ascending by last-modified time
///
/// The sort is stable: objects with equal timestamps keep listing order.
pub fn sort_by_last_modified(objects: &[ObjectSummary]) -> Vec<ObjectSummary> {
    let mut sorted = objects.to_vec();
    sorted.sort_by_key(|o| o.last_modified);
    sorted
}

/// Oldest object of an ascending sort
pub fn oldest(sorted: &[ObjectSummary]) -> Option<&ObjectSummary> {
    sorted.first()
}

/// Object with the greatest last-modified time
///
/// On ties the first one in listing order wins.
pub fn newest(objects: &[ObjectSummary]) -> Option<&ObjectSummary> {
    objects.iter().reduce(|best, candidate| {
        if candidate.last_modified > best.last_modified {
            candidate
        } else {
            best
        }
    })
}
