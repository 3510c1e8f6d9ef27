// src/domain/collection.rs

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::listing::Listing;

/// The subset of fetched records a visitor should see: one record per MLS
/// (first occurrence wins), soft-deleted records dropped. Dedup runs before
/// the deleted check, so a deleted first occurrence shadows its duplicates.
pub fn visible(records: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.mls.clone()))
        .filter(Listing::is_live)
        .collect()
}

/// Newest first by `Last Modified`. Records whose timestamp doesn't parse
/// sort after all records whose timestamp does; ties keep input order
/// (the sort is stable).
pub fn sorted_by_recency(mut records: Vec<Listing>) -> Vec<Listing> {
    records.sort_by(
        |a, b| match (a.last_modified_millis(), b.last_modified_millis()) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    );
    records
}

/// The records owned by `email`, newest first. Soft-deleted records stay in,
/// so the owner can re-publish them.
pub fn owned_by(records: Vec<Listing>, email: &str) -> Vec<Listing> {
    sorted_by_recency(records.into_iter().filter(|r| r.user == email).collect())
}
