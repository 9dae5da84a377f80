//! Membership and field-level diffs between two employment histories.
//!
//! All functions here are total: empty or absent input sequences simply
//! produce empty results, and values missing at an index are read as the
//! empty string. Comparison is exact string equality throughout; callers
//! wanting fuzzier matching must normalize upstream (see `normalize`).

use serde::{Deserialize, Serialize};

/// A changed job title or date range for an employer present in both
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub employer: String,
    pub old: String,
    pub new: String,
}

/// Returns every element of `updated` that appears nowhere in `original`,
/// in `updated`'s order of occurrence. Duplicate occurrences are each
/// reported.
pub fn find_new_items(original: &[String], updated: &[String]) -> Vec<String> {
    updated
        .iter()
        .filter(|item| !original.contains(item))
        .cloned()
        .collect()
}

/// Returns every element of `original` that appears nowhere in `updated`,
/// in `original`'s order of occurrence. Mirror of [`find_new_items`].
pub fn find_removed_items(original: &[String], updated: &[String]) -> Vec<String> {
    find_new_items(updated, original)
}

/// Title changes for employers present in both snapshots.
///
/// Each previous entry is matched against the *first* occurrence of the same
/// employer name in the current snapshot. Candidates with repeated stints at
/// one employer therefore always diff against that first occurrence; the
/// data model has no per-stint key that could do better.
pub fn find_changed_titles(
    prev_employers: &[String],
    prev_titles: &[String],
    curr_employers: &[String],
    curr_titles: &[String],
) -> Vec<FieldChange> {
    find_changed_fields(prev_employers, prev_titles, curr_employers, curr_titles)
}

/// Date-range changes for employers present in both snapshots. Same matching
/// rule as [`find_changed_titles`].
pub fn find_changed_dates(
    prev_employers: &[String],
    prev_dates: &[String],
    curr_employers: &[String],
    curr_dates: &[String],
) -> Vec<FieldChange> {
    find_changed_fields(prev_employers, prev_dates, curr_employers, curr_dates)
}

fn find_changed_fields(
    prev_employers: &[String],
    prev_values: &[String],
    curr_employers: &[String],
    curr_values: &[String],
) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for (prev_idx, employer) in prev_employers.iter().enumerate() {
        let curr_idx = match curr_employers.iter().position(|c| c == employer) {
            Some(idx) => idx,
            // Dropped employers are reported as removals, not field changes
            None => continue,
        };

        let old = prev_values.get(prev_idx).map(String::as_str).unwrap_or("");
        let new = curr_values.get(curr_idx).map(String::as_str).unwrap_or("");

        if old != new {
            changes.push(FieldChange {
                employer: employer.clone(),
                old: old.to_string(),
                new: new.to_string(),
            });
        }
    }

    changes
}
