//! Boundary adapter: maps the duck-typed employment-record shapes found
//! elsewhere in the system onto the canonical [`EmploymentSnapshot`].
//!
//! Field names vary across producers (`title`/`position`/`role`,
//! `dates` vs `startDate`+`endDate`, `clientName`/`employer`/`company`),
//! and payloads arrive either as the parallel-array object, as an object
//! embedding a record array under a history key, or as a bare record array.
//! All of that is resolved here so the comparison functions never carry
//! optional-field fallback logic.

use serde_json::{Map, Value};

use crate::snapshot::EmploymentSnapshot;

const EMPLOYER_KEYS: &[&str] = &[
    "clientName",
    "client_name",
    "employer",
    "company",
    "organization",
];

const TITLE_KEYS: &[&str] = &["jobTitle", "job_title", "title", "position", "role"];

const DATE_KEYS: &[&str] = &[
    "relevantDates",
    "relevant_dates",
    "dates",
    "dateRange",
    "date_range",
    "duration",
];

const START_KEYS: &[&str] = &["startDate", "start_date", "from"];
const END_KEYS: &[&str] = &["endDate", "end_date", "to"];

const HISTORY_KEYS: &[&str] = &[
    "employmentHistory",
    "employment_history",
    "experience",
    "workHistory",
    "work_history",
    "positions",
    "jobs",
];

const CLIENT_NAMES_KEYS: &[&str] = &["clientNames", "client_names"];
const JOB_TITLES_KEYS: &[&str] = &["jobTitles", "job_titles"];
const RELEVANT_DATES_KEYS: &[&str] = &["relevantDates", "relevant_dates"];

/// Builds a snapshot from any payload shape the system produces. Total
/// function: unrecognized shapes yield an empty snapshot.
pub fn snapshot_from_value(payload: &Value) -> EmploymentSnapshot {
    if let Some(obj) = payload.as_object() {
        if has_any_key(obj, CLIENT_NAMES_KEYS)
            || has_any_key(obj, JOB_TITLES_KEYS)
            || has_any_key(obj, RELEVANT_DATES_KEYS)
        {
            return EmploymentSnapshot {
                client_names: read_parallel(obj, CLIENT_NAMES_KEYS),
                job_titles: read_parallel(obj, JOB_TITLES_KEYS),
                relevant_dates: read_parallel(obj, RELEVANT_DATES_KEYS),
            };
        }

        for key in HISTORY_KEYS {
            if let Some(records) = obj.get(*key).and_then(|v| v.as_array()) {
                return snapshot_from_records(records);
            }
        }

        return EmploymentSnapshot::default();
    }

    if let Some(records) = payload.as_array() {
        return snapshot_from_records(records);
    }

    EmploymentSnapshot::default()
}

/// Builds a snapshot from a record array. Per record, first match wins among
/// the accepted field aliases; a missing field becomes the empty string so
/// positions stay aligned. A bare string record is taken as an employer name;
/// records of any other non-object type are skipped.
pub fn snapshot_from_records(records: &[Value]) -> EmploymentSnapshot {
    let mut employers = Vec::new();
    let mut titles = Vec::new();
    let mut dates = Vec::new();

    for record in records {
        if let Some(name) = record.as_str() {
            employers.push(name.to_string());
            titles.push(String::new());
            dates.push(String::new());
            continue;
        }

        let obj = match record.as_object() {
            Some(obj) => obj,
            None => continue,
        };

        employers.push(first_string(obj, EMPLOYER_KEYS).unwrap_or_default());
        titles.push(first_string(obj, TITLE_KEYS).unwrap_or_default());
        dates.push(
            first_string(obj, DATE_KEYS)
                .or_else(|| compose_date_range(obj))
                .unwrap_or_default(),
        );
    }

    EmploymentSnapshot::new(employers, titles, dates)
}

fn has_any_key(obj: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| obj.contains_key(*key))
}

/// Positional read of a parallel-array key: non-string elements become empty
/// strings (positions must not shift), non-array values mean the sequence is
/// absent.
fn read_parallel(obj: &Map<String, Value>, keys: &[&str]) -> Option<Vec<String>> {
    let value = keys.iter().find_map(|key| obj.get(*key))?;
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .map(|item| item.as_str().unwrap_or("").to_string())
            .collect(),
    )
}

fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Composes a date range from start/end parts when no single range field is
/// present. Only exact equality between snapshots matters downstream, so any
/// deterministic format works; this one matches what recruiters see in the
/// rest of the product.
fn compose_date_range(obj: &Map<String, Value>) -> Option<String> {
    let start = first_string(obj, START_KEYS);
    let end = first_string(obj, END_KEYS);

    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(start), None) => Some(format!("{start} - Present")),
        (None, Some(end)) => Some(format!("Until {end}")),
        (None, None) => None,
    }
}
