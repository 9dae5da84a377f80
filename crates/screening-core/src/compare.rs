//! Comparison orchestration: diffs two employment snapshots and classifies
//! the change pattern.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diff::{
    find_changed_dates, find_changed_titles, find_new_items, find_removed_items, FieldChange,
};
use crate::risk::{evaluate_risk_level, RiskLevel};
use crate::snapshot::EmploymentSnapshot;

/// Everything that changed between two versions of a candidate's employment
/// history, plus the risk classification. Constructed fresh per comparison;
/// the caller stores or displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub has_changes: bool,
    pub new_employers: Vec<String>,
    pub removed_employers: Vec<String>,
    pub changed_dates: Vec<FieldChange>,
    pub changed_titles: Vec<FieldChange>,
    pub overall_risk: RiskLevel,
}

impl ComparisonResult {
    /// One human-readable line for recruiter-facing badges and log output,
    /// e.g. `"2 employers removed (high risk)"`. Lists only the non-empty
    /// change categories.
    pub fn summary(&self) -> String {
        if !self.has_changes {
            return "No changes from the previous submission".to_string();
        }

        let mut parts = Vec::new();
        if !self.new_employers.is_empty() {
            parts.push(counted(
                self.new_employers.len(),
                "new employer",
                "new employers",
            ));
        }
        if !self.removed_employers.is_empty() {
            parts.push(format!(
                "{} removed",
                counted(self.removed_employers.len(), "employer", "employers")
            ));
        }
        if !self.changed_titles.is_empty() {
            parts.push(format!(
                "{} changed",
                counted(self.changed_titles.len(), "job title", "job titles")
            ));
        }
        if !self.changed_dates.is_empty() {
            parts.push(format!(
                "{} changed",
                counted(self.changed_dates.len(), "date range", "date ranges")
            ));
        }

        format!("{} ({} risk)", parts.join(", "), self.overall_risk.as_str())
    }
}

fn counted(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Compares a historical snapshot against a newly submitted one. Pure
/// transformation: no side effects beyond a debug log of the outcome.
pub fn compare_resume_versions(
    previous: &EmploymentSnapshot,
    current: &EmploymentSnapshot,
) -> ComparisonResult {
    let new_employers = find_new_items(previous.employers(), current.employers());
    let removed_employers = find_removed_items(previous.employers(), current.employers());
    let changed_titles = find_changed_titles(
        previous.employers(),
        previous.titles(),
        current.employers(),
        current.titles(),
    );
    let changed_dates = find_changed_dates(
        previous.employers(),
        previous.dates(),
        current.employers(),
        current.dates(),
    );

    let overall_risk = evaluate_risk_level(
        &new_employers,
        &removed_employers,
        &changed_dates,
        &changed_titles,
    );
    let has_changes = !new_employers.is_empty()
        || !removed_employers.is_empty()
        || !changed_dates.is_empty()
        || !changed_titles.is_empty();

    debug!(
        "Compared resume versions: {} new, {} removed, {} title edits, {} date edits -> {} risk",
        new_employers.len(),
        removed_employers.len(),
        changed_titles.len(),
        changed_dates.len(),
        overall_risk.as_str()
    );

    ComparisonResult {
        has_changes,
        new_employers,
        removed_employers,
        changed_dates,
        changed_titles,
        overall_risk,
    }
}
