//! Fraud-risk classification over a set of detected resume changes.

use serde::{Deserialize, Serialize};

use crate::diff::FieldChange;

/// Qualitative risk assigned to a resubmission's change pattern.
/// Totally ordered: `None < Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Classifies a change pattern, first matching rule wins:
///
/// 1. More than one employer removed: high.
/// 2. More than one date range changed: high above two, otherwise medium.
/// 3. One employer removed alongside any title or date edit: medium.
/// 4. Title edits alone: medium above two, otherwise low.
/// 5. Only new employers: low.
/// 6. Anything remaining: low if an employer was removed or a date changed,
///    otherwise none.
///
/// Erasing past employers is the strongest signal (hiding a gap or
/// fabricating continuity); repeated date edits suggest manipulation; title
/// edits alone are weak evidence since promotions and corrections happen;
/// pure additions are routine career growth.
pub fn evaluate_risk_level(
    new_employers: &[String],
    removed_employers: &[String],
    changed_dates: &[FieldChange],
    changed_titles: &[FieldChange],
) -> RiskLevel {
    if removed_employers.len() > 1 {
        return RiskLevel::High;
    }

    if changed_dates.len() > 1 {
        return if changed_dates.len() > 2 {
            RiskLevel::High
        } else {
            RiskLevel::Medium
        };
    }

    if removed_employers.len() == 1 && (!changed_dates.is_empty() || !changed_titles.is_empty()) {
        return RiskLevel::Medium;
    }

    if !changed_titles.is_empty() {
        return if changed_titles.len() > 2 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
    }

    if !new_employers.is_empty()
        && removed_employers.is_empty()
        && changed_dates.is_empty()
        && changed_titles.is_empty()
    {
        return RiskLevel::Low;
    }

    if !removed_employers.is_empty() || !changed_dates.is_empty() {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}
