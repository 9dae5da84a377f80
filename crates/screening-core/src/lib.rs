//! Employment-history screening: change detection and fraud-risk
//! classification between two versions of a candidate's extracted resume.
//!
//! The whole comparison family is pure and total: inputs are defensively
//! optional, missing data reads as empty, and no function here performs I/O
//! or holds state. Duck-typed payloads from the rest of the system are
//! mapped onto the canonical snapshot shape by [`normalize`] before they
//! reach the comparison functions.

pub mod compare;
pub mod diff;
pub mod normalize;
pub mod risk;
pub mod snapshot;

pub use compare::{compare_resume_versions, ComparisonResult};
pub use diff::{
    find_changed_dates, find_changed_titles, find_new_items, find_removed_items, FieldChange,
};
pub use normalize::{snapshot_from_records, snapshot_from_value};
pub use risk::{evaluate_risk_level, RiskLevel};
pub use snapshot::EmploymentSnapshot;
