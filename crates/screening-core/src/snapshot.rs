use serde::{Deserialize, Serialize};

/// One extracted employment history: three parallel sequences indexed by
/// position, so index `i` across all three describes a single employment
/// entry. Sequences may be absent or of unequal lengths; readers treat a
/// missing value as the empty string.
///
/// Employer names are the only correlation key between two snapshots of the
/// same candidate; entries carry no identity of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentSnapshot {
    pub client_names: Option<Vec<String>>,
    pub job_titles: Option<Vec<String>>,
    pub relevant_dates: Option<Vec<String>>,
}

impl EmploymentSnapshot {
    pub fn new(
        client_names: Vec<String>,
        job_titles: Vec<String>,
        relevant_dates: Vec<String>,
    ) -> Self {
        Self {
            client_names: Some(client_names),
            job_titles: Some(job_titles),
            relevant_dates: Some(relevant_dates),
        }
    }

    /// Employer names, with an absent sequence read as empty.
    pub fn employers(&self) -> &[String] {
        self.client_names.as_deref().unwrap_or_default()
    }

    /// Job titles, with an absent sequence read as empty.
    pub fn titles(&self) -> &[String] {
        self.job_titles.as_deref().unwrap_or_default()
    }

    /// Date-range strings, with an absent sequence read as empty.
    pub fn dates(&self) -> &[String] {
        self.relevant_dates.as_deref().unwrap_or_default()
    }

    /// True when the snapshot carries no information at all.
    pub fn is_empty(&self) -> bool {
        self.employers().is_empty() && self.titles().is_empty() && self.dates().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_flatten_absent_sequences() {
        let snapshot = EmploymentSnapshot::default();
        assert!(snapshot.employers().is_empty());
        assert!(snapshot.titles().is_empty());
        assert!(snapshot.dates().is_empty());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_new_wraps_all_sequences() {
        let snapshot = EmploymentSnapshot::new(
            vec!["Acme".to_string()],
            vec!["Dev".to_string()],
            vec!["2020-2021".to_string()],
        );
        assert_eq!(snapshot.employers(), ["Acme".to_string()]);
        assert_eq!(snapshot.titles(), ["Dev".to_string()]);
        assert_eq!(snapshot.dates(), ["2020-2021".to_string()]);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let snapshot = EmploymentSnapshot::new(
            vec!["Acme".to_string()],
            vec!["Dev".to_string()],
            vec!["2020-2021".to_string()],
        );
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["clientNames"][0], "Acme");
        assert_eq!(json["jobTitles"][0], "Dev");
        assert_eq!(json["relevantDates"][0], "2020-2021");
    }

    #[test]
    fn test_deserializes_null_sequences_as_absent() {
        let snapshot: EmploymentSnapshot = serde_json::from_str(
            r#"{"clientNames": null, "jobTitles": null, "relevantDates": null}"#,
        )
        .unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_deserializes_missing_keys_as_absent() {
        let snapshot: EmploymentSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot, EmploymentSnapshot::default());
    }

    #[test]
    fn test_ignores_unknown_keys() {
        let snapshot: EmploymentSnapshot =
            serde_json::from_str(r#"{"clientNames": ["Acme"], "candidateId": 42}"#).unwrap();
        assert_eq!(snapshot.employers(), ["Acme".to_string()]);
    }

    #[test]
    fn test_tolerates_unequal_sequence_lengths() {
        let snapshot = EmploymentSnapshot::new(
            vec!["Acme".to_string(), "Globex".to_string()],
            vec!["Dev".to_string()],
            vec![],
        );
        assert_eq!(snapshot.employers().len(), 2);
        assert_eq!(snapshot.titles().len(), 1);
        assert!(snapshot.dates().is_empty());
    }
}
