//! Patient records as served by the REST API.
//!
//! The patient list endpoint returns a non-sensitive projection (no `ssn`, no entries), so
//! those fields default to empty when absent.

use crate::entry::Entry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Gender::Male => "♂",
            Gender::Female => "♀",
            Gender::Other => "⚧",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub occupation: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Ordered as returned by the server. Only server responses append to this.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Patient {
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_non_sensitive_projection() {
        let input = r#"{
            "id": "d2773336-f723-11e9-8f0b-362b9e155667",
            "name": "John McClane",
            "dateOfBirth": "1986-07-09",
            "gender": "male",
            "occupation": "New york city cop"
        }"#;

        let patient: Patient = serde_json::from_str(input).expect("parse patient");
        assert_eq!(patient.gender, Gender::Male);
        assert_eq!(patient.date_of_birth.as_deref(), Some("1986-07-09"));
        assert!(patient.ssn.is_none());
        assert!(patient.entries.is_empty());
    }

    #[test]
    fn finds_entries_by_id() {
        let input = r#"{
            "id": "p1",
            "name": "Hans Gruber",
            "ssn": "090786-122X",
            "gender": "other",
            "occupation": "Technician",
            "entries": [{
                "id": "e1",
                "type": "HealthCheck",
                "date": "2019-10-20",
                "specialist": "MD House",
                "description": "Yearly control visit.",
                "healthCheckRating": 1
            }]
        }"#;

        let patient: Patient = serde_json::from_str(input).expect("parse patient");
        assert_eq!(patient.gender.symbol(), "⚧");
        assert!(patient.entry("e1").is_some());
        assert!(patient.entry("e2").is_none());
    }

    #[test]
    fn rejects_unknown_gender() {
        let input = r#"{"id":"p1","name":"X","gender":"robot","occupation":"Y"}"#;
        assert!(serde_json::from_str::<Patient>(input).is_err());
    }
}
