//! Translation from flat draft values to the nested entry payload.
//!
//! This is the only place where `startDate`/`endDate` become `sickLeave` and
//! `dischargeDate`/`criteria` become `discharge`. Sub-objects are attached only when every part
//! is filled in; a half-filled object is never sent.

use crate::draft::EntryDraft;
use crate::entry::{Discharge, EntryKind, HealthCheckRating, SickLeave};
use patientor_types::is_blank;
use serde::{Deserialize, Serialize};

/// Request body for `POST /patients/{id}/entries`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub description: String,
    pub date: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    #[serde(flatten)]
    pub details: NewEntryDetails,
}

/// Kind-specific part of a [`NewEntry`]; carries the `type` tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NewEntryDetails {
    #[serde(rename_all = "camelCase")]
    HealthCheck {
        health_check_rating: Option<HealthCheckRating>,
    },
    #[serde(rename_all = "camelCase")]
    OccupationalHealthcare {
        employer_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sick_leave: Option<SickLeave>,
    },
    Hospital {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discharge: Option<Discharge>,
    },
}

impl NewEntry {
    pub fn kind(&self) -> EntryKind {
        match self.details {
            NewEntryDetails::HealthCheck { .. } => EntryKind::HealthCheck,
            NewEntryDetails::OccupationalHealthcare { .. } => EntryKind::OccupationalHealthcare,
            NewEntryDetails::Hospital { .. } => EntryKind::Hospital,
        }
    }
}

/// Assemble the payload for `kind` from a (validated) draft.
pub fn build(kind: EntryKind, draft: &EntryDraft) -> NewEntry {
    let details = match kind {
        EntryKind::HealthCheck => NewEntryDetails::HealthCheck {
            health_check_rating: draft.health_check_rating,
        },
        EntryKind::OccupationalHealthcare => NewEntryDetails::OccupationalHealthcare {
            employer_name: draft.employer_name.clone(),
            sick_leave: both_present(&draft.start_date, &draft.end_date).map(
                |(start_date, end_date)| SickLeave {
                    start_date,
                    end_date,
                },
            ),
        },
        EntryKind::Hospital => NewEntryDetails::Hospital {
            discharge: both_present(&draft.discharge_date, &draft.criteria)
                .map(|(date, criteria)| Discharge { date, criteria }),
        },
    };

    NewEntry {
        description: draft.description.clone(),
        date: draft.date.clone(),
        specialist: draft.specialist.clone(),
        diagnosis_codes: draft.diagnosis_codes.clone(),
        details,
    }
}

fn both_present(first: &str, second: &str) -> Option<(String, String)> {
    if is_blank(first) || is_blank(second) {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn common() -> EntryDraft {
        EntryDraft {
            description: "Back pain".into(),
            specialist: "Dr X".into(),
            date: "2024-01-01".into(),
            ..EntryDraft::default()
        }
    }

    #[test]
    fn occupational_without_dates_omits_sick_leave() {
        let draft = EntryDraft {
            employer_name: "Acme".into(),
            ..common()
        };
        let entry = build(EntryKind::OccupationalHealthcare, &draft);

        let value = serde_json::to_value(&entry).expect("serialise");
        assert_eq!(
            value,
            json!({
                "type": "OccupationalHealthcare",
                "description": "Back pain",
                "specialist": "Dr X",
                "date": "2024-01-01",
                "employerName": "Acme"
            })
        );
    }

    #[test]
    fn occupational_with_one_date_omits_sick_leave() {
        let draft = EntryDraft {
            employer_name: "Acme".into(),
            start_date: "2024-01-01".into(),
            ..common()
        };
        match build(EntryKind::OccupationalHealthcare, &draft).details {
            NewEntryDetails::OccupationalHealthcare { sick_leave, .. } => {
                assert!(sick_leave.is_none())
            }
            other => panic!("expected occupational details, got {other:?}"),
        }
    }

    #[test]
    fn occupational_with_both_dates_attaches_sick_leave() {
        let draft = EntryDraft {
            employer_name: "Acme".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-10".into(),
            ..common()
        };
        let value =
            serde_json::to_value(build(EntryKind::OccupationalHealthcare, &draft)).expect("json");
        assert_eq!(
            value["sickLeave"],
            json!({ "startDate": "2024-01-01", "endDate": "2024-01-10" })
        );
        assert!(value.get("startDate").is_none());
    }

    #[test]
    fn hospital_attaches_discharge() {
        let draft = EntryDraft {
            discharge_date: "2024-02-01".into(),
            criteria: "Recovered".into(),
            ..common()
        };
        let entry = build(EntryKind::Hospital, &draft);
        assert_eq!(entry.kind(), EntryKind::Hospital);
        assert_eq!(
            entry.details,
            NewEntryDetails::Hospital {
                discharge: Some(Discharge {
                    date: "2024-02-01".into(),
                    criteria: "Recovered".into(),
                }),
            }
        );

        let value = serde_json::to_value(&entry).expect("serialise");
        assert_eq!(value["type"], "Hospital");
        assert_eq!(
            value["discharge"],
            json!({ "date": "2024-02-01", "criteria": "Recovered" })
        );
        assert!(value.get("dischargeDate").is_none());
    }

    #[test]
    fn health_check_passes_rating_through_and_drops_other_kinds_fields() {
        let draft = EntryDraft {
            health_check_rating: Some(HealthCheckRating::Healthy),
            employer_name: "Ignored".into(),
            criteria: "Ignored".into(),
            diagnosis_codes: vec!["Z57.1".into(), "N30.0".into()],
            ..common()
        };
        let value = serde_json::to_value(build(EntryKind::HealthCheck, &draft)).expect("json");
        assert_eq!(value["type"], "HealthCheck");
        assert_eq!(value["healthCheckRating"], 0);
        assert_eq!(value["diagnosisCodes"], json!(["Z57.1", "N30.0"]));
        assert!(value.get("employerName").is_none());
        assert!(value.get("criteria").is_none());
    }
}
