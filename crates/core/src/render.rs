//! Display models for patients and their entries.
//!
//! [`render`] maps any stored [`Entry`] to an [`EntryView`]: a title line (date, kind icon and,
//! for occupational visits, the employer), the description, one kind-specific detail line, and
//! the entry's diagnosis codes paired with their names. Views implement `Display` for terminal
//! output; the structured fields are there for any other front end.

use crate::diagnosis::DiagnosisLookup;
use crate::entry::{Entry, HealthCheckRating};
use crate::patient::{Gender, Patient};
use serde::Serialize;

/// Colours used by the health check severity indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Green,
    Orange,
    Violet,
    Red,
}

impl Colour {
    pub fn as_str(self) -> &'static str {
        match self {
            Colour::Green => "green",
            Colour::Orange => "orange",
            Colour::Violet => "violet",
            Colour::Red => "red",
        }
    }
}

/// Severity colour by rating ordinal.
pub const RATING_COLOURS: [Colour; 4] = [Colour::Green, Colour::Orange, Colour::Violet, Colour::Red];

pub fn rating_colour(rating: HealthCheckRating) -> Colour {
    RATING_COLOURS[usize::from(rating.ordinal())]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Stethoscope,
    Doctor,
    Emergency,
    Heart,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Stethoscope => "stethoscope",
            Icon::Doctor => "doctor",
            Icon::Emergency => "emergency",
            Icon::Heart => "heart",
        }
    }
}

/// Kind-specific detail line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum EntryDetail {
    #[serde(rename_all = "camelCase")]
    OnLeave { start_date: String, end_date: String },
    Severity {
        rating: HealthCheckRating,
        colour: Colour,
    },
    Discharged { date: String, criteria: String },
}

impl std::fmt::Display for EntryDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryDetail::OnLeave {
                start_date,
                end_date,
            } => write!(f, "On leave: {start_date} to {end_date}"),
            EntryDetail::Severity { rating, colour } => write!(
                f,
                "[{} {}] {}",
                Icon::Heart.as_str(),
                colour.as_str(),
                rating.label()
            ),
            EntryDetail::Discharged { date, criteria } => {
                write!(f, "Discharged: {date} on criteria {criteria}")
            }
        }
    }
}

/// A diagnosis code with its looked-up name (blank when unknown).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosisLine {
    pub code: String,
    pub name: String,
}

impl std::fmt::Display for DiagnosisLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.code)
        } else {
            write!(f, "{} {}", self.code, self.name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub date: String,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_name: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<EntryDetail>,
    pub diagnoses: Vec<DiagnosisLine>,
}

impl EntryView {
    pub fn title(&self) -> String {
        let mut title = format!("{} [{}]", self.date, self.icon.as_str());
        if let Some(employer) = &self.employer_name {
            title.push(' ');
            title.push_str(employer);
        }
        title
    }

    /// The severity colour, for health check entries.
    pub fn colour(&self) -> Option<Colour> {
        match self.detail {
            Some(EntryDetail::Severity { colour, .. }) => Some(colour),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "  {}", self.description)?;
        if let Some(detail) = &self.detail {
            writeln!(f, "  {detail}")?;
        }
        for line in &self.diagnoses {
            writeln!(f, "  - {line}")?;
        }
        Ok(())
    }
}

/// Build the display model for an entry.
pub fn render<L>(entry: &Entry, diagnoses: &L) -> EntryView
where
    L: DiagnosisLookup + ?Sized,
{
    let (icon, employer_name, detail) = match entry {
        Entry::OccupationalHealthcare(e) => (
            Icon::Stethoscope,
            Some(e.employer_name.clone()),
            e.sick_leave.as_ref().map(|leave| EntryDetail::OnLeave {
                start_date: leave.start_date.clone(),
                end_date: leave.end_date.clone(),
            }),
        ),
        Entry::HealthCheck(e) => (
            Icon::Doctor,
            None,
            Some(EntryDetail::Severity {
                rating: e.health_check_rating,
                colour: rating_colour(e.health_check_rating),
            }),
        ),
        Entry::Hospital(e) => (
            Icon::Emergency,
            None,
            Some(EntryDetail::Discharged {
                date: e.discharge.date.clone(),
                criteria: e.discharge.criteria.clone(),
            }),
        ),
    };

    EntryView {
        date: entry.date().to_string(),
        icon,
        employer_name,
        description: entry.description().to_string(),
        detail,
        diagnoses: entry
            .diagnosis_codes()
            .iter()
            .map(|code| DiagnosisLine {
                code: code.clone(),
                name: diagnoses.name_of(code).to_string(),
            })
            .collect(),
    }
}

/// Patient header shown above the entry list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientView {
    pub name: String,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    pub occupation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl std::fmt::Display for PatientView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.name, self.gender.symbol())?;
        if let Some(ssn) = &self.ssn {
            writeln!(f, "ssn: {ssn}")?;
        }
        if let Some(dob) = &self.date_of_birth {
            writeln!(f, "born: {dob}")?;
        }
        writeln!(f, "occupation: {}", self.occupation)
    }
}

pub fn render_patient(patient: &Patient) -> PatientView {
    PatientView {
        name: patient.name.clone(),
        gender: patient.gender,
        ssn: patient.ssn.clone(),
        occupation: patient.occupation.clone(),
        date_of_birth: patient.date_of_birth.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::Diagnosis;
    use crate::entry::{
        BaseEntry, Discharge, HealthCheckEntry, HospitalEntry, OccupationalHealthcareEntry,
        SickLeave,
    };
    use std::collections::HashMap;

    fn diagnoses() -> HashMap<String, Diagnosis> {
        [
            Diagnosis {
                code: "S62.5".into(),
                name: "Fracture of thumb".into(),
                latin: None,
            },
            Diagnosis {
                code: "Z57.1".into(),
                name: "Occupational exposure to radiation".into(),
                latin: None,
            },
        ]
        .into_iter()
        .map(|d| (d.code.clone(), d))
        .collect()
    }

    fn base(id: &str, description: &str, date: &str, codes: &[&str]) -> BaseEntry {
        BaseEntry {
            id: id.into(),
            description: description.into(),
            date: date.into(),
            specialist: "MD House".into(),
            diagnosis_codes: codes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn examples() -> Vec<Entry> {
        vec![
            Entry::HealthCheck(HealthCheckEntry {
                base: base("h1", "Yearly control visit.", "2019-10-20", &["Z57.1"]),
                health_check_rating: HealthCheckRating::CriticalRisk,
            }),
            Entry::OccupationalHealthcare(OccupationalHealthcareEntry {
                base: base("o1", "Back pain", "2024-01-01", &["Z57.1", "X00"]),
                employer_name: "Acme".into(),
                sick_leave: Some(SickLeave {
                    start_date: "2024-01-01".into(),
                    end_date: "2024-01-10".into(),
                }),
            }),
            Entry::Hospital(HospitalEntry {
                base: base("x1", "Healing time appr. 2 weeks.", "2015-01-02", &["S62.5"]),
                discharge: Discharge {
                    date: "2015-01-16".into(),
                    criteria: "Thumb has healed.".into(),
                },
            }),
        ]
    }

    #[test]
    fn colour_table_is_fixed() {
        assert_eq!(rating_colour(HealthCheckRating::Healthy), Colour::Green);
        assert_eq!(rating_colour(HealthCheckRating::LowRisk), Colour::Orange);
        assert_eq!(rating_colour(HealthCheckRating::HighRisk), Colour::Violet);
        assert_eq!(rating_colour(HealthCheckRating::CriticalRisk), Colour::Red);
    }

    #[test]
    fn critical_health_check_renders_red_heart() {
        let view = render(&examples()[0], &diagnoses());
        assert_eq!(view.icon, Icon::Doctor);
        assert_eq!(view.colour(), Some(Colour::Red));
        assert!(view.to_string().contains("[heart red] Critical risk"));
    }

    #[test]
    fn occupational_renders_employer_and_leave() {
        let view = render(&examples()[1], &diagnoses());
        assert_eq!(view.title(), "2024-01-01 [stethoscope] Acme");
        assert!(view
            .to_string()
            .contains("On leave: 2024-01-01 to 2024-01-10"));
    }

    #[test]
    fn occupational_without_leave_has_no_detail() {
        let entry = Entry::OccupationalHealthcare(OccupationalHealthcareEntry {
            base: base("o2", "Checkup", "2024-03-01", &[]),
            employer_name: "Acme".into(),
            sick_leave: None,
        });
        let view = render(&entry, &diagnoses());
        assert!(view.detail.is_none());
        assert!(!view.to_string().contains("On leave"));
    }

    #[test]
    fn hospital_renders_discharge() {
        let view = render(&examples()[2], &diagnoses());
        assert_eq!(view.icon, Icon::Emergency);
        assert!(view
            .to_string()
            .contains("Discharged: 2015-01-16 on criteria Thumb has healed."));
    }

    #[test]
    fn every_example_keeps_description_date_and_codes() {
        let lookup = diagnoses();
        for entry in examples() {
            let view = render(&entry, &lookup);
            let text = view.to_string();
            assert!(text.contains(entry.description()));
            assert!(text.contains(entry.date()));
            let codes: Vec<&str> = view.diagnoses.iter().map(|d| d.code.as_str()).collect();
            assert_eq!(
                codes,
                entry
                    .diagnosis_codes()
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
            );
            for code in entry.diagnosis_codes() {
                assert!(text.contains(code.as_str()));
            }
        }
    }

    #[test]
    fn unknown_codes_render_with_blank_name() {
        let view = render(&examples()[1], &diagnoses());
        assert_eq!(
            view.diagnoses,
            vec![
                DiagnosisLine {
                    code: "Z57.1".into(),
                    name: "Occupational exposure to radiation".into(),
                },
                DiagnosisLine {
                    code: "X00".into(),
                    name: String::new(),
                },
            ]
        );
        assert_eq!(view.diagnoses[1].to_string(), "X00");
    }

    #[test]
    fn patient_header_shows_gender_symbol() {
        let patient = Patient {
            id: "p1".into(),
            name: "Dana Scully".into(),
            occupation: "Forensic Pathologist".into(),
            gender: Gender::Female,
            ssn: Some("050174-432N".into()),
            date_of_birth: Some("1974-01-05".into()),
            entries: vec![],
        };
        let text = render_patient(&patient).to_string();
        assert!(text.starts_with("Dana Scully ♀\n"));
        assert!(text.contains("ssn: 050174-432N"));
        assert!(text.contains("occupation: Forensic Pathologist"));
    }
}
