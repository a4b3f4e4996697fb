//! Add-entry draft values.
//!
//! A draft holds every field any entry kind can use, ungated by kind, plus the raw
//! `startDate`/`endDate`/`dischargeDate`/`criteria` inputs that the builder later folds into
//! `sickLeave` and `discharge`.

use crate::entry::HealthCheckRating;
use crate::error::ModelResult;
use serde::Serialize;

/// Identifies a single input of the add-entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Description,
    Specialist,
    Date,
    DiagnosisCodes,
    HealthCheckRating,
    EmployerName,
    StartDate,
    EndDate,
    DischargeDate,
    Criteria,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Description => "description",
            DraftField::Specialist => "specialist",
            DraftField::Date => "date",
            DraftField::DiagnosisCodes => "diagnosisCodes",
            DraftField::HealthCheckRating => "healthCheckRating",
            DraftField::EmployerName => "employerName",
            DraftField::StartDate => "startDate",
            DraftField::EndDate => "endDate",
            DraftField::DischargeDate => "dischargeDate",
            DraftField::Criteria => "criteria",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated user input for a new entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub description: String,
    pub date: String,
    pub specialist: String,
    pub diagnosis_codes: Vec<String>,
    pub health_check_rating: Option<HealthCheckRating>,
    pub employer_name: String,
    pub start_date: String,
    pub end_date: String,
    pub discharge_date: String,
    pub criteria: String,
}

impl EntryDraft {
    /// Current value of a free-text field, or `None` for structured fields.
    pub fn text(&self, field: DraftField) -> Option<&str> {
        let value = match field {
            DraftField::Description => &self.description,
            DraftField::Specialist => &self.specialist,
            DraftField::Date => &self.date,
            DraftField::EmployerName => &self.employer_name,
            DraftField::StartDate => &self.start_date,
            DraftField::EndDate => &self.end_date,
            DraftField::DischargeDate => &self.discharge_date,
            DraftField::Criteria => &self.criteria,
            DraftField::DiagnosisCodes | DraftField::HealthCheckRating => return None,
        };
        Some(value.as_str())
    }

    /// Set a field from raw input text.
    ///
    /// Text fields store the input unchanged. `healthCheckRating` parses an ordinal and clears
    /// the rating on blank input. `diagnosisCodes` takes a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRating`] or [`ModelError::RatingOutOfRange`] when the
    /// rating input is not an ordinal in `0..=3`. The draft is left unchanged in that case.
    pub fn set(&mut self, field: DraftField, value: &str) -> ModelResult<()> {
        let slot = match field {
            DraftField::Description => &mut self.description,
            DraftField::Specialist => &mut self.specialist,
            DraftField::Date => &mut self.date,
            DraftField::EmployerName => &mut self.employer_name,
            DraftField::StartDate => &mut self.start_date,
            DraftField::EndDate => &mut self.end_date,
            DraftField::DischargeDate => &mut self.discharge_date,
            DraftField::Criteria => &mut self.criteria,
            DraftField::HealthCheckRating => {
                self.health_check_rating = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
                return Ok(());
            }
            DraftField::DiagnosisCodes => {
                self.diagnosis_codes = parse_code_list(value);
                return Ok(());
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}

fn parse_code_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
