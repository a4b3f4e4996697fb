//! Add-entry form validation.
//!
//! [`validate`] maps the selected kind and the current draft to a set of field-level errors.
//! Validation failure is data: an empty [`ValidationErrors`] means the draft can be submitted.
//!
//! Rules, evaluated independently on every change:
//! - `description`, `specialist` and `date` are required for every kind
//! - health checks need a rating; rating 0 (Healthy) counts as present
//! - occupational entries need an employer, and sick-leave dates come in pairs
//! - hospital entries need a discharge date and criteria

use crate::constants::{REQUIRED_FIELD_MESSAGE, SICK_LEAVE_MESSAGE};
use crate::draft::{DraftField, EntryDraft};
use crate::entry::EntryKind;
use patientor_types::is_blank;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single field-level problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", REQUIRED_FIELD_MESSAGE)]
    Required,
    #[error("{}", SICK_LEAVE_MESSAGE)]
    SickLeaveIncomplete,
}

impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Field name to error message. Serialises as `{"description": "Field is required", ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<DraftField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: DraftField, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a draft for the given entry kind.
pub fn validate(kind: EntryKind, draft: &EntryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    require(&mut errors, DraftField::Description, &draft.description);
    require(&mut errors, DraftField::Specialist, &draft.specialist);
    require(&mut errors, DraftField::Date, &draft.date);

    match kind {
        EntryKind::HealthCheck => {
            if draft.health_check_rating.is_none() {
                errors.insert(DraftField::HealthCheckRating, FieldError::Required);
            }
        }
        EntryKind::OccupationalHealthcare => {
            require(&mut errors, DraftField::EmployerName, &draft.employer_name);
            // One date without the other flags both inputs.
            if is_blank(&draft.start_date) != is_blank(&draft.end_date) {
                errors.insert(DraftField::StartDate, FieldError::SickLeaveIncomplete);
                errors.insert(DraftField::EndDate, FieldError::SickLeaveIncomplete);
            }
        }
        EntryKind::Hospital => {
            require(&mut errors, DraftField::DischargeDate, &draft.discharge_date);
            require(&mut errors, DraftField::Criteria, &draft.criteria);
        }
    }

    errors
}

fn require(errors: &mut ValidationErrors, field: DraftField, value: &str) {
    if is_blank(value) {
        errors.insert(field, FieldError::Required);
    }
}
