//! Add-entry form session.
//!
//! An [`EntryForm`] owns the draft for one chosen kind from the moment the form opens until it
//! is submitted or discarded. Errors are recomputed after every mutation, and submission is
//! only possible once the draft differs from its initial values and has no errors.

use crate::builder::{build, NewEntry};
use crate::constants::INITIAL_HEALTH_CHECK_RATING;
use crate::draft::{DraftField, EntryDraft};
use crate::entry::{EntryKind, HealthCheckRating};
use crate::error::ModelResult;
use crate::validation::{validate, ValidationErrors};

#[derive(Clone, Debug)]
pub struct EntryForm {
    kind: EntryKind,
    initial: EntryDraft,
    draft: EntryDraft,
    errors: ValidationErrors,
}

impl EntryForm {
    /// Open a fresh form for `kind`.
    pub fn new(kind: EntryKind) -> Self {
        let initial = initial_draft();
        let errors = validate(kind, &initial);
        Self {
            kind,
            draft: initial.clone(),
            initial,
            errors,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Discard the current draft and start over for another kind.
    pub fn switch_kind(&mut self, kind: EntryKind) {
        *self = Self::new(kind);
    }

    /// Set a field from raw input; see [`EntryDraft::set`].
    pub fn set(&mut self, field: DraftField, value: &str) -> ModelResult<()> {
        self.draft.set(field, value)?;
        self.revalidate();
        Ok(())
    }

    pub fn set_rating(&mut self, rating: Option<HealthCheckRating>) {
        self.draft.health_check_rating = rating;
        self.revalidate();
    }

    pub fn set_diagnosis_codes(&mut self, codes: Vec<String>) {
        self.draft.diagnosis_codes = codes;
        self.revalidate();
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    pub fn can_submit(&self) -> bool {
        self.is_dirty() && self.errors.is_empty()
    }

    /// Build the payload. On failure the draft is kept so it can be corrected.
    ///
    /// # Errors
    ///
    /// Returns the current [`ValidationErrors`] when the draft has errors or is unchanged
    /// since the form opened.
    pub fn submit(&self) -> Result<NewEntry, ValidationErrors> {
        if !self.can_submit() {
            return Err(self.errors.clone());
        }
        Ok(build(self.kind, &self.draft))
    }

    fn revalidate(&mut self) {
        self.errors = validate(self.kind, &self.draft);
    }
}

fn initial_draft() -> EntryDraft {
    EntryDraft {
        health_check_rating: Some(INITIAL_HEALTH_CHECK_RATING),
        ..EntryDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NewEntryDetails;
    use crate::entry::Discharge;

    fn fill_common(form: &mut EntryForm) {
        form.set(DraftField::Description, "Fever").expect("set");
        form.set(DraftField::Specialist, "Dr X").expect("set");
        form.set(DraftField::Date, "2024-01-01").expect("set");
    }

    #[test]
    fn fresh_form_cannot_submit() {
        let form = EntryForm::new(EntryKind::HealthCheck);
        assert!(!form.is_dirty());
        assert!(!form.can_submit());
        assert_eq!(
            form.draft().health_check_rating,
            Some(HealthCheckRating::CriticalRisk)
        );
        assert!(form.errors().contains(DraftField::Description));
    }

    #[test]
    fn errors_follow_each_change() {
        let mut form = EntryForm::new(EntryKind::HealthCheck);
        fill_common(&mut form);
        assert!(form.can_submit());

        form.set_rating(None);
        assert!(form.errors().contains(DraftField::HealthCheckRating));
        assert!(!form.can_submit());

        form.set(DraftField::HealthCheckRating, "0").expect("rating");
        assert!(form.can_submit());
    }

    #[test]
    fn switching_kind_discards_draft() {
        let mut form = EntryForm::new(EntryKind::HealthCheck);
        fill_common(&mut form);
        form.switch_kind(EntryKind::Hospital);

        assert_eq!(form.kind(), EntryKind::Hospital);
        assert!(!form.is_dirty());
        assert!(form.draft().description.is_empty());
    }

    #[test]
    fn failed_submit_keeps_draft() {
        let mut form = EntryForm::new(EntryKind::Hospital);
        fill_common(&mut form);

        let errors = form.submit().expect_err("discharge missing");
        assert!(errors.contains(DraftField::DischargeDate));
        assert!(errors.contains(DraftField::Criteria));
        assert_eq!(form.draft().description, "Fever");

        form.set(DraftField::DischargeDate, "2024-02-01").expect("set");
        form.set(DraftField::Criteria, "Recovered").expect("set");
        let entry = form.submit().expect("submittable");
        assert_eq!(
            entry.details,
            NewEntryDetails::Hospital {
                discharge: Some(Discharge {
                    date: "2024-02-01".into(),
                    criteria: "Recovered".into(),
                }),
            }
        );
    }

    #[test]
    fn untouched_form_reports_current_errors() {
        let mut form = EntryForm::new(EntryKind::HealthCheck);
        fill_common(&mut form);
        form.set_diagnosis_codes(vec!["Z57.1".into()]);
        assert!(form.submit().is_ok());

        let clean = EntryForm::new(EntryKind::HealthCheck);
        let errors = clean.submit().expect_err("untouched");
        assert_eq!(errors.len(), 3);
    }
}
