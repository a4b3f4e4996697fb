//! Patient and diagnosis cache.
//!
//! [`State`] holds what has been fetched from the server. It changes only through [`reducer`],
//! which the owning [`Store`] applies for every dispatched [`Action`].

use crate::diagnosis::{Diagnosis, DiagnosisLookup};
use crate::patient::Patient;
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub patients: HashMap<String, Patient>,
    pub diagnoses: HashMap<String, Diagnosis>,
}

impl State {
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// Patients sorted by name, for listing.
    pub fn patients_by_name(&self) -> Vec<&Patient> {
        let mut patients: Vec<&Patient> = self.patients.values().collect();
        patients.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        patients
    }
}

impl DiagnosisLookup for State {
    fn lookup(&self, code: &str) -> Option<&Diagnosis> {
        self.diagnoses.lookup(code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Patients from the list endpoint. Records already cached are kept, since they may hold
    /// the full record with entries.
    SetPatientList(Vec<Patient>),
    /// A full patient record; replaces any cached record with the same id.
    AddPatient(Patient),
    /// Diagnoses keyed by code. The first record seen for a code is kept.
    SetDiagnoses(Vec<Diagnosis>),
}

pub fn reducer(mut state: State, action: Action) -> State {
    match action {
        Action::SetPatientList(patients) => {
            for patient in patients {
                state.patients.entry(patient.id.clone()).or_insert(patient);
            }
        }
        Action::AddPatient(patient) => {
            state.patients.insert(patient.id.clone(), patient);
        }
        Action::SetDiagnoses(diagnoses) => {
            for diagnosis in diagnoses {
                state
                    .diagnoses
                    .entry(diagnosis.code.clone())
                    .or_insert(diagnosis);
            }
        }
    }
    state
}

/// Owns the application [`State`].
#[derive(Debug, Default)]
pub struct Store {
    state: State,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        match &action {
            Action::SetPatientList(patients) => {
                tracing::debug!(count = patients.len(), "set patient list")
            }
            Action::AddPatient(patient) => {
                tracing::debug!(id = %patient.id, entries = patient.entries.len(), "add patient")
            }
            Action::SetDiagnoses(diagnoses) => {
                tracing::debug!(count = diagnoses.len(), "set diagnoses")
            }
        }
        let state = std::mem::take(&mut self.state);
        self.state = reducer(state, action);
    }
}
