//! # Patientor Core
//!
//! Entry model and add-entry logic for the Patientor patient record viewer.
//!
//! This crate contains pure, synchronous data operations:
//! - the tagged entry model and patient/diagnosis types
//! - draft validation, payload building and the add-entry form session
//! - display models for patients and entries
//! - the in-memory patient/diagnosis store and its reducer
//!
//! **No I/O**: HTTP access to the REST API belongs in `patientor-client`.

pub mod builder;
pub mod constants;
pub mod diagnosis;
pub mod draft;
pub mod entry;
pub mod error;
pub mod form;
pub mod patient;
pub mod render;
pub mod store;
pub mod validation;

pub use builder::{build, NewEntry, NewEntryDetails};
pub use diagnosis::{Diagnosis, DiagnosisLookup};
pub use draft::{DraftField, EntryDraft};
pub use entry::{
    BaseEntry, Discharge, Entry, EntryKind, HealthCheckEntry, HealthCheckRating, HospitalEntry,
    OccupationalHealthcareEntry, SickLeave,
};
pub use error::{ModelError, ModelResult};
pub use form::EntryForm;
pub use patient::{Gender, Patient};
pub use render::{render, render_patient, EntryView, PatientView};
pub use store::{reducer, Action, State, Store};
pub use validation::{validate, FieldError, ValidationErrors};

pub use patientor_types::NonEmptyText;
