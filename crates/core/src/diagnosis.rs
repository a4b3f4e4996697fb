//! Diagnosis reference data.
//!
//! Diagnoses are loaded once at startup and only ever read afterwards, keyed by code.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A diagnosis code with its human-readable name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin: Option<String>,
}

/// Read-only lookup from diagnosis code to diagnosis.
pub trait DiagnosisLookup {
    fn lookup(&self, code: &str) -> Option<&Diagnosis>;

    /// Name for `code`, or an empty string when the code is unknown.
    fn name_of(&self, code: &str) -> &str {
        self.lookup(code).map(|d| d.name.as_str()).unwrap_or("")
    }
}

impl DiagnosisLookup for HashMap<String, Diagnosis> {
    fn lookup(&self, code: &str) -> Option<&Diagnosis> {
        self.get(code)
    }
}
