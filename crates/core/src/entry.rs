//! Patient entry model.
//!
//! An [`Entry`] is one clinical record event belonging to a patient. Entries are a closed sum
//! type tagged on the JSON `type` field; each kind carries its own required and optional fields
//! on top of the shared [`BaseEntry`].
//!
//! Notes:
//! - `healthCheckRating` travels as a bare number (0..=3) and is range-checked on decode.
//! - A stored entry whose `type` is not one of the known kinds fails to decode.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Kinds
// ============================================================================

/// The three mutually exclusive entry shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    HealthCheck,
    OccupationalHealthcare,
    Hospital,
}

impl EntryKind {
    /// Wire tag used in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::HealthCheck => "HealthCheck",
            EntryKind::OccupationalHealthcare => "OccupationalHealthcare",
            EntryKind::Hospital => "Hospital",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Health check rating
// ============================================================================

/// Ordinal health check rating, encoded as `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HealthCheckRating {
    Healthy = 0,
    LowRisk = 1,
    HighRisk = 2,
    CriticalRisk = 3,
}

impl HealthCheckRating {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode a wire ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RatingOutOfRange`] for anything outside `0..=3`.
    pub fn from_ordinal(value: u64) -> ModelResult<Self> {
        match value {
            0 => Ok(HealthCheckRating::Healthy),
            1 => Ok(HealthCheckRating::LowRisk),
            2 => Ok(HealthCheckRating::HighRisk),
            3 => Ok(HealthCheckRating::CriticalRisk),
            other => Err(ModelError::RatingOutOfRange(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthCheckRating::Healthy => "Healthy",
            HealthCheckRating::LowRisk => "Low risk",
            HealthCheckRating::HighRisk => "High risk",
            HealthCheckRating::CriticalRisk => "Critical risk",
        }
    }
}

impl FromStr for HealthCheckRating {
    type Err = ModelError;

    /// Accepts the ordinal (`"0"`..`"3"`) as typed into a number field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidRating(s.to_string()))?;
        Self::from_ordinal(value)
    }
}

impl Serialize for HealthCheckRating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for HealthCheckRating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        HealthCheckRating::from_ordinal(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Sub-objects
// ============================================================================

/// Sick leave period. Both dates are always present together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickLeave {
    pub start_date: String,
    pub end_date: String,
}

/// Hospital discharge details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discharge {
    pub date: String,
    pub criteria: String,
}

// ============================================================================
// Entries
// ============================================================================

/// Fields shared by every entry kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEntry {
    /// Server-assigned identifier.
    pub id: String,
    pub description: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub specialist: String,
    /// Ordered diagnosis codes. May reference codes missing from the diagnosis list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    pub health_check_rating: HealthCheckRating,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationalHealthcareEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    pub employer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<SickLeave>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalEntry {
    #[serde(flatten)]
    pub base: BaseEntry,
    pub discharge: Discharge,
}

/// A stored patient entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entry {
    HealthCheck(HealthCheckEntry),
    OccupationalHealthcare(OccupationalHealthcareEntry),
    Hospital(HospitalEntry),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::HealthCheck(_) => EntryKind::HealthCheck,
            Entry::OccupationalHealthcare(_) => EntryKind::OccupationalHealthcare,
            Entry::Hospital(_) => EntryKind::Hospital,
        }
    }

    pub fn base(&self) -> &BaseEntry {
        match self {
            Entry::HealthCheck(e) => &e.base,
            Entry::OccupationalHealthcare(e) => &e.base,
            Entry::Hospital(e) => &e.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn date(&self) -> &str {
        &self.base().date
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub fn diagnosis_codes(&self) -> &[String] {
        &self.base().diagnosis_codes
    }
}
