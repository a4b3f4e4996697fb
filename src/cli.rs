use clap::{Args, Parser, Subcommand};
use patientor_client::ClientError;
use patientor_core::{DraftField, EntryForm, EntryKind, ModelResult, ValidationErrors};

#[derive(Parser)]
#[command(name = "patientor")]
#[command(about = "Patientor patient record viewer")]
pub struct Cli {
    /// REST API base URL (overrides PATIENTOR_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// HTTP timeout in seconds (overrides PATIENTOR_HTTP_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the API is reachable
    Ping,
    /// List all patients
    Patients,
    /// List all diagnoses
    Diagnoses,
    /// Show a patient and their entries
    Show {
        /// Patient ID
        id: String,
    },
    /// Add a new entry to a patient
    AddEntry {
        /// Patient ID
        id: String,
        #[command(subcommand)]
        entry: EntryArgs,
    },
}

#[derive(Args)]
pub struct CommonEntryArgs {
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub specialist: String,
    /// Entry date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub date: String,
    /// Diagnosis code (repeatable)
    #[arg(long = "diagnosis-code")]
    pub diagnosis_codes: Vec<String>,
    /// Print the request body instead of submitting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum EntryArgs {
    /// Health check entry
    HealthCheck {
        #[command(flatten)]
        common: CommonEntryArgs,
        /// Rating 0 (healthy) to 3 (critical risk); pass an empty value to clear
        #[arg(long)]
        rating: Option<String>,
    },
    /// Occupational healthcare entry
    Occupational {
        #[command(flatten)]
        common: CommonEntryArgs,
        #[arg(long, default_value = "")]
        employer: String,
        /// Sick leave start date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        sick_leave_start: String,
        /// Sick leave end date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        sick_leave_end: String,
    },
    /// Hospital entry
    Hospital {
        #[command(flatten)]
        common: CommonEntryArgs,
        /// Discharge date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        discharge_date: String,
        #[arg(long, default_value = "")]
        criteria: String,
    },
}

impl EntryArgs {
    pub fn common(&self) -> &CommonEntryArgs {
        match self {
            EntryArgs::HealthCheck { common, .. }
            | EntryArgs::Occupational { common, .. }
            | EntryArgs::Hospital { common, .. } => common,
        }
    }

    /// Fill a fresh form for the chosen kind, one field at a time.
    pub fn to_form(&self) -> ModelResult<EntryForm> {
        let (kind, fields): (EntryKind, Vec<(DraftField, &str)>) = match self {
            EntryArgs::HealthCheck { rating, .. } => (
                EntryKind::HealthCheck,
                rating
                    .as_deref()
                    .map(|r| vec![(DraftField::HealthCheckRating, r)])
                    .unwrap_or_default(),
            ),
            EntryArgs::Occupational {
                employer,
                sick_leave_start,
                sick_leave_end,
                ..
            } => (
                EntryKind::OccupationalHealthcare,
                vec![
                    (DraftField::EmployerName, employer.as_str()),
                    (DraftField::StartDate, sick_leave_start.as_str()),
                    (DraftField::EndDate, sick_leave_end.as_str()),
                ],
            ),
            EntryArgs::Hospital {
                discharge_date,
                criteria,
                ..
            } => (
                EntryKind::Hospital,
                vec![
                    (DraftField::DischargeDate, discharge_date.as_str()),
                    (DraftField::Criteria, criteria.as_str()),
                ],
            ),
        };

        let common = self.common();
        let mut form = EntryForm::new(kind);
        form.set(DraftField::Description, &common.description)?;
        form.set(DraftField::Specialist, &common.specialist)?;
        form.set(DraftField::Date, &common.date)?;
        for (field, value) in fields {
            form.set(field, value)?;
        }
        form.set_diagnosis_codes(
            common
                .diagnosis_codes
                .iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
        );
        Ok(form)
    }
}

/// One `field: message` line per invalid field.
pub fn validation_report(errors: &ValidationErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect()
}

/// Error returned from `main` for a failed submission.
///
/// The server's own message is used unchanged; the process prints it behind `Error: `.
pub fn submission_error(err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Server { message, .. } => anyhow::anyhow!(message),
        other => other.into(),
    }
}
