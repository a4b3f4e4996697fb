mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{submission_error, validation_report, Cli, Commands, EntryArgs};
use patientor_client::{
    base_url_from_env_value, timeout_from_env_value, ClientConfig, PatientorClient,
};
use patientor_core::{render, render_patient, Action, Store};

/// Main entry point for the Patientor command line viewer
///
/// Talks to a running Patientor REST API.
///
/// # Environment Variables
/// - `PATIENTOR_API_BASE_URL`: REST API base URL (default: "http://localhost:3001/api")
/// - `PATIENTOR_HTTP_TIMEOUT_SECS`: request timeout in seconds (default: 30)
///
/// Command line flags take precedence over the environment.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patientor=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let base_url = base_url_from_env_value(
        cli.api_url
            .clone()
            .or_else(|| std::env::var("PATIENTOR_API_BASE_URL").ok()),
    );
    let timeout = timeout_from_env_value(
        cli.timeout_secs
            .clone()
            .or_else(|| std::env::var("PATIENTOR_HTTP_TIMEOUT_SECS").ok()),
    )?;
    let config = ClientConfig::new(&base_url, timeout)?;
    let client = PatientorClient::new(&config)?;

    match cli.command {
        Some(Commands::Ping) => {
            client.ping().await?;
            println!("pong from {}", client.base_url());
        }
        Some(Commands::Patients) | None => {
            let store = load(&client).await?;
            println!("{:<38} {:<24} {:<8} occupation", "id", "name", "gender");
            for patient in store.state().patients_by_name() {
                println!(
                    "{:<38} {:<24} {:<8} {}",
                    patient.id,
                    patient.name,
                    patient.gender.as_str(),
                    patient.occupation
                );
            }
        }
        Some(Commands::Diagnoses) => {
            let mut diagnoses = client.list_diagnoses().await?;
            diagnoses.sort_by(|a, b| a.code.cmp(&b.code));
            for diagnosis in diagnoses {
                match diagnosis.latin {
                    Some(latin) => println!("{:<8} {} ({latin})", diagnosis.code, diagnosis.name),
                    None => println!("{:<8} {}", diagnosis.code, diagnosis.name),
                }
            }
        }
        Some(Commands::Show { id }) => {
            let mut store = load(&client).await?;
            let patient = client.get_patient(&id).await?;
            store.dispatch(Action::AddPatient(patient));

            let state = store.state();
            let Some(patient) = state.patient(&id) else {
                anyhow::bail!("patient {id} not found");
            };
            print!("{}", render_patient(patient));
            println!();
            println!("entries");
            if patient.entries.is_empty() {
                println!("  (none)");
            }
            for entry in &patient.entries {
                println!();
                print!("{}", render(entry, state));
            }
        }
        Some(Commands::AddEntry { id, entry }) => add_entry(&client, &id, &entry).await?,
    }

    Ok(())
}

/// Fetch the patient list and diagnoses into a fresh store, the way the viewer does on startup.
async fn load(client: &PatientorClient) -> anyhow::Result<Store> {
    if let Err(e) = client.ping().await {
        tracing::warn!("ping failed: {e}");
    }

    let mut store = Store::new();
    let (patients, diagnoses) = tokio::try_join!(client.list_patients(), client.list_diagnoses())?;
    store.dispatch(Action::SetPatientList(patients));
    store.dispatch(Action::SetDiagnoses(diagnoses));
    Ok(store)
}

async fn add_entry(client: &PatientorClient, id: &str, args: &EntryArgs) -> anyhow::Result<()> {
    let form = args.to_form()?;
    let payload = match form.submit() {
        Ok(payload) => payload,
        Err(errors) => {
            for line in validation_report(&errors) {
                eprintln!("{line}");
            }
            anyhow::bail!("entry not submitted: {} invalid field(s)", errors.len());
        }
    };

    if args.common().dry_run {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut store = load(client).await?;
    let patient = client
        .add_entry(id, &payload)
        .await
        .map_err(submission_error)?;
    tracing::info!(patient = %patient.id, kind = %payload.kind(), "entry added");

    let added = patient.entries.last().cloned();
    store.dispatch(Action::AddPatient(patient));
    if let Some(entry) = added {
        print!("{}", render(&entry, store.state()));
    }
    Ok(())
}
