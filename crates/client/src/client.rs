//! Async HTTP client for the Patientor REST API.
//!
//! Endpoints:
//! - `GET  /ping`
//! - `GET  /patients`
//! - `GET  /patients/{id}`
//! - `GET  /diagnoses`
//! - `POST /patients/{id}/entries`
//!
//! Non-2xx responses become [`ClientError::Server`] with the server's `{"error": "..."}`
//! message. Response bodies are decoded with `serde_path_to_error` so that schema mismatches
//! report the failing JSON path.

use crate::{ClientConfig, ClientError, ClientResult};
use patientor_core::{Diagnosis, NewEntry, NonEmptyText, Patient};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error body returned by the REST API.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone, Debug)]
pub struct PatientorClient {
    base_url: Url,
    http: reqwest::Client,
}

impl PatientorClient {
    /// Build a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|source| ClientError::Transport {
                url: config.base_url().to_string(),
                source,
            })?;

        Ok(Self {
            base_url: config.base_url().clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Liveness probe. The response body is ignored.
    pub async fn ping(&self) -> ClientResult<()> {
        let url = self.url(&["ping"])?;
        let response = self.send(self.http.get(url.clone()), &url).await?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn list_patients(&self) -> ClientResult<Vec<Patient>> {
        self.get_json(&["patients"]).await
    }

    pub async fn get_patient(&self, id: &str) -> ClientResult<Patient> {
        let id = non_empty_id(id)?;
        self.get_json(&["patients", id.as_str()]).await
    }

    pub async fn list_diagnoses(&self) -> ClientResult<Vec<Diagnosis>> {
        self.get_json(&["diagnoses"]).await
    }

    /// Submit a new entry and return the updated patient, including the server-assigned id of
    /// the new entry.
    pub async fn add_entry(&self, patient_id: &str, entry: &NewEntry) -> ClientResult<Patient> {
        let id = non_empty_id(patient_id)?;
        let url = self.url(&["patients", id.as_str(), "entries"])?;
        tracing::info!(patient = %id.as_str(), kind = %entry.kind(), "submitting entry");

        let response = self.send(self.http.post(url.clone()).json(entry), &url).await?;
        decode(response).await
    }

    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidConfig("API base URL cannot be used as a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.url(segments)?;
        let response = self.send(self.http.get(url.clone()), &url).await?;
        decode(response).await
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> ClientResult<Response> {
        tracing::debug!(%url, "request");
        request.send().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

fn non_empty_id(raw: &str) -> ClientResult<NonEmptyText> {
    NonEmptyText::new(raw).map_err(|_| ClientError::InvalidInput("patient id cannot be empty".into()))
}

async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string());
    tracing::warn!(status = status.as_u16(), %message, "server reported an error");

    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let url = response.url().to_string();
    let response = check_status(response).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ClientError::Transport { url, source })?;

    let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let path = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        ClientError::Decode {
            path,
            source: err.into_inner(),
        }
    })
}
