//! # Patientor Client
//!
//! HTTP access to the Patientor REST API.
//!
//! Handles:
//! - configuration resolved at startup (`ClientConfig`)
//! - the request/response contract of the patients, entries and diagnoses endpoints
//! - mapping of transport, server-reported and decode failures into `ClientError`
//!
//! Uses `patientor-core` for the wire types; all entry logic lives there.

#![warn(rust_2018_idioms)]

pub mod client;
pub mod config;
pub mod error;

pub use client::PatientorClient;
pub use config::{base_url_from_env_value, timeout_from_env_value, ClientConfig};
pub use error::{ClientError, ClientResult};
