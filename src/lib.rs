//! Voyager profile scrubber library.
//!
//! Fetches raw profile, contact-info and company records from the voyager
//! API and normalizes them into a stable, backend-friendly schema.
//!
//! # Modules
//!
//! - `core`: Normalization layer (models, scrubbing, errors).
//! - `integrations`: HTTP transport and the voyager client.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `extract`: Urn, media path and domain extraction helpers.
//! - `headers`: Request header construction.
//! - `models`: Normalized output records.
//! - `raw_models`: Lenient raw API payloads.
//! - `scrubbing`: Per-entity normalization functions.
//! - `transport`: Minimal HTTP base client.
//! - `voyager_client`: Endpoint-aware client (profiles, companies, HTML fallback).

pub mod core;
pub mod integrations;

pub mod config;
pub mod errors;
pub mod extract;
pub mod headers;
pub mod models;
pub mod raw_models;
pub mod scrubbing;
pub mod transport;
pub mod voyager_client;

pub use errors::AppError;
pub use models::{NormalizedCompany, NormalizedProfile};
pub use voyager_client::VoyagerClient;
