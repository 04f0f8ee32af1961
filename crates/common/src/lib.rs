//! Shared utilities, configuration, and error handling for Devlink
//!
//! This crate provides common functionality used across the Devlink backend:
//! - Configuration loaded from the environment
//! - Error types and their HTTP rendering
//! - Request extractors and response envelopes

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod response;

pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{not_blank, parse_id, ValidatedJson};
pub use response::Envelope;
