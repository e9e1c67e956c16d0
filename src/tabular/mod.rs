//! # Tabular Normalization Module
//!
//! This module provides the core functionality for turning raw CSV and JSON
//! payloads into a canonical in-memory table: an ordered column list plus
//! keyed row records. The canonical table is the pivot between the upload
//! formats and the positional columns/rows form used by the OpenGIN envelope.

mod canonical;
mod ingest;
mod table;
mod value;

pub use ingest::{ingest, SourceKind};
pub use table::{Record, Table};
pub use value::Value;

use thiserror::Error;

/// Custom error types for payload ingestion.
#[derive(Error, Debug)]
pub enum IngestError {
    /// CSV payload without a header row and at least one data row
    #[error("Input must contain a header row and at least one data row")]
    EmptyInput,

    /// Unparseable payload, or parsed JSON of an unexpected shape
    #[error("Invalid input format: {message}")]
    InvalidFormat { message: String },

    /// File extension outside the supported upload formats
    #[error("Unsupported file type '{extension}'; only CSV and JSON files are supported")]
    UnsupportedType { extension: String },
}
