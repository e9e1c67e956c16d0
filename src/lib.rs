//! # OpenGIN Tabular Engine
//!
//! A library for converting CSV and JSON payloads into the OpenGIN Tabular
//! format and packaging the result as a ZIP archive for later re-upload.
//!
//! ## Features
//!
//! - **Multi-format ingestion**: CSV payloads and JSON payloads (arrays of
//!   objects or an already-canonical columns/rows document)
//! - **Canonical table model**: ordered columns plus keyed row records, with
//!   a positional projection for storage and export
//! - **Envelope building**: dataset name, validated metadata, and an
//!   optional category forest combined with the canonicalized data
//! - **Archive round-trip**: pack into a `<folder>/data.json` +
//!   `<folder>/metadata.json` ZIP and parse such archives back, tolerating
//!   members nested at any depth
//! - **Error handling**: every operation returns a typed failure with
//!   enough detail to render an actionable message
//!
//! All operations are synchronous, CPU-bound transformations over fully
//! buffered in-memory payloads; no state is shared between calls.

pub mod archive;
pub mod envelope;
mod error;
mod helpers;
pub mod pipeline;
pub mod tabular;

pub use crate::archive::{
    pack, parse_archive, sanitize_folder_name, ArchiveError, ArchiveSummary, MetadataDocument,
    ParsedArchive, TabularDocument,
};
pub use crate::envelope::{build_envelope, Category, Envelope, Metadata, MetadataError};
pub use crate::error::{OpenGinError, ResultMessage};
pub use crate::pipeline::{Conversion, DescribedConversion};
pub use crate::tabular::{ingest, IngestError, Record, SourceKind, Table, Value};
