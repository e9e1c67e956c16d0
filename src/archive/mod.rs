//! # Archive Module
//!
//! Serializes an [`Envelope`](crate::envelope::Envelope) into a ZIP archive
//! with a single sanitized top-level folder, and parses such archives back
//! into canonical columns/rows data plus metadata. The archive is the only
//! durable artifact of the conversion; both members are pretty-printed
//! UTF-8 JSON.

mod name;
mod pack;
mod parse;

pub use name::sanitize_folder_name;
pub use pack::pack;
pub use parse::{parse_archive, ArchiveSummary, MetadataDocument, ParsedArchive, TabularDocument};

use thiserror::Error;

/// Archive member holding the columns/rows data.
pub const DATA_MEMBER: &str = "data.json";
/// Archive member holding the dataset name and metadata.
pub const METADATA_MEMBER: &str = "metadata.json";

/// Custom error types for archive packaging and parsing.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// A required member was not found by any lookup pass.
    /// The message names what was found and every member path, so a user
    /// can see how their archive differs from the expected layout.
    #[error("Invalid OpenGIN archive: missing {missing}. Found: {found}. Members: [{}]", .members.join(", "))]
    MissingMember {
        missing: String,
        found: String,
        members: Vec<String>,
    },

    /// A located member is not valid JSON
    #[error("'{member}' is not valid JSON: {message}")]
    MalformedJson { member: String, message: String },

    /// A member parses as JSON but violates the document structure
    #[error("Invalid archive structure: {message}")]
    InvalidShape { message: String },

    /// A data row's length differs from the column count
    #[error("Row {row} has {actual} values but the archive declares {expected} columns")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The archive bytes could not be opened or a member could not be read
    #[error("Failed to read archive: {0}")]
    Unreadable(String),

    /// Archive construction failed
    #[error("Failed to package archive: {0}")]
    Packaging(String),
}
