//! # OpenGIN Envelope Module
//!
//! Wire types for the OpenGIN Tabular document: the dataset metadata block,
//! the optional category forest used for descriptive classification, and the
//! envelope combining them with the canonicalized columns/rows data.

mod builder;

pub use builder::build_envelope;

use crate::tabular::Value;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Custom error types for metadata validation.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// A required field is missing or blank
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// An entry of `importantUrls` does not parse as an absolute URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The creation date is not an ISO calendar date
    #[error("Invalid creation date '{date}': expected an ISO calendar date (YYYY-MM-DD)")]
    InvalidDate { date: String },
}

/// A named classification node with arbitrarily nested children.
/// Purely descriptive; rows never reference categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Category>,
}

/// Dataset metadata collected alongside the tabular data.
///
/// Every field defaults when absent so that metadata objects written by
/// other producers still deserialize; strictness lives in [`Metadata::validate`],
/// which the forward (form) path applies before an envelope is built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub data_source: String,
    #[serde(default)]
    pub date_of_creation: String,
    #[serde(default)]
    pub data_entry_person: String,
    #[serde(default)]
    pub important_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

impl Metadata {
    /// Validates the constraints the metadata form enforces on entry:
    /// non-empty source, person, and description; an ISO calendar creation
    /// date; and absolute URLs throughout (blank entries are ignored here
    /// and dropped by [`Metadata::normalized`]).
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.data_source.trim().is_empty() {
            return Err(MetadataError::EmptyField { field: "dataSource" });
        }
        if self.data_entry_person.trim().is_empty() {
            return Err(MetadataError::EmptyField { field: "dataEntryPerson" });
        }
        if self.description.trim().is_empty() {
            return Err(MetadataError::EmptyField { field: "description" });
        }
        if NaiveDate::parse_from_str(&self.date_of_creation, "%Y-%m-%d").is_err() {
            return Err(MetadataError::InvalidDate {
                date: self.date_of_creation.to_owned(),
            });
        }
        for url in self.important_urls.iter().filter(|url| !url.trim().is_empty()) {
            Url::parse(url).map_err(|error| MetadataError::InvalidUrl {
                url: url.to_owned(),
                message: error.to_string(),
            })?;
        }
        Ok(())
    }

    /// Drops blank URL entries, preserving the order of the rest.
    pub fn normalized(mut self) -> Self {
        self.important_urls.retain(|url| !url.trim().is_empty());
        self
    }
}

/// The OpenGIN Tabular document: dataset name, metadata, and the
/// canonicalized columns/rows data. The unit serialized to and from
/// the archive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub dataset_name: String,
    pub metadata: Metadata,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> Metadata {
        Metadata {
            data_source: "Census Bureau".to_owned(),
            date_of_creation: "2024-03-01".to_owned(),
            data_entry_person: "A. Silva".to_owned(),
            important_urls: vec!["https://example.org/dataset".to_owned()],
            description: "Population counts".to_owned(),
            categories: None,
        }
    }

    #[test]
    fn valid_metadata_passes() {
        metadata().validate().unwrap();
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut invalid = metadata();
        invalid.data_source = "  ".to_owned();
        assert!(matches!(
            invalid.validate(),
            Err(MetadataError::EmptyField { field: "dataSource" })
        ));

        let mut invalid = metadata();
        invalid.description = String::new();
        assert!(matches!(
            invalid.validate(),
            Err(MetadataError::EmptyField { field: "description" })
        ));
    }

    #[test]
    fn relative_url_is_rejected() {
        let mut invalid = metadata();
        invalid.important_urls.push("not-a-url".to_owned());
        assert!(matches!(invalid.validate(), Err(MetadataError::InvalidUrl { .. })));
    }

    #[test]
    fn blank_urls_are_ignored_then_dropped() {
        let mut with_blanks = metadata();
        with_blanks.important_urls.push("  ".to_owned());
        with_blanks.validate().unwrap();

        let normalized = with_blanks.normalized();
        assert_eq!(normalized.important_urls, vec!["https://example.org/dataset"]);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut invalid = metadata();
        invalid.date_of_creation = "03/01/2024".to_owned();
        assert!(matches!(invalid.validate(), Err(MetadataError::InvalidDate { .. })));
    }

    #[test]
    fn category_forest_round_trips() {
        let mut described = metadata();
        described.categories = Some(vec![Category {
            name: "Demographics".to_owned(),
            subcategories: vec![Category {
                name: "Age".to_owned(),
                subcategories: Vec::new(),
            }],
        }]);

        let json = serde_json::to_string(&described).unwrap();
        let parsed: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, described);
    }

    #[test]
    fn absent_categories_are_not_serialized() {
        let json = serde_json::to_value(metadata()).unwrap();
        assert!(json.get("categories").is_none());
        assert!(json.get("dataSource").is_some());
    }

    #[test]
    fn foreign_metadata_object_still_parses() {
        let parsed: Metadata = serde_json::from_str(r#"{"dataSource":"x"}"#).unwrap();
        assert_eq!(parsed.data_source, "x");
        assert!(parsed.description.is_empty());
    }
}
