//! Staged conversion pipeline.
//!
//! Threads the wizard's intermediate state through explicit values owned by
//! the caller: ingest a payload, describe it with a dataset name and
//! validated metadata, then pack the archive. The core never reads or
//! writes any ambient store; each stage is a pure function over its inputs.

use crate::archive;
use crate::archive::sanitize_folder_name;
use crate::envelope::build_envelope;
use crate::envelope::Envelope;
use crate::envelope::Metadata;
use crate::envelope::MetadataError;
use crate::error::OpenGinError;
use crate::error::ResultMessage;
use crate::tabular::ingest;
use crate::tabular::SourceKind;
use crate::tabular::Table;
use tracing::debug;

/// An ingested payload awaiting its dataset description.
#[derive(Clone, Debug)]
pub struct Conversion {
    table: Table,
}

/// A fully described conversion, ready to be packaged.
#[derive(Clone, Debug)]
pub struct DescribedConversion {
    envelope: Envelope,
}

impl Conversion {
    /// Ingests an uploaded payload into the canonical table.
    pub fn ingest(payload: &[u8], kind: SourceKind) -> Result<Self, OpenGinError> {
        let table = ingest(payload, kind)
            .map_err(OpenGinError::from)
            .with_prefix("Failed to process file")?;
        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "payload ingested"
        );
        Ok(Self { table })
    }

    /// The ingested table, for preview before the metadata step.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Attaches the dataset name and metadata, validating both the way the
    /// metadata form does, and builds the envelope.
    pub fn describe(
        self,
        dataset_name: &str,
        metadata: Metadata,
    ) -> Result<DescribedConversion, OpenGinError> {
        if dataset_name.trim().is_empty() {
            return Err(MetadataError::EmptyField { field: "datasetName" }.into());
        }
        let metadata = metadata.normalized();
        metadata.validate().map_err(OpenGinError::from)?;
        debug!(dataset_name, "conversion described");
        Ok(DescribedConversion {
            envelope: build_envelope(&self.table, dataset_name, metadata),
        })
    }
}

impl DescribedConversion {
    /// The envelope, for review before download.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Packages the envelope into archive bytes.
    pub fn pack(&self) -> Result<Vec<u8>, OpenGinError> {
        archive::pack(&self.envelope)
            .map_err(OpenGinError::from)
            .with_prefix("Failed to generate archive")
    }

    /// Suggested download file name, `<sanitized-dataset-name>.zip`.
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", sanitize_folder_name(&self.envelope.dataset_name))
    }
}
