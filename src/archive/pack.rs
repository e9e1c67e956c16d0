use crate::archive::name::sanitize_folder_name;
use crate::archive::ArchiveError;
use crate::archive::DATA_MEMBER;
use crate::archive::METADATA_MEMBER;
use crate::envelope::Envelope;
use serde_json::json;
use std::io::Cursor;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Serializes an envelope into an in-memory ZIP archive.
///
/// The archive holds a single top-level folder named after the sanitized
/// dataset name, containing `data.json` (`{columns, rows}`) and
/// `metadata.json` (`{datasetName, metadata}`), both pretty-printed.
/// Downloading the blob is the caller's concern; no I/O happens here.
pub fn pack(envelope: &Envelope) -> Result<Vec<u8>, ArchiveError> {
    let folder = sanitize_folder_name(&envelope.dataset_name);
    let data = json!({
        "columns": envelope.columns,
        "rows": envelope.rows,
    });
    let metadata = json!({
        "datasetName": envelope.dataset_name,
        "metadata": envelope.metadata,
    });

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer
        .add_directory(format!("{folder}/"), options)
        .map_err(packaging)?;
    for (member, document) in [(DATA_MEMBER, &data), (METADATA_MEMBER, &metadata)] {
        let content = serde_json::to_string_pretty(document).map_err(packaging)?;
        writer
            .start_file(format!("{folder}/{member}"), options)
            .map_err(packaging)?;
        writer.write_all(content.as_bytes()).map_err(packaging)?;
    }
    let cursor = writer.finish().map_err(packaging)?;
    Ok(cursor.into_inner())
}

fn packaging(error: impl std::fmt::Display) -> ArchiveError {
    ArchiveError::Packaging(error.to_string())
}
