use crate::helpers::text;
use crate::tabular::table::Record;
use crate::tabular::table::Table;
use crate::tabular::value::Value;
use crate::tabular::IngestError;
use serde::Deserialize;

/// Declared kind of an uploaded payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Json,
}

impl SourceKind {
    /// Detects the payload kind from a file name extension.
    ///
    /// Matching is case-insensitive. Anything other than `.csv` or `.json`
    /// is rejected.
    pub fn detect(file_name: &str) -> Result<Self, IngestError> {
        let extension = file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(IngestError::UnsupportedType { extension }),
        }
    }
}

/// The already-canonical columns/rows document shape, accepted directly
/// when a JSON upload was produced by an earlier export.
#[derive(Deserialize)]
struct EnvelopeShape {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Parses a raw payload into a canonical [`Table`].
///
/// Pure and deterministic: identical bytes always yield the identical table.
///
/// CSV fields are split on commas and trimmed; quoted fields are not
/// interpreted, so a field may not contain a comma or an embedded newline.
/// Duplicate header names are preserved; on lookup the last duplicate wins.
pub fn ingest(payload: &[u8], kind: SourceKind) -> Result<Table, IngestError> {
    let text = text::decode(payload);
    match kind {
        SourceKind::Csv => ingest_csv(&text),
        SourceKind::Json => ingest_json(&text),
    }
}

/// Parses CSV text: first non-empty line is the header, every later
/// non-empty line becomes one record zipped positionally against it.
/// Short lines pad with empty strings; extra fields are discarded.
fn ingest_csv(text: &str) -> Result<Table, IngestError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(IngestError::EmptyInput);
    }

    let columns: Vec<String> = lines[0].split(',').map(|field| field.trim().to_owned()).collect();
    let rows = lines[1..]
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            columns
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    let field = fields.get(index).copied().unwrap_or_default();
                    (name.to_owned(), Value::from(field))
                })
                .collect::<Record>()
        })
        .collect();

    Ok(Table { columns, rows })
}

/// Parses JSON text with an explicit shape decision procedure:
/// columns/rows document first, then non-empty array of objects, else reject.
fn ingest_json(text: &str) -> Result<Table, IngestError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|error| IngestError::InvalidFormat { message: error.to_string() })?;

    // Already-canonical export: zip each positional row back into a record.
    if let Ok(envelope) = serde_json::from_value::<EnvelopeShape>(value.clone()) {
        let rows = envelope
            .rows
            .into_iter()
            .map(|row| {
                envelope
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(name, cell)| (name.to_owned(), cell))
                    .collect::<Record>()
            })
            .collect();
        return Ok(Table { columns: envelope.columns, rows });
    }

    match value {
        serde_json::Value::Array(items) if items.is_empty() => Err(IngestError::InvalidFormat {
            message: "array must contain at least one object".to_owned(),
        }),
        value @ serde_json::Value::Array(_) => {
            let rows: Vec<Record> =
                serde_json::from_value(value).map_err(|_| IngestError::InvalidFormat {
                    message: "array elements must be objects with scalar values".to_owned(),
                })?;
            let columns = rows[0].keys().cloned().collect();
            Ok(Table { columns, rows })
        }
        _ => Err(IngestError::InvalidFormat {
            message: "expected an array of objects or a columns/rows document".to_owned(),
        }),
    }
}
