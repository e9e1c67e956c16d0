use crate::archive::ArchiveError;
use crate::archive::DATA_MEMBER;
use crate::archive::METADATA_MEMBER;
use crate::envelope::Metadata;
use crate::tabular::Value;
use std::io::Cursor;
use std::io::Read;
use tracing::debug;
use zip::ZipArchive;

/// The columns/rows half of a parsed archive, the exact inverse of what the
/// packager wrote into `data.json`.
#[derive(Clone, Debug, PartialEq)]
pub struct TabularDocument {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// The `metadata.json` half of a parsed archive.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataDocument {
    pub dataset_name: String,
    pub metadata: Metadata,
}

/// A fully parsed and structurally validated OpenGIN archive.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedArchive {
    pub data: TabularDocument,
    pub metadata: MetadataDocument,
}

/// A compact overview of a parsed archive for display before charting.
#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveSummary {
    pub dataset_name: String,
    pub total_rows: usize,
    pub total_columns: usize,
    pub columns: Vec<String>,
    pub sample_rows: Vec<Vec<Value>>,
}

impl ParsedArchive {
    /// Dataset name, dimensions, and the first five rows as a sample.
    pub fn summary(&self) -> ArchiveSummary {
        ArchiveSummary {
            dataset_name: self.metadata.dataset_name.to_owned(),
            total_rows: self.data.rows.len(),
            total_columns: self.data.columns.len(),
            columns: self.data.columns.to_owned(),
            sample_rows: self.data.rows.iter().take(5).cloned().collect(),
        }
    }

    /// Re-checks the whole-archive invariants as a single boolean:
    /// non-empty columns and rows, uniform row width, non-empty dataset name.
    pub fn is_valid(&self) -> bool {
        !self.data.columns.is_empty()
            && !self.data.rows.is_empty()
            && self
                .data
                .rows
                .iter()
                .all(|row| row.len() == self.data.columns.len())
            && !self.metadata.dataset_name.is_empty()
    }
}

/// Parses archive bytes into canonical tabular data plus metadata.
///
/// Each required member is located by three lookup passes in fixed priority
/// order: an exact root-level name, any path ending with `/<name>` (the
/// packager's folder wrapping, at any depth), then any path simply ending
/// with the name. This tolerates the producer variation seen in the wild
/// without guessing.
pub fn parse_archive(bytes: &[u8]) -> Result<ParsedArchive, ArchiveError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|error| ArchiveError::Unreadable(error.to_string()))?;
    let members: Vec<String> = archive.file_names().map(str::to_owned).collect();
    debug!(count = members.len(), "scanning archive members");

    let data_path = locate_member(&members, DATA_MEMBER).map(str::to_owned);
    let metadata_path = locate_member(&members, METADATA_MEMBER).map(str::to_owned);
    debug!(?data_path, ?metadata_path, "member lookup finished");

    let (data_path, metadata_path) = match (data_path, metadata_path) {
        (Some(data_path), Some(metadata_path)) => (data_path, metadata_path),
        (data_path, metadata_path) => {
            return Err(missing_member(data_path, metadata_path, &members));
        }
    };

    let data_text = read_member_text(&mut archive, &data_path)?;
    let metadata_text = read_member_text(&mut archive, &metadata_path)?;

    let data_value: serde_json::Value =
        serde_json::from_str(&data_text).map_err(|error| ArchiveError::MalformedJson {
            member: data_path.to_owned(),
            message: error.to_string(),
        })?;
    let metadata_value: serde_json::Value =
        serde_json::from_str(&metadata_text).map_err(|error| ArchiveError::MalformedJson {
            member: metadata_path.to_owned(),
            message: error.to_string(),
        })?;

    Ok(ParsedArchive {
        data: validate_data(&data_value)?,
        metadata: validate_metadata(&metadata_value)?,
    })
}

/// Finds a member by the three-pass lookup. Passes are evaluated in order;
/// the first match of the earliest pass wins.
///
/// "metadata.json" itself ends with "data.json", so the suffix pass must not
/// let a metadata member satisfy the data lookup.
fn locate_member<'a>(members: &'a [String], name: &str) -> Option<&'a str> {
    let nested = format!("/{name}");
    let decoy = |member: &str| name == DATA_MEMBER && member.ends_with(METADATA_MEMBER);
    members
        .iter()
        .find(|member| *member == name)
        .or_else(|| members.iter().find(|member| member.ends_with(&nested)))
        .or_else(|| {
            members
                .iter()
                .find(|member| member.ends_with(name) && !decoy(member))
        })
        .map(String::as_str)
}

fn missing_member(
    data_path: Option<String>,
    metadata_path: Option<String>,
    members: &[String],
) -> ArchiveError {
    let located = [(DATA_MEMBER, data_path), (METADATA_MEMBER, metadata_path)];
    let missing: Vec<&str> = located
        .iter()
        .filter(|(_, path)| path.is_none())
        .map(|(name, _)| *name)
        .collect();
    let found: Vec<String> = located
        .iter()
        .filter_map(|(name, path)| path.as_ref().map(|path| format!("{name} at '{path}'")))
        .collect();
    ArchiveError::MissingMember {
        missing: missing.join(" and "),
        found: if found.is_empty() {
            "no expected members".to_owned()
        } else {
            found.join(", ")
        },
        members: members
            .iter()
            .filter(|member| !member.ends_with('/'))
            .cloned()
            .collect(),
    }
}

fn read_member_text(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    path: &str,
) -> Result<String, ArchiveError> {
    let mut member = archive
        .by_name(path)
        .map_err(|error| ArchiveError::Unreadable(error.to_string()))?;
    let mut text = String::new();
    member
        .read_to_string(&mut text)
        .map_err(|error| ArchiveError::Unreadable(error.to_string()))?;
    Ok(text)
}

/// Validates `data.json`: a `columns` array of strings, a `rows` array of
/// arrays of scalars, and every row exactly as wide as the column list.
fn validate_data(value: &serde_json::Value) -> Result<TabularDocument, ArchiveError> {
    let object = value.as_object().ok_or_else(|| invalid_shape("data.json must be a JSON object"))?;

    let columns = object
        .get("columns")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| invalid_shape("data.json must contain a 'columns' array"))?;
    let columns: Vec<String> = columns
        .iter()
        .map(|column| column.as_str().map(str::to_owned))
        .collect::<Option<_>>()
        .ok_or_else(|| invalid_shape("'columns' must be an array of strings"))?;

    let raw_rows = object
        .get("rows")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| invalid_shape("data.json must contain a 'rows' array"))?;

    let mut rows = Vec::with_capacity(raw_rows.len());
    for (index, raw_row) in raw_rows.iter().enumerate() {
        let raw_row = raw_row
            .as_array()
            .ok_or_else(|| invalid_shape(&format!("row {index} is not an array")))?;
        if raw_row.len() != columns.len() {
            return Err(ArchiveError::ShapeMismatch {
                row: index,
                expected: columns.len(),
                actual: raw_row.len(),
            });
        }
        let row: Vec<Value> = raw_row
            .iter()
            .map(|cell| {
                serde_json::from_value(cell.to_owned())
                    .map_err(|_| invalid_shape(&format!("row {index} contains a non-scalar value")))
            })
            .collect::<Result<_, _>>()?;
        rows.push(row);
    }

    Ok(TabularDocument { columns, rows })
}

/// Validates `metadata.json`: a non-empty `datasetName` string and a
/// `metadata` object.
fn validate_metadata(value: &serde_json::Value) -> Result<MetadataDocument, ArchiveError> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid_shape("metadata.json must be a JSON object"))?;

    let dataset_name = object
        .get("datasetName")
        .and_then(serde_json::Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| invalid_shape("metadata.json must contain a non-empty 'datasetName' string"))?
        .to_owned();

    let metadata_value = object
        .get("metadata")
        .filter(|metadata| metadata.is_object())
        .ok_or_else(|| invalid_shape("metadata.json must contain a 'metadata' object"))?;
    let metadata: Metadata = serde_json::from_value(metadata_value.to_owned())
        .map_err(|error| invalid_shape(&format!("'metadata' fields are malformed: {error}")))?;

    Ok(MetadataDocument { dataset_name, metadata })
}

fn invalid_shape(message: &str) -> ArchiveError {
    ArchiveError::InvalidShape {
        message: message.to_owned(),
    }
}
