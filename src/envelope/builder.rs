use crate::envelope::Envelope;
use crate::envelope::Metadata;
use crate::tabular::Table;

/// Combines a canonical table, a dataset name, and metadata into an
/// [`Envelope`].
///
/// A pure structural merge: the table is canonicalized into positional rows
/// and nothing is validated here. Dataset-name non-emptiness and metadata
/// validity are the caller's responsibility (the form layer enforces both
/// before this point).
pub fn build_envelope(table: &Table, dataset_name: &str, metadata: Metadata) -> Envelope {
    Envelope {
        dataset_name: dataset_name.to_owned(),
        metadata,
        columns: table.columns.clone(),
        rows: table.canonical_rows(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::{ingest, SourceKind, Value};

    #[test]
    fn merges_table_name_and_metadata() {
        let table = ingest(br#"[{"a":1,"b":2},{"a":3,"b":4}]"#, SourceKind::Json).unwrap();
        let envelope = build_envelope(&table, "My Dataset", Metadata::default());

        assert_eq!(envelope.dataset_name, "My Dataset");
        assert_eq!(envelope.columns, vec!["a", "b"]);
        assert_eq!(
            envelope.rows,
            vec![
                vec![Value::Int(1), Value::Int(2)],
                vec![Value::Int(3), Value::Int(4)],
            ]
        );
    }
}
