use crate::tabular::value::Value;
use indexmap::IndexMap;

/// A single row keyed by column name, in column insertion order.
pub type Record = IndexMap<String, Value>;

/// The canonical in-memory table produced by ingestion.
///
/// Column order is significant: it defines both display order and the
/// positional mapping used when rows are projected into canonical form.
/// A record need not define every column; absent keys read as empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Ordered column names (duplicates are preserved as ingested)
    pub columns: Vec<String>,
    /// One record per data row
    pub rows: Vec<Record>,
}

impl Table {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let table = Table {
            columns: vec!["a".to_owned(), "b".to_owned()],
            rows: vec![Record::from_iter([("a".to_owned(), Value::from(1))])],
        };
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 1);
    }
}
