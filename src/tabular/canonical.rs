use crate::tabular::table::Table;
use crate::tabular::value::Value;

impl Table {
    /// Projects every record onto the column order, producing the positional
    /// columns/rows form used for storage and export.
    ///
    /// Each output row has exactly `columns.len()` entries, with index *i*
    /// holding the record's value for `columns[i]`. Absent keys become the
    /// empty-string sentinel; this substitution is policy, not an error.
    pub fn canonical_rows(&self) -> Vec<Vec<Value>> {
        self.rows
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|name| record.get(name).cloned().unwrap_or_else(Value::empty))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::table::Record;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn projection_follows_column_order() {
        let table = Table {
            columns: vec!["a".to_owned(), "b".to_owned()],
            rows: vec![
                record(&[("b", Value::Int(2)), ("a", Value::Int(1))]),
                record(&[("a", Value::Int(3)), ("b", Value::Int(4))]),
            ],
        };
        assert_eq!(
            table.canonical_rows(),
            vec![
                vec![Value::Int(1), Value::Int(2)],
                vec![Value::Int(3), Value::Int(4)],
            ]
        );
    }

    #[test]
    fn absent_keys_become_empty_strings() {
        let table = Table {
            columns: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            rows: vec![record(&[("b", Value::from("x"))])],
        };
        assert_eq!(
            table.canonical_rows(),
            vec![vec![Value::empty(), Value::from("x"), Value::empty()]]
        );
    }

    #[test]
    fn every_row_matches_column_count() {
        let table = Table {
            columns: vec!["a".to_owned(), "b".to_owned()],
            rows: vec![record(&[]), record(&[("a", Value::Bool(true))])],
        };
        let rows = table.canonical_rows();
        assert_eq!(rows.len(), table.row_count());
        assert!(rows.iter().all(|row| row.len() == table.column_count()));
    }
}
