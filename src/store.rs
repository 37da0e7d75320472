// src/store.rs
//! Canonical table shape handed to the persistence layer.
//!
//! Parsers return typed records; [`to_dataset`] flattens any [`Record`] into the
//! plain `headers + rows` form that the outside world appends to a table file.
use serde::Serialize;

use crate::config::schema::Schema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }

    /// Empty table with the schema's headers.
    pub fn with_schema(schema: &Schema) -> Self {
        Self { headers: Some(schema.headers()), rows: Vec::new() }
    }

    /// Index of a named column. `None` when there are no headers at all.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// One output row type with a fixed column layout and a stable identity key.
pub trait Record {
    /// Column layout of [`to_row`](Record::to_row).
    const SCHEMA: Schema;
    /// Name of the identity column (must be one of `SCHEMA.columns`).
    const KEY: &'static str;

    fn key(&self) -> &str;
    fn to_row(&self) -> Vec<String>;
}

pub fn to_dataset<T: Record>(records: &[T]) -> DataSet {
    DataSet {
        headers: Some(T::SCHEMA.headers()),
        rows: records.iter().map(Record::to_row).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EVENT_DETAILS;

    #[test]
    fn column_lookup_needs_headers() {
        let ds = DataSet { headers: None, rows: vec![row!["a"]] };
        assert_eq!(ds.column("URL"), None);

        let ds = DataSet::with_schema(&EVENT_DETAILS);
        assert_eq!(ds.column("URL"), Some(1));
        assert!(ds.is_empty());
    }
}
