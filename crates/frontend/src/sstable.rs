use {
    crate::{
        csv::{project_rows, read_delimited_file},
        error::{self, Result},
    },
    def::{Column, Row, Table, Value},
    snafu::prelude::*,
    std::{collections::BTreeMap, path::Path},
};

/// A delimited file whose rows are strictly ascending by their first
/// column, materialized with a key index for point lookups.
///
/// Same wire format as [`crate::CsvTable`]; the sortedness requirement is
/// what makes the index cheap to build and scans come back in key order.
#[derive(Debug)]
pub struct IndexedFileTable {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
    index: BTreeMap<String, usize>,
}

impl IndexedFileTable {
    pub fn load(name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (columns, rows) = read_delimited_file(path)?;

        let mut index = BTreeMap::new();
        let mut previous: Option<&str> = None;
        for (i, row) in rows.iter().enumerate() {
            let key = match &row[0] {
                Value::String(key) => key.as_str(),
                _ => unreachable!(),
            };
            ensure!(
                previous.is_none() || previous < Some(key),
                error::UnsortedKeySnafu {
                    path,
                    line_number: i + 2,
                }
            );

            index.insert(key.to_string(), i);
            previous = Some(key);
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
            index,
        })
    }

    /// Point lookup by key column value.
    pub fn get(&self, key: &str) -> Option<&Row> {
        self.index.get(key).map(|&i| &self.rows[i])
    }
}

impl Table for IndexedFileTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn scan(&self, column_indices: &[usize]) -> Box<dyn Iterator<Item = Row> + '_> {
        Box::new(project_rows(&self.rows, column_indices))
    }
}
