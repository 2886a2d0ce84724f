use {
    crate::error::{self, Result},
    def::{Column, DataType, Row, Table, Value},
    snafu::prelude::*,
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
};

/// A comma-delimited file materialized as an in-memory table.
///
/// The header line fixes the column count and names; every column is of
/// string type, leaving coercion to the resolver and evaluator. Rows
/// iterate in file order.
#[derive(Debug)]
pub struct CsvTable {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl CsvTable {
    pub fn load(name: &str, path: impl AsRef<Path>) -> Result<Self> {
        let (columns, rows) = read_delimited_file(path.as_ref())?;

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }
}

impl Table for CsvTable {
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

pub(crate) fn project_rows<'a>(
    rows: &'a [Row],
    column_indices: &[usize],
) -> impl Iterator<Item = Row> + 'a {
    let column_indices = column_indices.to_vec();
    rows.iter()
        .map(move |row| column_indices.iter().map(|&i| row[i].clone()).collect())
}

/// Reads header + data lines, splitting fields on `,`. There is no
/// quoting; a field cannot contain a literal comma. A row whose field
/// count differs from the header fails the whole load.
pub(crate) fn read_delimited_file(path: &Path) -> Result<(Vec<Column>, Vec<Row>)> {
    let file = File::open(path).context(error::OpenFileSnafu { path })?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .ok_or_else(|| error::MissingHeaderSnafu { path }.build())?
        .context(error::ReadFileSnafu { path })?;
    let columns = header
        .split(',')
        .map(|name| Column::new(name, DataType::String))
        .collect::<Vec<_>>();

    let mut rows = vec![];
    for (i, line) in lines.enumerate() {
        let line = line.context(error::ReadFileSnafu { path })?;
        let row = line.split(',').map(Value::from).collect::<Row>();

        ensure!(
            row.len() == columns.len(),
            error::MalformedRowSnafu {
                path,
                line_number: i + 2,
                expected: columns.len(),
                found: row.len(),
            }
        );
        rows.push(row);
    }

    Ok((columns, rows))
}

#[cfg(test)]
pub(crate) mod tests {
    use {
        super::*,
        crate::ErrorKind,
        std::io::Write,
        tempfile::{NamedTempFile, TempDir},
    };

    pub(crate) fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = CsvTable::load("t", dir.path().join("nothing_here.csv")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn loads_header_and_rows_in_file_order() {
        let file = write_file("col1,col2,col3\nhello,45,123.456\ngoodbye,90,867.5309\n");
        let table = CsvTable::load("great-table-name", file.path()).unwrap();

        assert_eq!(table.name(), "great-table-name");
        assert_eq!(table.num_columns(), 3);
        for (i, name) in ["col1", "col2", "col3"].into_iter().enumerate() {
            assert_eq!(table.column(i).name, name);
            assert_eq!(table.column(i).data_type, DataType::String);
        }

        let mut iter = table.scan(&[0, 1, 2]);
        assert_eq!(
            iter.next(),
            Some(vec![
                Value::from("hello"),
                Value::from("45"),
                Value::from("123.456"),
            ])
        );
        assert_eq!(
            iter.next(),
            Some(vec![
                Value::from("goodbye"),
                Value::from("90"),
                Value::from("867.5309"),
            ])
        );
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn scan_projects_requested_columns_in_order() {
        let file = write_file("a,b,c\n1,2,3\n");
        let table = CsvTable::load("t", file.path()).unwrap();

        let rows = table.scan(&[2, 0]).collect::<Vec<_>>();
        assert_eq!(rows, vec![vec![Value::from("3"), Value::from("1")]]);

        // empty projection still reports each row
        assert_eq!(table.scan(&[]).count(), 1);
    }

    #[test]
    fn header_only_file_yields_no_rows() {
        let file = write_file("a,b\n");
        let table = CsvTable::load("t", file.path()).unwrap();

        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.scan(&[0, 1]).count(), 0);
    }

    #[test]
    fn short_and_long_rows_are_rejected() {
        for content in ["a,b\n1\n", "a,b\n1,2,3\n"] {
            let file = write_file(content);
            let err = CsvTable::load("t", file.path()).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::DataLoss);
        }
    }

    #[test]
    fn empty_file_is_missing_header() {
        let file = write_file("");
        let err = CsvTable::load("t", file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
