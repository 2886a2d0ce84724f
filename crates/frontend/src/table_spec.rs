use {
    crate::{
        config::ExecuteQueryConfig,
        csv::CsvTable,
        error::{self, Result},
        sstable::IndexedFileTable,
    },
    common::pub_fields_struct,
    def::Table,
    snafu::prelude::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Indexed,
}

pub_fields_struct! {
    /// One parsed `<name>=<kind>:<path>` table specification. Consumed
    /// immediately to construct and register a table.
    #[derive(Debug, PartialEq)]
    struct TableSpec {
        name: String,
        kind: SourceKind,
        args: Vec<String>,
    }
}

/// Parses a table specification of the form `<name>=<kind>:<path>` with
/// `kind` one of `csv` and `sstable`. Both kinds take exactly one
/// non-empty path argument.
pub fn parse_table_spec(raw: &str) -> Result<TableSpec> {
    let invalid = |reason: &str| error::InvalidTableSpecSnafu {
        spec: raw,
        reason: reason.to_string(),
    };

    let (name, rest) = raw
        .split_once('=')
        .ok_or_else(|| invalid("expected <name>=<kind>:<path>").build())?;
    ensure!(!name.is_empty(), invalid("empty table name"));

    let (kind, remainder) = rest
        .split_once(':')
        .ok_or_else(|| invalid("expected <kind>:<path>").build())?;
    let kind = match kind {
        "csv" => SourceKind::Csv,
        "sstable" => SourceKind::Indexed,
        _ => return invalid(&format!(r#"unknown source kind "{}""#, kind)).fail(),
    };

    ensure!(!remainder.is_empty(), invalid("empty path"));
    ensure!(
        !remainder.contains(':'),
        invalid("too many arguments")
    );

    Ok(TableSpec {
        name: name.to_string(),
        kind,
        args: vec![remainder.to_string()],
    })
}

/// Parses one specification, loads the table it names and registers it
/// into the config's catalog.
pub fn add_table_from_spec(config: &mut ExecuteQueryConfig, raw: &str) -> Result<()> {
    let spec = parse_table_spec(raw)?;
    let path = &spec.args[0];

    let table: Box<dyn Table> = match spec.kind {
        SourceKind::Csv => Box::new(CsvTable::load(&spec.name, path)?),
        SourceKind::Indexed => Box::new(IndexedFileTable::load(&spec.name, path)?),
    };

    config
        .catalog
        .add_table(table)
        .context(error::RegisterTableSnafu)
}

/// Registers specifications in order. The first failure aborts the rest;
/// tables registered before the failing entry stay in the catalog.
pub fn add_tables_from_specs<'a>(
    config: &mut ExecuteQueryConfig,
    specs: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    specs
        .into_iter()
        .try_for_each(|spec| add_table_from_spec(config, spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_specs_parse() {
        assert_eq!(
            parse_table_spec("CsvTable=csv:/data/test.csv").unwrap(),
            TableSpec {
                name: "CsvTable".to_string(),
                kind: SourceKind::Csv,
                args: vec!["/data/test.csv".to_string()],
            }
        );
        assert_eq!(
            parse_table_spec("T=sstable:/data/t.sst").unwrap(),
            TableSpec {
                name: "T".to_string(),
                kind: SourceKind::Indexed,
                args: vec!["/data/t.sst".to_string()],
            }
        );
    }

    #[test]
    fn malformed_specs_are_rejected() {
        for spec in [
            "===",
            "BadTable=bad_format:ff",
            "BadTable=csv:",
            "BadTable=csv:too:many_args",
            "BadTable=sstable::",
            "BadTable=sstable:too:many:args",
            "no_equals_sign",
            "NoColon=csv",
            "=csv:/data/test.csv",
        ] {
            let err = parse_table_spec(spec).unwrap_err();
            assert_eq!(
                err.kind(),
                crate::ErrorKind::InvalidArgument,
                "spec {:?} should be invalid",
                spec
            );
        }
    }
}
