//! The query front end: drives SQL text through the parse / resolve /
//! explain / execute pipeline over a catalog populated from table
//! specifications, and renders the selected stage's artifact as text.

pub mod config;
mod csv;
mod error;
mod format;
mod pipeline;
mod sstable;
mod table_spec;

pub use {
    config::{ExecuteQueryConfig, Mode, ResolvedStatementHook, TypeRegistrySelection},
    csv::CsvTable,
    error::{Error, ErrorKind, Result},
    format::format_table,
    pipeline::execute_query,
    sstable::IndexedFileTable,
    table_spec::{
        add_table_from_spec, add_tables_from_specs, parse_table_spec, SourceKind, TableSpec,
    },
};
