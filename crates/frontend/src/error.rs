use {
    snafu::prelude::*,
    std::{io, path::PathBuf},
};

/// Coarse failure classes callers can dispatch on without inspecting
/// messages. Every [`Error`] variant maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    DataLoss,
    FailedPrecondition,
    Internal,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        r#"unknown tool mode "{}", expected parse, resolve, explain or execute"#,
        mode
    ))]
    InvalidMode { mode: String },

    #[snafu(display(r#"unknown type registry selector "{}""#, selector))]
    InvalidTypeRegistry { selector: String },

    #[snafu(display(r#"invalid table spec "{}": {}"#, spec, reason))]
    InvalidTableSpec { spec: String, reason: String },

    #[snafu(display("cannot open {}: {}", path.display(), source))]
    OpenFile { path: PathBuf, source: io::Error },

    #[snafu(display("cannot read {}: {}", path.display(), source))]
    ReadFile { path: PathBuf, source: io::Error },

    #[snafu(display("{} is missing a header line", path.display()))]
    MissingHeader { path: PathBuf },

    #[snafu(display(
        "{}:{}: row has {} fields, header has {}",
        path.display(),
        line_number,
        found,
        expected
    ))]
    MalformedRow {
        path: PathBuf,
        line_number: usize,
        expected: usize,
        found: usize,
    },

    #[snafu(display(
        "{}:{}: keys must be unique and sorted ascending",
        path.display(),
        line_number
    ))]
    UnsortedKey { path: PathBuf, line_number: usize },

    #[snafu(display(
        "{}:{}: expected <name>=<type>",
        path.display(),
        line_number
    ))]
    MalformedRegistryLine { path: PathBuf, line_number: usize },

    #[snafu(display("cannot register table: {}", source))]
    RegisterTable { source: def::catalog::Error },

    #[snafu(display("cannot parse query: {}", source))]
    Parse { source: parser::Error },

    #[snafu(display("cannot resolve query: {}", source))]
    Resolve { source: semantic_analyzer::Error },

    #[snafu(display("cannot execute query: {}", source))]
    Execute { source: executor::Error },

    #[snafu(display("resolved form rejected: {}", message))]
    Inspection { message: String },

    #[snafu(display("cannot write query output: {}", source))]
    WriteOutput { source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMode { .. }
            | Self::InvalidTypeRegistry { .. }
            | Self::InvalidTableSpec { .. }
            | Self::MissingHeader { .. }
            | Self::UnsortedKey { .. }
            | Self::MalformedRegistryLine { .. }
            | Self::RegisterTable { .. }
            | Self::Parse { .. }
            | Self::Resolve { .. }
            | Self::Execute { .. } => ErrorKind::InvalidArgument,

            Self::OpenFile { .. } => ErrorKind::NotFound,
            Self::MalformedRow { .. } => ErrorKind::DataLoss,
            Self::Inspection { .. } => ErrorKind::FailedPrecondition,
            Self::ReadFile { .. } | Self::WriteOutput { .. } => ErrorKind::Internal,
        }
    }
}
