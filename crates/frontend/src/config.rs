use {
    crate::error::{self, Error, Result},
    def::{Catalog, DataType, TypeRegistry},
    snafu::prelude::*,
    std::{
        fs,
        path::{Path, PathBuf},
        str::FromStr,
    },
};

/// The pipeline stage at which processing stops and output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Parse,
    Resolve,
    Explain,
    Execute,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self> {
        Ok(match mode {
            "parse" => Self::Parse,
            "resolve" => Self::Resolve,
            "explain" => Self::Explain,
            "execute" => Self::Execute,
            _ => return error::InvalidModeSnafu { mode }.fail(),
        })
    }
}

/// Which type registry, if any, the catalog is configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRegistrySelection {
    None,
    Builtin,
    File(PathBuf),
}

impl FromStr for TypeRegistrySelection {
    type Err = Error;

    fn from_str(selector: &str) -> Result<Self> {
        Ok(match selector {
            "none" => Self::None,
            "builtin" => Self::Builtin,
            _ => match selector.strip_prefix("file:") {
                Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
                _ => return error::InvalidTypeRegistrySnafu { selector }.fail(),
            },
        })
    }
}

/// A single-shot validation gate over the resolved form. Returning an
/// error aborts the pipeline with exactly that error.
pub type ResolvedStatementHook = Box<dyn Fn(&bound_ast::Statement) -> Result<()>>;

/// Everything one `execute_query` call runs against: the catalog, the
/// selected mode and an optional inspection hook.
///
/// Not internally synchronized; a config must not be shared across
/// threads executing queries concurrently.
pub struct ExecuteQueryConfig {
    pub catalog: Catalog,
    pub mode: Mode,
    pub on_resolved_statement: Option<ResolvedStatementHook>,
}

impl Default for ExecuteQueryConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(),
            mode: Mode::Execute,
            on_resolved_statement: None,
        }
    }
}

impl ExecuteQueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and assigns the mode; the field never holds anything an
    /// unrecognized selector produced.
    pub fn set_mode(&mut self, mode: &str) -> Result<()> {
        self.mode = mode.parse()?;
        Ok(())
    }

    pub fn set_type_registry(&mut self, selector: &str) -> Result<()> {
        match selector.parse()? {
            TypeRegistrySelection::None => {}
            TypeRegistrySelection::Builtin => {
                self.catalog.set_type_registry(TypeRegistry::builtin())
            }
            TypeRegistrySelection::File(path) => self
                .catalog
                .set_type_registry(load_type_registry(&path)?),
        }
        Ok(())
    }
}

/// Loads a registry from a file of `name=type` lines; blank lines and
/// `#` comments are skipped.
fn load_type_registry(path: &Path) -> Result<TypeRegistry> {
    let text = fs::read_to_string(path).context(error::OpenFileSnafu { path })?;

    let mut registry = TypeRegistry::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = line.split_once('=').and_then(|(name, type_name)| {
            DataType::from_str(type_name).ok().map(|t| (name, t))
        });
        let (name, data_type) = entry.ok_or(Error::MalformedRegistryLine {
            path: path.to_path_buf(),
            line_number: i + 1,
        })?;

        registry.register(name, data_type);
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::ErrorKind, std::io::Write, tempfile::NamedTempFile};

    #[test]
    fn mode_strings_are_exact() {
        assert_eq!("parse".parse::<Mode>().unwrap(), Mode::Parse);
        assert_eq!("resolve".parse::<Mode>().unwrap(), Mode::Resolve);
        assert_eq!("explain".parse::<Mode>().unwrap(), Mode::Explain);
        assert_eq!("execute".parse::<Mode>().unwrap(), Mode::Execute);

        for bad in ["bad-mode", "Parse", "EXECUTE", ""] {
            let err = bad.parse::<Mode>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn mode_is_validated_before_assignment() {
        let mut config = ExecuteQueryConfig::new();
        assert!(config.set_mode("bad-mode").is_err());
        assert_eq!(config.mode, Mode::Execute);
    }

    #[test]
    fn registry_selectors() {
        assert_eq!(
            "none".parse::<TypeRegistrySelection>().unwrap(),
            TypeRegistrySelection::None
        );
        assert_eq!(
            "builtin".parse::<TypeRegistrySelection>().unwrap(),
            TypeRegistrySelection::Builtin
        );
        assert_eq!(
            "file:/tmp/types".parse::<TypeRegistrySelection>().unwrap(),
            TypeRegistrySelection::File(PathBuf::from("/tmp/types"))
        );

        assert!("file:".parse::<TypeRegistrySelection>().is_err());
        assert!("generated".parse::<TypeRegistrySelection>().is_err());
    }

    #[test]
    fn none_selector_leaves_type_lookups_missing() {
        let mut config = ExecuteQueryConfig::new();
        config.set_type_registry("none").unwrap();
        assert_eq!(config.catalog.get_type("int64"), None);

        config.set_type_registry("builtin").unwrap();
        assert_eq!(config.catalog.get_type("int64"), Some(DataType::Int64));
    }

    #[test]
    fn file_registry_is_parsed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# types for tests").unwrap();
        writeln!(file, "Person=string").unwrap();
        writeln!(file, "Count=int64").unwrap();
        file.flush().unwrap();

        let mut config = ExecuteQueryConfig::new();
        config
            .set_type_registry(&format!("file:{}", file.path().display()))
            .unwrap();

        assert_eq!(config.catalog.get_type("Person"), Some(DataType::String));
        assert_eq!(config.catalog.get_type("Count"), Some(DataType::Int64));
        assert_eq!(config.catalog.get_type("Missing"), None);
    }

    #[test]
    fn malformed_registry_line_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Person=no_such_type").unwrap();
        file.flush().unwrap();

        let mut config = ExecuteQueryConfig::new();
        let err = config
            .set_type_registry(&format!("file:{}", file.path().display()))
            .unwrap_err();

        assert!(matches!(err, Error::MalformedRegistryLine { .. }));
    }
}
