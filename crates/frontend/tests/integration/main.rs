use {
    frontend::{
        add_table_from_spec, add_tables_from_specs, execute_query, Error, ErrorKind,
        ExecuteQueryConfig, Mode,
    },
    std::io::Write,
    tempfile::NamedTempFile,
};

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn csv_fixture() -> NamedTempFile {
    write_file("col1,col2,col3\nhello,45,123.456\ngoodbye,90,867.5309\n")
}

fn config_with_table(spec: &str) -> ExecuteQueryConfig {
    let mut config = ExecuteQueryConfig::new();
    add_table_from_spec(&mut config, spec).unwrap();
    config
}

fn run(sql: &str, config: &ExecuteQueryConfig) -> Result<String, Error> {
    let mut out = vec![];
    execute_query(sql, config, &mut out).map(|()| String::from_utf8(out).unwrap())
}

#[test]
fn execute_literal_select() {
    let config = ExecuteQueryConfig::new();

    assert_eq!(
        run("select 1", &config).unwrap(),
        "+---+\n\
         |   |\n\
         +---+\n\
         | 1 |\n\
         +---+\n\
         \n"
    );
}

#[test]
fn execute_csv_table_end_to_end() {
    let file = csv_fixture();
    let config = config_with_table(&format!("CsvTable=csv:{}", file.path().display()));

    assert_eq!(
        run("select col1 from CsvTable order by col1", &config).unwrap(),
        "+---------+\n\
         | col1    |\n\
         +---------+\n\
         | goodbye |\n\
         | hello   |\n\
         +---------+\n\
         \n"
    );
}

#[test]
fn execute_filters_and_projects_csv_columns() {
    let file = csv_fixture();
    let config = config_with_table(&format!("CsvTable=csv:{}", file.path().display()));

    assert_eq!(
        run("select col2 from CsvTable where col1 = 'hello'", &config).unwrap(),
        "+------+\n\
         | col2 |\n\
         +------+\n\
         | 45   |\n\
         +------+\n\
         \n"
    );
}

#[test]
fn parse_mode_output_is_stable() {
    let mut config = ExecuteQueryConfig::new();
    config.set_mode("parse").unwrap();

    let first = run("select 1", &config).unwrap();
    let second = run("select 1", &config).unwrap();

    assert!(!first.is_empty());
    assert!(first.starts_with("Select("));
    assert!(first.ends_with("\n\n"));
    assert_eq!(first, second);
}

#[test]
fn resolve_mode_renders_bound_form() {
    let file = csv_fixture();
    let mut config = config_with_table(&format!("CsvTable=csv:{}", file.path().display()));
    config.set_mode("resolve").unwrap();

    let output = run("select col1 from CsvTable", &config).unwrap();

    assert!(output.starts_with("Select("));
    assert!(output.contains("CsvTable"));
    assert!(output.ends_with("\n\n"));
}

#[test]
fn explain_literal_select() {
    let mut config = ExecuteQueryConfig::new();
    config.set_mode("explain").unwrap();

    assert_eq!(run("select 1", &config).unwrap(), "Projection(1)\n+-SingleRow\n");
}

#[test]
fn explain_shows_the_operator_stack() {
    let file = csv_fixture();
    let mut config = config_with_table(&format!("CsvTable=csv:{}", file.path().display()));
    config.set_mode("explain").unwrap();

    assert_eq!(
        run(
            "select col1 from CsvTable where col2 <> '45' order by col1 limit 1",
            &config
        )
        .unwrap(),
        "Projection(col1)\n\
         +-Limit(1)\n\
         \x20\x20+-Sort(col1 ASC)\n\
         \x20\x20\x20\x20+-Filter((col2 <> '45'))\n\
         \x20\x20\x20\x20\x20\x20+-SeqScan(table: CsvTable, columns: [0, 1])\n"
    );
}

#[test]
fn parse_failure_writes_nothing() {
    let config = ExecuteQueryConfig::new();
    let mut out = vec![];

    let err = execute_query("definitely not sql", &config, &mut out).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(out.is_empty());
}

#[test]
fn resolution_failure_writes_nothing() {
    let config = ExecuteQueryConfig::new();
    let mut out = vec![];

    let err = execute_query("select a", &config, &mut out).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(out.is_empty());
}

#[test]
fn failing_hook_aborts_with_its_exact_error() {
    for mode in ["resolve", "explain", "execute"] {
        let mut config = ExecuteQueryConfig::new();
        config.set_mode(mode).unwrap();
        config.on_resolved_statement = Some(Box::new(|_| {
            Err(Error::Inspection {
                message: "rejected by test".to_string(),
            })
        }));

        let mut out = vec![];
        let err = execute_query("select 1", &config, &mut out).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FailedPrecondition, "mode {}", mode);
        assert!(out.is_empty(), "mode {}", mode);
    }
}

#[test]
fn passing_hook_leaves_the_pipeline_alone() {
    let mut config = ExecuteQueryConfig::new();
    config.on_resolved_statement = Some(Box::new(|stmt| {
        let bound_ast::Statement::Select(query) = stmt;
        assert_eq!(query.targets.len(), 1);
        Ok(())
    }));

    assert!(run("select 1", &config).unwrap().contains("| 1 |"));
}

#[test]
fn later_specs_abort_but_earlier_tables_stay() {
    let file = csv_fixture();
    let mut config = ExecuteQueryConfig::new();

    let specs = [
        format!("CsvTable=csv:{}", file.path().display()),
        "BadTable=bad_format:ff".to_string(),
    ];
    let err =
        add_tables_from_specs(&mut config, specs.iter().map(String::as_str)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(config.catalog.num_tables(), 1);
    assert!(config.catalog.table("CsvTable").is_some());
}

#[test]
fn duplicate_table_name_is_invalid() {
    let file = csv_fixture();
    let spec = format!("CsvTable=csv:{}", file.path().display());

    let mut config = config_with_table(&spec);
    let err = add_table_from_spec(&mut config, &spec).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn missing_csv_file_is_not_found() {
    let mut config = ExecuteQueryConfig::new();
    let err =
        add_table_from_spec(&mut config, "T=csv:/no/such/dir/nothing_here.csv").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn sstable_source_end_to_end() {
    let file = write_file("key,value\napple,1\nbanana,2\ncherry,3\n");
    let config = config_with_table(&format!("Fruit=sstable:{}", file.path().display()));

    assert_eq!(
        run("select value from Fruit where key = 'banana'", &config).unwrap(),
        "+-------+\n\
         | value |\n\
         +-------+\n\
         | 2     |\n\
         +-------+\n\
         \n"
    );
}

#[test]
fn default_mode_is_execute() {
    let config = ExecuteQueryConfig::new();
    assert_eq!(config.mode, Mode::Execute);
}
