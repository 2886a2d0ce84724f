use {
    clap::{arg, ArgAction, Command},
    frontend::{add_tables_from_specs, execute_query, ExecuteQueryConfig},
    std::{io, process},
};

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            arg!(--mode <MODE> "stage to stop at: parse, resolve, explain or execute")
                .default_value("execute"),
        )
        .arg(
            arg!(--table_spec <SPEC> "table to register, as <name>=<kind>:<path>")
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--type_registry <SELECTOR> "type registry: none, builtin or file:<path>")
                .default_value("none"),
        )
        .arg(arg!(<SQL> "the SQL statement to run"))
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> frontend::Result<()> {
    let matches = cli().get_matches();

    let mut config = ExecuteQueryConfig::new();
    config.set_mode(matches.get_one::<String>("mode").unwrap())?;
    config.set_type_registry(matches.get_one::<String>("type_registry").unwrap())?;

    if let Some(specs) = matches.get_many::<String>("table_spec") {
        add_tables_from_specs(&mut config, specs.map(String::as_str))?;
    }

    let sql = matches.get_one::<String>("SQL").unwrap();
    execute_query(sql, &config, &mut io::stdout().lock())
}
