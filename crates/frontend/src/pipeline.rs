use {
    crate::{
        config::{ExecuteQueryConfig, Mode},
        error::{self, Result},
        format::format_table,
    },
    executor::Executor,
    parser::Parser,
    semantic_analyzer::Analyzer,
    snafu::prelude::*,
    std::io::Write,
};

/// Drives `sql` through the pipeline up to the configured mode and writes
/// that stage's textual artifact to `out`.
///
/// Each stage runs only after the previous one succeeded, and output is
/// written in a single shot at the very end; a failing run writes
/// nothing, including when the inspection hook rejects an otherwise valid
/// resolved form.
pub fn execute_query(
    sql: &str,
    config: &ExecuteQueryConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let stmt = Parser::parse_one(sql).context(error::ParseSnafu)?;

    if config.mode == Mode::Parse {
        return write_artifact(out, &format!("{:#?}\n\n", stmt));
    }

    let resolved = Analyzer::new(&config.catalog)
        .analyze(stmt)
        .context(error::ResolveSnafu)?;

    // the hook is a gate: its error aborts the pipeline unchanged
    if let Some(hook) = &config.on_resolved_statement {
        hook(&resolved)?;
    }

    if config.mode == Mode::Resolve {
        return write_artifact(out, &format!("{:#?}\n\n", resolved));
    }

    let plan = planner::plan(resolved);

    if config.mode == Mode::Explain {
        return write_artifact(out, &format!("{}\n", plan));
    }

    let result = Executor::new(&config.catalog)
        .execute(plan)
        .context(error::ExecuteSnafu)?;

    let column_names = result
        .columns
        .iter()
        .map(|column| column.name.clone())
        .collect::<Vec<_>>();
    let rows = result
        .rows
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect::<Vec<Vec<String>>>();

    write_artifact(out, &format_table(&column_names, &rows))
}

fn write_artifact(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).context(error::WriteOutputSnafu)
}
