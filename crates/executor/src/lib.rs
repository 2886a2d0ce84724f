mod query;

pub use query::QueryResult;

use {def::Catalog, planner::PhysicalPlan, snafu::prelude::*};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(r#"table "{}" is not in the catalog"#, name))]
    TableNotExists { name: String },

    #[snafu(display("failed to evaluate expression"))]
    Evaluate { source: bound_ast::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Evaluates physical plans against the tables of one catalog, fully
/// materializing the result rows.
pub struct Executor<'a> {
    catalog: &'a Catalog,
}

impl<'a> Executor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, plan: PhysicalPlan) -> Result<QueryResult> {
        let rows = self.eval_node(&plan.root)?;

        Ok(QueryResult {
            columns: plan.output_columns,
            rows,
        })
    }
}
