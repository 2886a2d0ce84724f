mod expr;
mod stmt;

pub(crate) use expr::Scope;

use {
    def::{Catalog, DataType},
    snafu::prelude::*,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(r#"table "{}" does not exist"#, name))]
    TableNotExists { name: String },

    #[snafu(display(r#"column "{}" does not exist"#, name))]
    ColumnNotExists { name: String },

    #[snafu(display(r#"qualifier "{}" does not name the table in scope"#, name))]
    QualifierNotInScope { name: String },

    #[snafu(display("operator {} does not accept a {} operand", operator, found))]
    InvalidOperandType {
        operator: &'static str,
        found: DataType,
    },

    #[snafu(display("cannot compare {} with {}", lhs, rhs))]
    IncomparableTypes { lhs: DataType, rhs: DataType },

    #[snafu(display("condition must be a bool, found {}", found))]
    NonBooleanCondition { found: DataType },

    #[snafu(display("SELECT * requires a FROM clause"))]
    WildcardWithoutTable,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Resolves parsed statements against a catalog, producing the bound form
/// the planner and executor work with.
pub struct Analyzer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Analyzer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn analyze(&self, stmt: ast::Statement) -> Result<bound_ast::Statement> {
        match stmt {
            ast::Statement::Select(query) => {
                self.analyze_select(query).map(bound_ast::Statement::Select)
            }
        }
    }
}
