mod expr;
mod stmt;

pub use {expr::*, stmt::*};

/// A statement after name and type resolution.
#[derive(Debug)]
pub enum Statement {
    Select(Query),
}
