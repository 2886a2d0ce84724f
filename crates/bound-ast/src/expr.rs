mod arithmetic;
mod column;
mod comparison;
mod literal;
mod logic;

pub use self::{
    arithmetic::ArithmeticExpression, column::ColumnRef, comparison::ComparisonExpression,
    literal::Literal, logic::LogicExpression,
};

use {
    def::{DataType, Value},
    snafu::prelude::*,
    std::fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum Expression {
    Column(ColumnRef),
    Literal(Literal),
    Logic(Box<LogicExpression>),
    Arithmetic(Box<ArithmeticExpression>),
    Comparison(Box<ComparisonExpression>),
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("division by zero"))]
    DivisionByZero,
}

/// Evaluation of a bound expression against one row of input values.
///
/// The analyzer has already checked operand types, so evaluation only has
/// to deal with value-level failures.
pub trait Evaluate {
    fn return_type(&self) -> DataType;

    fn evaluate(&self, values: &[Value]) -> Result<Value, Error>;
}

impl Evaluate for Expression {
    fn return_type(&self) -> DataType {
        match self {
            Expression::Column(expr) => expr.return_type(),
            Expression::Literal(expr) => expr.return_type(),
            Expression::Logic(expr) => expr.return_type(),
            Expression::Arithmetic(expr) => expr.return_type(),
            Expression::Comparison(expr) => expr.return_type(),
        }
    }

    fn evaluate(&self, values: &[Value]) -> Result<Value, Error> {
        match self {
            Expression::Column(expr) => expr.evaluate(values),
            Expression::Literal(expr) => expr.evaluate(values),
            Expression::Logic(expr) => expr.evaluate(values),
            Expression::Arithmetic(expr) => expr.evaluate(values),
            Expression::Comparison(expr) => expr.evaluate(values),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Column(expr) => expr.fmt(f),
            Expression::Literal(expr) => expr.fmt(f),
            Expression::Logic(expr) => expr.fmt(f),
            Expression::Arithmetic(expr) => expr.fmt(f),
            Expression::Comparison(expr) => expr.fmt(f),
        }
    }
}
