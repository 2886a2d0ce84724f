use {
    super::{Error, Evaluate, Expression},
    def::{DataType, Value},
    std::fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum LogicExpression {
    And { lhs: Expression, rhs: Expression },
    Or { lhs: Expression, rhs: Expression },
    Not { child: Expression },
}

impl Evaluate for LogicExpression {
    fn return_type(&self) -> DataType {
        DataType::Bool
    }

    fn evaluate(&self, values: &[Value]) -> Result<Value, Error> {
        Ok(match self {
            Self::And { lhs, rhs } => match (lhs.evaluate(values)?, rhs.evaluate(values)?) {
                (Value::Bool(lhs), Value::Bool(rhs)) => Value::Bool(lhs & rhs),
                (Value::Null, _) | (_, Value::Null) => Value::Null,
                _ => unreachable!(),
            },
            Self::Or { lhs, rhs } => match (lhs.evaluate(values)?, rhs.evaluate(values)?) {
                (Value::Bool(lhs), Value::Bool(rhs)) => Value::Bool(lhs | rhs),
                (Value::Null, _) | (_, Value::Null) => Value::Null,
                _ => unreachable!(),
            },
            Self::Not { child } => match child.evaluate(values)? {
                Value::Bool(val) => Value::Bool(!val),
                Value::Null => Value::Null,
                _ => unreachable!(),
            },
        })
    }
}

impl Display for LogicExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And { lhs, rhs } => write!(f, "({} AND {})", lhs, rhs),
            Self::Or { lhs, rhs } => write!(f, "({} OR {})", lhs, rhs),
            Self::Not { child } => write!(f, "(NOT {})", child),
        }
    }
}
