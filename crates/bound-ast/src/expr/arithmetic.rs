use {
    super::{Error, Evaluate, Expression},
    def::{DataType, Value},
    snafu::ensure,
    std::fmt::{Display, Formatter},
};

#[derive(Debug)]
pub enum ArithmeticExpression {
    Plus { lhs: Expression, rhs: Expression },
    Minus { lhs: Expression, rhs: Expression },
    Multiply { lhs: Expression, rhs: Expression },
    Divide { lhs: Expression, rhs: Expression },
    Modulo { lhs: Expression, rhs: Expression },
    Positive { child: Expression },
    Negative { child: Expression },
}

impl ArithmeticExpression {
    fn calculate(&self, lhs: &Expression, rhs: &Expression, values: &[Value]) -> Result<Value, Error> {
        let (lhs, rhs) = match (lhs.evaluate(values)?, rhs.evaluate(values)?) {
            (Value::Null, _) | (_, Value::Null) => return Ok(Value::Null),
            values @ (Value::Int64(_), Value::Int64(_)) => values,
            (Value::Int64(lhs), Value::Double(rhs)) => {
                (Value::Double(lhs as f64), Value::Double(rhs))
            }
            (Value::Double(lhs), Value::Int64(rhs)) => {
                (Value::Double(lhs), Value::Double(rhs as f64))
            }
            values @ (Value::Double(_), Value::Double(_)) => values,
            _ => unreachable!(),
        };

        Ok(match (self, lhs, rhs) {
            (Self::Plus { .. }, Value::Int64(lhs), Value::Int64(rhs)) => Value::Int64(lhs + rhs),
            (Self::Minus { .. }, Value::Int64(lhs), Value::Int64(rhs)) => Value::Int64(lhs - rhs),
            (Self::Multiply { .. }, Value::Int64(lhs), Value::Int64(rhs)) => {
                Value::Int64(lhs * rhs)
            }
            (Self::Divide { .. }, Value::Int64(lhs), Value::Int64(rhs)) => {
                ensure!(rhs != 0, super::DivisionByZeroSnafu);
                Value::Int64(lhs / rhs)
            }
            (Self::Modulo { .. }, Value::Int64(lhs), Value::Int64(rhs)) => {
                ensure!(rhs != 0, super::DivisionByZeroSnafu);
                Value::Int64(lhs % rhs)
            }

            (Self::Plus { .. }, Value::Double(lhs), Value::Double(rhs)) => Value::Double(lhs + rhs),
            (Self::Minus { .. }, Value::Double(lhs), Value::Double(rhs)) => {
                Value::Double(lhs - rhs)
            }
            (Self::Multiply { .. }, Value::Double(lhs), Value::Double(rhs)) => {
                Value::Double(lhs * rhs)
            }
            (Self::Divide { .. }, Value::Double(lhs), Value::Double(rhs)) => {
                Value::Double(lhs / rhs)
            }
            (Self::Modulo { .. }, Value::Double(lhs), Value::Double(rhs)) => {
                Value::Double(lhs % rhs)
            }
            _ => unreachable!(),
        })
    }
}

impl Evaluate for ArithmeticExpression {
    fn return_type(&self) -> DataType {
        match self {
            Self::Positive { child } | Self::Negative { child } => child.return_type(),
            Self::Plus { lhs, rhs }
            | Self::Minus { lhs, rhs }
            | Self::Multiply { lhs, rhs }
            | Self::Divide { lhs, rhs }
            | Self::Modulo { lhs, rhs } => {
                if lhs.return_type() == DataType::Double || rhs.return_type() == DataType::Double {
                    DataType::Double
                } else {
                    DataType::Int64
                }
            }
        }
    }

    fn evaluate(&self, values: &[Value]) -> Result<Value, Error> {
        Ok(match self {
            Self::Positive { child } => child.evaluate(values)?,
            Self::Negative { child } => match child.evaluate(values)? {
                Value::Null => Value::Null,
                Value::Int64(v) => Value::Int64(-v),
                Value::Double(v) => Value::Double(-v),
                _ => unreachable!(),
            },
            Self::Plus { lhs, rhs }
            | Self::Minus { lhs, rhs }
            | Self::Multiply { lhs, rhs }
            | Self::Divide { lhs, rhs }
            | Self::Modulo { lhs, rhs } => self.calculate(lhs, rhs, values)?,
        })
    }
}

impl Display for ArithmeticExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus { lhs, rhs } => write!(f, "({} + {})", lhs, rhs),
            Self::Minus { lhs, rhs } => write!(f, "({} - {})", lhs, rhs),
            Self::Multiply { lhs, rhs } => write!(f, "({} * {})", lhs, rhs),
            Self::Divide { lhs, rhs } => write!(f, "({} / {})", lhs, rhs),
            Self::Modulo { lhs, rhs } => write!(f, "({} % {})", lhs, rhs),
            Self::Positive { child } => write!(f, "(+{})", child),
            Self::Negative { child } => write!(f, "(-{})", child),
        }
    }
}
