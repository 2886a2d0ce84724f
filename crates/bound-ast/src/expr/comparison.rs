use {
    super::{Error, Evaluate, Expression},
    def::{DataType, Value},
    std::{cmp::Ordering, fmt::{Display, Formatter}},
};

#[derive(Debug)]
pub enum ComparisonExpression {
    Equal { lhs: Expression, rhs: Expression },
    NotEqual { lhs: Expression, rhs: Expression },
    GreaterThan { lhs: Expression, rhs: Expression },
    GreaterThanOrEqual { lhs: Expression, rhs: Expression },
    LessThan { lhs: Expression, rhs: Expression },
    LessThanOrEqual { lhs: Expression, rhs: Expression },
}

impl ComparisonExpression {
    fn operands(&self) -> (&Expression, &Expression) {
        match self {
            Self::Equal { lhs, rhs }
            | Self::NotEqual { lhs, rhs }
            | Self::GreaterThan { lhs, rhs }
            | Self::GreaterThanOrEqual { lhs, rhs }
            | Self::LessThan { lhs, rhs }
            | Self::LessThanOrEqual { lhs, rhs } => (lhs, rhs),
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Self::Equal { .. } => ordering == Ordering::Equal,
            Self::NotEqual { .. } => ordering != Ordering::Equal,
            Self::GreaterThan { .. } => ordering == Ordering::Greater,
            Self::GreaterThanOrEqual { .. } => ordering != Ordering::Less,
            Self::LessThan { .. } => ordering == Ordering::Less,
            Self::LessThanOrEqual { .. } => ordering != Ordering::Greater,
        }
    }
}

impl Evaluate for ComparisonExpression {
    fn return_type(&self) -> DataType {
        DataType::Bool
    }

    fn evaluate(&self, values: &[Value]) -> Result<Value, Error> {
        let (lhs, rhs) = self.operands();
        let (lhs, rhs) = (lhs.evaluate(values)?, rhs.evaluate(values)?);

        if lhs.is_null() || rhs.is_null() {
            return Ok(Value::Null);
        }

        Ok(Value::Bool(self.accepts(lhs.cmp(&rhs))))
    }
}

impl Display for ComparisonExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            Self::Equal { .. } => "=",
            Self::NotEqual { .. } => "<>",
            Self::GreaterThan { .. } => ">",
            Self::GreaterThanOrEqual { .. } => ">=",
            Self::LessThan { .. } => "<",
            Self::LessThanOrEqual { .. } => "<=",
        };
        let (lhs, rhs) = self.operands();

        write!(f, "({} {} {})", lhs, op, rhs)
    }
}
