use {
    super::{Error, Evaluate},
    def::{DataType, Value},
    std::fmt::{Display, Formatter},
};

#[derive(Debug, PartialEq)]
pub struct Literal {
    pub value: Value,
}

impl Evaluate for Literal {
    fn return_type(&self) -> DataType {
        // a bare NULL has no type of its own; report it as string
        self.value.data_type().unwrap_or(DataType::String)
    }

    fn evaluate(&self, _: &[Value]) -> Result<Value, Error> {
        Ok(self.value.clone())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Value::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            value => value.fmt(f),
        }
    }
}
