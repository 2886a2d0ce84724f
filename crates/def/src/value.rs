use {
    crate::DataType,
    core::cmp::Ordering,
    std::fmt::{Display, Formatter},
};

/// A single scalar cell. Values are immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int64(i64),
    Double(f64),
    String(String),
}

pub type Row = Vec<Value>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The type of a non-null value; `Null` carries no type of its own.
    pub fn data_type(&self) -> Option<DataType> {
        Some(match self {
            Self::Null => return None,
            Self::Bool(_) => DataType::Bool,
            Self::Int64(_) => DataType::Int64,
            Self::Double(_) => DataType::Double,
            Self::String(_) => DataType::String,
        })
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Null, _) => Ordering::Less,
            (_, Self::Null) => Ordering::Greater,

            (Self::Bool(v1), Self::Bool(v2)) => v1.cmp(v2),
            (Self::Int64(v1), Self::Int64(v2)) => v1.cmp(v2),
            (Self::Double(v1), Self::Double(v2)) => v1.total_cmp(v2),
            (Self::Int64(v1), Self::Double(v2)) => (*v1 as f64).total_cmp(v2),
            (Self::Double(v1), Self::Int64(v2)) => v1.total_cmp(&(*v2 as f64)),
            (Self::String(v1), Self::String(v2)) => v1.cmp(v2),

            (v1, v2) => panic!(
                "Cannot compare values of different types: {:?}, {:?}",
                v1, v2
            ),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => v.fmt(f),
            Self::Int64(v) => v.fmt(f),
            Self::Double(v) => v.fmt(f),
            Self::String(v) => f.write_str(v),
        }
    }
}

macro_rules! value_conversions {
    ($(($raw:ty, $val:ident),)*) => {
        $(
            impl From<$raw> for Value {
                fn from(raw: $raw) -> Self {
                    Value::$val(raw)
                }
            }
        )*
    };
}

value_conversions! {
    (bool, Bool),
    (i64, Int64),
    (f64, Double),
    (String, String),
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Value::String(raw.to_string())
    }
}
