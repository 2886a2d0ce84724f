use {
    super::{Error, Evaluate},
    common::pub_fields_struct,
    def::{DataType, Value},
    std::fmt::{Display, Formatter},
};

pub_fields_struct! {
    /// A reference to position `index` of the pruned input row.
    #[derive(Debug, PartialEq)]
    struct ColumnRef {
        index: usize,
        name: String,
        data_type: DataType,
    }
}

impl Evaluate for ColumnRef {
    fn return_type(&self) -> DataType {
        self.data_type
    }

    fn evaluate(&self, values: &[Value]) -> Result<Value, Error> {
        // the analyzer checked the index against the scan layout
        Ok(values[self.index].clone())
    }
}

impl Display for ColumnRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
