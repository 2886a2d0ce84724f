use {
    crate::{DataType, Row},
    common::pub_fields_struct,
};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq)]
    struct Column {
        name: String,
        data_type: DataType,
    }
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Capability set shared by every table source registered in a catalog.
///
/// Column count and order are fixed at construction. `scan` hands out a
/// single-pass iterator whose rows are projected to `column_indices`, in
/// that order; whether rows come back in a deterministic order is up to
/// the source.
pub trait Table {
    fn name(&self) -> &str;

    fn columns(&self) -> &[Column];

    fn num_columns(&self) -> usize {
        self.columns().len()
    }

    fn column(&self, index: usize) -> &Column {
        &self.columns()[index]
    }

    fn scan(&self, column_indices: &[usize]) -> Box<dyn Iterator<Item = Row> + '_>;
}
