pub mod catalog;
mod data_type;
mod type_registry;
mod value;

pub use {
    catalog::{Catalog, Column, Table},
    data_type::DataType,
    type_registry::TypeRegistry,
    value::{Row, Value},
};
