use {crate::DataType, std::collections::HashMap};

/// Optional name -> type registry a catalog can be configured with.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, DataType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generated registry: every scalar type under its canonical name.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for data_type in [
            DataType::Bool,
            DataType::Int64,
            DataType::Double,
            DataType::String,
        ] {
            registry.register(data_type.to_string(), data_type);
        }
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, data_type: DataType) {
        self.types.insert(name.into(), data_type);
    }

    pub fn get(&self, name: &str) -> Option<DataType> {
        self.types.get(name).copied()
    }
}
