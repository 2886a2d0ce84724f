use {crate::expr::Expression, common::pub_fields_struct, def::DataType};

pub_fields_struct! {
    #[derive(Debug)]
    struct Query {
        targets: Vec<Target>,
        scan: Option<TableScan>,
        filter: Option<Expression>,
        sort_keys: Vec<SortKey>,
        limit: Option<usize>,
    }

    /// One output column: its display name, resolved type and the
    /// expression producing it.
    #[derive(Debug)]
    struct Target {
        name: String,
        data_type: DataType,
        expr: Expression,
    }

    /// The pruned scan of a catalog table. `column_indices` are the table
    /// columns actually referenced by the query; bound column references
    /// index into the pruned row, not the table row.
    #[derive(Debug)]
    struct TableScan {
        table: String,
        column_indices: Vec<usize>,
    }

    #[derive(Debug)]
    struct SortKey {
        expr: Expression,
        descending: bool,
    }
}
