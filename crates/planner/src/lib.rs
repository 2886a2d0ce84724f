mod node;

pub use node::{PhysicalNode, PhysicalPlan};

use {
    bound_ast::{Query, Statement},
    def::Column,
};

/// Lowers a resolved statement into its physical plan.
///
/// Planning is purely structural: every clause already carries bound,
/// type-checked expressions, so there is nothing left to fail on.
pub fn plan(stmt: Statement) -> PhysicalPlan {
    match stmt {
        Statement::Select(query) => plan_select(query),
    }
}

fn plan_select(query: Query) -> PhysicalPlan {
    let Query {
        targets,
        scan,
        filter,
        sort_keys,
        limit,
    } = query;

    let output_columns = targets
        .iter()
        .map(|target| Column::new(target.name.clone(), target.data_type))
        .collect();

    let mut node = match scan {
        Some(scan) => PhysicalNode::SeqScan {
            table: scan.table,
            column_indices: scan.column_indices,
        },
        None => PhysicalNode::SingleRow,
    };

    if let Some(predicate) = filter {
        node = PhysicalNode::Filter {
            input: Box::new(node),
            predicate,
        };
    }

    if !sort_keys.is_empty() {
        node = PhysicalNode::Sort {
            input: Box::new(node),
            keys: sort_keys,
        };
    }

    if let Some(count) = limit {
        node = PhysicalNode::Limit {
            input: Box::new(node),
            count,
        };
    }

    PhysicalPlan {
        root: PhysicalNode::Projection {
            input: Box::new(node),
            targets,
        },
        output_columns,
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        bound_ast::{ColumnRef, Expression, Literal, SortKey, TableScan, Target},
        def::{DataType, Value},
    };

    fn literal_query() -> Query {
        Query {
            targets: vec![Target {
                name: String::new(),
                data_type: DataType::Int64,
                expr: Expression::Literal(Literal {
                    value: Value::Int64(1),
                }),
            }],
            scan: None,
            filter: None,
            sort_keys: vec![],
            limit: None,
        }
    }

    #[test]
    fn literal_select_plans_over_single_row() {
        let plan = plan(Statement::Select(literal_query()));

        assert_eq!(plan.to_string(), "Projection(1)\n+-SingleRow");
        assert_eq!(plan.output_columns, vec![Column::new("", DataType::Int64)]);
    }

    #[test]
    fn clauses_stack_in_evaluation_order() {
        let column = || {
            Expression::Column(ColumnRef {
                index: 0,
                name: "col1".to_string(),
                data_type: DataType::String,
            })
        };

        let plan = plan(Statement::Select(Query {
            targets: vec![Target {
                name: "col1".to_string(),
                data_type: DataType::String,
                expr: column(),
            }],
            scan: Some(TableScan {
                table: "CsvTable".to_string(),
                column_indices: vec![0],
            }),
            filter: None,
            sort_keys: vec![SortKey {
                expr: column(),
                descending: false,
            }],
            limit: Some(3),
        }));

        assert_eq!(
            plan.to_string(),
            "Projection(col1)\n\
             +-Limit(3)\n\
             \x20\x20+-Sort(col1 ASC)\n\
             \x20\x20\x20\x20+-SeqScan(table: CsvTable, columns: [0])"
        );
    }
}
