use {
    crate::{Error, EvaluateSnafu, Executor, Result},
    bound_ast::Evaluate,
    common::pub_fields_struct,
    def::{Column, Row, Value},
    planner::PhysicalNode,
    snafu::ResultExt,
    std::cmp::Ordering,
};

pub_fields_struct! {
    /// A fully materialized query result: the declared output columns and
    /// every produced row, in output order.
    #[derive(Debug)]
    struct QueryResult {
        columns: Vec<Column>,
        rows: Vec<Row>,
    }
}

impl Executor<'_> {
    pub(crate) fn eval_node(&self, node: &PhysicalNode) -> Result<Vec<Row>> {
        Ok(match node {
            PhysicalNode::SingleRow => vec![vec![]],

            PhysicalNode::SeqScan {
                table,
                column_indices,
            } => {
                let table = self
                    .catalog
                    .table(table)
                    .ok_or(Error::TableNotExists {
                        name: table.clone(),
                    })?;

                table.scan(column_indices).collect()
            }

            PhysicalNode::Filter { input, predicate } => {
                let mut rows = vec![];
                for row in self.eval_node(input)? {
                    if predicate.evaluate(&row).context(EvaluateSnafu)? == Value::Bool(true) {
                        rows.push(row);
                    }
                }
                rows
            }

            PhysicalNode::Sort { input, keys } => {
                let mut keyed = self
                    .eval_node(input)?
                    .into_iter()
                    .map(|row| {
                        let key = keys
                            .iter()
                            .map(|k| k.expr.evaluate(&row))
                            .collect::<std::result::Result<Vec<_>, _>>()
                            .context(EvaluateSnafu)?;
                        Ok((key, row))
                    })
                    .collect::<Result<Vec<_>>>()?;

                keyed.sort_by(|(a, _), (b, _)| {
                    for (i, key) in keys.iter().enumerate() {
                        let ordering = match a[i].cmp(&b[i]) {
                            ordering if key.descending => ordering.reverse(),
                            ordering => ordering,
                        };
                        if ordering != Ordering::Equal {
                            return ordering;
                        }
                    }
                    Ordering::Equal
                });

                keyed.into_iter().map(|(_, row)| row).collect()
            }

            PhysicalNode::Limit { input, count } => {
                let mut rows = self.eval_node(input)?;
                rows.truncate(*count);
                rows
            }

            PhysicalNode::Projection { input, targets } => self
                .eval_node(input)?
                .iter()
                .map(|row| {
                    targets
                        .iter()
                        .map(|target| target.expr.evaluate(row))
                        .collect::<std::result::Result<Row, _>>()
                        .context(EvaluateSnafu)
                })
                .collect::<Result<Vec<_>>>()?,
        })
    }
}
