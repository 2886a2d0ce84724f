use {
    crate::{Analyzer, Error, Result, Scope},
    ast::TargetElem,
    bound_ast::{Evaluate, Query, SortKey, Target},
    snafu::ensure,
};

impl Analyzer<'_> {
    pub(crate) fn analyze_select(&self, query: ast::Query) -> Result<Query> {
        let ast::Query {
            targets,
            from,
            cond,
            order_by,
            limit,
        } = query;

        let mut scope = Scope::new();

        if let Some(table_ref) = from {
            let name = table_ref.name.0;
            let table = self
                .catalog
                .table(&name)
                .ok_or(Error::TableNotExists { name: name.clone() })?;

            scope.set_table(name, table_ref.alias.map(|a| a.0), table.columns());
        }

        let mut bound_targets = vec![];
        for target in targets {
            match target {
                TargetElem::Wildcard => {
                    ensure!(scope.has_table(), crate::WildcardWithoutTableSnafu);

                    for index in 0..scope.num_table_columns() {
                        let expr = scope.bind_column_index(index);
                        bound_targets.push(Target {
                            name: scope.column_name(index).to_string(),
                            data_type: expr.return_type(),
                            expr,
                        });
                    }
                }
                TargetElem::Expr { expr, alias } => {
                    let name = alias.unwrap_or_else(|| match &expr {
                        // an unaliased column keeps its name; anything else
                        // renders with an anonymous header
                        ast::expr::Expression::Column(column) => column.column.0.clone(),
                        _ => String::new(),
                    });

                    let expr = self.bind_expr(&mut scope, expr)?;
                    bound_targets.push(Target {
                        name,
                        data_type: expr.return_type(),
                        expr,
                    });
                }
            }
        }

        let filter = cond
            .map(|expr| {
                let expr = self.bind_expr(&mut scope, expr)?;
                if let Some(found) = crate::expr::value_type(&expr)
                    .filter(|t| *t != def::DataType::Bool)
                {
                    return crate::NonBooleanConditionSnafu { found }.fail();
                }
                Ok(expr)
            })
            .transpose()?;

        let sort_keys = order_by
            .into_iter()
            .map(|item| {
                Ok(SortKey {
                    expr: self.bind_expr(&mut scope, item.expr)?,
                    descending: item.descending,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Query {
            targets: bound_targets,
            scan: scope.into_table_scan(),
            filter,
            sort_keys,
            limit: limit.map(|n| n as usize),
        })
    }
}
