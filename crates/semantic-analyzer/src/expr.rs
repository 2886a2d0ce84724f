use {
    crate::{Analyzer, Error, Result},
    ast::expr::{Literal, Operation},
    bound_ast::{
        ArithmeticExpression, ColumnRef, ComparisonExpression, Evaluate, Expression,
        Literal as BoundLiteral, LogicExpression,
    },
    def::{Column, DataType, Value},
    snafu::ensure,
};

/// Name-resolution scope for a single query: at most one table, plus the
/// set of its columns the query actually touches. Columns are assigned
/// pruned-row slots in first-use order.
pub(crate) struct Scope<'a> {
    table: Option<ScopeTable<'a>>,
}

struct ScopeTable<'a> {
    name: String,
    alias: Option<String>,
    columns: &'a [Column],
    used: Vec<usize>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new() -> Self {
        Self { table: None }
    }

    pub(crate) fn set_table(&mut self, name: String, alias: Option<String>, columns: &'a [Column]) {
        self.table = Some(ScopeTable {
            name,
            alias,
            columns,
            used: vec![],
        });
    }

    pub(crate) fn has_table(&self) -> bool {
        self.table.is_some()
    }

    pub(crate) fn num_table_columns(&self) -> usize {
        self.table.as_ref().map_or(0, |t| t.columns.len())
    }

    /// Binds table column `index`, allocating a pruned-row slot on first use.
    pub(crate) fn bind_column_index(&mut self, index: usize) -> Expression {
        let table = self.table.as_mut().expect("no table in scope");
        let column = &table.columns[index];

        let slot = match table.used.iter().position(|&used| used == index) {
            Some(slot) => slot,
            None => {
                table.used.push(index);
                table.used.len() - 1
            }
        };

        Expression::Column(ColumnRef {
            index: slot,
            name: column.name.clone(),
            data_type: column.data_type,
        })
    }

    pub(crate) fn column_name(&self, index: usize) -> &str {
        &self.table.as_ref().expect("no table in scope").columns[index].name
    }

    fn bind_column(&mut self, column_ref: ast::ColumnRef) -> Result<Expression> {
        let name = column_ref.column.0;

        let table = match &self.table {
            Some(table) => table,
            None => return Err(Error::ColumnNotExists { name }),
        };

        if let Some(qualifier) = column_ref.table {
            let in_scope = match &table.alias {
                Some(alias) => *alias == qualifier.0,
                None => table.name == qualifier.0,
            };
            ensure!(
                in_scope,
                crate::QualifierNotInScopeSnafu { name: qualifier.0 }
            );
        }

        let index = table
            .columns
            .iter()
            .position(|c| c.name == name)
            .ok_or(Error::ColumnNotExists { name })?;

        Ok(self.bind_column_index(index))
    }

    pub(crate) fn into_table_scan(self) -> Option<bound_ast::TableScan> {
        self.table.map(|table| bound_ast::TableScan {
            table: table.name,
            column_indices: table.used,
        })
    }
}

impl Analyzer<'_> {
    pub(crate) fn bind_expr(
        &self,
        scope: &mut Scope<'_>,
        expr: ast::expr::Expression,
    ) -> Result<Expression> {
        Ok(match expr {
            ast::expr::Expression::Literal(literal) => {
                Expression::Literal(BoundLiteral {
                    value: match literal {
                        Literal::Null => Value::Null,
                        Literal::Boolean(v) => Value::Bool(v),
                        Literal::Integer(v) => Value::Int64(v),
                        Literal::Float(v) => Value::Double(v),
                        Literal::String(v) => Value::String(v),
                    },
                })
            }
            ast::expr::Expression::Column(column_ref) => scope.bind_column(column_ref)?,
            ast::expr::Expression::Operation(op) => self.bind_operation(scope, op)?,
        })
    }

    fn bind_operation(&self, scope: &mut Scope<'_>, op: Operation) -> Result<Expression> {
        macro_rules! arithmetic {
            ($variant:ident, $op:literal, $lhs:expr, $rhs:expr) => {{
                let (lhs, rhs) = (self.bind_expr(scope, *$lhs)?, self.bind_expr(scope, *$rhs)?);
                ensure_numeric($op, &lhs)?;
                ensure_numeric($op, &rhs)?;
                Expression::Arithmetic(Box::new(ArithmeticExpression::$variant { lhs, rhs }))
            }};
        }
        macro_rules! comparison {
            ($variant:ident, $lhs:expr, $rhs:expr) => {{
                let (lhs, rhs) = (self.bind_expr(scope, *$lhs)?, self.bind_expr(scope, *$rhs)?);
                ensure_comparable(&lhs, &rhs)?;
                Expression::Comparison(Box::new(ComparisonExpression::$variant { lhs, rhs }))
            }};
        }
        macro_rules! logic {
            ($variant:ident, $op:literal, $lhs:expr, $rhs:expr) => {{
                let (lhs, rhs) = (self.bind_expr(scope, *$lhs)?, self.bind_expr(scope, *$rhs)?);
                ensure_boolean($op, &lhs)?;
                ensure_boolean($op, &rhs)?;
                Expression::Logic(Box::new(LogicExpression::$variant { lhs, rhs }))
            }};
        }

        Ok(match op {
            Operation::Add(lhs, rhs) => arithmetic!(Plus, "+", lhs, rhs),
            Operation::Subtract(lhs, rhs) => arithmetic!(Minus, "-", lhs, rhs),
            Operation::Multiply(lhs, rhs) => arithmetic!(Multiply, "*", lhs, rhs),
            Operation::Divide(lhs, rhs) => arithmetic!(Divide, "/", lhs, rhs),
            Operation::Modulo(lhs, rhs) => arithmetic!(Modulo, "%", lhs, rhs),

            Operation::Positive(child) => {
                let child = self.bind_expr(scope, *child)?;
                ensure_numeric("+", &child)?;
                Expression::Arithmetic(Box::new(ArithmeticExpression::Positive { child }))
            }
            Operation::Negative(child) => {
                let child = self.bind_expr(scope, *child)?;
                ensure_numeric("-", &child)?;
                Expression::Arithmetic(Box::new(ArithmeticExpression::Negative { child }))
            }

            Operation::Equal(lhs, rhs) => comparison!(Equal, lhs, rhs),
            Operation::NotEqual(lhs, rhs) => comparison!(NotEqual, lhs, rhs),
            Operation::GreaterThan(lhs, rhs) => comparison!(GreaterThan, lhs, rhs),
            Operation::GreaterThanOrEqual(lhs, rhs) => comparison!(GreaterThanOrEqual, lhs, rhs),
            Operation::LessThan(lhs, rhs) => comparison!(LessThan, lhs, rhs),
            Operation::LessThanOrEqual(lhs, rhs) => comparison!(LessThanOrEqual, lhs, rhs),

            Operation::And(lhs, rhs) => logic!(And, "AND", lhs, rhs),
            Operation::Or(lhs, rhs) => logic!(Or, "OR", lhs, rhs),
            Operation::Not(child) => {
                let child = self.bind_expr(scope, *child)?;
                ensure_boolean("NOT", &child)?;
                Expression::Logic(Box::new(LogicExpression::Not { child }))
            }
        })
    }
}

/// The type an expression contributes to checking; a bare NULL literal has
/// none and unifies with anything.
pub(crate) fn value_type(expr: &Expression) -> Option<DataType> {
    match expr {
        Expression::Literal(literal) if literal.value.is_null() => None,
        expr => Some(expr.return_type()),
    }
}

fn ensure_numeric(operator: &'static str, expr: &Expression) -> Result<()> {
    match value_type(expr) {
        Some(found) if !found.is_numeric() => {
            crate::InvalidOperandTypeSnafu { operator, found }.fail()
        }
        _ => Ok(()),
    }
}

fn ensure_boolean(operator: &'static str, expr: &Expression) -> Result<()> {
    match value_type(expr) {
        Some(found) if found != DataType::Bool => {
            crate::InvalidOperandTypeSnafu { operator, found }.fail()
        }
        _ => Ok(()),
    }
}

fn ensure_comparable(lhs: &Expression, rhs: &Expression) -> Result<()> {
    match (value_type(lhs), value_type(rhs)) {
        (Some(lhs), Some(rhs))
            if lhs != rhs && !(lhs.is_numeric() && rhs.is_numeric()) =>
        {
            crate::IncomparableTypesSnafu { lhs, rhs }.fail()
        }
        _ => Ok(()),
    }
}
