use {
    bound_ast::{Expression, SortKey, Target},
    common::pub_fields_struct,
    def::Column,
    std::fmt::{Display, Formatter, Result, Write},
};

#[derive(Debug)]
pub enum PhysicalNode {
    /// Produces exactly one empty row; the input of a FROM-less query.
    SingleRow,
    SeqScan {
        table: String,
        column_indices: Vec<usize>,
    },
    Filter {
        input: Box<PhysicalNode>,
        predicate: Expression,
    },
    Sort {
        input: Box<PhysicalNode>,
        keys: Vec<SortKey>,
    },
    Limit {
        input: Box<PhysicalNode>,
        count: usize,
    },
    Projection {
        input: Box<PhysicalNode>,
        targets: Vec<Target>,
    },
}

pub_fields_struct! {
    #[derive(Debug)]
    struct PhysicalPlan {
        root: PhysicalNode,
        output_columns: Vec<Column>,
    }
}

impl PhysicalNode {
    fn input(&self) -> Option<&PhysicalNode> {
        match self {
            Self::SingleRow | Self::SeqScan { .. } => None,
            Self::Filter { input, .. }
            | Self::Sort { input, .. }
            | Self::Limit { input, .. }
            | Self::Projection { input, .. } => Some(input),
        }
    }

    fn fmt_head(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::SingleRow => f.write_str("SingleRow"),
            Self::SeqScan {
                table,
                column_indices,
            } => {
                let columns = column_indices
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "SeqScan(table: {}, columns: [{}])", table, columns)
            }
            Self::Filter { predicate, .. } => write!(f, "Filter({})", predicate),
            Self::Sort { keys, .. } => {
                f.write_str("Sort(")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(
                        f,
                        "{} {}",
                        key.expr,
                        if key.descending { "DESC" } else { "ASC" }
                    )?;
                }
                f.write_char(')')
            }
            Self::Limit { count, .. } => write!(f, "Limit({})", count),
            Self::Projection { targets, .. } => {
                f.write_str("Projection(")?;
                for (i, target) in targets.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    let expr = target.expr.to_string();
                    if target.name.is_empty() || target.name == expr {
                        f.write_str(&expr)?;
                    } else {
                        write!(f, "{} AS {}", expr, target.name)?;
                    }
                }
                f.write_char(')')
            }
        }
    }
}

/// Renders the operator tree one node per line, children indented under
/// their parent with a `+-` marker.
impl Display for PhysicalPlan {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut node = Some(&self.root);
        let mut depth = 0usize;

        while let Some(current) = node {
            if depth > 0 {
                for _ in 0..depth - 1 {
                    f.write_str("  ")?;
                }
                f.write_str("+-")?;
            }
            current.fmt_head(f)?;

            node = current.input();
            if node.is_some() {
                f.write_char('\n')?;
            }
            depth += 1;
        }

        Ok(())
    }
}
