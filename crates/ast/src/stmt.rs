use {
    crate::{common::Identifier, expr::Expression},
    common::pub_fields_struct,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TargetElem {
    Expr {
        expr: Expression,
        alias: Option<String>,
    },
    Wildcard,
}

pub_fields_struct! {
    #[derive(Debug, PartialEq)]
    struct Query {
        targets: Vec<TargetElem>,
        from: Option<TableRef>,
        cond: Option<Expression>,
        order_by: Vec<OrderByItem>,
        limit: Option<u64>,
    }

    #[derive(Debug, PartialEq)]
    struct TableRef {
        name: Identifier,
        alias: Option<Identifier>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct OrderByItem {
        expr: Expression,
        descending: bool,
    }
}
