use {
    super::{error::Result, Parser},
    ast::{
        expr::Expression,
        token::{Keyword, Token},
        OrderByItem, Query, Spanned, TableRef, TargetElem,
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_select(&mut self) -> Result<Query> {
        let targets = self.parse_comma_separated(Self::parse_select_target)?;
        let from = self.parse_from_clause()?;
        let cond = self.parse_where_clause()?;
        let order_by = self.parse_order_by_clause()?;
        let limit = self.parse_limit_clause()?;

        Ok(Query {
            targets,
            from,
            cond,
            order_by,
            limit,
        })
    }

    fn parse_select_target(&mut self) -> Result<TargetElem> {
        if self.try_match(Token::Asterisk).is_some() {
            return Ok(TargetElem::Wildcard);
        }

        let expr = self.parse_expr()?;
        let alias = self.parse_alias()?.map(|id| id.0);

        Ok(TargetElem::Expr { expr, alias })
    }

    fn parse_from_clause(&mut self) -> Result<Option<TableRef>> {
        if self.try_match_keyword(Keyword::FROM).is_none() {
            return Ok(None);
        }

        let name = self.parse_identifier()?;
        let alias = self.parse_alias()?;

        Ok(Some(TableRef { name, alias }))
    }

    fn parse_where_clause(&mut self) -> Result<Option<Expression>> {
        Ok(match self.try_match_keyword(Keyword::WHERE) {
            Some(_) => Some(self.parse_expr()?),
            None => None,
        })
    }

    fn parse_order_by_clause(&mut self) -> Result<Vec<OrderByItem>> {
        if self.try_match_keyword(Keyword::ORDER).is_none() {
            return Ok(vec![]);
        }
        self.must_match(Token::Keyword(Keyword::BY))?;

        self.parse_comma_separated(Self::parse_order_by_item)
    }

    fn parse_order_by_item(&mut self) -> Result<OrderByItem> {
        let expr = self.parse_expr()?;

        let descending = if self.try_match_keyword(Keyword::DESC).is_some() {
            true
        } else {
            self.try_match_keyword(Keyword::ASC);
            false
        };

        Ok(OrderByItem { expr, descending })
    }

    fn parse_limit_clause(&mut self) -> Result<Option<u64>> {
        if self.try_match_keyword(Keyword::LIMIT).is_none() {
            return Ok(None);
        }

        let Spanned(_, span) = self.must_match(Token::Number { is_float: false })?;
        self.number_from_span(span).map(Some)
    }
}
