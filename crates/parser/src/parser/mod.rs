mod common;
mod error;
mod expr;
mod query;

pub use self::error::{Error, Result};

use {
    crate::lexer::Lexer,
    ast::{
        token::{Keyword, Token},
        Spanned, Statement,
    },
    std::iter::Peekable,
};

pub struct Parser<'a> {
    src: &'a str,
    tokens: Peekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).peekable(),
        }
    }

    pub fn parse(sql: &'a str) -> Result<Vec<Statement>> {
        Self::new(sql).into_iter().collect()
    }

    /// Parses exactly one statement; trailing tokens beyond an optional
    /// semicolon are a syntax error.
    pub fn parse_one(sql: &'a str) -> Result<Statement> {
        let mut parser = Self::new(sql);

        let stmt = match parser.next() {
            Some(stmt) => stmt?,
            None => return Err(Error::UnexpectedEnd),
        };

        parser.skip_semicolons();
        match parser.tokens.next() {
            None => Ok(stmt),
            Some(Ok(Spanned(_, span))) => Err(Error::SyntaxError(span)),
            Some(Err(e)) => Err(Error::LexingError(e)),
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_semicolons();

        Some(match self.tokens.next()? {
            Ok(Spanned(Token::Keyword(Keyword::SELECT), _)) => {
                self.parse_select().map(Statement::Select)
            }
            Ok(Spanned(_, span)) => Err(Error::SyntaxError(span)),
            Err(e) => Err(Error::LexingError(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_one_statement() {
        let stmt = Parser::parse_one("select 1;").unwrap();
        assert!(matches!(stmt, Statement::Select(_)));
    }

    #[test]
    fn parse_one_rejects_empty_input() {
        assert_eq!(Parser::parse_one("  ;; "), Err(Error::UnexpectedEnd));
    }

    #[test]
    fn parse_one_rejects_trailing_statement() {
        let input = "select 1; select 2";
        let begin = input.rfind("select").unwrap();

        assert_eq!(
            Parser::parse_one(input),
            Err(Error::SyntaxError(begin..=begin + 5))
        );
    }

    #[test]
    fn parse_rejects_leading_garbage() {
        assert!(matches!(
            Parser::parse_one("frobnicate 1"),
            Err(Error::SyntaxError(_))
        ));
    }
}
