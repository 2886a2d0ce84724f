use {
    super::{
        error::{Error, Result},
        Parser,
    },
    ast::{
        token::{Keyword, Token},
        Identifier, Span, Spanned,
    },
    core::str::FromStr,
};

impl<'a> Parser<'a> {
    pub(super) fn identifier_from_span(&self, span: Span) -> Identifier {
        Spanned(self.src[span.clone()].to_string(), span)
    }

    pub(super) fn string_from_span(&self, span: Span) -> String {
        // Modify the start and end of the span to trim the opening and closing single quotes,
        // and then escape single quotes.
        let (start, end) = (span.start() + 1, span.end() - 1);
        self.src[start..=end].to_string().replace("''", "'")
    }

    pub(super) fn number_from_span<T: FromStr>(&self, span: Span) -> Result<T> {
        self.src[span.clone()]
            .parse::<T>()
            .map_err(|_| Error::SyntaxError(span.clone()))
    }

    pub(super) fn skip_semicolons(&mut self) {
        while self
            .tokens
            .next_if(|token| matches!(token, Ok(Spanned(Token::Semicolon, _))))
            .is_some()
        {}
    }

    pub(super) fn must_match(&mut self, token: Token) -> Result<Spanned<Token>> {
        match_token!(self.tokens.next(), {
            Spanned(t, span) if t == token => {
                Ok(Spanned(t, span))
            },
        })
    }

    pub(super) fn try_match(&mut self, token: Token) -> Option<Spanned<Token>> {
        self.tokens
            .next_if(|item| match item {
                Ok(Spanned(t, _)) => *t == token,
                _ => false,
            })
            .map(|item| item.unwrap())
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> Option<Spanned<Token>> {
        self.try_match(Token::Keyword(keyword))
    }

    pub(super) fn parse_identifier(&mut self) -> Result<Identifier> {
        match_token!(self.tokens.next(), {
            Spanned(Token::Identifier, span) => Ok(self.identifier_from_span(span)),
        })
    }

    pub(super) fn parse_alias(&mut self) -> Result<Option<Identifier>> {
        if self.try_match_keyword(Keyword::AS).is_some() {
            return Ok(Some(self.parse_identifier()?));
        }

        Ok(self
            .try_match(Token::Identifier)
            .map(|Spanned(_, span)| self.identifier_from_span(span)))
    }

    pub(super) fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let mut v = vec![];

        loop {
            v.push(func(self)?);

            if self.try_match(Token::Comma).is_none() {
                break;
            }
        }

        Ok(v)
    }
}

macro_rules! match_token {
    ( $token:expr, { $( $($t:pat_param)|* $(if $cond:expr)? => $e:expr, )* } ) => {
        match $token {
            $( $( Some(Ok($t)) )|* $(if $cond)? => $e,)*

            Some(Ok(Spanned(_, span))) => return Err(Error::SyntaxError(span)),
            Some(Err(e)) => return Err(Error::LexingError(e)),
            None => return Err(Error::UnexpectedEnd),
        }
    };
}

pub(super) use match_token;
