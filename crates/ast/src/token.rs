#[derive(Debug, PartialEq)]
pub enum Token {
    Keyword(Keyword),

    Identifier,

    Number { is_float: bool },
    String,

    Comma,
    Period,
    Semicolon,
    LeftParen,
    RightParen,

    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    LessOrGreaterThan,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Debug, PartialEq)]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            $($var,)*
        }

        #[derive(Debug)]
        pub struct NotKeywordError {}

        impl std::fmt::Display for NotKeywordError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "not a keyword")
            }
        }
        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Ok(Self::$var),)*
                    _ => Err(NotKeywordError {}),
                }
            }
        }
    };
}

keyword! {
    AND,
    AS,
    ASC,
    BY,
    DESC,
    FALSE,
    FROM,
    LIMIT,
    NOT,
    NULL,
    OR,
    ORDER,
    SELECT,
    TRUE,
    WHERE,
}
