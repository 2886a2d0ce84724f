mod lexer;
mod parser;

pub use self::parser::{Error, Parser, Result};
