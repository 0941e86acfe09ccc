#[macro_use]
extern crate macro_rules_attribute;

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{Lexer, LexerErrorKind};
pub use parser::{ParseError, ParseResult, Parser};

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Parses a whole module. `filename` is only used in error messages.
pub fn parse(source: &str, filename: &str) -> ParseResult<ast::Module> {
    Parser::new(source, filename).parse()
}
