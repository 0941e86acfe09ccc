use std::fmt;

use crate::{Node, NodeCopy};

#[derive(Node!)]
pub struct Token {
    pub kind: TokenKind,
    /// The raw lexeme, or the diagnostic message for [`TokenKind::Err`].
    pub text: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Describes the token for use in "found ..." diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier `{}`", self.text),
            TokenKind::Integer => format!("integer `{}`", self.text),
            TokenKind::String => format!("string \"{}\"", self.text),
            TokenKind::Err => format!("invalid token ({})", self.text),
            kind => kind.token_name().to_owned(),
        }
    }
}

/// A 1-based line and column. Columns count unicode scalar values.
#[derive(NodeCopy!)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Eof,
    Err,

    Keyword(Keyword),
    Identifier,
    Integer,
    String,

    LParen,
    RParen,
    LSquare,
    RSquare,
    LBrace,
    RBrace,

    Colon,
    Comma,
    Semicolon,

    Assign,
    Gt,
    GtEq,
    Div,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Fn,
    Let,
    Module,
    Return,
    If,
}

impl Keyword {
    pub fn from_ident(s: &str) -> Option<Self> {
        match s {
            "fn" => Some(Self::Fn),
            "let" => Some(Self::Let),
            "module" => Some(Self::Module),
            "return" => Some(Self::Return),
            "if" => Some(Self::If),
            _ => None,
        }
    }
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Err => "invalid token",
            TokenKind::Keyword(kw) => match kw {
                Keyword::Fn => "keyword `fn`",
                Keyword::Let => "keyword `let`",
                Keyword::Module => "keyword `module`",
                Keyword::Return => "keyword `return`",
                Keyword::If => "keyword `if`",
            },
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::String => "string",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LSquare => "`[`",
            TokenKind::RSquare => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Assign => "`=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Div => "`/`",
        }
    }
}
