#[cfg(test)]
mod tests;

use std::str::Chars;

use compy_utils::peek::Peek;

use crate::token::*;

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("integer literal {0} out of range")]
    IntegerOverflow(String),

    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Pull-based lexer. Call [`Lexer::next_token`] until it returns [`TokenKind::Eof`],
/// which it then keeps returning.
///
/// Lexical errors don't stop the lexer: they come out as [`TokenKind::Err`] tokens
/// whose text is the error message, and lexing resumes after the offending input.
pub struct Lexer<'src> {
    chars: Chars<'src>,

    pos: Position,
    token_start: Position,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars(),

            pos: Position::default(),
            token_start: Position::default(),
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.token_start = self.pos;
            let start = self.chars.as_str();

            let Some(ch) = self.bump() else {
                return Token::new(TokenKind::Eof, "", self.token_start);
            };

            let kind = match ch {
                // comment
                '/' if self.eat('/') => {
                    while !matches!(self.bump(), Some('\n') | None) {}
                    continue;
                }

                ' ' | '\t' | '\r' | '\n' => continue,

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '[' => TokenKind::LSquare,
                ']' => TokenKind::RSquare,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,

                ':' => TokenKind::Colon,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semicolon,
                '=' => TokenKind::Assign,

                '>' if self.eat('=') => TokenKind::GtEq,
                '>' => TokenKind::Gt,
                '/' => TokenKind::Div,

                '"' => return self.lex_string(),
                '0'..='9' => return self.lex_integer(start),
                ch if is_ident_start(ch) => return self.lex_alpha(start),

                ch => return self.error(LexerErrorKind::UnexpectedChar(ch)),
            };

            return Token::new(kind, self.lexeme(start), self.token_start);
        }
    }

    fn lex_integer(&mut self, start: &'src str) -> Token {
        while matches!(self.chars.peek(), Some('0'..='9')) {
            self.bump();
        }

        let text = self.lexeme(start);
        match text.parse::<i64>() {
            Ok(_) => Token::new(TokenKind::Integer, text, self.token_start),
            Err(_) => self.error(LexerErrorKind::IntegerOverflow(text.to_owned())),
        }
    }

    // No escapes: the first `"` after the opening one always ends the literal.
    fn lex_string(&mut self) -> Token {
        let contents_start = self.chars.as_str();

        loop {
            match self.bump() {
                Some('"') => break,
                Some(_) => {}
                None => return self.error(LexerErrorKind::UnterminatedString),
            }
        }

        let with_quote = self.lexeme(contents_start);
        let contents = &with_quote[..with_quote.len() - 1];

        Token::new(TokenKind::String, contents, self.token_start)
    }

    fn lex_alpha(&mut self, start: &'src str) -> Token {
        while matches!(self.chars.peek(), Some(ch) if is_ident(ch)) {
            self.bump();
        }

        let text = self.lexeme(start);
        let kind = match Keyword::from_ident(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier,
        };

        Token::new(kind, text, self.token_start)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;

        if ch == '\n' {
            self.pos.line += 1;
            self.pos.col = 1;
        } else {
            self.pos.col += 1;
        }

        Some(ch)
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.chars.peek() == Some(ch) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// The text consumed since `start` was taken from `self.chars`.
    fn lexeme(&self, start: &'src str) -> &'src str {
        &start[..start.len() - self.chars.as_str().len()]
    }

    fn error(&self, kind: LexerErrorKind) -> Token {
        log::trace!("lexer error at {}: {kind}", self.token_start);
        Token::new(TokenKind::Err, kind.to_string(), self.token_start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of file.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
