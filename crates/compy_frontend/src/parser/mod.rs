#[cfg(test)]
mod tests;

use std::mem;

use crate::ast::*;
use crate::lexer::Lexer;
use crate::token::{Keyword, Token, TokenKind};

/// The first unmet expectation in a source file. Parsing stops as soon as one is found.
#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{filename}:{line}:{col} {message}")]
pub struct ParseError {
    pub message: String,
    pub filename: String,
    pub line: u32,
    pub col: u32,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive descent parser with two tokens of lookahead.
///
/// Error tokens from the lexer aren't treated specially: they simply never match
/// what the grammar expects, so they surface as the parse error for that position.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    filename: String,

    tok: Token,
    next_tok: Token,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, filename: impl Into<String>) -> Self {
        let mut lexer = Lexer::new(source);
        let tok = lexer.next_token();
        let next_tok = lexer.next_token();

        Self {
            lexer,
            filename: filename.into(),

            tok,
            next_tok,
        }
    }

    pub fn parse(mut self) -> ParseResult<Module> {
        self.parse_module()
    }

    fn parse_module(&mut self) -> ParseResult<Module> {
        self.expect(TokenKind::Keyword(Keyword::Module))?;
        let name = self.parse_ident()?;
        self.expect(TokenKind::Semicolon)?;

        let mut statements = vec![];
        while !self.at(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }

        log::debug!(
            "parsed module `{name}` from {} ({} top-level statements)",
            self.filename,
            statements.len()
        );

        Ok(Module { name, statements })
    }

    // Only function declarations may omit the trailing `;`, at any nesting level.
    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.tok.kind {
            TokenKind::Keyword(Keyword::Let) => {
                let stmt = self.parse_const_assign()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::ConstAssign(stmt))
            }

            TokenKind::Keyword(Keyword::Fn) => self.parse_fn_decl().map(Stmt::FnDecl),

            TokenKind::Identifier => {
                let stmt = self.parse_fn_call()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::FnCall(stmt))
            }

            _ => Err(self.error_expected("a statement")),
        }
    }

    fn parse_const_assign(&mut self) -> ParseResult<ConstAssign> {
        self.expect(TokenKind::Keyword(Keyword::Let))?;
        let ident = self.parse_ident()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expr()?;

        Ok(ConstAssign { ident, ty, value })
    }

    fn parse_fn_decl(&mut self) -> ParseResult<FnDecl> {
        self.expect(TokenKind::Keyword(Keyword::Fn))?;
        let name = self.parse_ident()?;

        let params = self.parse_paren_list(|parser| {
            let name = parser.parse_ident()?;
            parser.expect(TokenKind::Colon)?;
            let ty = parser.parse_type()?;
            Ok(Param { name, ty })
        })?;

        self.expect(TokenKind::Colon)?;
        let ret_ty = self.parse_type()?;
        let body = self.parse_block()?;

        Ok(FnDecl {
            name,
            ret_ty,
            params,
            body,
        })
    }

    fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect(TokenKind::LBrace)?;

        let mut statements = vec![];
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace)?;

        Ok(Block { statements })
    }

    fn parse_fn_call(&mut self) -> ParseResult<FnCall> {
        let name = self.parse_ident()?;
        let args = self.parse_paren_list(Self::parse_expr)?;

        Ok(FnCall { name, args })
    }

    /// Parses `( [item (, item)* [,]] )`.
    fn parse_paren_list<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.expect(TokenKind::LParen)?;

        let mut items = vec![];
        while !self.at(TokenKind::RParen) {
            items.push(parse_item(self)?);

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RParen)?;

        Ok(items)
    }

    fn parse_expr(&mut self) -> ParseResult<Expr> {
        match self.tok.kind {
            TokenKind::Integer => {
                let token = self.advance();
                token.text.parse().map(Expr::IntLit).map_err(|_| {
                    let message = format!("integer literal {} out of range", token.text);
                    self.error_at(&token, message)
                })
            }

            TokenKind::String => Ok(Expr::StringLit(self.advance().text)),

            TokenKind::Identifier => Ok(Expr::Ident(Ident(self.advance().text))),

            _ => Err(self.error_expected("an expression")),
        }
    }

    fn parse_type(&mut self) -> ParseResult<Type> {
        match self.tok.kind {
            TokenKind::Identifier => Ok(Type(Ident(self.advance().text))),
            _ => Err(self.error_expected("a type")),
        }
    }

    fn parse_ident(&mut self) -> ParseResult<Ident> {
        self.expect(TokenKind::Identifier).map(|token| Ident(token.text))
    }

    /// Consumes the current token, returning it.
    fn advance(&mut self) -> Token {
        let next_tok = mem::replace(&mut self.next_tok, self.lexer.next_token());
        mem::replace(&mut self.tok, next_tok)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.tok.kind == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(kind.token_name()))
        }
    }

    fn error_expected(&self, expected: &str) -> ParseError {
        let message = format!("expected {expected}, found {}", self.tok.describe());
        self.error_at(&self.tok, message)
    }

    fn error_at(&self, token: &Token, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            filename: self.filename.clone(),
            line: token.pos.line,
            col: token.pos.col,
        }
    }
}
