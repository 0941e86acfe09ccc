use super::Lexer;
use crate::token::{Keyword, Position, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    crate::lex(source).map(|token| token.kind).collect()
}

fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[test]
fn integer() {
    let tokens = lex("123");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "123");
}

#[test]
fn two_integers() {
    assert_eq!(kinds("123 456"), [TokenKind::Integer, TokenKind::Integer]);
}

#[test]
fn integer_overflow() {
    let tokens = lex("100000000000000000000");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Err);
    assert_eq!(
        tokens[0].text,
        "integer literal 100000000000000000000 out of range"
    );
}

#[test]
fn surrounding_whitespace() {
    for source in ["123", "123 ", " 123", "\t123\r\n", "\n\n  123  \n"] {
        assert_eq!(kinds(source), [TokenKind::Integer], "{source:?}");
    }
}

#[test]
fn identifiers_with_underscores() {
    for source in ["foo_bar", "_foobar", "foobar_", "foo1_2"] {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1, "{source:?}");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, source);
    }
}

#[test]
fn keywords() {
    assert_eq!(
        kinds("fn let module return if fns"),
        [
            TokenKind::Keyword(Keyword::Fn),
            TokenKind::Keyword(Keyword::Let),
            TokenKind::Keyword(Keyword::Module),
            TokenKind::Keyword(Keyword::Return),
            TokenKind::Keyword(Keyword::If),
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn fn_signature() {
    assert_eq!(
        kinds("fn foo(a : int)"),
        [
            TokenKind::Keyword(Keyword::Fn),
            TokenKind::Identifier,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("()[]{}:=;,"),
        [
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LSquare,
            TokenKind::RSquare,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Colon,
            TokenKind::Assign,
            TokenKind::Semicolon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn greater_than_maximal_munch() {
    assert_eq!(
        kinds("> = >= >=="),
        [
            TokenKind::Gt,
            TokenKind::Assign,
            TokenKind::GtEq,
            TokenKind::GtEq,
            TokenKind::Assign,
        ]
    );
}

#[test]
fn comments_and_division() {
    assert_eq!(
        kinds("a / b // the rest is ignored\nc"),
        [
            TokenKind::Identifier,
            TokenKind::Div,
            TokenKind::Identifier,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(kinds("a // no newline"), [TokenKind::Identifier]);
}

#[test]
fn string_literal() {
    let tokens = lex(r#""hello, world" x"#);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "hello, world");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn string_has_no_escapes() {
    let tokens = lex(r#""a\"b""#);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, r"a\");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Err);
}

#[test]
fn unterminated_string() {
    let tokens = lex(r#"let s = "oops"#);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Err);
    assert_eq!(last.text, "unterminated string literal");
    assert_eq!(last.pos, Position::new(1, 9));
}

#[test]
fn unexpected_char_is_an_error_token() {
    let tokens = lex("a @ b");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        [TokenKind::Identifier, TokenKind::Err, TokenKind::Identifier]
    );
    assert_eq!(tokens[1].text, "unexpected character '@'");
    assert_eq!(tokens[1].pos, Position::new(1, 3));
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.pos, Position::new(1, 2));
    }
}

#[test]
fn positions() {
    let tokens = lex("module main;\n  fn f() {}\n");
    let positions: Vec<_> = tokens.iter().map(|t| (t.pos.line, t.pos.col)).collect();
    assert_eq!(
        positions,
        [
            (1, 1),
            (1, 8),
            (1, 12),
            (2, 3),
            (2, 6),
            (2, 7),
            (2, 8),
            (2, 10),
            (2, 11),
        ]
    );
}

#[test]
fn columns_count_chars() {
    let tokens = lex("\"ñé\" x");
    assert_eq!(tokens[1].pos, Position::new(1, 6));
}
