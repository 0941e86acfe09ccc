use compy_utils::assert_yaml_snapshot_with_source;

use super::{ParseError, Parser};
use crate::ast::*;

fn parse(source: &str) -> Result<Module, ParseError> {
    Parser::new(source, "test.b").parse()
}

fn test_parses(source: &str, should_parse: bool) {
    match (parse(source), should_parse) {
        (Err(err), true) => panic!("failed to parse: {source:?}, error: {err}"),
        (Ok(module), false) => panic!("unexpectedly parsed: {source:?}, got: {module:?}"),
        _ => {}
    }
}

#[test]
fn empty_modules() {
    for (source, name) in [
        ("module main;", "main"),
        ("module other;", "other"),
        ("module more_stuff;", "more_stuff"),
    ] {
        let module = parse(source).unwrap();
        assert_eq!(module.name.as_str(), name);
        assert!(module.statements.is_empty());
    }
}

#[test]
fn const_assign() {
    let module = parse("module main; let x: int = 12;").unwrap();

    assert_eq!(
        module,
        Module {
            name: Ident::new("main"),
            statements: vec![Stmt::ConstAssign(ConstAssign {
                ident: Ident::new("x"),
                ty: Type::new("int"),
                value: Expr::IntLit(12),
            })],
        }
    );
}

#[test]
fn missing_type_annotation() {
    let err = parse("module foo; let a = 12;").unwrap_err();

    assert_eq!(err.message, "expected `:`, found `=`");
    assert_eq!((err.line, err.col), (1, 19));
    assert_eq!(err.to_string(), "test.b:1:19 expected `:`, found `=`");
}

#[test]
fn statement_count_matches_declarations() {
    let module = parse(
        "module m;
        let a: int = 1;
        let b: string = \"two\";
        fn f(): int {}
        f();
        fn g(x: int): int { f(); }",
    )
    .unwrap();

    assert_eq!(module.statements.len(), 5);
}

#[test]
fn expressions() {
    let module = parse("module m; f(1, \"two\", three);").unwrap();

    let [Stmt::FnCall(call)] = module.statements.as_slice() else {
        panic!("expected a single call, got {:?}", module.statements);
    };

    assert_eq!(call.name.as_str(), "f");
    assert_eq!(
        call.args,
        [
            Expr::IntLit(1),
            Expr::StringLit("two".to_owned()),
            Expr::Ident(Ident::new("three")),
        ]
    );
}

#[test]
fn trailing_commas() {
    let module = parse("module m; fn f(a: int, b: int,): int { g(a, b,); }").unwrap();

    let [Stmt::FnDecl(decl)] = module.statements.as_slice() else {
        panic!("expected a single function, got {:?}", module.statements);
    };

    assert_eq!(decl.params.len(), 2);

    let [Stmt::FnCall(call)] = decl.body.statements.as_slice() else {
        panic!("expected a single call, got {:?}", decl.body.statements);
    };

    assert_eq!(call.args.len(), 2);
}

#[test]
fn full_program() {
    let source = "module main;
let answer: int = 42;
fn greet(name: string): int {
    puts(name);
    let count: int = 1;
}
greet(answer,);
";

    assert_yaml_snapshot_with_source!(source => parse(source).unwrap());
}

#[test]
fn nested_fn_decl() {
    let source = "module main; fn outer(): int { fn inner(): int {} inner(); }";

    assert_yaml_snapshot_with_source!(source => parse(source).unwrap());
}

#[test]
fn empty_body() {
    test_parses("module m; fn main(): int {}", true);
}

#[test]
fn fn_decl_needs_no_semicolon() {
    test_parses("module m; fn a(): int {} fn b(): int {}", true);
}

#[test]
fn semicolon_after_fn_decl_is_rejected() {
    test_parses("module m; fn a(): int {};", false);
}

#[test]
fn missing_semicolon_after_call() {
    test_parses("module m; f()", false);
    test_parses("module m; fn main(): int { f() }", false);
}

#[test]
fn missing_semicolon_after_const() {
    test_parses("module m; let x: int = 1", false);
    test_parses("module m; fn main(): int { let x: int = 1 }", false);
}

#[test]
fn missing_module_header() {
    test_parses("", false);
    test_parses("let x: int = 1;", false);
    test_parses("module;", false);
    test_parses("module main", false);
}

#[test]
fn missing_return_type() {
    test_parses("module m; fn main() {}", false);
}

#[test]
fn missing_brace() {
    test_parses("module m; fn main(): int { f();", false);
}

#[test]
fn lone_comma() {
    test_parses("module m; f(,);", false);
    test_parses("module m; fn f(,): int {}", false);
}

#[test]
fn unsupported_statements() {
    test_parses("module m; return 1;", false);
    test_parses("module m; 12;", false);
}

#[test]
fn wrong_case() {
    test_parses("MODULE m;", false);
}

#[test]
fn comments() {
    test_parses("// header\nmodule m; // trailing\nf(); // done", true);
}

#[test]
fn lexer_errors_become_parse_errors() {
    let err = parse("module m;\nlet x: int = @;").unwrap_err();

    assert_eq!(
        err.message,
        "expected an expression, found invalid token (unexpected character '@')"
    );
    assert_eq!((err.line, err.col), (2, 14));
}

#[test]
fn error_at_end_of_file() {
    let err = parse("module m;\nfn f(): int {").unwrap_err();

    assert_eq!(err.message, "expected `}`, found end of file");
    assert_eq!((err.line, err.col), (2, 14));
}
