use vela_lexer::Lexer;
use vela_syntax::TokenKind;

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src).lex().tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn lex_smoke_declarations() {
    let src = "let age: Int = 25\nif age >= 18 {\n    println(\"adult\")\n}\n";
    let result = Lexer::new(src).lex();
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert!(!result.is_incomplete());
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::KwLet));
    assert!(kinds.contains(&TokenKind::Colon));
    assert!(kinds.contains(&TokenKind::Ge));
    assert!(kinds.contains(&TokenKind::Str));
}

#[test]
fn newline_suppressed_inside_parens() {
    let newlines = kinds("f(1,\n2)\n")
        .iter()
        .filter(|k| **k == TokenKind::Newline)
        .count();
    assert_eq!(newlines, 1);
}

#[test]
fn newline_kept_inside_braces() {
    let newlines = kinds("{\nlet x = 1\n}\n")
        .iter()
        .filter(|k| **k == TokenKind::Newline)
        .count();
    assert_eq!(newlines, 3);
}

#[test]
fn range_is_two_ints_not_a_float() {
    assert_eq!(
        kinds("1..5"),
        vec![TokenKind::Int, TokenKind::DotDot, TokenKind::Int]
    );
}

#[test]
fn numeric_literal_kinds() {
    assert_eq!(kinds("1_000"), vec![TokenKind::Int]);
    assert_eq!(kinds("3.14"), vec![TokenKind::Float]);
    assert_eq!(kinds("0xFF"), vec![TokenKind::Int]);
    assert_eq!(kinds("0b1010"), vec![TokenKind::Int]);
}

#[test]
fn compound_operators() {
    assert_eq!(
        kinds("x += 1"),
        vec![TokenKind::Ident, TokenKind::PlusEq, TokenKind::Int]
    );
    assert_eq!(
        kinds("a -> b"),
        vec![TokenKind::Ident, TokenKind::Arrow, TokenKind::Ident]
    );
}

#[test]
fn comments_produce_no_tokens() {
    assert_eq!(kinds("// line comment"), vec![]);
    assert_eq!(kinds("/* block */ 1"), vec![TokenKind::Int]);
}
