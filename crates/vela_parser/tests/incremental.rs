use bumpalo::Bump;
use vela_ast::AstContext;
use vela_lexer::Lexer;
use vela_parser::{IncrementalParse, Parser, ReplState};
use vela_syntax::ByteIndex;

fn parse_inc(src: &str) -> IncrementalParse {
    let mut ctx = AstContext::new();
    let lex = Lexer::new(src).lex();
    let open_at = lex.incomplete_at.map(ByteIndex);
    let bump = Bump::new();
    Parser::new(&mut ctx, src, &lex.tokens, &bump).parse_incremental(open_at)
}

#[test]
fn complete_item_is_consumed() {
    let result = parse_inc("let x = 1\n");
    assert_eq!(result.state, ReplState::Complete);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.consumed, Some(ByteIndex(9)));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn partial_function_waits_for_more() {
    let result = parse_inc("func add(a, b) {\n    return a");
    assert_eq!(result.state, ReplState::NeedMore);
    assert!(result.items.is_empty());
    assert_eq!(result.consumed, None);
    // Nothing was committed, so nothing is reported yet.
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn leading_items_commit_before_a_partial_tail() {
    let result = parse_inc("let x = 1\nfunc f() {\n");
    assert_eq!(result.state, ReplState::NeedMore);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.consumed, Some(ByteIndex(9)));
}

#[test]
fn malformed_tail_is_an_error() {
    let result = parse_inc("let x = 1\n= 2\n");
    assert_eq!(result.state, ReplState::Error);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.consumed, Some(ByteIndex(9)));
    assert!(!result.diagnostics.is_empty());
}

#[test]
fn item_ending_in_an_open_string_rolls_back() {
    // The unterminated string lexes as a string token, so the binding would
    // otherwise look complete. The open-construct offset forces a rollback.
    let result = parse_inc("let s = \"abc");
    assert_eq!(result.state, ReplState::NeedMore);
    assert!(result.items.is_empty());
    assert_eq!(result.consumed, None);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn unclosed_call_waits_for_more() {
    let result = parse_inc("println(1, 2");
    assert_eq!(result.state, ReplState::NeedMore);
    assert!(result.items.is_empty());
}

#[test]
fn item_flush_with_end_of_input_waits_for_more() {
    // Streaming may split a token: "let x = 12" then "34" is one literal.
    let result = parse_inc("let x = 12");
    assert_eq!(result.state, ReplState::NeedMore);
    assert!(result.items.is_empty());
    assert_eq!(result.consumed, None);
}

#[test]
fn terminated_item_at_end_of_input_commits() {
    let result = parse_inc("let x = 12;");
    assert_eq!(result.state, ReplState::Complete);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.consumed, Some(ByteIndex(11)));
}

#[test]
fn empty_input_is_complete() {
    let result = parse_inc("");
    assert_eq!(result.state, ReplState::Complete);
    assert!(result.items.is_empty());
    assert_eq!(result.consumed, None);
}

#[test]
fn consumed_lands_on_item_boundaries_only() {
    let result = parse_inc("let a = 1\nlet b = 2\nlet c = ");
    assert_eq!(result.state, ReplState::NeedMore);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.consumed, Some(ByteIndex(19)));
}
