use vela_lexer::Lexer;

#[test]
fn unterminated_string_marks_its_start() {
    let result = Lexer::new("let s = \"abc").lex();
    assert_eq!(result.incomplete_at, Some(8));
    assert!(!result.diagnostics.is_empty());
}

#[test]
fn open_block_comment_marks_its_start() {
    let result = Lexer::new("let x = 1 /* trailing").lex();
    assert_eq!(result.incomplete_at, Some(10));
}

#[test]
fn unclosed_paren_marks_its_open() {
    let result = Lexer::new("f(1, 2").lex();
    assert_eq!(result.incomplete_at, Some(1));
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Unclosed"))
    );
}

#[test]
fn earliest_open_construct_wins() {
    // Both the bracket and the string are open; the bracket came first.
    let result = Lexer::new("let a = [1, \"x").lex();
    assert_eq!(result.incomplete_at, Some(8));
}

#[test]
fn string_broken_by_newline_is_an_error_not_incomplete() {
    let result = Lexer::new("let s = \"abc\nlet t = 1\n").lex();
    assert!(result.incomplete_at.is_none());
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Unterminated string"))
    );
}

#[test]
fn unmatched_close_is_an_error_not_incomplete() {
    let result = Lexer::new(")").lex();
    assert!(result.incomplete_at.is_none());
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Unmatched"))
    );
}
