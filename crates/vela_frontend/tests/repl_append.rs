use vela_ast::{TranslationUnit, UnitKind};
use vela_frontend::{Driver, ReplContext};
use vela_syntax::{ByteIndex, Diagnostic};

struct Session {
    driver: Driver,
    unit: TranslationUnit,
    repl: ReplContext,
}

impl Session {
    fn new() -> Self {
        let mut driver = Driver::new();
        let buffer = driver.add_buffer("<repl>", String::new());
        Self {
            driver,
            unit: TranslationUnit::new("repl", UnitKind::Main),
            repl: ReplContext::new(buffer),
        }
    }

    /// Append `text` to the session buffer and run one incremental step.
    fn push(&mut self, text: &str) -> bool {
        let end = self
            .driver
            .sources
            .extend_buffer(self.repl.buffer, text)
            .expect("repl buffer exists");
        self.driver
            .append_to_repl_unit(&mut self.unit, &mut self.repl, end)
    }

    fn drain(&mut self) -> Vec<Diagnostic> {
        self.driver.ctx.take_diagnostics()
    }

    fn end(&self) -> ByteIndex {
        self.driver
            .sources
            .buffer(self.repl.buffer)
            .expect("repl buffer exists")
            .end()
    }
}

#[test]
fn complete_line_is_merged_and_cursor_advances() {
    let mut s = Session::new();
    assert!(s.push("let x = 1\n"));
    assert_eq!(s.unit.items.len(), 1);
    assert_eq!(s.repl.offset, ByteIndex(9));
    assert!(s.drain().is_empty());
}

#[test]
fn append_with_no_new_input_is_a_noop() {
    let mut s = Session::new();
    assert!(s.push("let x = 1\n"));
    let before = s.repl.offset;
    let end = s.end();
    let merged = s
        .driver
        .append_to_repl_unit(&mut s.unit, &mut s.repl, end);
    assert!(!merged);
    assert_eq!(s.repl.offset, before);
    assert_eq!(s.unit.items.len(), 1);
}

#[test]
fn incomplete_function_waits_across_lines() {
    let mut s = Session::new();
    assert!(!s.push("func double(x) {\n"));
    assert_eq!(s.repl.offset, ByteIndex(0));
    assert!(s.unit.items.is_empty());
    // Still typing: nothing should be reported yet.
    assert!(s.drain().is_empty());

    assert!(s.push("    return x + x\n}\n"));
    assert_eq!(s.unit.items.len(), 1);
    assert!(s.drain().is_empty());
}

#[test]
fn earlier_appends_stay_visible() {
    let mut s = Session::new();
    assert!(s.push("func twice(x) {\n    return x + x\n}\n"));
    assert!(s.push("let y = twice(2)\n"));
    let diags = s.drain();
    assert!(!diags.iter().any(Diagnostic::is_error), "{:?}", diags);
    assert_eq!(s.unit.items.len(), 2);
}

#[test]
fn redefinition_is_allowed_interactively() {
    let mut s = Session::new();
    assert!(s.push("let a = 1\n"));
    assert!(s.push("let a = 2\n"));
    let diags = s.drain();
    assert!(!diags.iter().any(Diagnostic::is_error), "{:?}", diags);
}

#[test]
fn leading_items_merge_ahead_of_a_partial_tail() {
    let mut s = Session::new();
    assert!(s.push("let x = 1\nlet y = "));
    assert_eq!(s.unit.items.len(), 1);
    assert_eq!(s.repl.offset, ByteIndex(9));
    assert!(s.drain().is_empty());

    assert!(s.push("2\n"));
    assert_eq!(s.unit.items.len(), 2);
    let diags = s.drain();
    assert!(!diags.iter().any(Diagnostic::is_error), "{:?}", diags);
}

#[test]
fn open_string_is_never_split() {
    let mut s = Session::new();
    assert!(!s.push("let s = \"ab"));
    assert_eq!(s.repl.offset, ByteIndex(0));
    // The unterminated-string report is withheld while more input may
    // still close it.
    assert!(s.drain().is_empty());

    assert!(s.push("c\"\n"));
    assert_eq!(s.unit.items.len(), 1);
    assert!(s.drain().is_empty());
}

#[test]
fn open_block_comment_waits_across_lines() {
    let mut s = Session::new();
    assert!(!s.push("/* a note\n"));
    assert_eq!(s.repl.offset, ByteIndex(0));
    // An open comment lexes to nothing; its report must still wait.
    assert!(s.drain().is_empty());

    assert!(s.push("still going */\nlet a = 1\n"));
    assert_eq!(s.unit.items.len(), 1);
    assert!(s.drain().is_empty());
}

#[test]
fn trailing_open_comment_holds_its_report() {
    let mut s = Session::new();
    assert!(s.push("let a = 1\n/* note\n"));
    assert_eq!(s.unit.items.len(), 1);
    assert_eq!(s.repl.offset, ByteIndex(9));
    assert!(s.drain().is_empty());

    assert!(s.push("*/\nlet b = a\n"));
    assert_eq!(s.unit.items.len(), 2);
    assert!(s.drain().is_empty());
}

#[test]
fn malformed_tail_reports_and_holds_the_cursor() {
    let mut s = Session::new();
    assert!(s.push("let x = 1\n= 2\n"));
    assert_eq!(s.repl.offset, ByteIndex(9));
    let diags = s.drain();
    assert!(diags.iter().any(Diagnostic::is_error));

    // Driver policy: abandon the rejected tail, then keep going.
    let end = s.end();
    s.repl.skip_to(end);
    assert!(s.push("let z = 3\n"));
    assert_eq!(s.unit.items.len(), 2);
}

#[test]
fn offset_is_monotonic() {
    let mut s = Session::new();
    let mut last = ByteIndex(0);
    for chunk in ["let a = 1\n", "func f() {\n", "    return a\n", "}\n"] {
        s.push(chunk);
        assert!(s.repl.offset.0 >= last.0);
        last = s.repl.offset;
    }
    assert_eq!(s.unit.items.len(), 2);
}

#[test]
fn chunks_counts_every_append() {
    let mut s = Session::new();
    s.push("let a = 1\n");
    s.push("let b = 2\n");
    let end = s.end();
    s.driver.append_to_repl_unit(&mut s.unit, &mut s.repl, end);
    assert_eq!(s.repl.chunks, 3);
}

#[test]
fn semantic_errors_still_merge_the_item() {
    let mut s = Session::new();
    assert!(s.push("let x = missing_name\n"));
    assert_eq!(s.unit.items.len(), 1);
    let diags = s.drain();
    assert!(diags.iter().any(Diagnostic::is_error));
}
