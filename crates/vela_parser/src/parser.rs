//! Parser core: token cursor, helpers, entry points.
use vela_ast::{AstContext, BinaryOp, Item};
use vela_syntax::{
    ByteIndex, Diagnostic, DiagnosticKind, Span, Symbol, Token, TokenKind,
};

/// Whole-buffer parse result.
pub struct ParseResult {
    pub items: Vec<Item>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome class of an incremental parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplState {
    /// All input up to the end offset was consumed.
    Complete,
    /// The tail is an incomplete construct; wait for more input.
    NeedMore,
    /// The tail failed to parse as a complete item.
    Error,
}

/// Incremental parse result. `consumed` is the byte offset just past the
/// last complete top-level item, or `None` when no item completed.
pub struct IncrementalParse {
    pub items: Vec<Item>,
    pub consumed: Option<ByteIndex>,
    pub state: ReplState,
    pub diagnostics: Vec<Diagnostic>,
}

/// Vela parser.
///
/// `input` is the full buffer text; token spans index into it directly, so a
/// REPL slice parses with buffer-absolute spans. Scratch lives in the
/// caller-provided bump arena; names are interned through the context.
pub struct Parser<'a, 'b, 'c> {
    pub ctx: &'c mut AstContext,
    pub input: &'a str,
    pub tokens: &'a [Token],
    pub i: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub bump: &'b bumpalo::Bump,
}

impl<'a, 'b, 'c> Parser<'a, 'b, 'c> {
    /// Create a new parser.
    pub fn new(
        ctx: &'c mut AstContext,
        input: &'a str,
        tokens: &'a [Token],
        bump: &'b bumpalo::Bump,
    ) -> Self {
        Self {
            ctx,
            input,
            tokens,
            i: 0,
            diagnostics: Vec::with_capacity(16),
            bump,
        }
    }

    /// Parse the full input and return the items plus diagnostics.
    pub fn parse(mut self) -> ParseResult {
        let mut items: Vec<Item> = Vec::with_capacity(8);
        loop {
            self.skip_trivia();
            if self.at(TokenKind::Eof) {
                break;
            }
            let item = match self.parse_item() {
                Some(item) => item,
                None => self.recover_item(),
            };
            items.push(item);
        }

        ParseResult {
            items,
            diagnostics: self.diagnostics,
        }
    }

    /// Parse items one at a time, stopping at the first incomplete or
    /// malformed one. Tokens past the last complete item are untouched:
    /// `consumed` only ever lands on a complete item boundary.
    ///
    /// `open_at` is where the lexer left a construct unfinished (unterminated
    /// string, open block comment); an item reaching that offset is rolled
    /// back and reported as needing more input.
    pub fn parse_incremental(mut self, open_at: Option<ByteIndex>) -> IncrementalParse {
        let mut items: Vec<Item> = Vec::new();
        let mut consumed: Option<ByteIndex> = None;
        let mut state = ReplState::Complete;
        loop {
            self.skip_trivia();
            if self.at(TokenKind::Eof) {
                break;
            }
            let checkpoint = self.i;
            let diag_mark = self.diagnostics.len();
            match self.parse_item() {
                Some(item) => {
                    let end = self.prev_token_end();
                    if let (Some(open), Some(end)) = (open_at, end) {
                        if end.0 > open.0 {
                            self.i = checkpoint;
                            self.diagnostics.truncate(diag_mark);
                            state = ReplState::NeedMore;
                            break;
                        }
                    }
                    // An item whose last token flushes with the end of
                    // input may still grow: `let x = 12` then `34` is one
                    // literal, not two. Hold it until a terminator or a
                    // closing brace pins it down.
                    if self.at(TokenKind::Eof)
                        && !matches!(
                            self.prev_token_kind(),
                            Some(TokenKind::Semi | TokenKind::RBrace | TokenKind::Newline)
                        )
                    {
                        self.i = checkpoint;
                        self.diagnostics.truncate(diag_mark);
                        state = ReplState::NeedMore;
                        break;
                    }
                    items.push(item);
                    consumed = end.or(consumed);
                }
                None => {
                    if self.at(TokenKind::Eof) {
                        // Ran off the end mid-construct. Roll back so the
                        // partial text is re-parsed once more arrives.
                        self.i = checkpoint;
                        self.diagnostics.truncate(diag_mark);
                        state = ReplState::NeedMore;
                    } else {
                        state = ReplState::Error;
                    }
                    break;
                }
            }
        }

        IncrementalParse {
            items,
            consumed,
            state,
            diagnostics: self.diagnostics,
        }
    }

    pub(crate) fn recover_item(&mut self) -> Item {
        let start_span = self.cur_span();
        let start_i = self.i;
        let mut brace_depth = 0;
        while !self.at(TokenKind::Eof) {
            if self.at(TokenKind::LBrace) {
                brace_depth += 1;
                self.bump_token();
                continue;
            }
            if self.at(TokenKind::RBrace) {
                if brace_depth > 0 {
                    brace_depth -= 1;
                    self.bump_token();
                    continue;
                } else {
                    // Don't consume unmatched RBrace
                    break;
                }
            }
            if brace_depth == 0 && (self.at(TokenKind::Semi) || self.at(TokenKind::Newline)) {
                break;
            }
            self.bump_token();
        }
        if self.at(TokenKind::Semi) || self.at(TokenKind::Newline) {
            self.bump_token();
        } else if self.i == start_i && !self.at(TokenKind::Eof) {
            // Stray closer: consume it so recovery always makes progress.
            self.bump_token();
        }
        Item::Error(Span::new(start_span.start.0, self.cur_span().end.0))
    }

    pub(crate) fn expect_stmt_terminator(&mut self) -> Option<()> {
        if self.at(TokenKind::Semi)
            || self.at(TokenKind::Newline)
            || self.at(TokenKind::Eof)
            || self.at(TokenKind::RBrace)
        {
            if self.at(TokenKind::Semi) {
                self.bump_token();
            }
            return Some(());
        }
        let span = self.cur_span();
        self.diagnostics.push(Diagnostic::error_kind(
            DiagnosticKind::ExpectedToken("statement terminator".to_string()),
            Some(span),
        ));
        None
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        self.skip_trivia();
        if self.at(kind) {
            return Some(self.bumped());
        }
        let span = self.cur_span();
        self.diagnostics.push(Diagnostic::error_kind(
            DiagnosticKind::ExpectedToken(format!("{:?}", kind)),
            Some(span),
        ));
        None
    }

    pub(crate) fn expect_ident(&mut self) -> Option<(Symbol, Span)> {
        self.skip_trivia();
        let kind = self.peek_kind();
        if is_keyword(kind) {
            let t = self.bumped();
            let kw = self.token_text(&t).to_string();
            self.diagnostics.push(Diagnostic::error_kind(
                DiagnosticKind::KeywordAsIdentifier(kw),
                Some(t.span),
            ));
            return None;
        }
        let t = self.expect(TokenKind::Ident)?;
        let text = self.token_text(&t);
        Some((self.ctx.symbols.intern(text), t.span))
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.i)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.i + n).map(|t| t.kind)
    }

    pub(crate) fn bumped(&mut self) -> Token {
        let t = self.tokens[self.i].clone();
        self.i += 1;
        t
    }

    pub(crate) fn bump_token(&mut self) {
        self.i += 1;
    }

    pub(crate) fn skip_trivia(&mut self) {
        while self.at(TokenKind::Newline) {
            self.i += 1;
        }
    }

    pub(crate) fn cur_span(&self) -> Span {
        self.tokens.get(self.i).map(|t| t.span).unwrap_or_else(|| {
            let end = self
                .tokens
                .last()
                .map(|t| t.span.end.0)
                .unwrap_or(self.input.len() as u32);
            Span::new(end, end)
        })
    }

    /// End offset of the most recently consumed token.
    pub(crate) fn prev_token_end(&self) -> Option<ByteIndex> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.tokens.get(j))
            .map(|t| t.span.end)
    }

    pub(crate) fn prev_token_kind(&self) -> Option<TokenKind> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.tokens.get(j))
            .map(|t| t.kind)
    }

    pub(crate) fn token_text(&self, t: &Token) -> &'a str {
        &self.input[t.span.start.0 as usize..t.span.end.0 as usize]
    }

    /// Decode an `Int` token, reporting bad digits or overflow. The lexer
    /// accepts any alphanumeric run after a radix prefix, so `0xZZ` arrives
    /// here as a single token.
    pub(crate) fn int_literal_value(&mut self, t: &Token) -> i64 {
        let raw = self.token_text(t);
        let cleaned: String = raw.chars().filter(|c| *c != '_').collect();
        let (digits, radix) = if let Some(hex) = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            (hex, 16)
        } else if let Some(bin) = cleaned
            .strip_prefix("0b")
            .or_else(|| cleaned.strip_prefix("0B"))
        {
            (bin, 2)
        } else {
            (cleaned.as_str(), 10)
        };
        if digits.is_empty() {
            // A bare radix prefix was already reported by the lexer.
            return 0;
        }
        match i64::from_str_radix(digits, radix) {
            Ok(v) => v,
            Err(_) => {
                self.diagnostics.push(Diagnostic::error_kind(
                    DiagnosticKind::InvalidNumber(raw.to_string()),
                    Some(t.span),
                ));
                0
            }
        }
    }
}

fn is_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::KwFunc
            | TokenKind::KwStruct
            | TokenKind::KwEnum
            | TokenKind::KwImport
            | TokenKind::KwLet
            | TokenKind::KwVar
            | TokenKind::KwIf
            | TokenKind::KwElse
            | TokenKind::KwWhile
            | TokenKind::KwFor
            | TokenKind::KwIn
            | TokenKind::KwReturn
            | TokenKind::KwBreak
            | TokenKind::KwContinue
    )
}

pub(crate) fn infix_binding_power(op: BinaryOp) -> (u8, u8) {
    match op {
        BinaryOp::Or => (1, 2),
        BinaryOp::And => (3, 4),
        BinaryOp::Eq | BinaryOp::Ne => (5, 6),
        BinaryOp::Gt | BinaryOp::Lt | BinaryOp::Ge | BinaryOp::Le => (7, 8),
        BinaryOp::Add | BinaryOp::Sub => (9, 10),
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => (11, 12),
    }
}

pub(crate) fn prefix_binding_power() -> u8 {
    13
}
