//! Lexer implementation.
//!
//! Scans buffer text into tokens in a single linear pass. Newlines become
//! tokens (statement terminators) except inside `(...)` or `[...]`, where a
//! delimiter stack suppresses them. Unterminated constructs at end of input
//! record `LexResult::incomplete_at` so the REPL can wait for more text.
use crate::keywords::KEYWORDS;
use vela_syntax::{
    Diagnostic, DiagnosticKind, Span, Token, TokenKind, is_ident_continue, is_ident_start,
};

/// Lexing result.
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    /// Offset where the earliest construct still open at end of input
    /// begins (delimiter, string, or block comment). More input could
    /// complete it.
    pub incomplete_at: Option<u32>,
}

impl LexResult {
    pub fn is_incomplete(&self) -> bool {
        self.incomplete_at.is_some()
    }
}

/// Vela lexer.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    i: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    /// Open delimiters with the offset where each was opened.
    delim_stack: Vec<(char, usize)>,
    incomplete_at: Option<u32>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            i: 0,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            delim_stack: Vec::new(),
            incomplete_at: None,
        }
    }

    /// Run the lexer and return tokens + diagnostics.
    pub fn lex(mut self) -> LexResult {
        let approx = self.bytes.len().saturating_div(4).max(32);
        self.tokens.reserve(approx);
        while self.i < self.bytes.len() {
            let start = self.i;
            let Some(c) = self.peek_char() else { break };

            match c {
                '\r' => {
                    self.i += 1;
                    if self.peek_char() == Some('\n') {
                        self.i += 1;
                    }
                    self.emit_newline(start);
                }
                '\n' => {
                    self.i += 1;
                    self.emit_newline(start);
                }
                ' ' | '\t' => {
                    self.i += 1;
                }
                '/' => {
                    if self.peek_str("//") {
                        self.i += 2;
                        while let Some(ch) = self.peek_char() {
                            if ch == '\n' {
                                break;
                            }
                            self.i += ch.len_utf8();
                        }
                    } else if self.peek_str("/*") {
                        self.lex_block_comment(start);
                    } else {
                        self.i += 1;
                        if self.peek_char() == Some('=') {
                            self.i += 1;
                            self.push(TokenKind::SlashEq, start, self.i);
                        } else {
                            self.push(TokenKind::Slash, start, self.i);
                        }
                    }
                }
                '"' => self.lex_string(start),
                '(' | '[' | '{' => {
                    self.i += 1;
                    self.delim_stack.push((c, start));
                    let kind = match c {
                        '(' => TokenKind::LParen,
                        '[' => TokenKind::LBracket,
                        _ => TokenKind::LBrace,
                    };
                    self.push(kind, start, self.i);
                }
                ')' | ']' | '}' => {
                    self.i += 1;
                    let expected = match c {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match self.delim_stack.last() {
                        Some((open, _)) if *open == expected => {
                            self.delim_stack.pop();
                        }
                        _ => {
                            self.diagnostics.push(Diagnostic::error_kind(
                                DiagnosticKind::UnmatchedDelimiter(c),
                                Some(Span::new(start as u32, self.i as u32)),
                            ));
                        }
                    }
                    let kind = match c {
                        ')' => TokenKind::RParen,
                        ']' => TokenKind::RBracket,
                        _ => TokenKind::RBrace,
                    };
                    self.push(kind, start, self.i);
                }
                '+' => self.lex_op_eq(start, TokenKind::Plus, TokenKind::PlusEq),
                '-' => {
                    self.i += 1;
                    match self.peek_char() {
                        Some('=') => {
                            self.i += 1;
                            self.push(TokenKind::MinusEq, start, self.i);
                        }
                        Some('>') => {
                            self.i += 1;
                            self.push(TokenKind::Arrow, start, self.i);
                        }
                        _ => self.push(TokenKind::Minus, start, self.i),
                    }
                }
                '*' => self.lex_op_eq(start, TokenKind::Star, TokenKind::StarEq),
                '%' => {
                    self.i += 1;
                    self.push(TokenKind::Percent, start, self.i);
                }
                '=' => self.lex_op_eq(start, TokenKind::Eq, TokenKind::EqEq),
                '!' => self.lex_op_eq(start, TokenKind::Bang, TokenKind::Ne),
                '<' => self.lex_op_eq(start, TokenKind::Lt, TokenKind::Le),
                '>' => self.lex_op_eq(start, TokenKind::Gt, TokenKind::Ge),
                '&' => {
                    self.i += 1;
                    if self.peek_char() == Some('&') {
                        self.i += 1;
                        self.push(TokenKind::AmpAmp, start, self.i);
                    } else {
                        self.diagnostics.push(Diagnostic::error_kind(
                            DiagnosticKind::UnexpectedChar('&'),
                            Some(Span::new(start as u32, self.i as u32)),
                        ));
                    }
                }
                '|' => {
                    self.i += 1;
                    if self.peek_char() == Some('|') {
                        self.i += 1;
                        self.push(TokenKind::PipePipe, start, self.i);
                    } else {
                        self.diagnostics.push(Diagnostic::error_kind(
                            DiagnosticKind::UnexpectedChar('|'),
                            Some(Span::new(start as u32, self.i as u32)),
                        ));
                    }
                }
                '.' => {
                    self.i += 1;
                    if self.peek_char() == Some('.') {
                        self.i += 1;
                        self.push(TokenKind::DotDot, start, self.i);
                    } else {
                        self.push(TokenKind::Dot, start, self.i);
                    }
                }
                ';' => {
                    self.i += 1;
                    self.push(TokenKind::Semi, start, self.i);
                }
                ',' => {
                    self.i += 1;
                    self.push(TokenKind::Comma, start, self.i);
                }
                ':' => {
                    self.i += 1;
                    self.push(TokenKind::Colon, start, self.i);
                }
                c if c.is_ascii_digit() => self.lex_number(start),
                c if is_ident_start(c) => self.lex_ident(start),
                other => {
                    self.i += other.len_utf8();
                    self.diagnostics.push(Diagnostic::error_kind(
                        DiagnosticKind::UnexpectedChar(other),
                        Some(Span::new(start as u32, self.i as u32)),
                    ));
                }
            }
        }

        for (open, at) in self.delim_stack.drain(..).collect::<Vec<_>>() {
            self.diagnostics.push(Diagnostic::error_kind(
                DiagnosticKind::UnclosedDelimiter(open),
                Some(Span::new(at as u32, at as u32 + 1)),
            ));
            self.mark_incomplete(at);
        }

        LexResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
            incomplete_at: self.incomplete_at,
        }
    }

    fn mark_incomplete(&mut self, at: usize) {
        let at = at as u32;
        self.incomplete_at = Some(self.incomplete_at.map_or(at, |cur| cur.min(at)));
    }

    fn emit_newline(&mut self, start: usize) {
        // Newlines terminate statements only outside parens/brackets.
        let suppressed = self
            .delim_stack
            .iter()
            .any(|(c, _)| *c == '(' || *c == '[');
        if !suppressed {
            self.push(TokenKind::Newline, start, self.i);
        }
    }

    fn lex_op_eq(&mut self, start: usize, bare: TokenKind, with_eq: TokenKind) {
        self.i += 1;
        if self.peek_char() == Some('=') {
            self.i += 1;
            self.push(with_eq, start, self.i);
        } else {
            self.push(bare, start, self.i);
        }
    }

    fn lex_block_comment(&mut self, start: usize) {
        self.i += 2;
        let mut terminated = false;
        while self.i < self.bytes.len() {
            if self.peek_str("*/") {
                self.i += 2;
                terminated = true;
                break;
            }
            let ch = self.peek_char().unwrap_or('\0');
            if ch == '\n' {
                let nl_start = self.i;
                self.i += 1;
                self.emit_newline(nl_start);
                continue;
            }
            self.i += ch.len_utf8().max(1);
        }
        if !terminated {
            self.diagnostics.push(Diagnostic::error_kind(
                DiagnosticKind::UnterminatedBlockComment,
                Some(Span::new(start as u32, self.i as u32)),
            ));
            self.mark_incomplete(start);
        }
    }

    fn lex_string(&mut self, start: usize) {
        self.i += 1;
        loop {
            match self.peek_char() {
                None => {
                    // Might just be a partially typed line.
                    self.diagnostics.push(Diagnostic::error_kind(
                        DiagnosticKind::UnterminatedString,
                        Some(Span::new(start as u32, self.i as u32)),
                    ));
                    self.mark_incomplete(start);
                    break;
                }
                Some('\n') => {
                    // Strings are single-line; a newline ends the error.
                    self.diagnostics.push(Diagnostic::error_kind(
                        DiagnosticKind::UnterminatedString,
                        Some(Span::new(start as u32, self.i as u32)),
                    ));
                    break;
                }
                Some('"') => {
                    self.i += 1;
                    break;
                }
                Some('\\') => {
                    self.i += 1;
                    match self.peek_char() {
                        Some(e @ ('n' | 't' | 'r' | '0' | '\\' | '"')) => {
                            self.i += e.len_utf8();
                        }
                        Some(other) => {
                            self.i += other.len_utf8();
                            self.diagnostics.push(Diagnostic::error_kind(
                                DiagnosticKind::InvalidEscape(other),
                                Some(Span::new((self.i - other.len_utf8() - 1) as u32, self.i as u32)),
                            ));
                        }
                        None => {}
                    }
                }
                Some(other) => {
                    self.i += other.len_utf8();
                }
            }
        }
        self.push(TokenKind::Str, start, self.i);
    }

    fn lex_number(&mut self, start: usize) {
        if self.peek_str("0x") || self.peek_str("0X") || self.peek_str("0b") || self.peek_str("0B")
        {
            self.i += 2;
            let digits_start = self.i;
            while let Some(c) = self.peek_char() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    self.i += 1;
                } else {
                    break;
                }
            }
            if self.i == digits_start {
                self.diagnostics.push(Diagnostic::error_kind(
                    DiagnosticKind::InvalidNumber(self.input[start..self.i].to_string()),
                    Some(Span::new(start as u32, self.i as u32)),
                ));
            }
            self.push(TokenKind::Int, start, self.i);
            return;
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() || c == '_' {
                self.i += 1;
            } else {
                break;
            }
        }
        // `1..5` keeps the int and leaves `..` for the next token.
        let mut is_float = false;
        if self.peek_char() == Some('.') && !self.peek_str("..") {
            let after_dot = self.char_at(self.i + 1);
            if after_dot.is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.i += 1;
                while let Some(c) = self.peek_char() {
                    if c.is_ascii_digit() || c == '_' {
                        self.i += 1;
                    } else {
                        break;
                    }
                }
            }
        }
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        self.push(kind, start, self.i);
    }

    fn lex_ident(&mut self, start: usize) {
        while let Some(c) = self.peek_char() {
            if is_ident_continue(c) {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
        let text = &self.input[start..self.i];
        let kind = KEYWORDS.get(text).copied().unwrap_or(TokenKind::Ident);
        self.push(kind, start, self.i);
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start as u32, end as u32),
        });
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.i..].chars().next()
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        if idx > self.input.len() || !self.input.is_char_boundary(idx) {
            return None;
        }
        self.input[idx..].chars().next()
    }

    fn peek_str(&self, s: &str) -> bool {
        self.input[self.i..].starts_with(s)
    }
}
