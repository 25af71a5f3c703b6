//! Statement parsing.
use vela_ast::{AssignOp, AssignStmt, Expr, ForInStmt, IfStmt, Stmt, WhileStmt};
use vela_syntax::{Diagnostic, DiagnosticKind, Span, TokenKind};

use super::Parser;

impl<'a, 'b, 'c> Parser<'a, 'b, 'c> {
    /// Parse a single statement.
    pub(crate) fn parse_stmt(&mut self) -> Option<Stmt> {
        self.skip_trivia();
        match self.peek_kind() {
            TokenKind::KwIf => self.parse_if().map(|x| Stmt::If(Box::new(x))),
            TokenKind::KwWhile => self.parse_while().map(|x| Stmt::While(Box::new(x))),
            TokenKind::KwFor => self.parse_for_in().map(|x| Stmt::ForIn(Box::new(x))),
            TokenKind::KwReturn => self.parse_return(),
            TokenKind::KwBreak => {
                let t = self.bumped();
                self.expect_stmt_terminator()?;
                Some(Stmt::Break(t.span))
            }
            TokenKind::KwContinue => {
                let t = self.bumped();
                self.expect_stmt_terminator()?;
                Some(Stmt::Continue(t.span))
            }
            TokenKind::KwLet | TokenKind::KwVar => {
                let decl = self.parse_binding_decl()?;
                self.expect_stmt_terminator()?;
                Some(Stmt::Binding(Box::new(decl)))
            }
            TokenKind::LBrace => self.parse_block().map(Stmt::Block),
            _ => self.parse_assign_or_expr_stmt(),
        }
    }

    /// Parse a `{ stmts... }` block.
    pub(crate) fn parse_block(&mut self) -> Option<Box<[vela_ast::Stmt]>> {
        self.skip_trivia();
        if self.at(TokenKind::LBrace) {
            self.bump_token();
            let mut stmts: Vec<Stmt> = Vec::with_capacity(8);
            while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
                self.skip_trivia();
                if self.at(TokenKind::RBrace) {
                    break;
                }
                match self.parse_stmt() {
                    Some(s) => stmts.push(s),
                    None => {
                        if self.at(TokenKind::Eof) {
                            // Incomplete block: bail so the REPL path sees Eof.
                            return None;
                        }
                        stmts.push(self.recover_stmt());
                    }
                }
            }
            self.expect(TokenKind::RBrace)?;
            return Some(stmts.into_boxed_slice());
        }
        let span = self.cur_span();
        self.diagnostics.push(Diagnostic::error_kind(
            DiagnosticKind::ExpectedToken("{ ... } block".to_string()),
            Some(span),
        ));
        None
    }

    pub(crate) fn recover_stmt(&mut self) -> Stmt {
        let start_span = self.cur_span();
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
        }
        Stmt::Error(Span::new(start_span.start.0, self.cur_span().end.0))
    }

    fn parse_if(&mut self) -> Option<IfStmt> {
        let mut branches: Vec<(Expr, Box<[Stmt]>)> = Vec::with_capacity(2);
        self.expect(TokenKind::KwIf)?;
        let cond = self.parse_expr(0)?;
        let body = self.parse_block()?;
        branches.push((cond, body));
        let mut else_branch: Option<Box<[Stmt]>> = None;
        loop {
            // `else` may sit on the next line after `}`.
            let mark = self.i;
            self.skip_trivia();
            if !self.at(TokenKind::KwElse) {
                self.i = mark;
                break;
            }
            self.bump_token();
            if self.at(TokenKind::KwIf) {
                self.bump_token();
                let cond = self.parse_expr(0)?;
                let body = self.parse_block()?;
                branches.push((cond, body));
            } else {
                else_branch = Some(self.parse_block()?);
                break;
            }
        }
        Some(IfStmt {
            branches: branches.into_boxed_slice(),
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Option<WhileStmt> {
        self.expect(TokenKind::KwWhile)?;
        let cond = self.parse_expr(0)?;
        let body = self.parse_block()?;
        Some(WhileStmt { cond, body })
    }

    fn parse_for_in(&mut self) -> Option<ForInStmt> {
        self.expect(TokenKind::KwFor)?;
        let (var, var_span) = self.expect_ident()?;
        self.expect(TokenKind::KwIn)?;
        let iter = self.parse_expr(0)?;
        let body = self.parse_block()?;
        Some(ForInStmt {
            var,
            var_span,
            iter,
            body,
        })
    }

    fn parse_return(&mut self) -> Option<Stmt> {
        let t = self.bumped();
        if self.at(TokenKind::Semi)
            || self.at(TokenKind::Newline)
            || self.at(TokenKind::Eof)
            || self.at(TokenKind::RBrace)
        {
            self.expect_stmt_terminator()?;
            return Some(Stmt::Return(None, t.span));
        }
        let value = self.parse_expr(0)?;
        self.expect_stmt_terminator()?;
        Some(Stmt::Return(Some(value), t.span))
    }

    fn parse_assign_or_expr_stmt(&mut self) -> Option<Stmt> {
        let start = self.cur_span();
        let target = self.parse_expr(0)?;
        let op = match self.peek_kind() {
            TokenKind::Eq => Some(AssignOp::Set),
            TokenKind::PlusEq => Some(AssignOp::Add),
            TokenKind::MinusEq => Some(AssignOp::Sub),
            TokenKind::StarEq => Some(AssignOp::Mul),
            TokenKind::SlashEq => Some(AssignOp::Div),
            _ => None,
        };
        let Some(op) = op else {
            self.expect_stmt_terminator()?;
            return Some(Stmt::Expr(target));
        };
        let op_token = self.bumped();
        if !target.is_assignable() {
            self.diagnostics.push(Diagnostic::error_kind(
                DiagnosticKind::InvalidAssignmentTarget,
                Some(start),
            ));
        }
        let value = self.parse_expr(0)?;
        self.expect_stmt_terminator()?;
        Some(Stmt::Assign(Box::new(AssignStmt {
            target,
            op,
            value,
            span: start.merge(op_token.span),
        })))
    }
}
