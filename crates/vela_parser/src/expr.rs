//! Expression parsing (Pratt).
use crate::parser::{infix_binding_power, prefix_binding_power};

use vela_ast::{BinaryOp, CallExpr, Expr, IndexExpr, MemberExpr, UnaryOp};
use vela_syntax::{Diagnostic, DiagnosticKind, TokenKind, unquote};

use super::Parser;

impl<'a, 'b, 'c> Parser<'a, 'b, 'c> {
    pub(crate) fn parse_expr(&mut self, min_bp: u8) -> Option<Expr> {
        let lhs = self.parse_prefix()?;
        self.parse_expr_from_prefix(lhs, min_bp)
    }

    fn parse_expr_from_prefix(&mut self, mut lhs: Expr, min_bp: u8) -> Option<Expr> {
        loop {
            if self.at(TokenKind::Newline) || self.at(TokenKind::Semi) || self.at(TokenKind::Eof) {
                break;
            }
            if self.at(TokenKind::DotDot) {
                let (l_bp, r_bp) = (2, 3);
                if l_bp < min_bp {
                    break;
                }
                self.bump_token();
                let rhs = self.parse_expr(r_bp)?;
                lhs = Expr::Range(Box::new(lhs), Box::new(rhs));
                continue;
            }
            let op = match self.peek_kind() {
                TokenKind::PipePipe => BinaryOp::Or,
                TokenKind::AmpAmp => BinaryOp::And,
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::Ne => BinaryOp::Ne,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Ge => BinaryOp::Ge,
                TokenKind::Le => BinaryOp::Le,
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };

            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                break;
            }
            self.bump_token();
            let rhs = self.parse_expr(r_bp)?;
            lhs = Expr::Binary {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
            };
        }
        Some(lhs)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        self.skip_trivia();
        match self.peek_kind() {
            TokenKind::Bang => {
                self.bump_token();
                let expr = self.parse_expr(prefix_binding_power())?;
                Some(Expr::Unary {
                    op: UnaryOp::Not,
                    expr: Box::new(expr),
                })
            }
            TokenKind::Minus => {
                self.bump_token();
                let expr = self.parse_expr(prefix_binding_power())?;
                Some(Expr::Unary {
                    op: UnaryOp::Neg,
                    expr: Box::new(expr),
                })
            }
            _ => self.parse_postfix_expr(),
        }
    }

    fn parse_postfix_expr(&mut self) -> Option<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek_kind() {
                TokenKind::LParen => {
                    let open = self.bumped();
                    let args = self.parse_call_args()?;
                    let close = self.expect(TokenKind::RParen)?;
                    expr = Expr::Call(Box::new(CallExpr {
                        callee: expr,
                        args,
                        span: open.span.merge(close.span),
                    }));
                }
                TokenKind::Dot => {
                    self.bump_token();
                    let (field, field_span) = self.expect_ident()?;
                    expr = Expr::Member(Box::new(MemberExpr {
                        object: expr,
                        field,
                        field_span,
                    }));
                }
                TokenKind::LBracket => {
                    self.bump_token();
                    let index = self.parse_expr(0)?;
                    self.expect(TokenKind::RBracket)?;
                    expr = Expr::Index(Box::new(IndexExpr {
                        object: expr,
                        index,
                    }));
                }
                _ => break,
            }
        }
        Some(expr)
    }

    fn parse_call_args(&mut self) -> Option<Box<[Expr]>> {
        let mut args = bumpalo::collections::Vec::new_in(self.bump);
        self.skip_trivia();
        if self.at(TokenKind::RParen) {
            return Some(Box::from([]));
        }
        loop {
            args.push(self.parse_expr(0)?);
            self.skip_trivia();
            if self.at(TokenKind::Comma) {
                self.bump_token();
                self.skip_trivia();
                if self.at(TokenKind::RParen) {
                    break;
                }
                continue;
            }
            break;
        }
        Some(args.into_iter().collect())
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        self.skip_trivia();
        match self.peek_kind() {
            TokenKind::Ident => {
                let t = self.bumped();
                let text = self.token_text(&t);
                let sym = self.ctx.symbols.intern(text);
                Some(Expr::Ident(sym, t.span))
            }
            TokenKind::Int => {
                let t = self.bumped();
                Some(Expr::Int(self.int_literal_value(&t)))
            }
            TokenKind::Float => {
                let t = self.bumped();
                let s: String = self.token_text(&t).chars().filter(|c| *c != '_').collect();
                Some(Expr::Float(s.parse::<f64>().unwrap_or(0.0)))
            }
            TokenKind::Str => {
                let t = self.bumped();
                let raw = self.token_text(&t);
                Some(Expr::Str(unquote(raw)))
            }
            TokenKind::True => {
                self.bump_token();
                Some(Expr::Bool(true))
            }
            TokenKind::False => {
                self.bump_token();
                Some(Expr::Bool(false))
            }
            TokenKind::Nil => {
                self.bump_token();
                Some(Expr::Nil)
            }
            TokenKind::LParen => {
                self.bump_token();
                let inner = self.parse_expr(0)?;
                self.expect(TokenKind::RParen)?;
                Some(Expr::Group(Box::new(inner)))
            }
            TokenKind::LBracket => {
                self.bump_token();
                let mut elems = bumpalo::collections::Vec::new_in(self.bump);
                loop {
                    self.skip_trivia();
                    if self.at(TokenKind::RBracket) {
                        break;
                    }
                    elems.push(self.parse_expr(0)?);
                    self.skip_trivia();
                    if self.at(TokenKind::Comma) {
                        self.bump_token();
                    }
                }
                self.expect(TokenKind::RBracket)?;
                Some(Expr::Array(elems.into_iter().collect()))
            }
            _ => {
                let span = self.cur_span();
                self.diagnostics.push(Diagnostic::error_kind(
                    DiagnosticKind::ExpectedExpression,
                    Some(span),
                ));
                None
            }
        }
    }
}
