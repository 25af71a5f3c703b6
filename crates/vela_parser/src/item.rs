//! Top-level item parsing: declarations and top-level statements.
use vela_ast::{
    BindingDecl, BindingKind, EnumDecl, Field, FuncDecl, ImportDecl, Item, Param, StructDecl,
    TypeRef, Variant,
};
use vela_syntax::TokenKind;

use super::Parser;

impl<'a, 'b, 'c> Parser<'a, 'b, 'c> {
    /// Parse one top-level item.
    pub(crate) fn parse_item(&mut self) -> Option<Item> {
        self.skip_trivia();
        match self.peek_kind() {
            TokenKind::KwImport => self.parse_import().map(|x| Item::Import(Box::new(x))),
            TokenKind::KwFunc => self.parse_func_decl().map(|x| Item::Func(Box::new(x))),
            TokenKind::KwStruct => self.parse_struct_decl().map(|x| Item::Struct(Box::new(x))),
            TokenKind::KwEnum => self.parse_enum_decl().map(|x| Item::Enum(Box::new(x))),
            TokenKind::KwLet | TokenKind::KwVar => {
                let decl = self.parse_binding_decl()?;
                self.expect_stmt_terminator()?;
                Some(Item::Binding(Box::new(decl)))
            }
            _ => self.parse_stmt().map(Item::Stmt),
        }
    }

    fn parse_import(&mut self) -> Option<ImportDecl> {
        let kw = self.expect(TokenKind::KwImport)?;
        let (module, name_span) = self.expect_ident()?;
        self.expect_stmt_terminator()?;
        Some(ImportDecl {
            module,
            span: kw.span.merge(name_span),
        })
    }

    pub(crate) fn parse_func_decl(&mut self) -> Option<FuncDecl> {
        self.expect(TokenKind::KwFunc)?;
        let (name, name_span) = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen)?;
        let return_ty = if self.at(TokenKind::Arrow) {
            self.bump_token();
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Some(FuncDecl {
            name,
            name_span,
            params: params.into_boxed_slice(),
            return_ty,
            body,
        })
    }

    fn parse_struct_decl(&mut self) -> Option<StructDecl> {
        self.expect(TokenKind::KwStruct)?;
        let (name, name_span) = self.expect_ident()?;
        self.expect(TokenKind::LBrace)?;
        let mut fields: Vec<Field> = Vec::new();
        loop {
            self.skip_trivia();
            if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                break;
            }
            let (fname, _) = self.expect_ident()?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type_ref()?;
            fields.push(Field { name: fname, ty });
            self.skip_trivia();
            if self.at(TokenKind::Comma) {
                self.bump_token();
            }
        }
        self.expect(TokenKind::RBrace)?;
        Some(StructDecl {
            name,
            name_span,
            fields: fields.into_boxed_slice(),
        })
    }

    fn parse_enum_decl(&mut self) -> Option<EnumDecl> {
        self.expect(TokenKind::KwEnum)?;
        let (name, name_span) = self.expect_ident()?;
        self.expect(TokenKind::LBrace)?;
        let mut variants: Vec<Variant> = Vec::new();
        loop {
            self.skip_trivia();
            if self.at(TokenKind::RBrace) || self.at(TokenKind::Eof) {
                break;
            }
            let (vname, vspan) = self.expect_ident()?;
            variants.push(Variant {
                name: vname,
                span: vspan,
            });
            self.skip_trivia();
            if self.at(TokenKind::Comma) {
                self.bump_token();
            }
        }
        self.expect(TokenKind::RBrace)?;
        Some(EnumDecl {
            name,
            name_span,
            variants: variants.into_boxed_slice(),
        })
    }

    pub(crate) fn parse_binding_decl(&mut self) -> Option<BindingDecl> {
        let kind = if self.at(TokenKind::KwVar) {
            self.bump_token();
            BindingKind::Var
        } else {
            self.expect(TokenKind::KwLet)?;
            BindingKind::Let
        };
        let (name, name_span) = self.expect_ident()?;
        let ty = if self.at(TokenKind::Colon) {
            self.bump_token();
            Some(self.parse_type_ref()?)
        } else {
            None
        };
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expr(0)?;
        Some(BindingDecl {
            kind,
            name,
            name_span,
            ty,
            value,
        })
    }

    pub(crate) fn parse_params(&mut self) -> Option<Vec<Param>> {
        let mut params: Vec<Param> = Vec::new();
        self.skip_trivia();
        if self.at(TokenKind::RParen) {
            return Some(params);
        }
        loop {
            self.skip_trivia();
            let (name, _) = self.expect_ident()?;
            let ty = if self.at(TokenKind::Colon) {
                self.bump_token();
                Some(self.parse_type_ref()?)
            } else {
                None
            };
            let default = if self.at(TokenKind::Eq) {
                self.bump_token();
                Some(self.parse_expr(0)?)
            } else {
                None
            };
            params.push(Param { name, ty, default });
            self.skip_trivia();
            if self.at(TokenKind::Comma) {
                self.bump_token();
                continue;
            }
            break;
        }
        Some(params)
    }

    /// Type annotation: `Name`, `Name[T, ...]`, or the array sugar `[T]`.
    pub(crate) fn parse_type_ref(&mut self) -> Option<TypeRef> {
        self.skip_trivia();
        if self.at(TokenKind::LBracket) {
            let open = self.bumped();
            let elem = self.parse_type_ref()?;
            let close = self.expect(TokenKind::RBracket)?;
            let name = self.ctx.symbols.intern("Array");
            return Some(TypeRef {
                name,
                span: open.span.merge(close.span),
                params: vec![elem].into_boxed_slice(),
            });
        }
        let (name, span) = self.expect_ident()?;
        let mut params: Vec<TypeRef> = Vec::new();
        let mut span = span;
        if self.at(TokenKind::LBracket) {
            self.bump_token();
            loop {
                self.skip_trivia();
                if self.at(TokenKind::RBracket) {
                    break;
                }
                params.push(self.parse_type_ref()?);
                self.skip_trivia();
                if self.at(TokenKind::Comma) {
                    self.bump_token();
                }
            }
            let close = self.expect(TokenKind::RBracket)?;
            span = span.merge(close.span);
        }
        Some(TypeRef {
            name,
            span,
            params: params.into_boxed_slice(),
        })
    }
}
