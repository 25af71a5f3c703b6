//! AST nodes.
//!
//! Names are interned `Symbol`s; spans are carried where diagnostics need
//! them (declaration names, identifier uses, error nodes).
use vela_syntax::{Span, Symbol};

/// The AST root for one compiled module. `items` grows in place when the
/// REPL appends new input.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationUnit {
    pub name: String,
    pub kind: UnitKind,
    pub items: Vec<Item>,
}

impl TranslationUnit {
    pub fn new(name: impl Into<String>, kind: UnitKind) -> Self {
        Self {
            name: name.into(),
            kind,
            items: Vec::new(),
        }
    }
}

/// Whether the unit is the program entry module or a library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    /// Entry module: top-level statements form the implicit entry point.
    Main,
    /// Library module: only declarations are allowed at top level.
    Library,
}

/// Top-level item.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Import(Box<ImportDecl>),
    Func(Box<FuncDecl>),
    Struct(Box<StructDecl>),
    Enum(Box<EnumDecl>),
    Binding(Box<BindingDecl>),
    Stmt(Stmt),
    Error(Span),
}

impl Item {
    /// Name this item introduces into the module scope, if any.
    pub fn declared_name(&self) -> Option<(Symbol, Span)> {
        match self {
            Item::Import(decl) => Some((decl.module, decl.span)),
            Item::Func(decl) => Some((decl.name, decl.name_span)),
            Item::Struct(decl) => Some((decl.name, decl.name_span)),
            Item::Enum(decl) => Some((decl.name, decl.name_span)),
            Item::Binding(decl) => Some((decl.name, decl.name_span)),
            Item::Stmt(_) | Item::Error(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportDecl {
    pub module: Symbol,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuncDecl {
    pub name: Symbol,
    pub name_span: Span,
    pub params: Box<[Param]>,
    pub return_ty: Option<TypeRef>,
    pub body: Box<[Stmt]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: Symbol,
    pub ty: Option<TypeRef>,
    pub default: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructDecl {
    pub name: Symbol,
    pub name_span: Span,
    pub fields: Box<[Field]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: Symbol,
    pub ty: TypeRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumDecl {
    pub name: Symbol,
    pub name_span: Span,
    pub variants: Box<[Variant]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name: Symbol,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    Let,
    Var,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BindingDecl {
    pub kind: BindingKind,
    pub name: Symbol,
    pub name_span: Span,
    pub ty: Option<TypeRef>,
    pub value: Expr,
}

/// Type annotation, e.g. `Int`, `[String]`, `Point`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRef {
    pub name: Symbol,
    pub span: Span,
    pub params: Box<[TypeRef]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Binding(Box<BindingDecl>),
    Assign(Box<AssignStmt>),
    If(Box<IfStmt>),
    While(Box<WhileStmt>),
    ForIn(Box<ForInStmt>),
    Return(Option<Expr>, Span),
    Break(Span),
    Continue(Span),
    Block(Box<[Stmt]>),
    Expr(Expr),
    Error(Span),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignStmt {
    pub target: Expr,
    pub op: AssignOp,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOp {
    Set,
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub branches: Box<[(Expr, Box<[Stmt]>)]>,
    pub else_branch: Option<Box<[Stmt]>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Box<[Stmt]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForInStmt {
    pub var: Symbol,
    pub var_span: Span,
    pub iter: Expr,
    pub body: Box<[Stmt]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Ident(Symbol, Span),
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Nil,
    Array(Box<[Expr]>),
    Range(Box<Expr>, Box<Expr>),
    Call(Box<CallExpr>),
    Member(Box<MemberExpr>),
    Index(Box<IndexExpr>),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Group(Box<Expr>),
    Error(Span),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    pub callee: Expr,
    pub args: Box<[Expr]>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberExpr {
    pub object: Expr,
    pub field: Symbol,
    pub field_span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpr {
    pub object: Expr,
    pub index: Expr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,
    And,
    Or,
}

impl Expr {
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Ident(_, _) | Expr::Member(_) | Expr::Index(_))
    }
}
