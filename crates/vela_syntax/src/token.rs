//! Token definitions.
//!
//! Covers the full Vela surface: keywords, identifiers, literals, operators,
//! delimiters, and the newline token used for statement termination.
use crate::Span;

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Newline (automatic statement termination outside delimiters).
    Newline,

    /// Identifier.
    Ident,
    /// Integer literal.
    Int,
    /// Float literal.
    Float,
    /// String literal.
    Str,

    /// `true`
    True,
    /// `false`
    False,
    /// `nil`
    Nil,

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,

    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `==`
    EqEq,
    /// `!=`
    Ne,
    /// `=`
    Eq,
    /// `!`
    Bang,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,

    /// `->`
    Arrow,
    /// `..`
    DotDot,
    /// `.`
    Dot,

    /// `func`
    KwFunc,
    /// `struct`
    KwStruct,
    /// `enum`
    KwEnum,
    /// `import`
    KwImport,
    /// `let`
    KwLet,
    /// `var`
    KwVar,
    /// `if`
    KwIf,
    /// `else`
    KwElse,
    /// `while`
    KwWhile,
    /// `for`
    KwFor,
    /// `in`
    KwIn,
    /// `return`
    KwReturn,
    /// `break`
    KwBreak,
    /// `continue`
    KwContinue,

    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `:`
    Colon,

    /// End of input.
    Eof,
}

/// Token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Span in buffer text.
    pub span: Span,
}
