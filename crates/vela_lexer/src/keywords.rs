use phf::phf_map;
use vela_syntax::TokenKind;

pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "func" => TokenKind::KwFunc,
    "struct" => TokenKind::KwStruct,
    "enum" => TokenKind::KwEnum,
    "import" => TokenKind::KwImport,
    "let" => TokenKind::KwLet,
    "var" => TokenKind::KwVar,
    "if" => TokenKind::KwIf,
    "else" => TokenKind::KwElse,
    "while" => TokenKind::KwWhile,
    "for" => TokenKind::KwFor,
    "in" => TokenKind::KwIn,
    "return" => TokenKind::KwReturn,
    "break" => TokenKind::KwBreak,
    "continue" => TokenKind::KwContinue,
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "nil" => TokenKind::Nil,
};
