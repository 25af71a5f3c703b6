pub enum DiagnosticKind {
    // Lexer
    UnexpectedChar(char),
    UnterminatedString,
    UnterminatedBlockComment,
    UnclosedDelimiter(char),
    UnmatchedDelimiter(char),
    InvalidEscape(char),
    InvalidNumber(String),

    // Parser
    ExpectedToken(String),
    ExpectedExpression,
    ExpectedIdentifier,
    InvalidAssignmentTarget,
    KeywordAsIdentifier(String),

    // Sema
    UndefinedIdentifier(String),
    DuplicateDefinition(String),
    ArgumentCountMismatch {
        name: String,
        expected_min: usize,
        expected_max: usize,
        actual: usize,
    },
    UnknownType(String),
    UnknownEnumVariant(String, String),
    TopLevelCodeInLibrary,
    StrayControlFlow(&'static str),
    ReturnOutsideFunction,
    DidYouMean(String),

    // Custom
    Raw(String),
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    pub fn format(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::UnexpectedChar(c) => format!("Unexpected character '{}'", c),
            DiagnosticKind::UnterminatedString => "Unterminated string literal".into(),
            DiagnosticKind::UnterminatedBlockComment => "Unterminated block comment".into(),
            DiagnosticKind::UnclosedDelimiter(c) => format!("Unclosed '{}'", c),
            DiagnosticKind::UnmatchedDelimiter(c) => format!("Unmatched '{}'", c),
            DiagnosticKind::InvalidEscape(c) => format!("Invalid escape sequence '\\{}'", c),
            DiagnosticKind::InvalidNumber(s) => format!("Invalid numeric literal: {}", s),

            DiagnosticKind::ExpectedToken(what) => format!("Expected {}", what),
            DiagnosticKind::ExpectedExpression => "Expected expression".into(),
            DiagnosticKind::ExpectedIdentifier => "Expected identifier".into(),
            DiagnosticKind::InvalidAssignmentTarget => "Invalid assignment target".into(),
            DiagnosticKind::KeywordAsIdentifier(kw) => {
                format!("Keyword cannot be used as identifier: {}", kw)
            }

            DiagnosticKind::UndefinedIdentifier(name) => {
                format!("Undefined identifier: {}", name)
            }
            DiagnosticKind::DuplicateDefinition(name) => {
                format!("Duplicate definition of '{}'", name)
            }
            DiagnosticKind::ArgumentCountMismatch {
                name,
                expected_min,
                expected_max,
                actual,
            } => {
                if expected_min == expected_max {
                    format!(
                        "Argument count mismatch: '{}' takes {} argument(s), got {}",
                        name, expected_min, actual
                    )
                } else {
                    format!(
                        "Argument count mismatch: '{}' takes {}..={} arguments, got {}",
                        name, expected_min, expected_max, actual
                    )
                }
            }
            DiagnosticKind::UnknownType(name) => format!("Unknown type: {}", name),
            DiagnosticKind::UnknownEnumVariant(ty, variant) => {
                format!("Enum '{}' has no variant '{}'", ty, variant)
            }
            DiagnosticKind::TopLevelCodeInLibrary => {
                "Top-level statements are only allowed in the main module".into()
            }
            DiagnosticKind::StrayControlFlow(kw) => {
                format!("'{}' outside of a loop", kw)
            }
            DiagnosticKind::ReturnOutsideFunction => "'return' outside of a function".into(),
            DiagnosticKind::DidYouMean(name) => format!("Did you mean '{}'?", name),

            DiagnosticKind::Raw(s) => s.clone(),
        }
    }
}
