//! Predefined functions available in every module.

pub const BUILTIN_NAMES: &[&str] = &["print", "println", "len", "assert"];

/// (min, max) accepted argument counts for a builtin, if known.
pub fn builtin_arity(name: &str) -> Option<(usize, usize)> {
    match name {
        "print" | "println" => Some((0, usize::MAX)),
        "len" => Some((1, 1)),
        "assert" => Some((1, 2)),
        _ => None,
    }
}
