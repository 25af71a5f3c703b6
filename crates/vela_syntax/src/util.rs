/// Edit distance between two identifiers, keeping only two rows of the
/// distance table alive.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut row = vec![0usize; b_chars.len() + 1];
    for (i, &ac) in a_chars.iter().enumerate() {
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let substitute = prev[j] + usize::from(ac != bc);
            row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b_chars.len()]
}

/// Closest candidate within half the name's length (at least one edit).
/// Later candidates win ties, so iteration order decides between equals.
pub fn find_best_match<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let mut cutoff = (name.chars().count() / 2).max(1);
    let mut best = None;

    for candidate in candidates {
        let distance = levenshtein_distance(name, candidate);
        if distance <= cutoff {
            cutoff = distance;
            best = Some(candidate);
        }
    }

    best
}

/// Strip surrounding quotes and process escape sequences. Tolerates a
/// missing closing quote (the lexer reports that separately).
pub fn unquote(raw: &str) -> String {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_match_prefers_close_names() {
        let names = ["count", "counter", "total"];
        let found = find_best_match("contu", names.iter().copied());
        assert_eq!(found, Some("count"));
    }

    #[test]
    fn best_match_rejects_distant_names() {
        let names = ["alpha", "beta"];
        assert_eq!(find_best_match("zzzzzz", names.iter().copied()), None);
    }
}
