//! Case-insensitive comparison, one char at a time.
//!
//! Two chars are equal ignoring case when they are identical, when their
//! single-char uppercase mappings agree, or when the lowercase mappings of
//! those uppercase forms agree. Mappings are applied per char and never
//! change the length of a string, so `Σ`, `σ` and `ς` all compare equal and
//! `İ` compares equal to `i` without growing a combining dot.

/// Uppercase mapping of a single char; chars whose uppercase form is more
/// than one char (`ß` -> `SS`) map to themselves.
pub fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

/// Lowercase mapping of a single char. `İ` lowercases to `i` plus a
/// combining dot; only the base char is kept.
pub fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let upper_a = simple_uppercase(a);
    let upper_b = simple_uppercase(b);
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

/// Same number of chars, each pair equal ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

/// Whether `needle` occurs in `haystack` at some char offset, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<char> = haystack.chars().collect();
    haystack.windows(needle.len()).any(|window| {
        window
            .iter()
            .zip(&needle)
            .all(|(&x, &y)| chars_eq_ignore_case(x, y))
    })
}

/// Key under which strings that are `eq_ignore_case` collapse together.
pub fn fold_key(value: &str) -> String {
    value
        .chars()
        .map(|c| simple_lowercase(simple_uppercase(c)))
        .collect()
}
