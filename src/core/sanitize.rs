// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;` after decoding) into one
/// space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Lookup key for a state name: normalized whitespace, lower case.
/// Used both for directory keys and for what the user types.
pub fn state_key(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}
