//! Input normalization for the two forms

/// Extract the lookup code from what the user typed
///
/// Accepts a bare code or a pasted short URL; only the text after the last
/// `/` is kept. Returns `None` when nothing usable is left.
pub fn extract_short_code(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    let code = match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };
    if code.is_empty() { None } else { Some(code) }
}

/// Custom aliases never contain whitespace
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
