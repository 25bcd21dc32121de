//! Identifier case helpers used by generators.

/// Uppercase the first character: `blue` -> `Blue`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert PascalCase to snake_case: `IdleDown` -> `idle_down`.
///
/// An underscore goes between each lowercase letter and a following
/// uppercase letter; runs of capitals are not split.
pub fn pascal_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        out.extend(c.to_lowercase());
    }

    out
}
