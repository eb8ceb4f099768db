//! Display labels for object keys.

/// Turns an object key into a display label.
///
/// Underscores become spaces, a space is inserted where a lowercase letter
/// or digit is followed by an uppercase one, and only the first character is
/// uppercased: `key_findings` -> `Key findings`, `openQuestions` ->
/// `Open Questions`, `userID` -> `User ID`.
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
