//! Extraction of the language hint from a Markdown-style fenced code block.

/// Find the first fence opener carrying a language hint and return the hint
/// lowercased.
///
/// The marker shape is three backticks immediately followed by one or more
/// word characters and a whitespace character ("```rust\n"). Bare openers
/// and closing fences do not complete the shape and are skipped; the scan
/// advances one byte at a time so a hint hiding behind an extra backtick
/// ("````rust ") is still found.
pub(crate) fn fence_language(text: &str) -> Option<String> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find("```") {
        let start = offset + found;
        let rest = &text[start + 3..];
        let word_end = rest
            .find(|ch: char| !is_word_char(ch))
            .unwrap_or(rest.len());
        if word_end > 0 {
            let followed_by_whitespace = rest[word_end..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace);
            if followed_by_whitespace {
                return Some(rest[..word_end].to_ascii_lowercase());
            }
        }
        offset = start + 1;
    }
    None
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
