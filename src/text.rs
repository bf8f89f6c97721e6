//! Shared text helpers.

/// Truncate `content` to at most `max_bytes` without splitting a UTF-8
/// character.
pub fn utf8_prefix(content: &str, max_bytes: usize) -> &str {
    if content.len() <= max_bytes {
        return content;
    }
    let mut end = max_bytes;
    while end > 0 && !content.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    &content[..end]
}

#[cfg(test)]
mod tests {
    use super::utf8_prefix;

    #[test]
    fn utf8_prefix_keeps_short_input_intact() {
        assert_eq!(utf8_prefix("hello", 64), "hello");
    }

    #[test]
    fn utf8_prefix_backs_off_to_char_boundary() {
        // "é" is two bytes; a cut at byte 1 would split it.
        let content = "é";
        assert_eq!(utf8_prefix(content, 1), "");
        assert_eq!(utf8_prefix(content, 2), "é");
    }
}
