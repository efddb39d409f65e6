//! # Byte Stream
//!
//! The bridge from text to the token domain.
//!
//! Everything downstream reasons about bytes, never characters.

use crate::types::TokenType;

/// Convert raw bytes to byte tokens.
///
/// ## Arguments
/// * `bytes` - the bytes to translate.
///
/// ## Returns
/// One token per byte, in order.
pub fn byte_tokens<T: TokenType, B: AsRef<[u8]>>(bytes: B) -> Vec<T> {
    // Every unsigned primitive holds a u8.
    bytes
        .as_ref()
        .iter()
        .map(|&b| T::from_u8(b).unwrap_or_default())
        .collect()
}

/// Convert text to byte tokens, via its UTF-8 encoding.
///
/// ## Arguments
/// * `text` - the text to translate.
///
/// ## Returns
/// One token per UTF-8 byte of `text`, in order.
pub fn text_tokens<T: TokenType, S: AsRef<str>>(text: S) -> Vec<T> {
    byte_tokens(text.as_ref().as_bytes())
}

/// Truncate text to at most `max_chars` characters.
///
/// Used to cap a training corpus; never splits a character.
pub fn truncate_chars(
    text: &str,
    max_chars: usize,
) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_tokens() {
        let tokens: Vec<u32> = text_tokens("hello");
        assert_eq!(tokens, vec![104, 101, 108, 108, 111]);

        let tokens: Vec<u16> = text_tokens("");
        assert!(tokens.is_empty());

        // "☃" := [0xE2 0x98 0x83]
        let tokens: Vec<u16> = text_tokens("☃");
        assert_eq!(tokens, vec![0xE2, 0x98, 0x83]);
    }

    #[test]
    fn test_byte_tokens() {
        let tokens: Vec<u64> = byte_tokens([0_u8, 127, 255]);
        assert_eq!(tokens, vec![0, 127, 255]);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 50), "hello");
        assert_eq!(truncate_chars("hello", 0), "");
        assert_eq!(truncate_chars("a☃b", 2), "a☃");
    }
}
