//! Whitespace rules and input gating for the token fields
//!
//! Token fields accept any character except whitespace. The converter does not
//! depend on that rule; it is enforced where values are entered. The converter
//! does share the whitespace predicate for splitting and trimming.

use crate::error::{ConversionError, ConversionErrorKind, TokenField};

/// Whitespace as far as splitting, trimming and tokens are concerned.
///
/// Unicode White_Space plus the information separators U+001C..=U+001F.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split on runs of whitespace, dropping empty pieces
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_text_whitespace).filter(|word| !word.is_empty())
}

/// Strip surrounding whitespace
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_text_whitespace)
}

/// Check that a token contains no whitespace. The empty token is valid.
pub fn is_valid_token(token: &str) -> bool {
    !token.chars().any(is_text_whitespace)
}

/// Validate a token entered into `field`
pub fn validate_token(field: TokenField, token: &str) -> Result<(), ConversionError> {
    if is_valid_token(token) {
        Ok(())
    } else {
        Err(ConversionError::conversion(ConversionErrorKind::invalid_token(
            field, token,
        )))
    }
}

/// Drop the characters a token field refuses to accept
pub fn filter_token_input(input: &str) -> String {
    input.chars().filter(|&c| !is_text_whitespace(c)).collect()
}
