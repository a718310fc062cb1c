//! Split-and-join text converter
//!
//! Splits text into elements, by whitespace or by line, and joins them again
//! with configurable start, separator and end tokens. Reports the word count
//! of the source and the character count of the result.

pub mod cli;
pub mod clipboard;
pub mod conversion;
pub mod error;
pub mod form;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use conversion::{convert, ConversionRequest, ConversionResult, SplitMode, TokenSettings};
pub use error::{ClipboardError, ConversionError, ConversionErrorKind};
pub use form::ConverterForm;
pub use parser::TextSource;

/// Convert text with the default tokens in word mode
pub fn convert_text(raw_text: &str) -> ConversionResult {
    convert(&ConversionRequest::new(raw_text))
}

/// Convert text with custom tokens and mode
pub fn convert_text_with(
    raw_text: &str,
    tokens: TokenSettings,
    mode: SplitMode,
) -> ConversionResult {
    convert(&ConversionRequest::with_tokens(raw_text, tokens).with_mode(mode))
}
