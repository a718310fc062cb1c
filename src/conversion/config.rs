//! Conversion request and token configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, TokenField};
use crate::validation::{trim_text, validate_token};

/// Default start token
pub const DEFAULT_START_TOKEN: &str = "\"";
/// Default separator
pub const DEFAULT_SEPARATOR: &str = "\",\"";
/// Default end token
pub const DEFAULT_END_TOKEN: &str = "\"";

/// How raw text is split into elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Every whitespace-separated word is an element
    #[default]
    Words,
    /// Every non-blank line is an element, internal spaces kept
    WholeLines,
}

impl SplitMode {
    pub fn from_whole_line_flag(whole_line_mode: bool) -> Self {
        if whole_line_mode {
            SplitMode::WholeLines
        } else {
            SplitMode::Words
        }
    }

    pub fn is_whole_lines(&self) -> bool {
        matches!(self, SplitMode::WholeLines)
    }
}

/// The three tokens surrounding and joining elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    pub start: String,
    pub separator: String,
    pub end: String,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_TOKEN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            end: DEFAULT_END_TOKEN.to_string(),
        }
    }
}

impl TokenSettings {
    pub fn new(
        start: impl Into<String>,
        separator: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            separator: separator.into(),
            end: end.into(),
        }
    }

    /// Build settings from raw field values.
    ///
    /// Each value is stripped of surrounding whitespace; a field left empty
    /// falls back to its default token.
    pub fn resolve(start: &str, separator: &str, end: &str) -> Self {
        Self {
            start: or_default(start, DEFAULT_START_TOKEN),
            separator: or_default(separator, DEFAULT_SEPARATOR),
            end: or_default(end, DEFAULT_END_TOKEN),
        }
    }

    /// Check that no token contains whitespace
    pub fn validate(&self) -> Result<(), ConversionError> {
        validate_token(TokenField::Start, &self.start)?;
        validate_token(TokenField::Separator, &self.separator)?;
        validate_token(TokenField::End, &self.end)?;
        Ok(())
    }
}

fn or_default(value: &str, default: &str) -> String {
    match trim_text(value) {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// A single conversion request built from the current field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Text to split, possibly multi-line
    pub raw_text: String,
    pub start_token: String,
    pub separator: String,
    pub end_token: String,
    /// Treat each line as one element
    pub whole_line_mode: bool,
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ConversionRequest {
    /// Create a request for `raw_text` with the default tokens
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self::with_tokens(raw_text, TokenSettings::default())
    }

    pub fn with_tokens(raw_text: impl Into<String>, tokens: TokenSettings) -> Self {
        Self {
            raw_text: raw_text.into(),
            start_token: tokens.start,
            separator: tokens.separator,
            end_token: tokens.end,
            whole_line_mode: false,
        }
    }

    pub fn with_start_token(mut self, token: impl Into<String>) -> Self {
        self.start_token = token.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_end_token(mut self, token: impl Into<String>) -> Self {
        self.end_token = token.into();
        self
    }

    pub fn with_whole_line_mode(mut self, enabled: bool) -> Self {
        self.whole_line_mode = enabled;
        self
    }

    pub fn with_mode(self, mode: SplitMode) -> Self {
        self.with_whole_line_mode(mode.is_whole_lines())
    }

    pub fn mode(&self) -> SplitMode {
        SplitMode::from_whole_line_flag(self.whole_line_mode)
    }

    pub fn tokens(&self) -> TokenSettings {
        TokenSettings::new(&self.start_token, &self.separator, &self.end_token)
    }

    /// Reject tokens containing whitespace.
    ///
    /// Input surfaces call this; `convert` accepts any tokens.
    pub fn validate(&self) -> Result<(), ConversionError> {
        self.tokens().validate()
    }
}
