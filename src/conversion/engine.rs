//! Core split-and-join conversion

use tracing::debug;

use crate::conversion::config::{ConversionRequest, SplitMode, TokenSettings};
use crate::conversion::stats::ConversionResult;
use crate::validation::{split_words, trim_text};

/// Convert a request into its joined output and counts.
///
/// Never fails: empty input yields `start_token + end_token` and zero counts.
/// Tokens are used verbatim, even if they contain whitespace.
pub fn convert(request: &ConversionRequest) -> ConversionResult {
    let mode = request.mode();
    let text = trim_text(&request.raw_text);

    let elements = extract_elements(text, mode);
    let word_count = match mode {
        SplitMode::WholeLines => count_words(text, mode),
        SplitMode::Words => elements.len(),
    };

    let joined = elements.join(request.separator.as_str());
    let mut output =
        String::with_capacity(request.start_token.len() + joined.len() + request.end_token.len());
    output.push_str(&request.start_token);
    output.push_str(&joined);
    output.push_str(&request.end_token);

    let result = ConversionResult::new(output, word_count);
    debug!(
        ?mode,
        elements = elements.len(),
        words = result.word_count,
        characters = result.character_count,
        "converted text"
    );
    result
}

/// Elements of already-trimmed `text`, in order
pub fn extract_elements(text: &str, mode: SplitMode) -> Vec<&str> {
    let lines = text.split('\n');
    match mode {
        SplitMode::WholeLines => lines
            .map(trim_text)
            .filter(|line| !line.is_empty())
            .collect(),
        SplitMode::Words => lines.flat_map(split_words).collect(),
    }
}

/// Word count reported for `text` in `mode`.
///
/// Whole-line mode counts whitespace-separated words over every line, blank
/// ones included; word mode counts the elements that get joined. The two agree
/// on any input but are computed from different sequences.
pub fn count_words(text: &str, mode: SplitMode) -> usize {
    match mode {
        SplitMode::WholeLines => text
            .split('\n')
            .map(|line| split_words(line).count())
            .sum(),
        SplitMode::Words => extract_elements(text, mode).len(),
    }
}

/// Converts many texts with one token configuration
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    tokens: TokenSettings,
    mode: SplitMode,
}

impl ConversionEngine {
    pub fn new(tokens: TokenSettings, mode: SplitMode) -> Self {
        Self { tokens, mode }
    }

    /// Build the request this engine would run for `raw_text`
    pub fn request(&self, raw_text: &str) -> ConversionRequest {
        ConversionRequest::with_tokens(raw_text, self.tokens.clone()).with_mode(self.mode)
    }

    pub fn convert(&self, raw_text: &str) -> ConversionResult {
        convert(&self.request(raw_text))
    }
}
