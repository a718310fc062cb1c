//! Toolkit-independent model of the converter form
//!
//! Holds the values of every field the desktop window had. A view layer reads
//! and writes these fields; the actions build a [`ConversionRequest`], run the
//! converter and store the result back.

use tracing::debug;

use crate::clipboard::ClipboardSink;
use crate::conversion::{convert, ConversionRequest, ConversionResult, SplitMode, TokenSettings};
use crate::error::ClipboardError;
use crate::validation::filter_token_input;

/// Field values of the converter form
#[derive(Debug, Clone, Default)]
pub struct ConverterForm {
    input: String,
    start_field: String,
    separator_field: String,
    end_field: String,
    whole_line_mode: bool,
    output: String,
    status: String,
    last_result: Option<ConversionResult>,
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn start_field(&self) -> &str {
        &self.start_field
    }

    pub fn separator_field(&self) -> &str {
        &self.separator_field
    }

    pub fn end_field(&self) -> &str {
        &self.end_field
    }

    /// Whitespace is not accepted into token fields
    pub fn set_start_field(&mut self, value: &str) {
        self.start_field = filter_token_input(value);
    }

    pub fn set_separator_field(&mut self, value: &str) {
        self.separator_field = filter_token_input(value);
    }

    pub fn set_end_field(&mut self, value: &str) {
        self.end_field = filter_token_input(value);
    }

    pub fn whole_line_mode(&self) -> bool {
        self.whole_line_mode
    }

    pub fn set_whole_line_mode(&mut self, enabled: bool) {
        self.whole_line_mode = enabled;
    }

    pub fn mode(&self) -> SplitMode {
        SplitMode::from_whole_line_flag(self.whole_line_mode)
    }

    /// Text of the read-only output area
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn last_result(&self) -> Option<&ConversionResult> {
        self.last_result.as_ref()
    }

    /// Request for the current field values; empty token fields use the defaults
    pub fn request(&self) -> ConversionRequest {
        let tokens =
            TokenSettings::resolve(&self.start_field, &self.separator_field, &self.end_field);
        ConversionRequest::with_tokens(&self.input, tokens).with_whole_line_mode(self.whole_line_mode)
    }

    /// Convert the input and show the result
    pub fn convert(&mut self) -> &ConversionResult {
        let result = convert(&self.request());
        self.output = result.output.clone();
        self.status = result.status_line();
        self.last_result.insert(result)
    }

    /// Empty the input, token fields and output
    ///
    /// The status line and the whole-line toggle keep their values.
    pub fn clear(&mut self) {
        self.input.clear();
        self.start_field.clear();
        self.separator_field.clear();
        self.end_field.clear();
        self.output.clear();
        self.last_result = None;
    }

    /// Copy the output area to `clipboard`
    pub fn copy_to(&self, clipboard: &mut dyn ClipboardSink) -> Result<(), ClipboardError> {
        debug!(characters = self.output.chars().count(), "copying form output");
        clipboard.set_text(&self.output)
    }
}
