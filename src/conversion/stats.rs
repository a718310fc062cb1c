//! Conversion result and the status line shown next to it

use serde::{Deserialize, Serialize};

/// Output of a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Joined text including start and end tokens
    pub output: String,
    /// Words in the source text
    pub word_count: usize,
    /// Characters in `output`
    pub character_count: usize,
}

impl ConversionResult {
    pub fn new(output: String, word_count: usize) -> Self {
        let character_count = output.chars().count();
        Self {
            output,
            word_count,
            character_count,
        }
    }

    /// Status line in the wording of the desktop form
    pub fn status_line(&self) -> String {
        format!(
            "Исходное количество слов: {} | Итоговое количество символов: {}.",
            self.word_count, self.character_count
        )
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
