//! Where raw text comes from

use std::io::Read;

use crate::error::{ConversionError, JoinResult};

/// Source of the raw text to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Text passed directly, e.g. as a command-line argument
    Argument(String),
    /// Standard input stream, read to the end
    Stdin,
}

impl TextSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> &'static str {
        match self {
            TextSource::Argument(_) => "argument",
            TextSource::Stdin => "standard input",
        }
    }

    /// Read the whole text. Nothing is trimmed here.
    pub fn read(&self) -> JoinResult<String> {
        match self {
            TextSource::Argument(text) => Ok(text.clone()),
            TextSource::Stdin => read_from(std::io::stdin().lock()),
        }
    }
}

/// Read everything from `reader` as UTF-8
pub fn read_from<R: Read>(mut reader: R) -> JoinResult<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| ConversionError::io("Failed to read standard input", e))?;
    Ok(buffer)
}
