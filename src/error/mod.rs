//! Error types for everything around the converter
//!
//! The conversion itself cannot fail. Errors come from the surfaces around it:
//! token fields, reading input, and the system clipboard.

use anyhow::Error;

/// Token field a value was entered into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Start,
    Separator,
    End,
}

impl TokenField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenField::Start => "start token",
            TokenField::Separator => "separator",
            TokenField::End => "end token",
        }
    }
}

impl std::fmt::Display for TokenField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error kinds raised around the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Invalid {field}: {value:?} contains whitespace")]
    InvalidToken { field: TokenField, value: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("No input provided")]
    NoInput,
}

impl ConversionErrorKind {
    pub fn invalid_token(field: TokenField, value: impl Into<String>) -> Self {
        Self::InvalidToken {
            field,
            value: value.into(),
        }
    }

    pub fn io(message: String) -> Self {
        Self::Io { message }
    }
}

/// Clipboard failures
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("clipboard write failed: {0}")]
    Write(#[source] arboard::Error),
}

/// Main error type
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Conversion {
            kind: ConversionErrorKind::io(message.into()),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind, source } => match (kind, source) {
                (ConversionErrorKind::InvalidToken { field, value }, _) => {
                    format!("The {} must not contain whitespace (got {:?})", field, value)
                }
                (ConversionErrorKind::NoInput, _) => {
                    "No input provided. Pass the text as an argument or pipe it via --stdin"
                        .to_string()
                }
                (ConversionErrorKind::Io { message }, Some(err)) => {
                    format!("{}: {}", message, err)
                }
                _ => self.to_string(),
            },
            Self::Clipboard(err) => format!("Could not copy to clipboard: {}", err),
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::io("IO error", err)
    }
}

/// Result type for reading input and configuring tokens
pub type JoinResult<T> = Result<T, ConversionError>;
