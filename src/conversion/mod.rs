//! Split-and-join conversion module
//!
//! This module contains the core conversion logic, the request configuration,
//! and the result with its counts.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{
    ConversionRequest, SplitMode, TokenSettings, DEFAULT_END_TOKEN, DEFAULT_SEPARATOR,
    DEFAULT_START_TOKEN,
};
pub use engine::{convert, count_words, extract_elements, ConversionEngine};
pub use stats::ConversionResult;
