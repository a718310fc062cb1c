//! Unit tests for the converter form model

use splitjoin::{ClipboardSink, ConverterForm, MemoryClipboard, SplitMode};

#[cfg(test)]
mod form_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_then_copy() {
        let mut form = ConverterForm::new();
        form.set_input("alpha beta\ngamma");
        form.set_start_field("(");
        form.set_separator_field(",");
        form.set_end_field(")");

        let result = form.convert().clone();
        assert_eq!(result.output, "(alpha,beta,gamma)");
        assert_eq!(result.word_count, 3);
        assert_eq!(
            form.status(),
            "Исходное количество слов: 3 | Итоговое количество символов: 18."
        );

        let mut clipboard = MemoryClipboard::new();
        form.copy_to(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents(), Some("(alpha,beta,gamma)"));
    }

    #[test]
    fn test_request_reflects_fields() {
        let mut form = ConverterForm::new();
        form.set_input("x");
        form.set_end_field("!");
        form.set_whole_line_mode(true);

        let request = form.request();
        assert_eq!(request.raw_text, "x");
        assert_eq!(request.start_token, "\"");
        assert_eq!(request.separator, "\",\"");
        assert_eq!(request.end_token, "!");
        assert_eq!(request.mode(), SplitMode::WholeLines);
    }

    #[test]
    fn test_reconvert_overwrites_previous_result() {
        let mut form = ConverterForm::new();
        form.set_input("one two");
        form.convert();
        form.set_input("three");
        form.convert();

        assert_eq!(form.output(), "\"three\"");
        assert_eq!(form.last_result().map(|r| r.word_count), Some(1));
    }

    #[test]
    fn test_clear_resets_tokens_to_defaults() {
        let mut form = ConverterForm::new();
        form.set_start_field("<");
        form.set_input("a b");
        form.convert();
        form.clear();

        form.set_input("a b");
        assert_eq!(form.convert().output, "\"a\",\"b\"");
    }

    /// Sink that always fails, standing in for a missing clipboard
    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), splitjoin::ClipboardError> {
            Err(splitjoin::ClipboardError::Unavailable(
                arboard::Error::ClipboardNotSupported,
            ))
        }
    }

    #[test]
    fn test_copy_failure_is_returned() {
        let mut form = ConverterForm::new();
        form.set_input("a");
        form.convert();
        assert!(form.copy_to(&mut BrokenClipboard).is_err());
        assert_eq!(form.output(), "\"a\"");
    }
}
