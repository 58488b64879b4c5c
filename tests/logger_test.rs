/// Tests for log format selection and repeated logging initialisation.

#[cfg(test)]
mod tests {
    use customer_form::utils::logger::{init_logging, LogFormat};

    #[test]
    fn test_parse_known_formats() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Text));
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(LogFormat::parse(" Json "), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("TEXT"), Some(LogFormat::Text));
    }

    #[test]
    fn test_parse_rejects_unknown_formats() {
        for value in ["", "yaml", "jsonl"] {
            assert_eq!(LogFormat::parse(value), None, "{value:?} should not parse");
        }
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        // The second call finds the global subscriber already set
        assert!(init_logging().is_ok());
        assert!(init_logging().is_ok());
        log::info!("logging initialised twice");
    }
}
