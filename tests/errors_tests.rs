use shortbatch::errors::{Result, ShortbatchError};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            ShortbatchError::validation("x"),
            ShortbatchError::config("x"),
            ShortbatchError::file_operation("x"),
            ShortbatchError::serialization("x"),
            ShortbatchError::terminal("x"),
            ShortbatchError::log_delivery("x"),
            ShortbatchError::clipboard("x"),
            ShortbatchError::browser_launch("x"),
        ];
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(
            codes,
            ["E001", "E002", "E003", "E004", "E005", "E006", "E007", "E008"]
        );
    }

    #[test]
    fn test_validation_error() {
        let error = ShortbatchError::validation("Please enter a valid URL in row 1");

        assert!(matches!(error, ShortbatchError::Validation(_)));
        assert_eq!(error.error_type(), "Validation Error");
        assert_eq!(error.message(), "Please enter a valid URL in row 1");
        assert_eq!(
            error.to_string(),
            "Validation Error: Please enter a valid URL in row 1"
        );
    }

    #[test]
    fn test_colored_format_contains_code() {
        let error = ShortbatchError::log_delivery("timeout");
        let text = error.format_colored();
        assert!(text.contains("E006"));
        assert!(text.contains("timeout"));
    }
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    fn read_missing() -> Result<String> {
        Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
    }

    #[test]
    fn test_from_io_error() {
        let err = read_missing().unwrap_err();
        assert!(matches!(err, ShortbatchError::FileOperation(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ShortbatchError = json_err.into();
        assert!(matches!(err, ShortbatchError::Serialization(_)));
    }

    #[test]
    fn test_is_std_error() {
        let err = ShortbatchError::clipboard("no display");
        let boxed: Box<dyn Error> = Box::new(err);
        assert!(boxed.source().is_none());
        assert_eq!(boxed.to_string(), "Clipboard Error: no display");
    }
}
