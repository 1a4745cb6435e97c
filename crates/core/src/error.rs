//! Error types for hueforge core.

use thiserror::Error;

/// Errors produced by color parsing, lookups and request validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A harmony name did not match any known palette rule.
    #[error("unknown harmony: {0}")]
    UnknownHarmony(String),

    /// An output format name was not recognized.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// A palette request body was not valid JSON for the request shape.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// A palette request field failed validation.
    #[error("invalid request field '{field}': {reason}")]
    InvalidRequest { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_message() {
        let err = ColorError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_harmony_includes_name() {
        let err = ColorError::UnknownHarmony("pentadic".into());
        let msg = format!("{err}");
        assert!(msg.contains("pentadic"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_format_includes_name() {
        let err = ColorError::UnknownFormat("lab".into());
        assert!(err.to_string().contains("lab"));
    }

    #[test]
    fn malformed_request_includes_message() {
        let err = ColorError::MalformedRequest("expected value at line 1".into());
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn invalid_request_includes_field_and_reason() {
        let err = ColorError::InvalidRequest {
            field: "colorCount".into(),
            reason: "must be between 2 and 12".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("colorCount"), "missing field in: {msg}");
        assert!(msg.contains("between 2 and 12"), "missing reason in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
