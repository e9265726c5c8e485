//! Parse Error Types

use thiserror::Error;

/// Errors raised while reading an EqualizerAPO filter export
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Malformed filter on line {line_number} ({reason}): {line:?}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: LineError,
    },
}

/// Why a single `Filter` line does not match the grammar
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected {expected} tokens, found {found}")]
    TooFewTokens { expected: usize, found: usize },

    #[error("invalid filter index {0:?}")]
    InvalidIndex(String),

    #[error("invalid {field} {token:?}")]
    InvalidNumber { field: &'static str, token: String },
}

/// Result type alias for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::MalformedLine {
            line_number: 7,
            line: "Filter 3: ON PK Fc".to_string(),
            reason: LineError::TooFewTokens {
                expected: 11,
                found: 4,
            },
        };
        let text = err.to_string();
        assert!(text.contains("line 7"));
        assert!(text.contains("Filter 3: ON PK Fc"));
        assert!(text.contains("expected 11 tokens, found 4"));
    }

    #[test]
    fn test_reason_display() {
        let reason = LineError::InvalidNumber {
            field: "gain",
            token: "x".to_string(),
        };
        assert_eq!(reason.to_string(), "invalid gain \"x\"");
        assert!(LineError::InvalidIndex("X:".into()).to_string().contains("X:"));
    }
}
