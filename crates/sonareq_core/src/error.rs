//! Core Error Types

use std::path::PathBuf;

use thiserror::Error;

use crate::channel::Channel;

/// Errors that end an import run
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("EQ File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read EQ file {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] sonareq_eq::ParseError),

    #[error("Preset for Channel {channel} with name {name} not found.")]
    PresetNotFound { name: String, channel: Channel },

    #[error("Preset for Channel {channel} with name {name} already exists.")]
    PresetAlreadyExists { name: String, channel: Channel },

    #[error("Stored preset data is not a valid preset document: {0}")]
    CorruptStoredDocument(#[source] serde_json::Error),

    #[error("Failed to encode preset document: {0}")]
    EncodeDocument(#[source] serde_json::Error),

    #[error("Preset database not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Unknown channel value in database: {0}")]
    UnknownVad(i64),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::PresetNotFound {
            name: "HD600".into(),
            channel: Channel::Aux,
        };
        assert_eq!(
            err.to_string(),
            "Preset for Channel AUX with name HD600 not found."
        );

        let err = CoreError::InputNotFound(PathBuf::from("missing.txt"));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_error_from_parse() {
        let parse_err = sonareq_eq::ParseError::MalformedLine {
            line_number: 3,
            line: "Filter 1:".into(),
            reason: sonareq_eq::LineError::TooFewTokens {
                expected: 11,
                found: 1,
            },
        };
        let core_err: CoreError = parse_err.into();
        assert!(matches!(core_err, CoreError::Parse(_)));
        assert!(core_err.to_string().contains("line 3"));
    }
}
