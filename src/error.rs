use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::selector::SelectError;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(rogvibe::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum RogvibeError {
    #[error("Cannot spin: the participant list is empty")]
    #[diagnostic(
        code(rogvibe::empty_input),
        help("Pass at least one name, e.g. `rogvibe alice bob`, or list them in rogvibe.toml")
    )]
    EmptyInput,

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(rogvibe::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(rogvibe::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(rogvibe::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(rogvibe::io_error),
        help("Check that the terminal is still attached")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(rogvibe::config_error),
        help("Check your command arguments and rogvibe.toml")
    )]
    ConfigurationError { message: String },

    #[error("Cannot parse command line: {command}")]
    #[diagnostic(
        code(rogvibe::invalid_command),
        help("Check the participant for an unbalanced quote")
    )]
    InvalidCommand { command: String },

    #[error("Command not found: {command}")]
    #[diagnostic(
        code(rogvibe::command_not_found),
        help("Install the command or make sure it is on your PATH")
    )]
    CommandNotFound { command: String },

    #[error("Permission denied: {command}")]
    #[diagnostic(
        code(rogvibe::permission_denied),
        help("Check that the command is executable")
    )]
    PermissionDenied { command: String },

    #[error("Failed to exec '{command}'")]
    #[diagnostic(code(rogvibe::launch_failed))]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl RogvibeError {
    /// Process exit code matching shell conventions for launch failures
    pub fn exit_code(&self) -> i32 {
        match self {
            RogvibeError::CommandNotFound { .. } => 127,
            RogvibeError::PermissionDenied { .. } => 126,
            _ => 1,
        }
    }
}

impl From<SelectError> for RogvibeError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::EmptyInput => RogvibeError::EmptyInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "participants = [";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "rogvibe.toml".to_string(),
            source_code: NamedSource::new("rogvibe.toml", source_code.to_string()),
            span: Some((15, 1).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'rogvibe.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = RogvibeError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_empty_input_from_select_error() {
        let error: RogvibeError = SelectError::EmptyInput.into();

        assert!(matches!(error, RogvibeError::EmptyInput));
        assert_eq!(
            error.to_string(),
            "Cannot spin: the participant list is empty"
        );
    }

    #[test]
    fn test_exit_codes() {
        let not_found = RogvibeError::CommandNotFound {
            command: "nope".to_string(),
        };
        let denied = RogvibeError::PermissionDenied {
            command: "cmd".to_string(),
        };
        let failed = RogvibeError::LaunchFailed {
            command: "cmd".to_string(),
            source: io::Error::other("boom"),
        };

        assert_eq!(not_found.exit_code(), 127);
        assert_eq!(denied.exit_code(), 126);
        assert_eq!(failed.exit_code(), 1);
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = RogvibeError::EmptyInput;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: RogvibeError = io_err.into();

        match err {
            RogvibeError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
