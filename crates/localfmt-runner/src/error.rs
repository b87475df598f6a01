use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while running an external formatter.
///
/// Whenever one of these is returned no edits are produced: output of a failed run is
/// never diffed.
pub enum FormatError {
    #[error("no formatter is registered for language '{0}'")]
    /// The registry has no formatter for the document's language.
    NoFormatter(String),

    #[error("formatter command is empty")]
    /// The resolved command line has no program to run.
    EmptyCommand,

    #[error("Failed starting formatter '{program}': {source}")]
    /// The formatter process could not be started.
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    #[error("Formatter failed with {}, see output for more details", exit_description(.code))]
    /// The formatter exited unsuccessfully.
    Failed {
        /// Exit code, or `None` when the process was terminated by a signal.
        code: Option<i32>,
        /// Everything the formatter wrote to stderr.
        stderr: String,
    },

    #[error("formatter did not finish within {0:?}")]
    /// The formatter ran past its deadline and was killed.
    Timeout(Duration),

    #[error("formatter output is not valid UTF-8: {0}")]
    /// The formatter wrote bytes that are not UTF-8 to stdout.
    InvalidOutput(#[from] std::string::FromUtf8Error),

    #[error("I/O error while talking to the formatter: {0}")]
    /// Reading from or waiting on the formatter process failed.
    Io(#[from] std::io::Error),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by a signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message() {
        let err = FormatError::Failed {
            code: Some(2),
            stderr: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Formatter failed with code 2, see output for more details"
        );

        let err = FormatError::Failed {
            code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by a signal"));
    }
}
