//! Error types for loading libraries and composing messages.
//!
//! Every failure a run can hit falls into one of three kinds: the filesystem
//! (or console) refused an operation, a data file held something unusable, or
//! a template referenced a placeholder outside the supported set.

use thiserror::Error;

/// Errors that can occur while bootstrapping, loading, selecting, composing or saving.
#[derive(Debug, Error)]
pub enum MsgError {
    /// An I/O operation failed.
    ///
    /// `context` names the operation and path (e.g. "reading /x/authors.txt").
    /// End of input on the console is reported here as `UnexpectedEof`.
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A data file or template holds something that cannot be used.
    #[error("Malformed {what}: {reason}")]
    Malformed { what: String, reason: String },

    /// A template references a placeholder other than name, info, author or contacts.
    #[error("Template '{template}' uses unknown placeholder {{{placeholder}}}")]
    InvalidPlaceholder {
        template: String,
        placeholder: String,
    },
}

impl MsgError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        MsgError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn malformed(what: impl Into<String>, reason: impl Into<String>) -> Self {
        MsgError::Malformed {
            what: what.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the library.
pub type MsgResult<T> = Result<T, MsgError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_io_display_and_source() {
        let err = MsgError::io(
            "reading recipients.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "I/O error while reading recipients.txt: denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_placeholder_display() {
        let err = MsgError::InvalidPlaceholder {
            template: "Формальное".to_string(),
            placeholder: "date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Template 'Формальное' uses unknown placeholder {date}"
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = MsgError::malformed("template 'x'", "unclosed '{'");
        assert_eq!(err.to_string(), "Malformed template 'x': unclosed '{'");
        assert!(err.source().is_none());
    }
}
