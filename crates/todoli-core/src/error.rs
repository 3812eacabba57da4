//! Application error types
//!
//! A closed set of failure kinds. Every layer raises one of these named
//! variants for conditions it can name, and wraps anything foreign into
//! [`Error::Unexpected`] exactly once at the boundary where it is first
//! observed. Typed errors are re-raised unchanged through intermediate
//! layers, so a single catch-point can always present a failure via
//! [`Error::describe`].

use std::backtrace::Backtrace;
use std::error::Error as StdError;

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types
///
/// Construction is pure: no logging, no I/O. Callers decide whether and
/// how to report, and branch on the variant to pick a reaction (show a
/// validation message, retry a lookup, pick a different key).
#[derive(Debug, Error)]
pub enum Error {
    /// A lookup by `identifier` found no matching entity.
    #[error("entity not found: {identifier}")]
    NotFound { identifier: String },

    /// Caller-supplied input failed a business rule. `detail` names the
    /// violated rule and is shown to the user verbatim.
    #[error("{detail}")]
    Validation { detail: String },

    /// An insert collided with an existing entity bearing the same key.
    #[error("entity already exists: {identifier}")]
    Duplicate { identifier: String },

    /// A foreign failure observed at a boundary, wrapped with the
    /// originating error as `source` and a backtrace captured at the
    /// point of wrapping.
    #[error("{message}")]
    Unexpected {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        backtrace: Box<Backtrace>,
    },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn duplicate(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            identifier: identifier.into(),
        }
    }

    /// Wrap a foreign failure into [`Error::Unexpected`].
    ///
    /// The message is taken from the source's `Display` output, the
    /// source itself stays reachable via [`Error::cause`], and a
    /// backtrace is captured here. Wrap at most once: an `Error` that
    /// is already typed should be propagated with `?`, not re-wrapped.
    pub fn unexpected(source: impl StdError + Send + Sync + 'static) -> Self {
        Self::Unexpected {
            message: source.to_string(),
            source: Box::new(source),
            backtrace: Box::new(Backtrace::capture()),
        }
    }

    /// The user-facing message for this failure.
    ///
    /// This is the only textual representation; any caught `Error` is
    /// presentable directly through it.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// The originating failure, if this error wraps one.
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Unexpected { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }

    /// The backtrace captured when a foreign failure was wrapped.
    pub fn trace(&self) -> Option<&Backtrace> {
        match self {
            Error::Unexpected { backtrace, .. } => Some(backtrace.as_ref()),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Boundary Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for converting foreign results at a boundary
pub trait ResultExt<T> {
    /// Wrap a foreign error into [`Error::Unexpected`]
    fn unexpected(self) -> Result<T>;

    /// Wrap a foreign error, logging it with context first
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: StdError + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn unexpected(self) -> Result<T> {
        self.map_err(Error::unexpected)
    }

    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            tracing::error!("{}: {}", context.into(), e);
            Error::unexpected(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_identifier() {
        let err = Error::not_found("todo-123");
        assert!(err.describe().contains("todo-123"));
        assert_eq!(err.describe(), "entity not found: todo-123");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = Error::validation("title is required");
        assert_eq!(err.describe(), "title is required");

        // Pass-through holds for any detail, even empty
        assert_eq!(Error::validation("").describe(), "");
    }

    #[test]
    fn test_duplicate_message_contains_identifier() {
        let err = Error::duplicate("Buy milk");
        assert!(err.describe().contains("Buy milk"));
        assert_eq!(err.describe(), "entity already exists: Buy milk");
    }

    #[test]
    fn test_describe_matches_display() {
        let err = Error::not_found("x");
        assert_eq!(err.describe(), err.to_string());
    }

    #[test]
    fn test_unexpected_preserves_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "disk on fire");
        let err = Error::unexpected(io_err);

        let cause = err.cause().expect("wrapped error has a cause");
        assert_eq!(cause.to_string(), "disk on fire");
        assert_eq!(
            cause.downcast_ref::<std::io::Error>().unwrap().kind(),
            std::io::ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_unexpected_captures_trace() {
        let io_err = std::io::Error::other("boom");
        let err = Error::unexpected(io_err);
        assert!(err.trace().is_some());
    }

    #[test]
    fn test_named_variants_have_no_cause_or_trace() {
        for err in [
            Error::not_found("a"),
            Error::validation("b"),
            Error::duplicate("c"),
        ] {
            assert!(err.cause().is_none());
            assert!(err.trace().is_none());
        }
    }

    #[test]
    fn test_unexpected_is_a_source_chain() {
        let io_err = std::io::Error::other("boom");
        let err = Error::unexpected(io_err);
        // cause() agrees with the std Error::source chain
        assert_eq!(
            err.source().map(|s| s.to_string()),
            err.cause().map(|c| c.to_string())
        );
    }

    #[test]
    fn test_result_ext_wraps_foreign_errors() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = res.unexpected().unwrap_err();
        assert!(matches!(err, Error::Unexpected { .. }));
        assert_eq!(err.describe(), "boom");
    }
}
