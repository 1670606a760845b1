//! Structured application error value.
//!
//! `AppError` is the conventional failure payload carried by
//! [`Outcome`](crate::core::Outcome) across an ecosystem: a closed
//! [`ErrorKind`], a human-readable message, an optional cause chain for
//! root-cause preservation, and a deterministically ordered context map of
//! JSON-safe values.
//!
//! Errors are created at the failure site and wrapped, never mutated, as
//! they propagate upward. At a log boundary, [`AppError::to_json`] hands
//! off a flat record that is always JSON-safe: no cycles, no
//! non-serializable payloads.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{AppError, ErrorKind};
//!
//! let root = AppError::not_found("user 42 missing");
//! let wrapped = AppError::wrap(
//!     ErrorKind::ExternalService,
//!     "profile lookup failed",
//!     root,
//! );
//!
//! assert_eq!(wrapped.kind(), ErrorKind::ExternalService);
//! assert_eq!(wrapped.cause_chain(), vec!["user 42 missing"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use serde_json::Value;

use super::kind::ErrorKind;

/// A structured, serializable error value.
///
/// Fields are private; an `AppError` is immutable once built. Wrapping
/// produces a fresh error whose `cause` owns the old one, so chains are
/// acyclic by construction.
///
/// External (non-`AppError`) causes are converted at capture time via
/// [`AppError::external_cause`], keeping the chain uniform, clonable, and
/// serializable.
///
/// # Examples
///
/// ```rust
/// use outcomes::AppError;
///
/// let error = AppError::validation("bad input").with_context("field", "email");
/// assert_eq!(error.message(), "bad input");
/// assert_eq!(error.http_status(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    cause: Option<Box<AppError>>,
    context: BTreeMap<String, Value>,
}

impl AppError {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an error of the given kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{AppError, ErrorKind};
    ///
    /// let error = AppError::new(ErrorKind::Conflict, "version mismatch");
    /// assert_eq!(error.kind(), ErrorKind::Conflict);
    /// ```
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
            context: BTreeMap::new(),
        }
    }

    /// Creates a [`ErrorKind::NotFound`] error.
    #[inline]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a [`ErrorKind::Validation`] error.
    #[inline]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an [`ErrorKind::Unauthorized`] error.
    #[inline]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Creates a [`ErrorKind::Forbidden`] error.
    #[inline]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Creates a [`ErrorKind::Conflict`] error.
    #[inline]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Creates an [`ErrorKind::ExternalService`] error.
    #[inline]
    pub fn external(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    /// Creates an [`ErrorKind::Internal`] error.
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Re-contextualizes an error while preserving its chain.
    ///
    /// The new error sits on top; `cause` becomes the immediate link of
    /// the chain reported by [`AppError::cause_chain`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{AppError, ErrorKind};
    ///
    /// let root = AppError::internal("connection reset");
    /// let wrapped = AppError::wrap(ErrorKind::ExternalService, "billing call failed", root);
    /// assert_eq!(wrapped.cause_chain(), vec!["connection reset"]);
    /// ```
    #[inline]
    pub fn wrap(kind: ErrorKind, message: impl Into<String>, cause: Self) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(Box::new(cause)),
            context: BTreeMap::new(),
        }
    }

    /// Captures an external error as the cause of a new `AppError`.
    ///
    /// The external error is rendered via `Display` into an
    /// [`ErrorKind::Internal`] link, so the chain stays uniform and
    /// serializable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{AppError, ErrorKind};
    ///
    /// let io_error = std::io::Error::other("disk on fire");
    /// let error = AppError::external_cause(
    ///     ErrorKind::ExternalService,
    ///     "snapshot upload failed",
    ///     &io_error,
    /// );
    /// assert_eq!(error.cause_chain(), vec!["disk on fire"]);
    /// ```
    #[inline]
    pub fn external_cause(
        kind: ErrorKind,
        message: impl Into<String>,
        cause: &dyn std::error::Error,
    ) -> Self {
        Self::wrap(kind, message, Self::internal(cause.to_string()))
    }

    /// Attaches a context entry, returning the enriched error.
    ///
    /// Entries are kept in deterministic (sorted) key order. Values are
    /// JSON values, so the context is serializable by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::AppError;
    ///
    /// let error = AppError::validation("bad input")
    ///     .with_context("field", "email")
    ///     .with_context("attempt", 3);
    /// assert_eq!(error.context().len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The kind of this error.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The immediate cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// The context map.
    #[inline]
    pub const fn context(&self) -> &BTreeMap<String, Value> {
        &self.context
    }

    /// The message-only cause chain, immediate cause first.
    ///
    /// The receiver's own message is not included; an error with no cause
    /// yields an empty chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{AppError, ErrorKind};
    ///
    /// let chained = AppError::wrap(
    ///     ErrorKind::Internal,
    ///     "m2",
    ///     AppError::wrap(ErrorKind::Internal, "m1", AppError::internal("root")),
    /// );
    /// assert_eq!(chained.cause_chain(), vec!["m1", "root"]);
    /// ```
    pub fn cause_chain(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut link = self.cause.as_deref();
        while let Some(cause) = link {
            chain.push(cause.message.as_str());
            link = cause.cause.as_deref();
        }
        chain
    }

    // =========================================================================
    // Serialization Contract
    // =========================================================================

    /// Renders the flat, JSON-safe record handed to log sinks.
    ///
    /// The shape is `{code, message, context, causeChain}` where
    /// `causeChain` is the message-only chain, immediate cause first.
    /// Nested structures are flattened so log transports never receive
    /// unbounded depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::AppError;
    /// use serde_json::json;
    ///
    /// let error = AppError::validation("bad input").with_context("field", "email");
    /// assert_eq!(
    ///     error.to_json(),
    ///     json!({
    ///         "code": "VALIDATION",
    ///         "message": "bad input",
    ///         "context": {"field": "email"},
    ///         "causeChain": [],
    ///     }),
    /// );
    /// ```
    #[allow(clippy::missing_panics_doc)]
    pub fn to_json(&self) -> Value {
        // Serialize goes through the flat struct form below; an AppError is
        // JSON-safe by construction, so this cannot fail.
        serde_json::to_value(self).expect("AppError is JSON-safe by construction")
    }

    // =========================================================================
    // Boundary Mapping Tables
    // =========================================================================

    /// The HTTP status an external handler should answer with.
    ///
    /// | Kind | Status |
    /// |---|---|
    /// | `NotFound` | 404 |
    /// | `Validation`, `Conflict` | 400 |
    /// | `Unauthorized` | 401 |
    /// | `Forbidden` | 403 |
    /// | `ExternalService`, `Internal` | 500 |
    #[inline]
    pub const fn http_status(&self) -> u16 {
        match self.kind {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation | ErrorKind::Conflict => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::ExternalService | ErrorKind::Internal => 500,
        }
    }

    /// The process exit code a CLI entry point should use.
    ///
    /// Every kind is fatal to the current operation, not to the process;
    /// the table lives here (rather than a constant at call sites) so a
    /// future kind is reviewed in one place alongside
    /// [`AppError::http_status`].
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::NotFound
            | ErrorKind::Validation
            | ErrorKind::Unauthorized
            | ErrorKind::Forbidden
            | ErrorKind::Conflict
            | ErrorKind::ExternalService
            | ErrorKind::Internal => 1,
        }
    }
}

// =============================================================================
// Display and Error Implementations
// =============================================================================

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("AppError", 4)?;
        record.serialize_field("code", &self.kind)?;
        record.serialize_field("message", &self.message)?;
        record.serialize_field("context", &self.context)?;
        record.serialize_field("causeChain", &self.cause_chain())?;
        record.end()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<serde_json::Error> for AppError {
    /// A serde failure is a validation failure: untrusted input did not
    /// parse at the boundary.
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        Self::validation(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::internal(error.to_string())
    }
}

// =============================================================================
// Shareability Guarantees
// =============================================================================

static_assertions::assert_impl_all!(AppError: Send, Sync, Unpin);
