//! Structured error taxonomy.
//!
//! This module provides the conventional failure payload for the crate's
//! algebra:
//!
//! - [`ErrorKind`]: a closed enumeration of failure categories
//! - [`AppError`]: a structured, chainable, serializable error value
//!
//! Failures are returned, never panicked, from the point of detection up
//! to the nearest boundary; each intermediate layer may
//! [`wrap`](AppError::wrap) an error to add context but must not discard
//! the cause chain. The boundary converts the error exactly once, using
//! [`AppError::to_json`] for log sinks and the
//! [`http_status`](AppError::http_status) /
//! [`exit_code`](AppError::exit_code) tables for transport effects.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{AppError, ErrorKind, Outcome};
//!
//! fn find_user(id: u64) -> Outcome<String, AppError> {
//!     Outcome::failure(AppError::not_found(format!("user {id} missing")))
//! }
//!
//! let status = find_user(42)
//!     .map_failure(|error| error.http_status())
//!     .fold(|_| 200, |status| status);
//! assert_eq!(status, 404);
//! ```

// =============================================================================
// Error Kind Taxonomy
// =============================================================================

mod kind;

pub use kind::{ErrorKind, UnknownErrorKind};

// =============================================================================
// Structured Error Value
// =============================================================================

mod app_error;

pub use app_error::AppError;
