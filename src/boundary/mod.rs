//! Boundary adapters between the algebra and panicking code.
//!
//! Inside the algebra, failure is a value. The only two sanctioned uses
//! of the panic mechanism are:
//!
//! - [`catch`] / [`catch_async`]: bridge legacy panicking code *into* the
//!   algebra, converting any panic into an
//!   [`AppError`](crate::error::AppError).
//! - [`Outcome::get_or_panic`](crate::core::Outcome::get_or_panic):
//!   bridge the algebra *out* at a boundary that has no other way to
//!   signal failure.
//!
//! Everywhere else, a fallible operation returns an
//! [`Outcome`](crate::core::Outcome).
//!
//! With the `tracing` feature enabled, [`OutcomeExt`] adds structured
//! logging taps for boundary call sites, the hand-off point to
//! log-transport collaborators.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::boundary::catch;
//! use outcomes::ErrorKind;
//!
//! let outcome = catch(|| "fine");
//! assert_eq!(outcome.get_or_else("fallback"), "fine");
//!
//! let outcome: outcomes::Outcome<i32, _> = catch(|| panic!("wire tripped"));
//! let kind = outcome.fold(|_| None, |error| Some(error.kind()));
//! assert_eq!(kind, Some(ErrorKind::Internal));
//! ```

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::core::Outcome;
use crate::error::AppError;

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use futures::FutureExt;

#[cfg(feature = "async")]
use crate::effect::AsyncOutcome;

// =============================================================================
// Panic Payload Conversion
// =============================================================================

/// Converts a caught panic payload into an [`AppError`].
///
/// A payload that is itself an `AppError` (raised via
/// `std::panic::panic_any`) keeps its kind; `String` and `&str` payloads
/// become the message of an `Internal` error; anything else becomes an
/// `Internal` error with a fixed message.
pub(crate) fn panic_to_app_error(payload: Box<dyn Any + Send>) -> AppError {
    match payload.downcast::<AppError>() {
        Ok(error) => *error,
        Err(payload) => match payload.downcast::<String>() {
            Ok(message) => AppError::internal(*message),
            Err(payload) => match payload.downcast::<&str>() {
                Ok(message) => AppError::internal(*message),
                Err(_) => AppError::internal("panic with a non-string payload"),
            },
        },
    }
}

// =============================================================================
// Synchronous Adapter
// =============================================================================

/// Runs a panicking operation, converting any panic into a failure.
///
/// This is the crossing point from exception-style code into the
/// algebra; nothing else in code using this crate should catch a panic.
/// The operation is wrapped in `AssertUnwindSafe`: the closure is
/// consumed whole, so no caller-observable state is left half-updated by
/// an unwind.
///
/// # Examples
///
/// ```rust
/// use outcomes::boundary::catch;
/// use outcomes::{AppError, ErrorKind};
/// use std::panic::panic_any;
///
/// // A panic payload carrying an AppError keeps its kind.
/// let outcome: outcomes::Outcome<i32, _> =
///     catch(|| panic_any(AppError::not_found("user 42 missing")));
/// let kind = outcome.fold(|_| None, |error| Some(error.kind()));
/// assert_eq!(kind, Some(ErrorKind::NotFound));
/// ```
pub fn catch<T, F>(operation: F) -> Outcome<T, AppError>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Outcome::success(value),
        Err(payload) => Outcome::failure(panic_to_app_error(payload)),
    }
}

// =============================================================================
// Asynchronous Adapter
// =============================================================================

/// Runs a panicking async operation, converting any panic into a
/// failure.
///
/// The async counterpart of [`catch`]: the returned
/// [`AsyncOutcome`](crate::effect::AsyncOutcome) resolves to a failure
/// if the future panics at any await point, and never propagates a raw
/// panic past this layer.
///
/// # Examples
///
/// ```rust,ignore
/// use outcomes::boundary::catch_async;
/// use outcomes::ErrorKind;
///
/// #[tokio::main]
/// async fn main() {
///     let outcome = catch_async(|| async { panic!("wire tripped") }).run().await;
///     let kind = outcome.fold(|_: i32| None, |error| Some(error.kind()));
///     assert_eq!(kind, Some(ErrorKind::Internal));
/// }
/// ```
#[cfg(feature = "async")]
pub fn catch_async<T, F, Fut>(operation: F) -> AsyncOutcome<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    AsyncOutcome::new(move || async move {
        match AssertUnwindSafe(operation()).catch_unwind().await {
            Ok(value) => Outcome::success(value),
            Err(payload) => Outcome::failure(panic_to_app_error(payload)),
        }
    })
}

// =============================================================================
// Structured Logging Taps
// =============================================================================

/// Structured logging taps for `Outcome<T, AppError>` at boundary call
/// sites.
///
/// Logging is observation only: values pass through unchanged, exactly
/// like [`tap_failure`](crate::core::Outcome::tap_failure).
#[cfg(feature = "tracing")]
pub trait OutcomeExt<T>: Sized {
    /// Emits a structured error event for a failure, passing the value
    /// through unchanged.
    #[must_use]
    fn log_failure(self, operation: &str) -> Self;

    /// Emits a debug event for a success and an error event for a
    /// failure, passing the value through unchanged.
    #[must_use]
    fn log_outcome(self, operation: &str) -> Self;
}

#[cfg(feature = "tracing")]
impl<T> OutcomeExt<T> for Outcome<T, AppError> {
    fn log_failure(self, operation: &str) -> Self {
        self.tap_failure(|error| {
            tracing::error!(
                code = error.kind().as_str(),
                operation,
                cause_chain = ?error.cause_chain(),
                "{}",
                error.message(),
            );
        })
    }

    fn log_outcome(self, operation: &str) -> Self {
        self.tap(|_| {
            tracing::debug!(operation, "operation succeeded");
        })
        .log_failure(operation)
    }
}
