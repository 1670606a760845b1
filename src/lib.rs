//! # outcomes
//!
//! Algebraic success/failure and presence/absence handling for Rust,
//! designed so that reading a success value out of a failed computation
//! is a compile-time impossibility.
//!
//! ## Overview
//!
//! Failure is a first-class return value here, never a panic. Producers
//! construct an [`Outcome`] or [`Maybe`] at the point a computation can
//! fail; callers compose them with combinators without ever branching on
//! an internal flag; at a process boundary (HTTP handler, CLI entry point,
//! UI render) exactly one `fold` call converts the algebra into an effect.
//!
//! - **[`Outcome<T, E>`]**: an opaque success/failure sum. Construction via
//!   [`Outcome::success`]/[`Outcome::failure`]; case analysis via
//!   [`Outcome::fold`], the sole safe eliminator.
//! - **[`Maybe<T>`]**: the presence/absence counterpart.
//! - **[`AsyncOutcome<T, E>`]**: a deferred computation that resolves to an
//!   `Outcome`, layered over tokio futures (requires the `async` feature).
//! - **[`RemoteData<T, E>`]**: a four-state fetch lifecycle
//!   (not asked / loading / success / failure) for data-fetch state
//!   machines.
//! - **[`AppError`]**: the structured, serializable error taxonomy
//!   conventionally used as `E`.
//! - **[`boundary`]**: the only sanctioned crossing points between this
//!   algebra and panicking code.
//!
//! ## Feature Flags
//!
//! - `async`: the [`AsyncOutcome`] deferred layer and async boundary
//!   adapters (enabled by default)
//! - `tracing`: structured-logging taps for boundary call sites
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, AppError> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Outcome::failure(AppError::validation("port must be a number")),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1).get_or_else(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("eighty").get_or_else(80);
//! assert_eq!(fallback, 80);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {

    pub use crate::core::*;

    pub use crate::remote::*;

    pub use crate::error::*;

    pub use crate::boundary::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod core;

pub mod remote;

pub mod error;

pub mod boundary;

#[cfg(feature = "async")]
pub mod effect;

pub use crate::core::{Maybe, Outcome};
pub use crate::error::{AppError, ErrorKind};
pub use crate::remote::{InFlight, RemoteData};

#[cfg(feature = "async")]
pub use crate::effect::AsyncOutcome;

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn prelude_surface_is_usable() {
        let value: i32 = Outcome::<i32, &str>::success(1).get_or_else(0);
        assert_eq!(value, 1);
    }
}
