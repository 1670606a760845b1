//! Outcome type - the success/failure algebra.
//!
//! This module provides the `Outcome<T, E>` type, an opaque sum of a
//! success value and a failure value. Unlike `std::result::Result`, the
//! variants are not exported: the payload of an `Outcome` is unreachable
//! without going through [`Outcome::fold`], so a failed computation can
//! never be read as a success (or vice versa) anywhere in a program.
//!
//! Producers construct an `Outcome` at the point a computation can fail;
//! callers compose them with combinators (`map`, `flat_map`, ...) and
//! convert the algebra into an effect with a single `fold` at the
//! boundary.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Outcome;
//!
//! fn halve(n: i32) -> Outcome<i32, String> {
//!     if n % 2 == 0 {
//!         Outcome::success(n / 2)
//!     } else {
//!         Outcome::failure(format!("{n} is odd"))
//!     }
//! }
//!
//! let message = halve(42)
//!     .map(|half| half + 1)
//!     .fold(|value| format!("got {value}"), |error| error);
//! assert_eq!(message, "got 22");
//!
//! let message = halve(7).fold(|value| format!("got {value}"), |error| error);
//! assert_eq!(message, "7 is odd");
//! ```

use std::fmt;

use crate::core::maybe::Maybe;

/// The internal representation of an [`Outcome`].
///
/// Kept private so the only way to observe the variant is `fold`.
#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr<T, E> {
    Success(T),
    Failure(E),
}

/// An opaque value that is exactly one of: a success carrying `T`, or a
/// failure carrying `E`.
///
/// The variant tag and payload are set at construction and immutable
/// thereafter. There is deliberately no `is_success`/`is_failure`
/// predicate pair and no direct accessor: checking without extracting is
/// what allowed unguarded field reads in the pattern this type replaces.
/// Case analysis happens in one place, [`Outcome::fold`], which forces a
/// handler for both variants.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value (conventionally [`AppError`])
///
/// [`AppError`]: crate::error::AppError
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(42);
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::success(84));
///
/// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
/// let unchanged = failure.map(|x| x * 2);
/// assert_eq!(unchanged, Outcome::failure("broken".to_string()));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T, E> {
    repr: Repr<T, E>,
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Outcome` carrying `value`.
    ///
    /// Total: never fails. Together with [`Outcome::failure`] this is the
    /// only way to produce an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.get_or_else(0), 42);
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            repr: Repr::Success(value),
        }
    }

    /// Creates a failed `Outcome` carrying `error`.
    ///
    /// Total: never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// assert_eq!(outcome.get_or_else(0), 0);
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self {
            repr: Repr::Failure(error),
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the `Outcome` by applying exactly one of two handlers.
    ///
    /// This is the sole way to extract information from an `Outcome`.
    /// `on_success` runs for a success, `on_failure` for a failure; both
    /// must produce the same result type, so every caller handles both
    /// variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// let rendered = success.fold(|value| value.to_string(), |error| error);
    /// assert_eq!(rendered, "42");
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// let rendered = failure.fold(|value| value.to_string(), |error| error);
    /// assert_eq!(rendered, "broken");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving a failure
    /// untouched.
    ///
    /// The function is never invoked on a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(21);
    /// assert_eq!(success.map(|x| x * 2), Outcome::success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// assert_eq!(
    ///     failure.map(|x| x * 2),
    ///     Outcome::failure("broken".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(function(value)),
            Repr::Failure(error) => Outcome::failure(error),
        }
    }

    /// Applies a function to the failure value, leaving a success
    /// untouched.
    ///
    /// This is how intermediate layers re-shape an error on the way to a
    /// boundary without disturbing the success path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// assert_eq!(
    ///     failure.map_failure(|error| error.len()),
    ///     Outcome::failure(6),
    /// );
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(
    ///     success.map_failure(|error| error.len()),
    ///     Outcome::success(42),
    /// );
    /// ```
    #[inline]
    pub fn map_failure<F2, G>(self, function: G) -> Outcome<T, F2>
    where
        G: FnOnce(E) -> F2,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(error) => Outcome::failure(function(error)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a fallible computation onto the success value.
    ///
    /// The result is flattened: `f(value)` replaces the whole `Outcome`
    /// rather than nesting inside it. A failure short-circuits and the
    /// function is never invoked.
    ///
    /// `flat_map` is associative: chaining `f` then `g` gives the same
    /// value as chaining `|x| f(x).flat_map(g)` in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// fn reciprocal(n: f64) -> Outcome<f64, String> {
    ///     if n == 0.0 {
    ///         Outcome::failure("division by zero".to_string())
    ///     } else {
    ///         Outcome::success(1.0 / n)
    ///     }
    /// }
    ///
    /// let chained = Outcome::<f64, String>::success(4.0).flat_map(reciprocal);
    /// assert_eq!(chained, Outcome::success(0.25));
    ///
    /// let chained = Outcome::<f64, String>::success(0.0).flat_map(reciprocal);
    /// assert_eq!(chained, Outcome::failure("division by zero".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self.repr {
            Repr::Success(value) => function(value),
            Repr::Failure(error) => Outcome::failure(error),
        }
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let outcome: Outcome<i32, String> =
    ///     Outcome::success(10).and_then(|x| Outcome::success(x + 5));
    /// assert_eq!(outcome, Outcome::success(15));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Side-Effect Taps
    // =========================================================================

    /// Runs a side effect on the success value, returning the `Outcome`
    /// unchanged.
    ///
    /// No-op on a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// let unchanged = outcome.tap(|value| seen = Some(*value));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(unchanged, Outcome::success(42));
    /// ```
    #[inline]
    pub fn tap<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Repr::Success(value) = &self.repr {
            inspector(value);
        }
        self
    }

    /// Runs a side effect on the failure value, returning the `Outcome`
    /// unchanged.
    ///
    /// No-op on a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// let unchanged = outcome.tap_failure(|error| seen = Some(error.clone()));
    /// assert_eq!(seen, Some("broken".to_string()));
    /// assert_eq!(unchanged, Outcome::failure("broken".to_string()));
    /// ```
    #[inline]
    pub fn tap_failure<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Repr::Failure(error) = &self.repr {
            inspector(error);
        }
        self
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the success value, or `default` on a failure.
    ///
    /// The failure payload is discarded. This is the local-recovery form:
    /// fall back to a known-good value instead of propagating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(success.get_or_else(0), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// assert_eq!(failure.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes a fallback from the failure.
    ///
    /// Use this over [`Outcome::get_or_else`] when the fallback is
    /// expensive or depends on the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failure: Outcome<usize, String> = Outcome::failure("broken".to_string());
    /// assert_eq!(failure.get_or_else_with(|error| error.len()), 6);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(error) => fallback(error),
        }
    }

    /// Returns the success value, panicking on a failure.
    ///
    /// This is the one sanctioned escape from the algebra back into the
    /// panic mechanism, reserved for outermost boundaries that have no
    /// other way to signal failure (a constructor, a test harness).
    /// Non-boundary code propagates the `Outcome` instead.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure, with the failure payload in the
    /// message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.get_or_panic(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get_or_panic(self) -> T
    where
        E: fmt::Debug,
    {
        match self.repr {
            Repr::Success(value) => value,
            Repr::Failure(error) => {
                panic!("called `Outcome::get_or_panic()` on a `Failure` value: {error:?}")
            }
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a [`Maybe`], discarding the failure payload.
    ///
    /// A success becomes present; a failure becomes absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{Maybe, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(success.to_maybe(), Maybe::some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// assert_eq!(failure.to_maybe(), Maybe::none());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self.repr {
            Repr::Success(value) => Maybe::some(value),
            Repr::Failure(_) => Maybe::none(),
        }
    }

    /// Converts into a `std::result::Result`.
    ///
    /// The crossing point to APIs that speak `Result` (and the `?`
    /// operator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Repr::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes a success, `Err(error)` a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, Outcome::success(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// A success becomes `Ok`, a failure becomes `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("broken".to_string());
    /// let result: Result<i32, String> = outcome.into();
    /// assert_eq!(result, Err("broken".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome.repr {
            Repr::Success(value) => Ok(value),
            Repr::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Shareability Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Unpin);
