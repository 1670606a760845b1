//! RemoteData - a four-state data-fetch lifecycle.
//!
//! This module provides [`RemoteData<T, E>`], which models the life of a
//! fetched value as four mutually exclusive states:
//!
//! ```text
//! NotAsked → Loading → Success(T)
//!                     → Failure(E)
//! Success(T) → Loading   (refetch)
//! Failure(E) → Loading   (retry)
//! ```
//!
//! `NotAsked` is the only initial state. `Loading` is reachable from every
//! state and is the only predecessor of `Success`/`Failure`: there is no
//! `NotAsked → Success` shortcut and no `Success → Failure` edge. The
//! diagram is enforced structurally: [`RemoteData::to_loading`] returns
//! an [`InFlight`] handle, and only that handle carries
//! [`InFlight::to_success`] / [`InFlight::to_failure`], so an illegal
//! transition is a compile error, not a runtime surprise.
//!
//! The dominant bug class this prevents in UI code is forgetting the
//! "not yet asked" and "in flight" cases; [`RemoteData::fold`] takes four
//! mandatory handlers, no default.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::RemoteData;
//!
//! let fetched = RemoteData::<i32, String>::not_asked()
//!     .to_loading()
//!     .to_success(10);
//!
//! let rendered = fetched.fold(
//!     || "not asked".to_string(),
//!     || "spinner".to_string(),
//!     |value| format!("value: {value}"),
//!     |error| format!("error: {error}"),
//! );
//! assert_eq!(rendered, "value: 10");
//! ```
//!
//! Skipping `Loading` does not compile:
//!
//! ```rust,compile_fail
//! use outcomes::RemoteData;
//!
//! // `to_success` only exists on the `InFlight` handle returned by
//! // `to_loading`, so this is rejected.
//! let illegal = RemoteData::<i32, String>::not_asked().to_success(10);
//! ```
//!
//! ```rust,compile_fail
//! use outcomes::RemoteData;
//!
//! let illegal = RemoteData::<i32, String>::not_asked().to_failure("boom".to_string());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::core::Outcome;

/// The internal state of a [`RemoteData`].
#[derive(Clone, PartialEq, Eq, Hash)]
enum State<T, E> {
    NotAsked,
    Loading,
    Success(T),
    Failure(E),
}

/// A value being fetched: not asked, in flight, succeeded, or failed.
///
/// Immutable after construction; transitions consume the old value and
/// produce a new one. The payload is unreachable without
/// [`RemoteData::fold`].
///
/// # Type Parameters
///
/// * `T` - The type of the fetched value
/// * `E` - The type of the failure value
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RemoteData<T, E> {
    state: State<T, E>,
}

/// A fetch in flight: the transition handle between `Loading` and a
/// concluded state.
///
/// Obtained only through [`RemoteData::to_loading`]. Zero-sized and
/// `Copy`, so a caller can keep the handle for the eventual
/// [`InFlight::to_success`] / [`InFlight::to_failure`] while rendering
/// the `Loading` state from [`InFlight::into_remote`].
pub struct InFlight<T, E> {
    marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> RemoteData<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates the initial state: nothing has been requested yet.
    ///
    /// This is the only legal starting point of the lifecycle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let initial = RemoteData::<i32, String>::not_asked();
    /// let asked = initial.fold(|| false, || true, |_| true, |_| true);
    /// assert!(!asked);
    /// ```
    #[inline]
    pub const fn not_asked() -> Self {
        Self {
            state: State::NotAsked,
        }
    }

    /// Lifts a concluded computation into the lifecycle.
    ///
    /// A success becomes `Success`, a failure becomes `Failure`; an
    /// [`Outcome`] only exists once a computation has concluded, so this
    /// never produces `NotAsked` or `Loading`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{Outcome, RemoteData};
    ///
    /// let fetched = RemoteData::from_outcome(Outcome::<i32, String>::success(7));
    /// let value = fetched.fold(|| 0, || 0, |value| value, |_| 0);
    /// assert_eq!(value, 7);
    /// ```
    #[inline]
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        outcome.fold(
            |value| Self {
                state: State::Success(value),
            },
            |error| Self {
                state: State::Failure(error),
            },
        )
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Starts (or restarts) a fetch, discarding any previous payload.
    ///
    /// The only transition defined on `RemoteData` itself, and legal from
    /// every state: the initial request from `NotAsked`, a refetch from
    /// `Success`, a retry from `Failure`. The returned [`InFlight`]
    /// handle is the only way to conclude the fetch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let retried = RemoteData::<i32, String>::not_asked()
    ///     .to_loading()
    ///     .to_failure("timeout".to_string())
    ///     .to_loading()
    ///     .to_success(3);
    /// let value = retried.fold(|| 0, || 0, |value| value, |_| 0);
    /// assert_eq!(value, 3);
    /// ```
    #[inline]
    pub fn to_loading(self) -> InFlight<T, E> {
        InFlight {
            marker: PhantomData,
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the `RemoteData` by applying exactly one of four
    /// handlers.
    ///
    /// All four are required; there is no default and no fallthrough, so
    /// every caller decides what "not yet asked" and "in flight" look
    /// like.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let spinner = RemoteData::<i32, String>::not_asked()
    ///     .to_loading()
    ///     .into_remote();
    /// let rendered = spinner.fold(
    ///     || "idle",
    ///     || "spinner",
    ///     |_| "value",
    ///     |_| "error",
    /// );
    /// assert_eq!(rendered, "spinner");
    /// ```
    #[inline]
    pub fn fold<R, A, B, F, G>(
        self,
        on_not_asked: A,
        on_loading: B,
        on_success: F,
        on_failure: G,
    ) -> R
    where
        A: FnOnce() -> R,
        B: FnOnce() -> R,
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self.state {
            State::NotAsked => on_not_asked(),
            State::Loading => on_loading(),
            State::Success(value) => on_success(value),
            State::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload, preserving the state.
    ///
    /// `NotAsked`, `Loading`, and `Failure` pass through unchanged; the
    /// function is never invoked for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let doubled = RemoteData::<i32, String>::not_asked()
    ///     .to_loading()
    ///     .to_success(21)
    ///     .map(|value| value * 2);
    /// let value = doubled.fold(|| 0, || 0, |value| value, |_| 0);
    /// assert_eq!(value, 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> U,
    {
        RemoteData {
            state: match self.state {
                State::NotAsked => State::NotAsked,
                State::Loading => State::Loading,
                State::Success(value) => State::Success(function(value)),
                State::Failure(error) => State::Failure(error),
            },
        }
    }

    /// Applies a function to the failure payload, preserving the state.
    #[inline]
    pub fn map_failure<F2, G>(self, function: G) -> RemoteData<T, F2>
    where
        G: FnOnce(E) -> F2,
    {
        RemoteData {
            state: match self.state {
                State::NotAsked => State::NotAsked,
                State::Loading => State::Loading,
                State::Success(value) => State::Success(value),
                State::Failure(error) => State::Failure(function(error)),
            },
        }
    }
}

impl<T, E> InFlight<T, E> {
    // =========================================================================
    // Concluding Transitions
    // =========================================================================

    /// Concludes the fetch with a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let fetched = RemoteData::<i32, String>::not_asked().to_loading().to_success(10);
    /// let value = fetched.fold(|| 0, || 0, |value| value, |_| 0);
    /// assert_eq!(value, 10);
    /// ```
    #[inline]
    pub fn to_success(self, value: T) -> RemoteData<T, E> {
        RemoteData {
            state: State::Success(value),
        }
    }

    /// Concludes the fetch with an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let failed = RemoteData::<i32, String>::not_asked()
    ///     .to_loading()
    ///     .to_failure("timeout".to_string());
    /// let error = failed.fold(
    ///     || String::new(),
    ///     || String::new(),
    ///     |_| String::new(),
    ///     |error| error,
    /// );
    /// assert_eq!(error, "timeout");
    /// ```
    #[inline]
    pub fn to_failure(self, error: E) -> RemoteData<T, E> {
        RemoteData {
            state: State::Failure(error),
        }
    }

    /// The `Loading`-state value, for rendering while the fetch is
    /// outstanding.
    ///
    /// The handle is `Copy`, so converting does not forfeit the ability
    /// to conclude the fetch later.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let in_flight = RemoteData::<i32, String>::not_asked().to_loading();
    /// let rendering = in_flight.into_remote();
    /// let loading = rendering.fold(|| false, || true, |_| false, |_| false);
    /// assert!(loading);
    ///
    /// // The handle is still usable afterwards.
    /// let concluded = in_flight.to_success(1);
    /// let value = concluded.fold(|| 0, || 0, |value| value, |_| 0);
    /// assert_eq!(value, 1);
    /// ```
    #[inline]
    pub fn into_remote(self) -> RemoteData<T, E> {
        RemoteData {
            state: State::Loading,
        }
    }
}

// =============================================================================
// Handle Implementations
// =============================================================================

impl<T, E> Clone for InFlight<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for InFlight<T, E> {}

impl<T, E> fmt::Debug for InFlight<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("InFlight")
    }
}

impl<T, E> From<InFlight<T, E>> for RemoteData<T, E> {
    /// The `Loading`-state value; same as [`InFlight::into_remote`].
    #[inline]
    fn from(in_flight: InFlight<T, E>) -> Self {
        in_flight.into_remote()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for RemoteData<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::NotAsked => formatter.write_str("NotAsked"),
            State::Loading => formatter.write_str("Loading"),
            State::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            State::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// Shareability Guarantees
// =============================================================================

static_assertions::assert_impl_all!(RemoteData<i32, String>: Send, Sync, Unpin);
static_assertions::assert_impl_all!(InFlight<i32, String>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn lifecycle_reaches_success_through_loading() {
        let fetched = RemoteData::<i32, String>::not_asked()
            .to_loading()
            .to_success(10);
        let value = fetched.fold(|| 0, || 0, |value| value, |_| 0);
        assert_eq!(value, 10);
    }

    #[rstest]
    fn refetch_discards_previous_payload() {
        let refetched = RemoteData::<i32, String>::not_asked()
            .to_loading()
            .to_success(10)
            .to_loading()
            .into_remote();
        let loading = refetched.fold(|| false, || true, |_| false, |_| false);
        assert!(loading);
    }

    #[rstest]
    fn from_outcome_maps_failure_to_failure() {
        let failed = RemoteData::from_outcome(Outcome::<i32, String>::failure("gone".to_string()));
        let error = failed.fold(
            || String::new(),
            || String::new(),
            |_| String::new(),
            |error| error,
        );
        assert_eq!(error, "gone");
    }

    #[rstest]
    fn map_preserves_non_success_states() {
        let still_not_asked = RemoteData::<i32, String>::not_asked().map(|value| value * 2);
        assert_eq!(still_not_asked, RemoteData::not_asked());
    }
}
