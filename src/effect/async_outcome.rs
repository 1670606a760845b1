//! `AsyncOutcome` - a deferred computation resolving to an `Outcome`.
//!
//! `AsyncOutcome<T, E>` wraps an asynchronous computation whose eventual
//! resolution is an [`Outcome<T, E>`](crate::core::Outcome). It adds no
//! state of its own on top of the wrapped future: suspension happens
//! entirely inside the wrapped computation, never inside the combinator
//! layer, and nothing executes until [`AsyncOutcome::run`] is awaited.
//!
//! # Design Philosophy
//!
//! An `AsyncOutcome` "describes" a fallible async computation but doesn't
//! "execute" it. Execution happens only via `run().await` (or
//! [`AsyncOutcome::run_caught`], which additionally folds panics into a
//! failure), called at the program's edge.
//!
//! Resolution is strictly sequential within one chain:
//! `a.flat_map(f).flat_map(g)` awaits `a`, then `f`'s result, then `g`'s
//! result, in that order. No combinator introduces parallelism on its
//! own; callers wanting concurrent composition use tokio's own
//! primitives and fold the resolved `Outcome`s back together explicitly.
//!
//! # Examples
//!
//! ```rust,ignore
//! use outcomes::AsyncOutcome;
//!
//! #[tokio::main]
//! async fn main() {
//!     let computation = AsyncOutcome::<i32, String>::success(10)
//!         .map(|x| x * 2)
//!         .flat_map(|x| AsyncOutcome::success(x + 1));
//!     let outcome = computation.run().await;
//!     assert_eq!(outcome.get_or_else(0), 21);
//! }
//! ```
//!
//! # Deferred Execution
//!
//! ```rust,ignore
//! use outcomes::{AsyncOutcome, Outcome};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let executed = Arc::new(AtomicBool::new(false));
//!     let executed_clone = executed.clone();
//!
//!     let computation = AsyncOutcome::<i32, String>::new(move || {
//!         let flag = executed_clone.clone();
//!         async move {
//!             flag.store(true, Ordering::SeqCst);
//!             Outcome::success(42)
//!         }
//!     });
//!
//!     // Not executed yet
//!     assert!(!executed.load(Ordering::SeqCst));
//!
//!     let outcome = computation.run().await;
//!     assert!(executed.load(Ordering::SeqCst));
//!     assert_eq!(outcome.get_or_else(0), 42);
//! }
//! ```

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;

use futures::FutureExt;

use crate::boundary::panic_to_app_error;
use crate::core::Outcome;
use crate::error::AppError;

/// A deferred asynchronous computation that resolves to an
/// [`Outcome<T, E>`](crate::core::Outcome).
///
/// The computation must never resolve to a bare `T` or escape a raw
/// panic: failures of the underlying operation are carried as the
/// `Outcome`'s failure variant, and [`AsyncOutcome::run_caught`] /
/// [`AsyncOutcome::from_join_handle`] fold panics and cancellation into
/// one as well.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
pub struct AsyncOutcome<T, E> {
    /// The wrapped async computation producing the resolution.
    run_outcome: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Outcome<T, E>> + Send>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a new `AsyncOutcome` from an async closure.
    ///
    /// The closure will not be executed until [`AsyncOutcome::run`] is
    /// awaited.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{AsyncOutcome, Outcome};
    ///
    /// let computation = AsyncOutcome::<String, String>::new(|| async {
    ///     tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    ///     Outcome::success("done".to_string())
    /// });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            run_outcome: Box::new(move || Box::pin(action())),
        }
    }

    /// Creates an `AsyncOutcome` from an existing future.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            run_outcome: Box::new(move || Box::pin(future)),
        }
    }

    /// Wraps an already-resolved success.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// let computation = AsyncOutcome::<i32, String>::success(42);
    /// // run().await resolves immediately to a success
    /// ```
    pub fn success(value: T) -> Self {
        Self::from_outcome(Outcome::success(value))
    }

    /// Wraps an already-resolved failure.
    pub fn failure(error: E) -> Self {
        Self::from_outcome(Outcome::failure(error))
    }

    /// Lifts a concluded [`Outcome`](crate::core::Outcome) into the
    /// deferred layer.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self {
            run_outcome: Box::new(move || Box::pin(async move { outcome })),
        }
    }
}

// =============================================================================
// Execution Methods
// =============================================================================

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Executes the deferred computation and resolves it.
    ///
    /// This is the only way to extract the `Outcome` from an
    /// `AsyncOutcome`. It should be awaited at the program's edge (an
    /// async handler, the main function).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let outcome = AsyncOutcome::<i32, String>::success(42).run().await;
    ///     assert_eq!(outcome.get_or_else(0), 42);
    /// }
    /// ```
    pub async fn run(self) -> Outcome<T, E> {
        (self.run_outcome)().await
    }

    /// Executes the deferred computation, folding any panic anywhere in
    /// the chain into a failure.
    ///
    /// A panic payload that is itself an [`AppError`] keeps its kind;
    /// `String`/`&str` payloads become the message of an
    /// [`ErrorKind::Internal`](crate::error::ErrorKind::Internal)
    /// failure. A raw panic never escapes this call.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::{AppError, AsyncOutcome, Outcome};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let exploding = AsyncOutcome::<i32, AppError>::new(|| async {
    ///         panic!("wire tripped")
    ///     });
    ///     let outcome = exploding.run_caught().await;
    ///     let code = outcome.fold(|_| None, |error| Some(error.kind()));
    ///     assert_eq!(code, Some(outcomes::ErrorKind::Internal));
    /// }
    /// ```
    pub async fn run_caught(self) -> Outcome<T, E>
    where
        E: From<AppError>,
    {
        match AssertUnwindSafe((self.run_outcome)()).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => Outcome::failure(E::from(panic_to_app_error(payload))),
        }
    }
}

// =============================================================================
// Mapping Operations
// =============================================================================

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transforms the eventual success value with a synchronous function.
    ///
    /// The function is applied after the inner resolution; it is never
    /// invoked when the computation resolves to a failure.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// let computation = AsyncOutcome::<i32, String>::success(21).map(|x| x * 2);
    /// assert_eq!(computation.run().await.get_or_else(0), 42);
    /// ```
    pub fn map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run().await.map(function) })
    }

    /// Transforms the eventual success value with an asynchronous
    /// function.
    ///
    /// The inner resolution is awaited first, then the function's future;
    /// strictly in that order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// let computation = AsyncOutcome::<i32, String>::success(21)
    ///     .map_async(|x| async move { x * 2 });
    /// assert_eq!(computation.run().await.get_or_else(0), 42);
    /// ```
    pub fn map_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run().await.into_result() {
                Ok(value) => Outcome::success(function(value).await),
                Err(error) => Outcome::failure(error),
            }
        })
    }

    /// Transforms the eventual failure value, leaving a success
    /// untouched.
    pub fn map_failure<F2, G>(self, function: G) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        G: FnOnce(E) -> F2 + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run().await.map_failure(function) })
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a deferred fallible computation onto the eventual success
    /// value.
    ///
    /// Awaits this computation, then (only on success) the one produced
    /// by `function`. A failure short-circuits and `function` is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// let computation = AsyncOutcome::<i32, String>::success(10)
    ///     .flat_map(|x| AsyncOutcome::success(x * 2));
    /// assert_eq!(computation.run().await.get_or_else(0), 20);
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncOutcome<U, E> + Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run().await.into_result() {
                Ok(value) => function(value).run().await,
                Err(error) => Outcome::failure(error),
            }
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    pub fn and_then<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncOutcome<U, E> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// Pairs two deferred computations, succeeding only if both succeed.
    ///
    /// Strictly sequential: this computation resolves first, and on
    /// failure `other` is never executed. For concurrent composition,
    /// spawn both with tokio and fold the resolved `Outcome`s instead.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// let paired = AsyncOutcome::<i32, String>::success(1)
    ///     .zip(AsyncOutcome::success("one"));
    /// assert_eq!(paired.run().await.get_or_else((0, "")), (1, "one"));
    /// ```
    pub fn zip<U>(self, other: AsyncOutcome<U, E>) -> AsyncOutcome<(T, U), E>
    where
        U: Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run().await.into_result() {
                Ok(left) => match other.run().await.into_result() {
                    Ok(right) => Outcome::success((left, right)),
                    Err(error) => Outcome::failure(error),
                },
                Err(error) => Outcome::failure(error),
            }
        })
    }

    // =========================================================================
    // Side-Effect Taps
    // =========================================================================

    /// Runs a synchronous side effect on the eventual success value,
    /// passing the resolution through unchanged.
    pub fn tap<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run().await.tap(inspector) })
    }

    /// Runs an asynchronous side effect on the eventual success value,
    /// passing the resolution through unchanged.
    ///
    /// The effect receives a clone of the value; the original continues
    /// down the chain.
    pub fn tap_async<F, Fut>(self, effect: F) -> Self
    where
        T: Clone,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run().await.into_result() {
                Ok(value) => {
                    effect(value.clone()).await;
                    Outcome::success(value)
                }
                Err(error) => Outcome::failure(error),
            }
        })
    }

    /// Runs a synchronous side effect on the eventual failure value,
    /// passing the resolution through unchanged.
    pub fn tap_failure<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run().await.tap_failure(inspector) })
    }
}

// =============================================================================
// Task Boundary
// =============================================================================

impl<T> AsyncOutcome<T, AppError>
where
    T: Send + 'static,
{
    /// Adopts a spawned tokio task, folding every way it can go wrong
    /// into a failure.
    ///
    /// A panic inside the task keeps its kind when the payload is an
    /// [`AppError`], otherwise becomes
    /// [`ErrorKind::Internal`](crate::error::ErrorKind::Internal);
    /// cancellation (`JoinHandle::abort`) is treated identically to any
    /// other failure, never silently dropped.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use outcomes::AsyncOutcome;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let handle = tokio::spawn(async { 42 });
    ///     let outcome = AsyncOutcome::from_join_handle(handle).run().await;
    ///     assert_eq!(outcome.get_or_else(0), 42);
    /// }
    /// ```
    pub fn from_join_handle(handle: tokio::task::JoinHandle<T>) -> Self {
        Self::new(move || async move {
            match handle.await {
                Ok(value) => Outcome::success(value),
                Err(join_error) => {
                    if join_error.is_panic() {
                        match join_error.try_into_panic() {
                            Ok(payload) => Outcome::failure(panic_to_app_error(payload)),
                            Err(join_error) => {
                                Outcome::failure(AppError::internal(join_error.to_string()))
                            }
                        }
                    } else {
                        Outcome::failure(AppError::internal(join_error.to_string()))
                    }
                }
            }
        })
    }
}

// =============================================================================
// Shareability Guarantees
// =============================================================================

static_assertions::assert_impl_all!(AsyncOutcome<i32, String>: Send);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_resolves_immediately() {
        let outcome = AsyncOutcome::<i32, String>::success(42).run().await;
        assert_eq!(outcome.get_or_else(0), 42);
    }

    #[tokio::test]
    async fn map_applies_after_resolution() {
        let outcome = AsyncOutcome::<i32, String>::success(21)
            .map(|x| x * 2)
            .run()
            .await;
        assert_eq!(outcome.get_or_else(0), 42);
    }

    #[tokio::test]
    async fn failure_short_circuits_flat_map() {
        let outcome = AsyncOutcome::<i32, String>::failure("broken".to_string())
            .flat_map(|x| AsyncOutcome::success(x + 1))
            .run()
            .await;
        assert_eq!(outcome.into_result(), Err("broken".to_string()));
    }
}
