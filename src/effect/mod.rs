//! Deferred effect layer over tokio futures.
//!
//! This module provides [`AsyncOutcome`], the asynchronous counterpart of
//! [`Outcome`](crate::core::Outcome): a deferred computation whose
//! eventual resolution is an `Outcome<T, E>`. Nothing executes until
//! `run().await`; combinators compose descriptions, not executions.
//!
//! The layer performs no blocking or asynchronous I/O of its own and
//! owns no scheduler; suspension happens inside the wrapped future.
//! Cancellation is delegated to tokio: an aborted task adopted through
//! [`AsyncOutcome::from_join_handle`] resolves to a failure like any
//! other, never a silently dropped result.
//!
//! # Examples
//!
//! ```rust,ignore
//! use outcomes::AsyncOutcome;
//!
//! #[tokio::main]
//! async fn main() {
//!     let outcome = AsyncOutcome::<i32, String>::success(20)
//!         .flat_map(|x| AsyncOutcome::success(x + 1))
//!         .map(|x| x * 2)
//!         .run()
//!         .await;
//!     assert_eq!(outcome.get_or_else(0), 42);
//! }
//! ```

// =============================================================================
// AsyncOutcome
// =============================================================================

mod async_outcome;

pub use async_outcome::AsyncOutcome;
