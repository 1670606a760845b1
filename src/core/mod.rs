//! Core value algebra: success/failure and presence/absence.
//!
//! This module provides the two foundational container types:
//!
//! - [`Outcome<T, E>`]: an opaque success/failure sum
//! - [`Maybe<T>`]: an opaque presence/absence sum
//!
//! Both are immutable after construction, carry no identity, and are
//! freely shareable across threads and tasks when their payloads are.
//! Case analysis happens through `fold` alone; everything else is a pure
//! combinator that never branches a caller into partial access.
//!
//! The [`chain!`](crate::chain) macro provides do-notation style syntax
//! over both types.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{Maybe, Outcome};
//!
//! let outcome: Outcome<i32, String> = Outcome::success(21).map(|x| x * 2);
//! assert_eq!(outcome.get_or_else(0), 42);
//!
//! let maybe = Maybe::some(5).filter(|n| *n > 3);
//! assert_eq!(maybe.get_or_else(0), 5);
//! ```

// =============================================================================
// Container Types
// =============================================================================

mod maybe;
mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod chain_macro;
