//! chain! macro for do-notation style composition.
//!
//! This module provides the `chain!` macro, which allows writing
//! `flat_map` chains over [`Outcome`](crate::core::Outcome) and
//! [`Maybe`](crate::core::Maybe) in a readable, imperative-looking style.
//!
//! # Syntax
//!
//! The macro supports the following constructs:
//!
//! - `pattern <= expression;` - Bind: extracts the value from the container
//! - `let pattern = expression;` - Pure let binding
//! - `expression` - Final expression (already a container)
//!
//! # Operator Choice: `<=`
//!
//! We use `<=` as the bind operator because:
//! - `<-` is not valid in Rust's macro patterns
//! - `<=` is visually similar to `<-` and suggests "bind from"
//! - It's a valid token in Rust macros
//!
//! # Examples
//!
//! ```rust
//! use outcomes::chain;
//! use outcomes::Outcome;
//!
//! let result: Outcome<i32, String> = chain! {
//!     x <= Outcome::success(5);
//!     y <= Outcome::success(10);
//!     let z = x + y;
//!     Outcome::success(z * 2)
//! };
//! assert_eq!(result, Outcome::success(30));
//! ```

/// A macro for do-notation style `flat_map` chains.
///
/// Works over any type with a `flat_map` inherent method taking a
/// single-argument closure, which in this crate means
/// [`Outcome`](crate::core::Outcome) and [`Maybe`](crate::core::Maybe).
///
/// # Syntax
///
/// ```text
/// chain! {
///     pattern <= container_expression;    // Bind operation (flat_map)
///     let pattern = expression;           // Pure let binding
///     container_expression                // Final expression
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use outcomes::chain;
/// use outcomes::Maybe;
///
/// // Short-circuit on the empty case
/// let result: Maybe<i32> = chain! {
///     x <= Maybe::some(5);
///     y <= Maybe::<i32>::none();
///     Maybe::some(x + y)
/// };
/// assert_eq!(result, Maybe::none());
/// ```
#[macro_export]
macro_rules! chain {
    // ==========================================================================
    // Terminal case
    // ==========================================================================

    // Case 1: Single expression (terminal) - return as-is
    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    // Case 2: Bind with identifier pattern
    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.flat_map(move |$pattern| {
            $crate::chain!($($rest)+)
        })
    };

    // Case 3: Bind with tuple pattern
    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.flat_map(move |($($pattern)*)| {
            $crate::chain!($($rest)+)
        })
    };

    // Case 4: Bind with wildcard pattern
    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.flat_map(move |_| {
            $crate::chain!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    // Case 5: Pure let binding with identifier
    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::chain!($($rest)+)
        }
    };

    // Case 6: Pure let binding with tuple pattern
    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::chain!($($rest)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Maybe, Outcome};

    #[test]
    fn basic_outcome_bind() {
        let result: Outcome<i32, String> = chain! {
            x <= Outcome::success(5);
            y <= Outcome::success(10);
            Outcome::success(x + y)
        };
        assert_eq!(result, Outcome::success(15));
    }

    #[test]
    fn outcome_with_let() {
        let result: Outcome<i32, String> = chain! {
            x <= Outcome::success(5);
            let doubled = x * 2;
            Outcome::success(doubled)
        };
        assert_eq!(result, Outcome::success(10));
    }

    #[test]
    fn outcome_short_circuit() {
        let result: Outcome<i32, String> = chain! {
            x <= Outcome::success(5);
            y <= Outcome::<i32, String>::failure("broken".to_string());
            Outcome::success(x + y)
        };
        assert_eq!(result, Outcome::failure("broken".to_string()));
    }

    #[test]
    fn maybe_bind() {
        let result: Maybe<i32> = chain! {
            x <= Maybe::some(5);
            y <= Maybe::some(10);
            Maybe::some(x + y)
        };
        assert_eq!(result, Maybe::some(15));
    }

    #[test]
    fn single_expression() {
        let result: Maybe<i32> = chain! {
            Maybe::some(42)
        };
        assert_eq!(result, Maybe::some(42));
    }
}
