//! Error kind taxonomy.
//!
//! A closed enumeration of failure categories. Producers pick the most
//! specific kind available; boundary adapters map kinds onto HTTP status
//! codes and process exit codes through the tables on
//! [`AppError`](crate::error::AppError).
//!
//! The enum is deliberately not `#[non_exhaustive]`: adding a kind is a
//! reviewed change, and downstream `match`es breaking loudly when one
//! lands is the point.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// The category of an [`AppError`](crate::error::AppError).
///
/// Serialized in SCREAMING_SNAKE_CASE wire form, e.g. `"NOT_FOUND"`.
///
/// # Examples
///
/// ```rust
/// use outcomes::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.as_str(), "NOT_FOUND");
/// assert_eq!("VALIDATION".parse::<ErrorKind>(), Ok(ErrorKind::Validation));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested entity does not exist.
    NotFound,
    /// The input failed validation at a boundary.
    Validation,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed.
    Forbidden,
    /// The operation conflicts with the current state.
    Conflict,
    /// A downstream service failed.
    ExternalService,
    /// An unexpected internal failure.
    Internal,
}

impl ErrorKind {
    /// Returns the wire form of the kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::ExternalService.as_str(), "EXTERNAL_SERVICE_ERROR");
    /// ```
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::ExternalService => "EXTERNAL_SERVICE_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error returned when parsing an unknown [`ErrorKind`] wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownErrorKind {
    /// The string that did not match any kind.
    pub raw: String,
}

impl fmt::Display for UnknownErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown error kind: {}", self.raw)
    }
}

impl std::error::Error for UnknownErrorKind {}

impl FromStr for ErrorKind {
    type Err = UnknownErrorKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "NOT_FOUND" => Ok(Self::NotFound),
            "VALIDATION" => Ok(Self::Validation),
            "UNAUTHORIZED" => Ok(Self::Unauthorized),
            "FORBIDDEN" => Ok(Self::Forbidden),
            "CONFLICT" => Ok(Self::Conflict),
            "EXTERNAL_SERVICE_ERROR" => Ok(Self::ExternalService),
            "INTERNAL" => Ok(Self::Internal),
            _ => Err(UnknownErrorKind {
                raw: raw.to_string(),
            }),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

impl Serialize for ErrorKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct ErrorKindVisitor;

impl Visitor<'_> for ErrorKindVisitor {
    type Value = ErrorKind;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an error kind wire string such as \"NOT_FOUND\"")
    }

    fn visit_str<E>(self, raw: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        raw.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ErrorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ErrorKindVisitor)
    }
}
