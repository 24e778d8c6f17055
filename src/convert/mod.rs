//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters let guard chains sit next to code that already speaks
//! `Result` or `Option`, in either direction.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let result: Result<i32, &str> = Err("parse failed");
//! let outcome = result_to_outcome(result);
//! assert_eq!(outcome.reason(), "parse failed");
//!
//! let back = outcome_to_result(outcome);
//! assert!(back.is_err());
//! ```

use crate::traits::IntoReason;
use crate::types::alloc_type::ToString;
use crate::types::{Outcome, Rejection};
use core::fmt::Display;

/// Converts an `Outcome` into a `Result`, wrapping the failure reason in a [`Rejection`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::passed(3)), Ok(3));
///
/// let err = outcome_to_result(Outcome::<i32>::fail(["closed"])).unwrap_err();
/// assert_eq!(err.reason(), "closed");
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Rejection> {
    outcome.into_result()
}

/// Converts a `Result` into an `Outcome`.
///
/// `Ok` becomes a pass with an empty reason; `Err` becomes a fail whose reason
/// is the error's `Display` output.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let ok = result_to_outcome(Ok::<_, &str>(8));
/// assert!(ok.is_valid());
/// assert_eq!(ok.reason(), "");
///
/// let err = result_to_outcome(Err::<i32, _>("timeout"));
/// assert_eq!(err.reason(), "timeout");
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Display,
{
    match result {
        Ok(value) => Outcome::passed(value),
        Err(error) => Outcome::fail([error.to_string()]),
    }
}

/// Discards the reason, returning the value if the outcome passed.
#[inline]
pub fn outcome_to_option<T>(outcome: Outcome<T>) -> Option<T> {
    outcome.into_value()
}

/// Converts an `Option` into an `Outcome`, failing with `reason` on `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::passed(1));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::fail(["missing"]));
/// ```
#[inline]
pub fn option_to_outcome<T, R>(option: Option<T>, reason: R) -> Outcome<T>
where
    R: IntoReason,
{
    match option {
        Some(value) => Outcome::passed(value),
        None => Outcome::fail([reason]),
    }
}
