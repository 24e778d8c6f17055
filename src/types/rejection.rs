use crate::types::alloc_type::String;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error form of a failed [`Outcome`](crate::Outcome).
///
/// Produced by [`Outcome::into_result`](crate::Outcome::into_result) so a
/// rejected guard can be propagated with `?`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Rejection};
///
/// fn admit(age: u32) -> Result<u32, Rejection> {
///     let age = Outcome::condition(age)
///         .fail_when(|| age < 18, "must be an adult")
///         .pass(None)
///         .into_result()?;
///     Ok(age)
/// }
///
/// assert_eq!(admit(30), Ok(30));
/// assert_eq!(admit(12).unwrap_err().to_string(), "must be an adult");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    /// Creates a rejection carrying the given reason text.
    #[inline]
    pub fn new<S: Into<String>>(reason: S) -> Self {
        Self { reason: reason.into() }
    }

    /// Returns the reason text. Empty when the failure gave no reason.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Consumes the rejection, returning the reason text.
    #[inline]
    pub fn into_reason(self) -> String {
        self.reason
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            f.write_str("rejected")
        } else {
            f.write_str(&self.reason)
        }
    }
}

impl core::error::Error for Rejection {}
