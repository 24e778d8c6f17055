//! Ergonomic macros for building [`Reason`](crate::Reason) values.
//!
//! - [`macro@crate::reason`] - formats a reason like `format!`
//! - [`macro@crate::reasons`] - builds an array of reasons for
//!   [`Outcome::pass`](crate::Outcome::pass) and [`Outcome::fail`](crate::Outcome::fail)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{reason, reasons, Outcome};
//!
//! let limit = 10;
//! let outcome = Outcome::<()>::fail(reasons![reason!("over limit {}", limit), "retry later"]);
//! assert_eq!(outcome.reason(), "over limit 10, retry later");
//! ```

/// Creates a [`Reason`](crate::Reason) from a format string.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use outcome_rail::{reason, Outcome};
///
/// let min = 18;
/// let age = 16;
/// let outcome = Outcome::condition(age)
///     .fail_when(|| age < min, reason!("age must be at least {min}"))
///     .pass(None);
///
/// assert_eq!(outcome.reason(), "age must be at least 18");
/// ```
#[macro_export]
macro_rules! reason {
    ($($arg:tt)*) => {
        $crate::types::Reason::new($crate::types::alloc_type::format!($($arg)*))
    };
}

/// Builds an array of [`Reason`](crate::Reason)s from anything implementing
/// [`IntoReason`](crate::traits::IntoReason).
///
/// `reasons![]` yields an empty array, which joins to an empty reason string.
///
/// # Examples
///
/// ```
/// use outcome_rail::{reasons, Outcome, Reason};
///
/// let outcome = Outcome::pass(1, reasons!["checked", String::from("cached"), Reason::NONE]);
/// assert_eq!(outcome.reason(), "checked, cached, ");
///
/// let empty = Outcome::pass(1, reasons![]);
/// assert_eq!(empty, Outcome::passed(1));
/// ```
#[macro_export]
macro_rules! reasons {
    () => {
        [$crate::types::Reason::NONE; 0]
    };
    ($($reason:expr),+ $(,)?) => {
        [$($crate::traits::IntoReason::into_reason($reason)),+]
    };
}
