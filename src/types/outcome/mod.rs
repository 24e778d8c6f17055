//! Pass/fail outcome carrying an optional value and a joined reason.
//!
//! An [`Outcome`] is valid exactly when it carries a value, so the value slot
//! doubles as the validity flag and the two can never disagree.

use crate::condition::ConditionBuilder;
use crate::traits::IntoReason;
use crate::types::alloc_type::String;
use crate::types::Rejection;

#[cfg(feature = "serde")]
mod serialize;
mod traits;

/// Separator placed between reasons when several are supplied.
pub const REASON_SEPARATOR: &str = ", ";

/// Immutable record of a pass/fail decision.
///
/// Outcomes are built with [`Outcome::pass`], [`Outcome::fail`] or by resolving a
/// condition chain started with [`Outcome::condition`]. Equality is structural:
/// two outcomes are equal when their validity, value and reason text match.
///
/// # Type Parameters
///
/// * `T` - The guarded value returned on success. Use `()` when a passing
///   outcome has nothing to carry.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Reason};
///
/// let ok = Outcome::pass(42, [Reason::new("in range")]);
/// assert!(ok.is_valid());
/// assert_eq!(ok.value(), Some(&42));
/// assert_eq!(ok.reason(), "in range");
///
/// let rejected = Outcome::<i32>::fail(["too small", "not even"]);
/// assert!(rejected.is_invalid());
/// assert_eq!(rejected.reason(), "too small, not even");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Outcome<T> {
    pub(crate) value: Option<T>,
    pub(crate) reason: String,
}

impl<T> Outcome<T> {
    /// Creates a passing outcome carrying `value`.
    ///
    /// The reasons are joined with `", "`. Passing no reasons yields an empty
    /// reason string.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::pass("alice", ["name present", "name short enough"]);
    /// assert_eq!(o.reason(), "name present, name short enough");
    /// ```
    #[inline]
    pub fn pass<I>(value: T, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoReason,
    {
        Self { value: Some(value), reason: join_reasons(reasons) }
    }

    /// Creates a passing outcome with an empty reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Reason};
    ///
    /// assert_eq!(Outcome::passed(7), Outcome::pass(7, [Reason::NONE]));
    /// ```
    #[inline]
    pub fn passed(value: T) -> Self {
        Self { value: Some(value), reason: String::new() }
    }

    /// Creates a failing outcome. It carries no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Reason};
    ///
    /// let o = Outcome::<()>::fail([Reason::new("missing email")]);
    /// assert!(o.is_invalid());
    /// assert_eq!(o.value(), None);
    /// ```
    #[inline]
    pub fn fail<I>(reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoReason,
    {
        Self { value: None, reason: join_reasons(reasons) }
    }

    /// Starts a condition chain guarding `value`.
    ///
    /// The returned builder must be committed to a flavor with
    /// [`fail_when`](ConditionBuilder::fail_when) or
    /// [`pass_when`](ConditionBuilder::pass_when).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let age = 17;
    /// let outcome = Outcome::condition(age)
    ///     .fail_when(|| age < 18, "must be an adult")
    ///     .pass(None);
    ///
    /// assert_eq!(outcome, Outcome::fail(["must be an adult"]));
    /// ```
    #[inline]
    pub fn condition(value: T) -> ConditionBuilder<T> {
        ConditionBuilder::new(value)
    }

    /// Returns `true` if the outcome passed.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the outcome failed. Always the negation of [`is_valid`](Self::is_valid).
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the guarded value if the outcome passed.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome, returning the value if it passed.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns the joined reason text.
    #[must_use]
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Splits the outcome into its value slot and reason text.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<T>, String) {
        (self.value, self.reason)
    }

    /// Maps the carried value, keeping the reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::pass(21, ["ok"]).map(|x| x * 2);
    /// assert_eq!(o, Outcome::pass(42, ["ok"]));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome { value: self.value.map(f), reason: self.reason }
    }

    /// Chains another decision on success.
    ///
    /// A failed outcome is returned unchanged and `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Reason};
    ///
    /// let even = |n: i32| {
    ///     Outcome::condition(n)
    ///         .fail_when(move || n % 2 != 0, "odd")
    ///         .pass(Reason::new("even"))
    /// };
    ///
    /// assert_eq!(Outcome::passed(4).and_then(even), Outcome::pass(4, ["even"]));
    /// assert_eq!(Outcome::<i32>::fail(["missing"]).and_then(even).reason(), "missing");
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.value {
            Some(value) => f(value),
            None => Outcome { value: None, reason: self.reason },
        }
    }

    /// Converts into a `Result`, turning a failure into a [`Rejection`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::passed(1).into_result().ok(), Some(1));
    ///
    /// let err = Outcome::<i32>::fail(["blocked"]).into_result().unwrap_err();
    /// assert_eq!(err.reason(), "blocked");
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Rejection> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(Rejection::new(self.reason)),
        }
    }
}

pub(crate) fn join_reasons<I>(reasons: I) -> String
where
    I: IntoIterator,
    I::Item: IntoReason,
{
    let mut joined = String::new();
    for (index, reason) in reasons.into_iter().enumerate() {
        if index > 0 {
            joined.push_str(REASON_SEPARATOR);
        }
        joined.push_str(reason.into_reason().as_str());
    }
    joined
}
