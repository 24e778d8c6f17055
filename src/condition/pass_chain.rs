use crate::condition::core::{Chain, Condition, Flavor};
use crate::traits::IntoReason;
use crate::types::{Outcome, Reason};

/// Condition chain that passes on the first `pass_when` predicate that holds.
///
/// Created by [`ConditionBuilder::pass_when`](crate::ConditionBuilder::pass_when).
/// The mirror image of [`FailChain`](crate::FailChain): the matched condition's
/// reason goes on the success and the finalizer's reason goes on the failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Reason};
///
/// let role = "editor";
/// let outcome = Outcome::condition(role)
///     .pass_when(|| role == "admin", "admin access")
///     .pass_when(|| role == "editor", "editor access")
///     .fail(Reason::new("no access"));
///
/// assert_eq!(outcome, Outcome::pass("editor", ["editor access"]));
/// ```
#[must_use = "a pass-chain does nothing until `fail` is called"]
pub struct PassChain<'a, T> {
    chain: Chain<'a, T>,
}

impl<'a, T> PassChain<'a, T> {
    #[inline]
    pub(crate) fn new(chain: Chain<'a, T>) -> Self {
        Self { chain }
    }

    /// Appends another pass-condition. Conditions run in the order they are added.
    #[inline]
    pub fn pass_when<F, R>(mut self, predicate: F, reason: R) -> Self
    where
        F: Fn() -> bool + 'a,
        R: IntoReason,
    {
        self.chain.push(Condition::new(predicate, reason));
        self
    }

    /// Resolves the chain.
    ///
    /// Returns a passing outcome carrying the guarded value and the reason of
    /// the first predicate that holds, without invoking any later predicate.
    /// If none hold, returns a failing outcome with `reason`, or
    /// [`Reason::NONE`] when `reason` is `None`.
    pub fn fail<R>(self, reason: R) -> Outcome<T>
    where
        R: Into<Option<Reason>>,
    {
        let verdict = self.chain.verdict(Flavor::Pass, reason.into());
        verdict.into_outcome(|| self.chain.into_guarded())
    }

    /// Resolves the chain without consuming it, re-running every predicate.
    pub fn check<R>(&self, reason: R) -> Outcome<T>
    where
        T: Clone,
        R: Into<Option<Reason>>,
    {
        let verdict = self.chain.verdict(Flavor::Pass, reason.into());
        verdict.into_outcome(|| self.chain.guarded().clone())
    }

    /// Returns the number of registered conditions. Never zero.
    #[inline]
    pub fn condition_count(&self) -> usize {
        self.chain.len()
    }
}
