use crate::condition::core::{Chain, Condition};
use crate::condition::{FailChain, PassChain};
use crate::traits::IntoReason;

/// Neutral chain start returned by [`Outcome::condition`](crate::Outcome::condition).
///
/// No flavor is chosen yet. The first condition added decides it, and the
/// builder returned from that call only accepts conditions of the same flavor.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let fail_first = Outcome::condition("guarded").fail_when(|| false, "never");
/// let pass_first = Outcome::condition("guarded").pass_when(|| true, "always");
///
/// assert_eq!(fail_first.pass(None), Outcome::passed("guarded"));
/// assert_eq!(pass_first.fail(None), Outcome::pass("guarded", ["always"]));
/// ```
#[must_use = "a condition chain does nothing until a flavor is chosen and resolved"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionBuilder<T> {
    guarded: T,
}

impl<T> ConditionBuilder<T> {
    #[inline]
    pub(crate) fn new(guarded: T) -> Self {
        Self { guarded }
    }

    /// Commits to a fail-chain: the first predicate that holds fails the outcome.
    #[inline]
    pub fn fail_when<'a, F, R>(self, predicate: F, reason: R) -> FailChain<'a, T>
    where
        F: Fn() -> bool + 'a,
        R: IntoReason,
    {
        FailChain::new(Chain::new(self.guarded, Condition::new(predicate, reason)))
    }

    /// Commits to a pass-chain: the first predicate that holds passes the outcome.
    #[inline]
    pub fn pass_when<'a, F, R>(self, predicate: F, reason: R) -> PassChain<'a, T>
    where
        F: Fn() -> bool + 'a,
        R: IntoReason,
    {
        PassChain::new(Chain::new(self.guarded, Condition::new(predicate, reason)))
    }

    /// Returns the guarded value.
    #[inline]
    pub fn guarded(&self) -> &T {
        &self.guarded
    }
}
