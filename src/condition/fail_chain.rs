use crate::condition::core::{Chain, Condition, Flavor};
use crate::traits::IntoReason;
use crate::types::{Outcome, Reason};

/// Condition chain that fails on the first `fail_when` predicate that holds.
///
/// Created by [`ConditionBuilder::fail_when`](crate::ConditionBuilder::fail_when).
/// There is no `pass_when` on this type, so a chain can't switch flavor once
/// it has started.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Reason};
///
/// let name = "";
/// let outcome = Outcome::condition(name)
///     .fail_when(|| name.is_empty(), "name is required")
///     .fail_when(|| name.len() > 32, "name is too long")
///     .pass(Reason::new("name accepted"));
///
/// assert_eq!(outcome, Outcome::fail(["name is required"]));
/// ```
#[must_use = "a fail-chain does nothing until `pass` is called"]
pub struct FailChain<'a, T> {
    chain: Chain<'a, T>,
}

impl<'a, T> FailChain<'a, T> {
    #[inline]
    pub(crate) fn new(chain: Chain<'a, T>) -> Self {
        Self { chain }
    }

    /// Appends another fail-condition. Conditions run in the order they are added.
    #[inline]
    pub fn fail_when<F, R>(mut self, predicate: F, reason: R) -> Self
    where
        F: Fn() -> bool + 'a,
        R: IntoReason,
    {
        self.chain.push(Condition::new(predicate, reason));
        self
    }

    /// Resolves the chain.
    ///
    /// Returns a failing outcome with the reason of the first predicate that
    /// holds, without invoking any later predicate. If none hold, returns a
    /// passing outcome carrying the guarded value and `reason`, or
    /// [`Reason::NONE`] when `reason` is `None`.
    pub fn pass<R>(self, reason: R) -> Outcome<T>
    where
        R: Into<Option<Reason>>,
    {
        let verdict = self.chain.verdict(Flavor::Fail, reason.into());
        verdict.into_outcome(|| self.chain.into_guarded())
    }

    /// Resolves the chain without consuming it.
    ///
    /// Every call re-runs the predicates from the start, so the result only
    /// changes if a predicate does.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let chain = Outcome::condition(5).fail_when(|| { calls.set(calls.get() + 1); false }, "never");
    ///
    /// assert_eq!(chain.check(None), chain.check(None));
    /// assert_eq!(calls.get(), 2);
    /// ```
    pub fn check<R>(&self, reason: R) -> Outcome<T>
    where
        T: Clone,
        R: Into<Option<Reason>>,
    {
        let verdict = self.chain.verdict(Flavor::Fail, reason.into());
        verdict.into_outcome(|| self.chain.guarded().clone())
    }

    /// Returns the number of registered conditions. Never zero.
    #[inline]
    pub fn condition_count(&self) -> usize {
        self.chain.len()
    }
}
