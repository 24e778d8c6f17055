use crate::traits::IntoReason;
use crate::types::alloc_type::Box;
use crate::types::{Outcome, Reason};
use smallvec::SmallVec;

/// Which short-circuit policy a chain follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flavor {
    Fail,
    Pass,
}

impl Flavor {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Flavor::Fail => "fail_when",
            Flavor::Pass => "pass_when",
        }
    }
}

/// A predicate paired with the reason reported when it holds.
pub(crate) struct Condition<'a> {
    predicate: Box<dyn Fn() -> bool + 'a>,
    reason: Reason,
}

impl<'a> Condition<'a> {
    #[inline]
    pub(crate) fn new<F, R>(predicate: F, reason: R) -> Self
    where
        F: Fn() -> bool + 'a,
        R: IntoReason,
    {
        Self { predicate: Box::new(predicate), reason: reason.into_reason() }
    }

    #[inline]
    fn holds(&self) -> bool {
        (self.predicate)()
    }
}

/// Inline storage for the first few conditions; longer chains spill to the heap.
pub(crate) type ConditionVec<'a> = SmallVec<[Condition<'a>; 4]>;

/// Guarded value plus its ordered conditions. Shared by both flavored builders.
pub(crate) struct Chain<'a, T> {
    guarded: T,
    conditions: ConditionVec<'a>,
}

impl<'a, T> Chain<'a, T> {
    #[inline]
    pub(crate) fn new(guarded: T, first: Condition<'a>) -> Self {
        let mut conditions = ConditionVec::new();
        conditions.push(first);
        Self { guarded, conditions }
    }

    #[inline]
    pub(crate) fn push(&mut self, condition: Condition<'a>) {
        self.conditions.push(condition);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.conditions.len()
    }

    #[inline]
    pub(crate) fn guarded(&self) -> &T {
        &self.guarded
    }

    #[inline]
    pub(crate) fn into_guarded(self) -> T {
        self.guarded
    }

    /// Runs predicates in insertion order and stops at the first that holds.
    ///
    /// Predicates after the match are never invoked.
    fn first_match(&self, flavor: Flavor) -> Option<Reason> {
        let (index, condition) =
            self.conditions.iter().enumerate().find(|(_, condition)| condition.holds())?;
        record_match(flavor, index, &condition.reason);
        Some(condition.reason.clone())
    }

    /// Decides the chain. A matched condition decides in the flavor's
    /// direction with its own reason; otherwise the opposite is decided with
    /// `reason`, or [`Reason::NONE`] when it is `None`.
    pub(crate) fn verdict(&self, flavor: Flavor, reason: Option<Reason>) -> Verdict {
        match (flavor, self.first_match(flavor)) {
            (Flavor::Fail, Some(matched)) => Verdict::Fail(matched),
            (Flavor::Pass, Some(matched)) => Verdict::Pass(matched),
            (_, None) => {
                let reason = reason.unwrap_or(Reason::NONE);
                record_fallthrough(flavor, self.len(), &reason);
                match flavor {
                    Flavor::Fail => Verdict::Pass(reason),
                    Flavor::Pass => Verdict::Fail(reason),
                }
            },
        }
    }
}

/// A resolved chain before the guarded value is attached.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    Pass(Reason),
    Fail(Reason),
}

impl Verdict {
    /// Builds the outcome. `guarded` is only called on a pass.
    #[inline]
    pub(crate) fn into_outcome<T, G>(self, guarded: G) -> Outcome<T>
    where
        G: FnOnce() -> T,
    {
        match self {
            Verdict::Pass(reason) => Outcome::pass(guarded(), [reason]),
            Verdict::Fail(reason) => Outcome::fail([reason]),
        }
    }
}

#[inline]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn record_match(flavor: Flavor, index: usize, reason: &Reason) {
    #[cfg(feature = "tracing")]
    tracing::trace!(flavor = flavor.as_str(), index, reason = reason.as_str(), "condition matched");
}

#[inline]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn record_fallthrough(flavor: Flavor, evaluated: usize, reason: &Reason) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        flavor = flavor.as_str(),
        evaluated,
        reason = reason.as_str(),
        "no condition matched"
    );
}
