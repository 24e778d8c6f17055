use super::Outcome;
use crate::types::Rejection;
use core::fmt::{self, Display};

impl<T> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_valid() { "pass" } else { "fail" })?;
        if !self.reason.is_empty() {
            write!(f, ": {}", self.reason)?;
        }
        Ok(())
    }
}

impl<T> From<Outcome<T>> for Result<T, Rejection> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.value
    }
}
