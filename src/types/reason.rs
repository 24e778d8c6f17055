use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Human-readable annotation explaining why an [`Outcome`](crate::Outcome) passed or failed.
///
/// A `Reason` is immutable once built. Static text is stored borrowed, so
/// reasons built from string literals never allocate.
///
/// # Examples
///
/// ```
/// use outcome_rail::Reason;
///
/// let reason = Reason::new("age below minimum");
/// assert_eq!(reason.to_string(), "age below minimum");
///
/// assert!(Reason::NONE.is_none());
/// assert_eq!(Reason::default(), Reason::NONE);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reason {
    text: Cow<'static, str>,
}

impl Reason {
    /// The empty reason, used wherever a reason is optional and omitted.
    pub const NONE: Reason = Reason { text: Cow::Borrowed("") };

    /// Creates a reason from any string-like value. Empty text is accepted.
    #[inline]
    pub fn new<S>(text: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self { text: text.into() }
    }

    /// Returns the reason text verbatim.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the text is empty, as it is for [`Reason::NONE`].
    #[inline]
    pub fn is_none(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the reason, returning its text.
    #[inline]
    pub fn into_text(self) -> Cow<'static, str> {
        self.text
    }
}

impl Default for Reason {
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Reason {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&'static str> for Reason {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Reason {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Cow<'static, str>> for Reason {
    #[inline]
    fn from(text: Cow<'static, str>) -> Self {
        Self { text }
    }
}
