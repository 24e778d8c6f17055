//! Trait for converting types into a [`Reason`].
//!
//! Every builder method that takes a reason accepts `impl IntoReason`, so call
//! sites can pass string literals, owned strings or prebuilt reasons alike.
//!
//! # Implementations
//!
//! - `&'static str` - borrowed, no allocation
//! - `String` - owned text
//! - `Cow<'static, str>` - either of the above
//! - `Reason` - identity conversion (no-op)
//! - `&Reason` - clones the reason
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoReason, Reason};
//!
//! let r1 = "quota exceeded".into_reason();
//! let r2 = String::from("quota exceeded").into_reason();
//! let r3 = Reason::new("quota exceeded").into_reason();
//!
//! assert_eq!(r1, r2);
//! assert_eq!(r2, r3);
//! ```
use crate::types::alloc_type::{Cow, String};
use crate::types::reason::Reason;

/// Converts a type into a [`Reason`] for annotating an outcome.
///
/// # Implementing for Custom Types
///
/// ```
/// use outcome_rail::{traits::IntoReason, Reason};
///
/// enum Denial { Banned, Suspended }
///
/// impl IntoReason for Denial {
///     fn into_reason(self) -> Reason {
///         match self {
///             Denial::Banned => Reason::new("account banned"),
///             Denial::Suspended => Reason::new("account suspended"),
///         }
///     }
/// }
///
/// assert_eq!(Denial::Banned.into_reason().as_str(), "account banned");
/// assert_eq!(Denial::Suspended.into_reason().as_str(), "account suspended");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an outcome reason",
    label = "this type does not implement `IntoReason`",
    note = "implement `IntoReason` manually or build one with `reason!(..)`"
)]
pub trait IntoReason {
    /// Converts `self` into a [`Reason`].
    fn into_reason(self) -> Reason;
}

impl IntoReason for &'static str {
    #[inline]
    fn into_reason(self) -> Reason {
        Reason::new(self)
    }
}

impl IntoReason for String {
    #[inline]
    fn into_reason(self) -> Reason {
        Reason::new(self)
    }
}

impl IntoReason for Cow<'static, str> {
    #[inline]
    fn into_reason(self) -> Reason {
        Reason::from(self)
    }
}

impl IntoReason for Reason {
    /// Identity conversion for `Reason` (no-op).
    #[inline]
    fn into_reason(self) -> Reason {
        self
    }
}

impl IntoReason for &Reason {
    #[inline]
    fn into_reason(self) -> Reason {
        self.clone()
    }
}
