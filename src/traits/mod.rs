//! Conversion traits used across the builder API.
//!
//! - [`IntoReason`]: accepted wherever a reason is attached to a condition or outcome

pub mod into_reason;

pub use into_reason::IntoReason;
