//! Outcome and reason types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Outcome, Reason};
//!
//! let outcome = Outcome::<()>::fail([Reason::new("no stock"), Reason::new("no backorder")]);
//! assert_eq!(outcome.reason(), "no stock, no backorder");
//! assert_eq!(outcome.to_string(), "fail: no stock, no backorder");
//! ```
pub mod alloc_type;
pub mod outcome;
pub mod reason;
pub mod rejection;

pub use outcome::*;
pub use reason::*;
pub use rejection::*;
