//! Fluent pass/fail guard chains that resolve to a single [`Outcome`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Fail-chain
//!
//! The first `fail_when` predicate that holds fails the outcome; later
//! predicates are never evaluated.
//!
//! ```
//! use outcome_rail::{Outcome, Reason};
//!
//! let password = "hunter2";
//! let outcome = Outcome::condition(password)
//!     .fail_when(|| password.len() < 8, "password too short")
//!     .fail_when(|| !password.chars().any(|c| c.is_ascii_digit()), "password needs a digit")
//!     .pass(Reason::new("password accepted"));
//!
//! assert_eq!(outcome, Outcome::fail(["password too short"]));
//! ```
//!
//! ## Pass-chain
//!
//! The first `pass_when` predicate that holds passes the outcome with that
//! condition's reason.
//!
//! ```
//! use outcome_rail::{Outcome, Reason};
//!
//! let email = "ops@example.com";
//! let outcome = Outcome::condition(email)
//!     .pass_when(|| email.ends_with("@example.com"), "internal address")
//!     .pass_when(|| email.ends_with("@partner.org"), "partner address")
//!     .fail(Reason::new("unknown domain"));
//!
//! assert_eq!(outcome, Outcome::pass(email, ["internal address"]));
//! ```
//!
//! ## Propagating a rejection
//!
//! ```
//! use outcome_rail::{Outcome, Rejection};
//!
//! fn withdraw(balance: u64, amount: u64) -> Result<u64, Rejection> {
//!     let amount = Outcome::condition(amount)
//!         .fail_when(|| amount == 0, "amount must be positive")
//!         .fail_when(|| amount > balance, "insufficient funds")
//!         .pass(None)
//!         .into_result()?;
//!     Ok(balance - amount)
//! }
//!
//! assert_eq!(withdraw(100, 30), Ok(70));
//! assert_eq!(withdraw(100, 300).unwrap_err().to_string(), "insufficient funds");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Condition chains and their flavored builders
pub mod condition;
/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Macros for building reasons
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits for reasons
pub mod traits;
/// Outcome, Reason, and Rejection types
pub mod types;

pub use condition::{ConditionBuilder, FailChain, PassChain};
pub use traits::IntoReason;
pub use types::{Outcome, Reason, Rejection, REASON_SEPARATOR};
