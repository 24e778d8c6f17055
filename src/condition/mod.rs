//! Fluent condition chains that resolve to an [`Outcome`](crate::Outcome).
//!
//! A chain starts neutral ([`ConditionBuilder`]) and is committed to one of two
//! flavors by its first condition:
//!
//! - [`FailChain`] - fail fast on the first `fail_when` predicate that holds, otherwise pass
//! - [`PassChain`] - pass fast on the first `pass_when` predicate that holds, otherwise fail
//!
//! Predicates are evaluated lazily and in order when the chain is resolved.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, Reason};
//!
//! let stock = 0;
//! let backorder = false;
//!
//! let outcome = Outcome::condition("sku-42")
//!     .fail_when(|| stock == 0 && !backorder, "out of stock")
//!     .pass(Reason::new("available"));
//!
//! assert!(outcome.is_invalid());
//! assert_eq!(outcome.reason(), "out of stock");
//! ```
pub mod builder;
pub(crate) mod core;
pub mod fail_chain;
pub mod pass_chain;

pub use self::builder::ConditionBuilder;
pub use self::fail_chain::FailChain;
pub use self::pass_chain::PassChain;
