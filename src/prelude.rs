//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let quantity = 3;
//! let outcome = Outcome::condition(quantity)
//!     .fail_when(|| quantity == 0, "quantity must be positive")
//!     .fail_when(|| quantity > 100, reason!("quantity {quantity} exceeds 100"))
//!     .pass(Reason::new("quantity accepted"));
//!
//! assert_eq!(outcome, Outcome::pass(3, ["quantity accepted"]));
//! ```

// Macros
pub use crate::{reason, reasons};

// Core types
pub use crate::condition::{ConditionBuilder, FailChain, PassChain};
pub use crate::types::{Outcome, Reason, Rejection};

// Traits
pub use crate::traits::IntoReason;
