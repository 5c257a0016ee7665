//! Local search for improving a single vehicle's visiting sequence.
//!
//! - [`two_opt_improve`] - Intra-route 2-opt segment reversal under an
//!   [`ImprovementBudget`]

mod two_opt;

pub use two_opt::{two_opt_improve, ImprovementBudget, ImprovementOutcome};
