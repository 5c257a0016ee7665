//! Tour planning entry point.
//!
//! [`TourBuilder`] groups pending orders by delivery date, packs each group
//! onto the available vehicles, sequences every vehicle's stops, and returns
//! a [`TourPlan`] with tours, unassigned orders, and [`Diagnostic`]s.

mod builder;
mod plan;
mod request;
mod validate;

#[cfg(test)]
mod properties;

pub use builder::TourBuilder;
pub use plan::{Diagnostic, Severity, TourPlan, UnassignedOrder};
pub use request::{PlanRequest, PlanResponse};
