//! Visiting-order construction for one vehicle's orders.
//!
//! [`RouteSequencer`] resolves each order's customer position, builds a
//! nearest-neighbor sequence from the depot, and improves it with 2-opt.

mod sequencer;

pub use sequencer::{RouteSequencer, SequencedRoute};
