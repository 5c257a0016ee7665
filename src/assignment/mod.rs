//! Assignment of orders to vehicles.
//!
//! - [`CapacityAssigner`] - Priority-ordered greedy packing with a relaxed
//!   overflow pass

mod capacity;

pub use capacity::{Assignment, CapacityAssigner, VehicleBatch};
