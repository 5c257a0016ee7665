//! # u-tourplan
//!
//! Delivery tour planning for a single depot: capacity-constrained order
//! assignment, nearest-neighbor construction, and 2-opt sequencing over
//! great-circle distances.
//!
//! ## Modules
//!
//! - [`models`] - Domain types (Order, Customer, Vehicle, Settings, Tour)
//! - [`distance`] - Haversine distance and distance matrix
//! - [`evaluation`] - Route distance, duration, and arrival estimates
//! - [`constructive`] - Nearest-neighbor construction
//! - [`local_search`] - 2-opt improvement with a pass/time budget
//! - [`sequencing`] - Stop sequencing for one vehicle
//! - [`assignment`] - Priority-ordered capacity packing with an overflow pass
//! - [`planner`] - Tour generation per delivery date, diagnostics, JSON I/O
//! - [`config`] - Planner tunables
//! - [`error`] - Validation and lifecycle errors

pub mod assignment;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod planner;
pub mod sequencing;
