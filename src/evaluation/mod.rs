//! Route cost and tour statistics.
//!
//! - [`route_distance`] - Round-trip distance over matrix indices
//! - [`RouteCostEvaluator`] - Round-trip distance over coordinates
//! - [`TimingModel`] - Duration and arrival estimates from handling times

mod cost;
mod statistics;

pub use cost::{route_distance, RouteCostEvaluator};
pub use statistics::{TimingModel, TourStatistics};
