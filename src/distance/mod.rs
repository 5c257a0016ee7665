//! Great-circle distance and distance matrices.
//!
//! Provides the Haversine distance between coordinates and a dense matrix
//! over a depot plus stop locations.

mod haversine;
mod matrix;

pub use haversine::{haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
