//! Error types.
//!
//! Only malformed input is an error. Business outcomes such as empty input or
//! orders that fit no vehicle are reported as [`Diagnostic`](crate::planner::Diagnostic)s.

use thiserror::Error;

use crate::models::TourStatus;

/// Input that cannot be planned.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A vehicle with zero capacity.
    #[error("vehicle `{vehicle_id}` has zero capacity")]
    ZeroCapacity {
        /// Offending vehicle.
        vehicle_id: String,
    },
    /// An order that carries no containers.
    #[error("order `{order_id}` has zero containers")]
    ZeroContainers {
        /// Offending order.
        order_id: String,
    },
    /// Latitude/longitude outside the valid range or not finite.
    #[error("invalid coordinate for {context}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Where the coordinate came from (depot, customer id, fallback).
        context: String,
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
    /// The same order id appears twice.
    #[error("duplicate order id `{0}`")]
    DuplicateOrder(String),
    /// The same vehicle id appears twice.
    #[error("duplicate vehicle id `{0}`")]
    DuplicateVehicle(String),
    /// Average speed must be strictly positive.
    #[error("average speed must be positive, got {0} km/h")]
    NonPositiveSpeed(f64),
    /// Overload factor must be at least 1.0.
    #[error("overload factor must be >= 1.0, got {0}")]
    InvalidOverloadFactor(f64),
    /// Durations in settings must be finite and non-negative.
    #[error("setting `{name}` must be finite and non-negative, got {value}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Request or configuration could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A tour status change that the lifecycle does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tour cannot move from {from:?} to {to:?}")]
pub struct TransitionError {
    /// Current status.
    pub from: TourStatus,
    /// Requested status.
    pub to: TourStatus,
}
