//! Tours and tour stops.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{OrderStatus, OrderStatusUpdate};
use crate::error::TransitionError;
use crate::evaluation::TourStatistics;

/// A single delivery visit within a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourStop {
    /// Order delivered at this stop.
    pub order_id: String,
    /// 1-based position in visiting order.
    pub sequence: u32,
    /// Estimated arrival, when working hours are known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<NaiveTime>,
}

/// Execution state of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourStatus {
    /// Freshly generated.
    Planned,
    /// On the road.
    InProgress,
    /// All stops delivered.
    Completed,
}

/// Which capacity ceiling a tour was packed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Packed within the vehicle's capacity.
    Nominal,
    /// Packed in the overflow pass against the relaxed ceiling.
    Overloaded,
}

/// A sequenced delivery tour for one vehicle on one date.
///
/// Distance and duration are derived when the tour is built and are not
/// rounded; see [`TourStatistics::rounded`](crate::evaluation::TourStatistics::rounded)
/// for display values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    id: String,
    vehicle_id: String,
    stops: Vec<TourStop>,
    date: NaiveDate,
    status: TourStatus,
    total_distance: f64,
    estimated_duration: f64,
    total_containers: u32,
    capacity: u32,
    load_mode: LoadMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl Tour {
    /// Creates a planned tour. Stops must already carry sequence numbers 1..=N.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn planned(
        vehicle_id: &str,
        date: NaiveDate,
        stops: Vec<TourStop>,
        total_distance: f64,
        estimated_duration: f64,
        total_containers: u32,
        capacity: u32,
        load_mode: LoadMode,
    ) -> Self {
        Self {
            id: format!("tour-{vehicle_id}-{date}"),
            vehicle_id: vehicle_id.to_string(),
            stops,
            date,
            status: TourStatus::Planned,
            total_distance,
            estimated_duration,
            total_containers,
            capacity,
            load_mode,
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Tour ID (`tour-{vehicle}-{date}`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vehicle driving this tour.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[TourStop] {
        &self.stops
    }

    /// Order IDs in visiting order.
    pub fn order_ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.order_id.as_str()).collect()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Delivery date served.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Current status.
    pub fn status(&self) -> TourStatus {
        self.status
    }

    /// Round-trip distance in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated duration in hours.
    pub fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// Distance and duration; call [`TourStatistics::rounded`] for display.
    pub fn statistics(&self) -> TourStatistics {
        TourStatistics {
            total_distance: self.total_distance,
            estimated_duration: self.estimated_duration,
        }
    }

    /// Containers loaded.
    pub fn total_containers(&self) -> u32 {
        self.total_containers
    }

    /// Nominal capacity of the vehicle.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Capacity ceiling the tour was packed against.
    pub fn load_mode(&self) -> LoadMode {
        self.load_mode
    }

    /// Returns `true` if the load exceeds the vehicle's nominal capacity.
    pub fn is_overloaded(&self) -> bool {
        self.total_containers > self.capacity
    }

    /// Display color, if the caller assigned one.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Moves the tour to a new status.
    ///
    /// Allowed: planned → in-progress, planned → completed,
    /// in-progress → completed. Completing a tour returns updates that mark
    /// its orders completed.
    pub fn transition(&mut self, to: TourStatus) -> Result<Vec<OrderStatusUpdate>, TransitionError> {
        use TourStatus::*;
        match (self.status, to) {
            (Planned, InProgress) => {
                self.status = to;
                Ok(Vec::new())
            }
            (Planned, Completed) | (InProgress, Completed) => {
                self.status = to;
                Ok(self.updates(OrderStatus::Completed))
            }
            (from, to) => Err(TransitionError { from, to }),
        }
    }

    /// Dissolves the tour, returning updates that put its orders back to pending.
    ///
    /// A completed tour releases nothing; its orders stay completed.
    pub fn release(self) -> Vec<OrderStatusUpdate> {
        if self.status == TourStatus::Completed {
            return Vec::new();
        }
        self.updates(OrderStatus::Pending)
    }

    pub(crate) fn updates(&self, status: OrderStatus) -> Vec<OrderStatusUpdate> {
        self.stops
            .iter()
            .map(|s| OrderStatusUpdate::new(s.order_id.clone(), status))
            .collect()
    }
}
