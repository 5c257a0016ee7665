//! Depot and handling-time settings.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// The start and end point of every tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depot {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Depot {
    /// Creates an unnamed depot at the given position.
    pub fn at(location: Coordinate) -> Self {
        Self {
            name: String::new(),
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    /// Depot position.
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Daily working window used to estimate arrival times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Departure from the depot.
    pub start: NaiveTime,
    /// End of the working day.
    pub end: NaiveTime,
}

/// Planning settings supplied by the surrounding application.
///
/// Only tour statistics read the handling times; sequencing uses the depot
/// position alone.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Settings};
///
/// let s = Settings::new(Coordinate::new(52.52, 13.405));
/// assert_eq!(s.stop_duration_minutes, 15.0);
/// assert_eq!(s.container_handling_minutes, 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Depot all tours start from and return to.
    pub depot: Depot,
    /// Fixed minutes spent at each stop.
    #[serde(default = "default_stop_duration", alias = "stopDuration")]
    pub stop_duration_minutes: f64,
    /// Minutes spent per container unloaded.
    #[serde(default = "default_container_handling", alias = "containerHandlingTime")]
    pub container_handling_minutes: f64,
    /// Working window; enables per-stop arrival estimates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
    /// Tours longer than this are reported.
    #[serde(default, alias = "maxTourDuration", skip_serializing_if = "Option::is_none")]
    pub max_tour_duration_hours: Option<f64>,
}

fn default_stop_duration() -> f64 {
    15.0
}

fn default_container_handling() -> f64 {
    5.0
}

impl Settings {
    /// Creates settings with default handling times for the given depot.
    pub fn new(depot: Coordinate) -> Self {
        Self {
            depot: Depot::at(depot),
            stop_duration_minutes: default_stop_duration(),
            container_handling_minutes: default_container_handling(),
            working_hours: None,
            max_tour_duration_hours: None,
        }
    }

    /// Sets the per-stop and per-container handling minutes.
    pub fn with_handling(mut self, stop_minutes: f64, container_minutes: f64) -> Self {
        self.stop_duration_minutes = stop_minutes;
        self.container_handling_minutes = container_minutes;
        self
    }

    /// Sets the working window.
    pub fn with_working_hours(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.working_hours = Some(WorkingHours { start, end });
        self
    }

    /// Sets the maximum tour duration in hours.
    pub fn with_max_tour_duration(mut self, hours: f64) -> Self {
        self.max_tour_duration_hours = Some(hours);
        self
    }
}
