//! Tour duration and arrival estimates.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::models::Settings;

/// Distance and duration of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourStatistics {
    /// Round-trip distance in kilometers.
    pub total_distance: f64,
    /// Driving plus handling time in hours.
    pub estimated_duration: f64,
}

impl TourStatistics {
    /// Rounds both values to one decimal place for display.
    ///
    /// ```
    /// use u_tourplan::evaluation::TourStatistics;
    ///
    /// let s = TourStatistics { total_distance: 12.345, estimated_duration: 1.96 };
    /// assert_eq!(s.rounded(), TourStatistics { total_distance: 12.3, estimated_duration: 2.0 });
    /// ```
    pub fn rounded(&self) -> Self {
        Self {
            total_distance: round_tenth(self.total_distance),
            estimated_duration: round_tenth(self.estimated_duration),
        }
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Converts distance and handling work into time.
///
/// ```text
/// hours = distance / speed + stops * stop_min / 60 + containers * container_min / 60
/// ```
///
/// # Examples
///
/// ```
/// use u_tourplan::evaluation::TimingModel;
///
/// let t = TimingModel::new(40.0, 15.0, 5.0);
/// // 40 km at 40 km/h, 2 stops * 15 min, 6 containers * 5 min
/// let hours = t.duration_hours(40.0, 2, 6);
/// assert!((hours - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingModel {
    average_speed_kmh: f64,
    stop_minutes: f64,
    container_minutes: f64,
}

impl TimingModel {
    /// Creates a timing model.
    pub fn new(average_speed_kmh: f64, stop_minutes: f64, container_minutes: f64) -> Self {
        Self {
            average_speed_kmh,
            stop_minutes,
            container_minutes,
        }
    }

    /// Builds a timing model from settings and an average speed.
    pub fn from_settings(settings: &Settings, average_speed_kmh: f64) -> Self {
        Self::new(
            average_speed_kmh,
            settings.stop_duration_minutes,
            settings.container_handling_minutes,
        )
    }

    /// Driving hours for a distance.
    pub fn driving_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh
    }

    /// Handling hours at one stop with the given number of containers.
    pub fn handling_hours(&self, containers: u32) -> f64 {
        (self.stop_minutes + f64::from(containers) * self.container_minutes) / 60.0
    }

    /// Total estimated hours for a tour.
    pub fn duration_hours(&self, distance_km: f64, stops: usize, containers: u32) -> f64 {
        self.driving_hours(distance_km)
            + stops as f64 * (self.stop_minutes / 60.0)
            + f64::from(containers) * (self.container_minutes / 60.0)
    }

    /// Estimates arrival at each stop when leaving the depot at `start`.
    ///
    /// `legs[i]` is the distance driven to reach stop `i`; `containers[i]` is
    /// unloaded there before driving on.
    pub fn arrivals(&self, start: NaiveTime, legs: &[f64], containers: &[u32]) -> Vec<NaiveTime> {
        let mut elapsed_hours = 0.0;
        legs.iter()
            .zip(containers)
            .map(|(&leg, &count)| {
                elapsed_hours += self.driving_hours(leg);
                let arrival = offset(start, elapsed_hours);
                elapsed_hours += self.handling_hours(count);
                arrival
            })
            .collect()
    }
}

fn offset(start: NaiveTime, hours: f64) -> NaiveTime {
    let secs = (hours * 3600.0).round() as i64;
    let delta = TimeDelta::try_seconds(secs).unwrap_or_else(TimeDelta::zero);
    start.overflowing_add_signed(delta).0
}
