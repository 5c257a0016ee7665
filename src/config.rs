//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::local_search::ImprovementBudget;
use crate::models::Coordinate;

/// Tunables for a planning run.
///
/// Every field has a default, so a partial JSON object is a valid config.
///
/// # Examples
///
/// ```
/// use u_tourplan::config::PlannerConfig;
///
/// let cfg = PlannerConfig::from_json_str(r#"{"averageSpeedKmh": 30}"#).unwrap();
/// assert_eq!(cfg.average_speed_kmh, 30.0);
/// assert_eq!(cfg.overload_factor, 1.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Position used for customers without coordinates.
    pub fallback_coordinate: Coordinate,
    /// Average driving speed for duration estimates.
    pub average_speed_kmh: f64,
    /// Capacity multiplier for the overflow pass (ceiling = floor(capacity * factor)).
    pub overload_factor: f64,
    /// Limits on 2-opt improvement per tour.
    pub improvement: ImprovementBudget,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fallback_coordinate: Coordinate::new(52.5200, 13.4050),
            average_speed_kmh: 40.0,
            overload_factor: 1.2,
            improvement: ImprovementBudget::default(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the fallback coordinate.
    pub fn with_fallback_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.fallback_coordinate = coordinate;
        self
    }

    /// Sets the improvement budget.
    pub fn with_improvement(mut self, budget: ImprovementBudget) -> Self {
        self.improvement = budget;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.fallback_coordinate.is_valid() {
            return Err(ValidationError::InvalidCoordinate {
                context: "fallback coordinate".to_string(),
                latitude: self.fallback_coordinate.latitude,
                longitude: self.fallback_coordinate.longitude,
            });
        }
        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(ValidationError::NonPositiveSpeed(self.average_speed_kmh));
        }
        if !(self.overload_factor.is_finite() && self.overload_factor >= 1.0) {
            return Err(ValidationError::InvalidOverloadFactor(self.overload_factor));
        }
        Ok(())
    }
}
