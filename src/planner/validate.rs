//! Input validation for a planning run.

use std::collections::HashSet;

use crate::config::PlannerConfig;
use crate::error::ValidationError;
use crate::models::{Coordinate, CustomerDirectory, Order, Settings, Vehicle};

pub(super) fn validate(
    orders: &[Order],
    vehicles: &[Vehicle],
    customers: &CustomerDirectory,
    settings: &Settings,
    config: &PlannerConfig,
) -> Result<(), ValidationError> {
    config.validate()?;
    check_coordinate(settings.depot.location(), || "depot".to_string())?;
    check_setting("stopDurationMinutes", settings.stop_duration_minutes)?;
    check_setting("containerHandlingMinutes", settings.container_handling_minutes)?;
    if let Some(max) = settings.max_tour_duration_hours {
        check_setting("maxTourDurationHours", max)?;
    }

    let mut vehicle_ids = HashSet::new();
    for v in vehicles {
        if v.capacity() == 0 {
            return Err(ValidationError::ZeroCapacity {
                vehicle_id: v.id().to_string(),
            });
        }
        if !vehicle_ids.insert(v.id()) {
            return Err(ValidationError::DuplicateVehicle(v.id().to_string()));
        }
    }

    let mut order_ids = HashSet::new();
    for o in orders {
        if o.container_count() == 0 {
            return Err(ValidationError::ZeroContainers {
                order_id: o.id().to_string(),
            });
        }
        if !order_ids.insert(o.id()) {
            return Err(ValidationError::DuplicateOrder(o.id().to_string()));
        }
    }

    for c in customers.iter() {
        if let Some(location) = c.location() {
            check_coordinate(location, || format!("customer `{}`", c.id()))?;
        }
    }

    Ok(())
}

fn check_coordinate(c: Coordinate, context: impl FnOnce() -> String) -> Result<(), ValidationError> {
    if c.is_valid() {
        return Ok(());
    }
    Err(ValidationError::InvalidCoordinate {
        context: context(),
        latitude: c.latitude,
        longitude: c.longitude,
    })
}

fn check_setting(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidSetting { name, value })
    }
}
