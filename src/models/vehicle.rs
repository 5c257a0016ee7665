//! Vehicle type with container capacity.

use serde::{Deserialize, Serialize};

/// Operational state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    /// Can be planned.
    Available,
    /// Withdrawn from service.
    OutOfService,
    /// In the workshop.
    InRepair,
}

/// A delivery vehicle.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Vehicle, VehicleStatus};
///
/// let v = Vehicle::new("v1", 12);
/// assert_eq!(v.id(), "v1");
/// assert_eq!(v.capacity(), 12);
/// assert!(v.is_available());
/// assert!(!v.with_status(VehicleStatus::InRepair).is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    id: String,
    #[serde(default)]
    name: String,
    capacity: u32,
    #[serde(default = "default_status")]
    status: VehicleStatus,
}

fn default_status() -> VehicleStatus {
    VehicleStatus::Available
}

impl Vehicle {
    /// Creates an available vehicle with the given ID and container capacity.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            status: VehicleStatus::Available,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum containers per tour.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Operational status.
    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Returns `true` if the vehicle takes part in planning.
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_builder() {
        let v = Vehicle::new("v7", 20)
            .with_name("Sprinter")
            .with_status(VehicleStatus::OutOfService);
        assert_eq!(v.id(), "v7");
        assert_eq!(v.name(), "Sprinter");
        assert_eq!(v.capacity(), 20);
        assert_eq!(v.status(), VehicleStatus::OutOfService);
        assert!(!v.is_available());
    }

    #[test]
    fn test_vehicle_status_wire_format() {
        let v: Vehicle =
            serde_json::from_str(r#"{"id":"v1","capacity":8,"status":"in-repair"}"#).expect("valid");
        assert_eq!(v.status(), VehicleStatus::InRepair);
        let json = serde_json::to_string(&VehicleStatus::OutOfService).expect("serializable");
        assert_eq!(json, r#""out-of-service""#);
    }
}
