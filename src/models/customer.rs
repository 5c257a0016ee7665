//! Coordinates, customers, and customer lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// A geographic position in degrees.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let potsdam = Coordinate::new(52.3906, 13.0645);
/// let d = berlin.distance_to(&potsdam);
/// assert!(d > 26.0 && d < 28.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, `-90..=90`.
    pub latitude: f64,
    /// Longitude in degrees, `-180..=180`.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another coordinate in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine(*self, *other)
    }
}

/// A delivery customer.
///
/// Coordinates are optional; planners substitute a configured fallback
/// position when they are missing.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::{Coordinate, Customer};
///
/// let c = Customer::new("c1", "Bakery").with_location(Coordinate::new(52.5, 13.4));
/// assert_eq!(c.id(), "c1");
/// assert!(c.location().is_some());
/// assert!(Customer::new("c2", "Kiosk").location().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

impl Customer {
    /// Creates a customer without coordinates.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Sets the customer's position.
    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.latitude = Some(location.latitude);
        self.longitude = Some(location.longitude);
        self
    }

    /// Customer ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position, if both latitude and longitude are known.
    pub fn location(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}

/// Customer lookup by id.
///
/// Orders hold only a customer id; positions are resolved here at planning
/// time so that edits to a customer are always seen by the next run.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: HashMap<String, Customer>,
}

impl CustomerDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a customer.
    pub fn insert(&mut self, customer: Customer) {
        self.customers.insert(customer.id.clone(), customer);
    }

    /// Returns the customer with the given id.
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Returns the customer's position, if the customer exists and has one.
    pub fn locate(&self, id: &str) -> Option<Coordinate> {
        self.get(id).and_then(Customer::location)
    }

    /// Number of customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Iterates over all customers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }
}

impl FromIterator<Customer> for CustomerDirectory {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut dir = Self::new();
        for c in iter {
            dir.insert(c);
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        assert!(Coordinate::new(52.52, 13.405).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_coordinate_distance_zero() {
        let a = Coordinate::new(48.0, 11.0);
        assert!(a.distance_to(&a).abs() < 1e-12);
    }

    #[test]
    fn test_customer_partial_location() {
        let c: Customer =
            serde_json::from_str(r#"{"id":"c1","name":"x","latitude":52.0}"#).expect("valid");
        assert!(c.location().is_none());
    }

    #[test]
    fn test_directory_locate() {
        let dir: CustomerDirectory = vec![
            Customer::new("a", "A").with_location(Coordinate::new(1.0, 2.0)),
            Customer::new("b", "B"),
        ]
        .into_iter()
        .collect();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.locate("a"), Some(Coordinate::new(1.0, 2.0)));
        assert_eq!(dir.locate("b"), None);
        assert_eq!(dir.locate("zzz"), None);
    }

    #[test]
    fn test_directory_insert_replaces() {
        let mut dir = CustomerDirectory::new();
        dir.insert(Customer::new("a", "Old"));
        dir.insert(Customer::new("a", "New"));
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("a").map(Customer::name), Some("New"));
    }
}
