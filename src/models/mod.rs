//! Domain model types for delivery tour planning.
//!
//! Customers carry optional coordinates, orders reference customers by id,
//! vehicles carry a container capacity, and tours own an ordered list of
//! stops. Depot and handling times live in [`Settings`].

mod customer;
mod order;
mod settings;
mod tour;
mod vehicle;

pub use customer::{Coordinate, Customer, CustomerDirectory};
pub use order::{apply_status_updates, Order, OrderStatus, OrderStatusUpdate, Priority};
pub use settings::{Depot, Settings, WorkingHours};
pub use tour::{LoadMode, Tour, TourStatus, TourStop};
pub use vehicle::{Vehicle, VehicleStatus};
