//! Capacity-constrained order assignment.
//!
//! # Algorithm
//!
//! 1. Sort orders by priority (high first), then by container count (largest
//!    first). The sort is stable.
//! 2. **Nominal pass**: for each vehicle in input order, scan the remaining
//!    pool from its tail to its head and take every order that still fits
//!    within the vehicle's capacity.
//! 3. **Overflow pass**: if orders remain, repeat the scan for the vehicles
//!    that received nothing in the nominal pass, against a ceiling of
//!    `floor(capacity * overload_factor)`.
//!
//! Orders left after both passes are returned as unassigned.
//!
//! # Complexity
//!
//! O(n log n + m·n) for n orders and m vehicles.

use crate::models::{LoadMode, Order, Vehicle};

/// Orders packed onto one vehicle, before sequencing.
#[derive(Debug, Clone)]
pub struct VehicleBatch<'a> {
    /// Vehicle receiving the orders.
    pub vehicle: &'a Vehicle,
    /// Orders in the order they were packed.
    pub orders: Vec<&'a Order>,
    /// Total containers.
    pub load: u32,
    /// Capacity ceiling used while packing.
    pub ceiling: u32,
    /// Which pass produced the batch.
    pub mode: LoadMode,
}

/// Result of [`CapacityAssigner::assign`].
#[derive(Debug, Clone, Default)]
pub struct Assignment<'a> {
    /// Non-empty batches, nominal pass first.
    pub batches: Vec<VehicleBatch<'a>>,
    /// Orders that fit no vehicle even at the relaxed ceiling.
    pub unassigned: Vec<&'a Order>,
}

/// Packs orders onto vehicles by priority and size.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_tourplan::models::{LoadMode, Order, Vehicle};
/// use u_tourplan::assignment::CapacityAssigner;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
/// let orders = vec![
///     Order::new("o1", "c1", 5, date),
///     Order::new("o2", "c2", 3, date),
///     Order::new("o3", "c3", 4, date),
/// ];
/// let vehicles = vec![Vehicle::new("v1", 10), Vehicle::new("v2", 5)];
///
/// let order_refs: Vec<&Order> = orders.iter().collect();
/// let vehicle_refs: Vec<&Vehicle> = vehicles.iter().collect();
/// let assignment = CapacityAssigner::new().assign(&order_refs, &vehicle_refs);
///
/// // v1 takes the 3 and the 4; the 5 no longer fits and goes to v2.
/// assert_eq!(assignment.batches.len(), 2);
/// assert_eq!(assignment.batches[0].load, 7);
/// assert_eq!(assignment.batches[1].load, 5);
/// assert_eq!(assignment.batches[1].mode, LoadMode::Nominal);
/// assert!(assignment.unassigned.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityAssigner {
    overload_factor: f64,
}

impl Default for CapacityAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl CapacityAssigner {
    /// Creates an assigner allowing 20% overload in the overflow pass.
    pub fn new() -> Self {
        Self {
            overload_factor: 1.2,
        }
    }

    /// Sets the overflow-pass capacity multiplier.
    pub fn with_overload_factor(mut self, factor: f64) -> Self {
        self.overload_factor = factor;
        self
    }

    /// Overflow-pass ceiling for a vehicle capacity.
    pub fn relaxed_capacity(&self, capacity: u32) -> u32 {
        let relaxed = (f64::from(capacity) * self.overload_factor).floor();
        if relaxed >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            relaxed as u32
        }
    }

    /// Sorts orders by descending priority, then descending container count.
    pub fn prioritize<'a>(orders: &[&'a Order]) -> Vec<&'a Order> {
        let mut sorted = orders.to_vec();
        sorted.sort_by(|a, b| {
            b.priority()
                .weight()
                .cmp(&a.priority().weight())
                .then_with(|| b.container_count().cmp(&a.container_count()))
        });
        sorted
    }

    /// Partitions `orders` across `vehicles`.
    ///
    /// Vehicles are used in the given order; a vehicle that receives nothing
    /// produces no batch. Inputs are not modified.
    pub fn assign<'a>(&self, orders: &[&'a Order], vehicles: &[&'a Vehicle]) -> Assignment<'a> {
        let mut pool = Self::prioritize(orders);
        let mut batches = Vec::new();
        let mut unused = Vec::new();

        for &vehicle in vehicles {
            let ceiling = vehicle.capacity();
            match pack(&mut pool, ceiling) {
                Some((taken, load)) => batches.push(VehicleBatch {
                    vehicle,
                    orders: taken,
                    load,
                    ceiling,
                    mode: LoadMode::Nominal,
                }),
                None => unused.push(vehicle),
            }
        }

        for vehicle in unused {
            if pool.is_empty() {
                break;
            }
            let ceiling = self.relaxed_capacity(vehicle.capacity());
            if let Some((taken, load)) = pack(&mut pool, ceiling) {
                batches.push(VehicleBatch {
                    vehicle,
                    orders: taken,
                    load,
                    ceiling,
                    mode: LoadMode::Overloaded,
                });
            }
        }

        Assignment {
            batches,
            unassigned: pool,
        }
    }
}

/// Takes every order that fits, scanning `pool` from tail to head.
///
/// Returns `None` if nothing fits.
fn pack<'a>(pool: &mut Vec<&'a Order>, ceiling: u32) -> Option<(Vec<&'a Order>, u32)> {
    let mut taken = Vec::new();
    let mut load: u64 = 0;
    for i in (0..pool.len()).rev() {
        let count = u64::from(pool[i].container_count());
        if load + count <= u64::from(ceiling) {
            taken.push(pool.remove(i));
            load += count;
        }
    }
    if taken.is_empty() {
        return None;
    }
    // load <= ceiling, so it fits in u32.
    Some((taken, load as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date")
    }

    fn order(id: &str, containers: u32, priority: Priority) -> Order {
        Order::new(id, format!("c-{id}"), containers, date()).with_priority(priority)
    }

    fn ids<'a>(orders: &[&'a Order]) -> Vec<&'a str> {
        orders.iter().map(|o| o.id()).collect()
    }

    #[test]
    fn test_prioritize() {
        let orders = vec![
            order("low-big", 9, Priority::Low),
            order("high-small", 1, Priority::High),
            order("med-2", 2, Priority::Medium),
            order("high-big", 5, Priority::High),
            order("med-2b", 2, Priority::Medium),
        ];
        let refs: Vec<&Order> = orders.iter().collect();
        let sorted = CapacityAssigner::prioritize(&refs);
        assert_eq!(
            ids(&sorted),
            vec!["high-big", "high-small", "med-2", "med-2b", "low-big"]
        );
    }

    #[test]
    fn test_relaxed_capacity() {
        let a = CapacityAssigner::new();
        assert_eq!(a.relaxed_capacity(10), 12);
        assert_eq!(a.relaxed_capacity(4), 4);
        assert_eq!(a.relaxed_capacity(5), 6);
        assert_eq!(a.with_overload_factor(1.0).relaxed_capacity(7), 7);
    }

    #[test]
    fn test_single_vehicle_fits_all() {
        let orders = vec![
            order("a", 5, Priority::Medium),
            order("b", 3, Priority::Medium),
            order("c", 4, Priority::Medium),
        ];
        let vehicles = vec![Vehicle::new("v1", 12)];
        let o: Vec<&Order> = orders.iter().collect();
        let v: Vec<&Vehicle> = vehicles.iter().collect();
        let result = CapacityAssigner::new().assign(&o, &v);
        assert_eq!(result.batches.len(), 1);
        assert_eq!(result.batches[0].load, 12);
        assert!(result.unassigned.is_empty());
        // Scanned from the tail of [a(5), c(4), b(3)].
        assert_eq!(ids(&result.batches[0].orders), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_single_vehicle_leaves_largest_unassigned() {
        let orders = vec![
            order("a", 5, Priority::Medium),
            order("b", 3, Priority::Medium),
            order("c", 4, Priority::Medium),
        ];
        let vehicles = vec![Vehicle::new("v1", 10)];
        let o: Vec<&Order> = orders.iter().collect();
        let v: Vec<&Vehicle> = vehicles.iter().collect();
        let result = CapacityAssigner::new().assign(&o, &v);
        assert_eq!(result.batches.len(), 1);
        assert_eq!(result.batches[0].load, 7);
        assert_eq!(ids(&result.unassigned), vec!["a"]);
    }

    #[test]
    fn test_overflow_pass_uses_idle_vehicle() {
        let orders = vec![
            order("a", 5, Priority::Medium),
            order("b", 5, Priority::Medium),
            order("big", 6, Priority::Medium),
        ];
        // v1 takes both 5s; v2 (cap 5) gets nothing nominally, then takes
        // the 6 against floor(5 * 1.2) = 6.
        let vehicles = vec![Vehicle::new("v1", 10), Vehicle::new("v2", 5)];
        let o: Vec<&Order> = orders.iter().collect();
        let v: Vec<&Vehicle> = vehicles.iter().collect();
        let result = CapacityAssigner::new().assign(&o, &v);
        assert_eq!(result.batches.len(), 2);
        assert_eq!(result.batches[0].mode, LoadMode::Nominal);
        assert_eq!(ids(&result.batches[0].orders), vec!["b", "a"]);
        let overflow = &result.batches[1];
        assert_eq!(overflow.vehicle.id(), "v2");
        assert_eq!(overflow.mode, LoadMode::Overloaded);
        assert_eq!(overflow.ceiling, 6);
        assert_eq!(overflow.load, 6);
        assert!(result.unassigned.is_empty());
    }

    #[test]
    fn test_used_vehicles_skip_overflow_pass() {
        let orders = vec![order("a", 4, Priority::High), order("b", 4, Priority::Low)];
        let vehicles = vec![Vehicle::new("v1", 4)];
        let o: Vec<&Order> = orders.iter().collect();
        let v: Vec<&Vehicle> = vehicles.iter().collect();
        let result = CapacityAssigner::new().assign(&o, &v);
        // Tail-first scan takes the low-priority order.
        assert_eq!(ids(&result.batches[0].orders), vec!["b"]);
        assert_eq!(ids(&result.unassigned), vec!["a"]);
    }

    #[test]
    fn test_empty_inputs() {
        let orders = vec![order("a", 1, Priority::Low)];
        let vehicles = vec![Vehicle::new("v1", 3)];
        let o: Vec<&Order> = orders.iter().collect();
        let v: Vec<&Vehicle> = vehicles.iter().collect();

        let none = CapacityAssigner::new().assign(&[], &v);
        assert!(none.batches.is_empty());
        assert!(none.unassigned.is_empty());

        let no_vehicles = CapacityAssigner::new().assign(&o, &[]);
        assert!(no_vehicles.batches.is_empty());
        assert_eq!(ids(&no_vehicles.unassigned), vec!["a"]);
    }

    #[test]
    fn test_inputs_not_reordered() {
        let orders = vec![order("a", 1, Priority::Low), order("b", 2, Priority::High)];
        let vehicles = vec![Vehicle::new("v1", 3)];
        let o: Vec<&Order> = orders.iter().collect();
        let v: Vec<&Vehicle> = vehicles.iter().collect();
        let _ = CapacityAssigner::new().assign(&o, &v);
        assert_eq!(ids(&o), vec!["a", "b"]);
    }
}
