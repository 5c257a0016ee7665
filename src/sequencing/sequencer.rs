//! Nearest-neighbor construction followed by 2-opt improvement.

use tracing::warn;

use crate::constructive::nearest_neighbor_sequence;
use crate::distance::DistanceMatrix;
use crate::evaluation::route_distance;
use crate::local_search::{two_opt_improve, ImprovementBudget};
use crate::models::{Coordinate, CustomerDirectory, Order};

/// A sequenced set of orders.
#[derive(Debug, Clone)]
pub struct SequencedRoute<'o> {
    /// Orders in visiting order.
    pub orders: Vec<&'o Order>,
    /// Resolved position of each order, parallel to `orders`.
    pub coordinates: Vec<Coordinate>,
    /// Round-trip distance of the final sequence in kilometers.
    pub distance: f64,
    /// Round-trip distance of the nearest-neighbor sequence before 2-opt.
    pub construction_distance: f64,
    /// 2-opt passes performed.
    pub passes: usize,
    /// `false` if 2-opt stopped on its budget rather than at a local optimum.
    pub converged: bool,
    /// Orders whose customer position was missing and replaced by the fallback.
    pub fallback_orders: Vec<&'o str>,
}

/// Orders one vehicle's stops into a low-cost visiting sequence.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_tourplan::models::{Coordinate, Customer, CustomerDirectory, Order};
/// use u_tourplan::sequencing::RouteSequencer;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
/// let customers: CustomerDirectory = vec![
///     Customer::new("far", "Far").with_location(Coordinate::new(52.60, 13.40)),
///     Customer::new("near", "Near").with_location(Coordinate::new(52.53, 13.40)),
/// ]
/// .into_iter()
/// .collect();
/// let orders = vec![Order::new("o1", "far", 1, date), Order::new("o2", "near", 1, date)];
///
/// let sequencer = RouteSequencer::new(Coordinate::new(52.52, 13.40), &customers);
/// let refs: Vec<&Order> = orders.iter().collect();
/// let route = sequencer.sequence(&refs);
/// let ids: Vec<&str> = route.orders.iter().map(|o| o.id()).collect();
/// assert_eq!(ids, vec!["o2", "o1"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSequencer<'a> {
    depot: Coordinate,
    customers: &'a CustomerDirectory,
    fallback: Coordinate,
    budget: ImprovementBudget,
}

impl<'a> RouteSequencer<'a> {
    /// Creates a sequencer with the default fallback position and budget.
    pub fn new(depot: Coordinate, customers: &'a CustomerDirectory) -> Self {
        let defaults = crate::config::PlannerConfig::default();
        Self {
            depot,
            customers,
            fallback: defaults.fallback_coordinate,
            budget: defaults.improvement,
        }
    }

    /// Sets the position used for customers without coordinates.
    pub fn with_fallback(mut self, fallback: Coordinate) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the 2-opt budget.
    pub fn with_budget(mut self, budget: ImprovementBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Depot position.
    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    /// Resolves an order's position, returning `true` if the fallback was used.
    pub fn locate(&self, order: &Order) -> (Coordinate, bool) {
        match self.customers.locate(order.customer_id()) {
            Some(c) => (c, false),
            None => (self.fallback, true),
        }
    }

    /// Sequences `orders`: nearest-neighbor from the depot, then 2-opt.
    ///
    /// Returns a permutation of the input; empty input yields an empty route.
    pub fn sequence<'o>(&self, orders: &[&'o Order]) -> SequencedRoute<'o> {
        let mut points = Vec::with_capacity(orders.len() + 1);
        points.push(self.depot);
        let mut fallback_orders = Vec::new();
        for &order in orders {
            let (coordinate, fallback) = self.locate(order);
            if fallback {
                warn!(
                    order_id = order.id(),
                    customer_id = order.customer_id(),
                    "customer has no coordinates, using fallback position"
                );
                fallback_orders.push(order.id());
            }
            points.push(coordinate);
        }

        let distances = DistanceMatrix::from_coordinates(&points);
        let stops: Vec<usize> = (1..points.len()).collect();
        let initial = nearest_neighbor_sequence(&stops, 0, &distances);
        let construction_distance = route_distance(&initial, 0, &distances);
        let outcome = two_opt_improve(&initial, 0, &distances, &self.budget);

        SequencedRoute {
            orders: outcome.route.iter().map(|&i| orders[i - 1]).collect(),
            coordinates: outcome.route.iter().map(|&i| points[i]).collect(),
            distance: outcome.distance,
            construction_distance,
            passes: outcome.passes,
            converged: outcome.converged,
            fallback_orders,
        }
    }
}
