//! Tour construction across delivery dates.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::plan::{Diagnostic, TourPlan, UnassignedOrder};
use super::request::{PlanRequest, PlanResponse};
use super::validate::validate;
use crate::assignment::{CapacityAssigner, VehicleBatch};
use crate::config::PlannerConfig;
use crate::error::ValidationError;
use crate::evaluation::{RouteCostEvaluator, TimingModel};
use crate::models::{
    CustomerDirectory, LoadMode, Order, OrderStatus, Settings, Tour, TourStop, Vehicle,
};
use crate::sequencing::RouteSequencer;

/// Builds planned tours from orders, vehicles, and settings.
///
/// A run is a pure function of its inputs: nothing is mutated and the same
/// inputs always produce the same tours.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use u_tourplan::models::{Coordinate, Customer, CustomerDirectory, Order, Settings, Vehicle};
/// use u_tourplan::planner::TourBuilder;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
/// let customers: CustomerDirectory = vec![
///     Customer::new("c1", "Bakery").with_location(Coordinate::new(52.53, 13.41)),
///     Customer::new("c2", "Cafe").with_location(Coordinate::new(52.51, 13.39)),
/// ]
/// .into_iter()
/// .collect();
/// let orders = vec![Order::new("o1", "c1", 5, date), Order::new("o2", "c2", 3, date)];
/// let vehicles = vec![Vehicle::new("v1", 10)];
///
/// let builder = TourBuilder::new(Settings::new(Coordinate::new(52.52, 13.405)));
/// let plan = builder.build(&orders, &vehicles, &customers).unwrap();
///
/// assert_eq!(plan.tours().len(), 1);
/// assert_eq!(plan.tours()[0].len(), 2);
/// assert_eq!(plan.tours()[0].total_containers(), 8);
/// assert!(plan.unassigned().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TourBuilder {
    settings: Settings,
    config: PlannerConfig,
}

impl TourBuilder {
    /// Creates a builder with the default configuration.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            config: PlannerConfig::default(),
        }
    }

    /// Sets the planner configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a JSON-shaped request.
    pub fn plan_request(request: &PlanRequest) -> Result<PlanResponse, ValidationError> {
        let customers: CustomerDirectory = request.customers.iter().cloned().collect();
        let builder = Self::new(request.settings.clone()).with_config(request.config.clone());
        let plan = builder.build(&request.orders, &request.vehicles, &customers)?;
        Ok(PlanResponse::from(plan))
    }

    /// Generates tours for every delivery date present in `orders`.
    ///
    /// Only available vehicles and pending orders take part. Empty input is
    /// not an error: the plan is empty and carries a diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for zero capacities or container counts,
    /// duplicate ids, invalid coordinates, or unusable settings.
    pub fn build(
        &self,
        orders: &[Order],
        vehicles: &[Vehicle],
        customers: &CustomerDirectory,
    ) -> Result<TourPlan, ValidationError> {
        validate(orders, vehicles, customers, &self.settings, &self.config)?;
        let mut plan = TourPlan::new();

        let available: Vec<&Vehicle> = vehicles.iter().filter(|v| v.is_available()).collect();
        if available.is_empty() {
            warn!("no available vehicles for tour generation");
            plan.push_diagnostic(Diagnostic::NoAvailableVehicles);
            return Ok(plan);
        }

        let (pending, skipped): (Vec<&Order>, Vec<&Order>) =
            orders.iter().partition(|o| o.status() == OrderStatus::Pending);
        if !skipped.is_empty() {
            debug!(count = skipped.len(), "skipping orders that are not pending");
            plan.push_diagnostic(Diagnostic::SkippedNonPendingOrders {
                order_ids: skipped.iter().map(|o| o.id().to_string()).collect(),
            });
        }
        if pending.is_empty() {
            warn!("no orders to process for tour generation");
            plan.push_diagnostic(Diagnostic::NoOrders);
            return Ok(plan);
        }

        let mut by_date: BTreeMap<NaiveDate, Vec<&Order>> = BTreeMap::new();
        for order in pending {
            by_date.entry(order.delivery_date()).or_default().push(order);
        }

        let assigner = CapacityAssigner::new().with_overload_factor(self.config.overload_factor);
        let sequencer = RouteSequencer::new(self.settings.depot.location(), customers)
            .with_fallback(self.config.fallback_coordinate)
            .with_budget(self.config.improvement);

        for (date, group) in by_date {
            let before = plan.tours().len();
            self.plan_date(date, &group, &available, &assigner, &sequencer, &mut plan);
            info!(
                %date,
                orders = group.len(),
                tours = plan.tours().len() - before,
                "generated tours for date"
            );
        }

        info!(tours = plan.tours().len(), "total tours generated");
        Ok(plan)
    }

    fn plan_date(
        &self,
        date: NaiveDate,
        orders: &[&Order],
        vehicles: &[&Vehicle],
        assigner: &CapacityAssigner,
        sequencer: &RouteSequencer<'_>,
        plan: &mut TourPlan,
    ) {
        let assignment = assigner.assign(orders, vehicles);

        for batch in &assignment.batches {
            let tour = self.build_tour(date, batch, sequencer, plan);
            plan.push_tour(tour);
        }

        if !assignment.unassigned.is_empty() {
            warn!(
                %date,
                count = assignment.unassigned.len(),
                "orders fit no vehicle even at relaxed capacity"
            );
            plan.push_diagnostic(Diagnostic::UnassignedOrders {
                date,
                order_ids: assignment
                    .unassigned
                    .iter()
                    .map(|o| o.id().to_string())
                    .collect(),
            });
            for order in &assignment.unassigned {
                plan.push_unassigned(UnassignedOrder {
                    order_id: order.id().to_string(),
                    date,
                    container_count: order.container_count(),
                });
            }
        }
    }

    fn build_tour(
        &self,
        date: NaiveDate,
        batch: &VehicleBatch<'_>,
        sequencer: &RouteSequencer<'_>,
        plan: &mut TourPlan,
    ) -> Tour {
        let route = sequencer.sequence(&batch.orders);
        let evaluator = RouteCostEvaluator::new(sequencer.depot());
        let timing = TimingModel::from_settings(&self.settings, self.config.average_speed_kmh);

        let distance = evaluator.distance(&route.coordinates);
        let duration = timing.duration_hours(distance, route.orders.len(), batch.load);

        let arrivals = self.settings.working_hours.map(|wh| {
            let legs = evaluator.legs(&route.coordinates);
            let containers: Vec<u32> = route.orders.iter().map(|o| o.container_count()).collect();
            timing.arrivals(wh.start, &legs, &containers)
        });

        let stops = route
            .orders
            .iter()
            .enumerate()
            .map(|(i, order)| TourStop {
                order_id: order.id().to_string(),
                sequence: (i + 1) as u32,
                estimated_arrival: arrivals.as_ref().map(|a| a[i]),
            })
            .collect();

        let tour = Tour::planned(
            batch.vehicle.id(),
            date,
            stops,
            distance,
            duration,
            batch.load,
            batch.vehicle.capacity(),
            batch.mode,
        );

        for order in &route.orders {
            if route.fallback_orders.contains(&order.id()) {
                plan.push_diagnostic(Diagnostic::FallbackCoordinate {
                    order_id: order.id().to_string(),
                    customer_id: order.customer_id().to_string(),
                });
            }
        }

        if !route.converged {
            warn!(tour_id = tour.id(), passes = route.passes, "2-opt budget exhausted");
            plan.push_diagnostic(Diagnostic::ImprovementBudgetExhausted {
                tour_id: tour.id().to_string(),
                passes: route.passes,
            });
        }

        if batch.mode == LoadMode::Overloaded {
            warn!(
                tour_id = tour.id(),
                load = batch.load,
                capacity = batch.vehicle.capacity(),
                "tour exceeds nominal vehicle capacity"
            );
            plan.push_diagnostic(Diagnostic::OverCapacityTour {
                tour_id: tour.id().to_string(),
                load: batch.load,
                capacity: batch.vehicle.capacity(),
            });
        }

        if let Some(max) = self.settings.max_tour_duration_hours {
            if duration > max {
                warn!(tour_id = tour.id(), hours = duration, max, "tour exceeds maximum duration");
                plan.push_diagnostic(Diagnostic::TourExceedsMaxDuration {
                    tour_id: tour.id().to_string(),
                    estimated_hours: duration,
                    max_hours: max,
                });
            }
        }

        debug!(
            tour_id = tour.id(),
            stops = tour.len(),
            distance,
            construction_distance = route.construction_distance,
            "tour built"
        );
        tour
    }
}
