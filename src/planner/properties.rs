use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use super::TourBuilder;
use crate::assignment::CapacityAssigner;
use crate::evaluation::RouteCostEvaluator;
use crate::models::{
    Coordinate, Customer, CustomerDirectory, LoadMode, Order, Priority, Settings, Vehicle,
};
use crate::sequencing::RouteSequencer;

const DEPOT: Coordinate = Coordinate {
    latitude: 52.52,
    longitude: 13.405,
};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (52.40..52.65f64, 13.20..13.60f64).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
}

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Low), Just(Priority::Medium), Just(Priority::High)]
}

prop_compose! {
    fn order_input()
    (
        location in coordinate(),
        containers in 1u32..8,
        priority in priority(),
        day in 6u32..9,
    ) -> (Coordinate, u32, Priority, u32) {
        (location, containers, priority, day)
    }
}

prop_compose! {
    fn scenario()
    (
        inputs in prop::collection::vec(order_input(), 0..14),
        capacities in prop::collection::vec(1u32..16, 1..4),
    ) -> (Vec<Order>, Vec<Vehicle>, CustomerDirectory) {
        let mut customers = CustomerDirectory::new();
        let mut orders = Vec::with_capacity(inputs.len());
        for (i, (location, containers, priority, day)) in inputs.into_iter().enumerate() {
            let customer_id = format!("c{i}");
            customers.insert(Customer::new(customer_id.clone(), "customer").with_location(location));
            let date = NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date");
            orders.push(Order::new(format!("o{i}"), customer_id, containers, date).with_priority(priority));
        }
        let vehicles = capacities
            .into_iter()
            .enumerate()
            .map(|(i, cap)| Vehicle::new(format!("v{i}"), cap))
            .collect();
        (orders, vehicles, customers)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_order_planned_once_or_unassigned((orders, vehicles, customers) in scenario()) {
        let plan = TourBuilder::new(Settings::new(DEPOT))
            .build(&orders, &vehicles, &customers)
            .expect("valid");

        let mut seen = HashSet::new();
        for tour in plan.tours() {
            for id in tour.order_ids() {
                prop_assert!(seen.insert(id.to_string()), "order {} planned twice", id);
            }
        }
        for u in plan.unassigned() {
            prop_assert!(seen.insert(u.order_id.clone()), "order {} reported twice", u.order_id);
        }
        prop_assert_eq!(seen.len(), orders.len());
    }

    #[test]
    fn loads_respect_ceilings((orders, vehicles, customers) in scenario()) {
        let plan = TourBuilder::new(Settings::new(DEPOT))
            .build(&orders, &vehicles, &customers)
            .expect("valid");
        let assigner = CapacityAssigner::new();

        for tour in plan.tours() {
            let ceiling = match tour.load_mode() {
                LoadMode::Nominal => tour.capacity(),
                LoadMode::Overloaded => assigner.relaxed_capacity(tour.capacity()),
            };
            prop_assert!(tour.total_containers() <= ceiling);
            prop_assert!(!tour.is_empty());

            let sequences: Vec<u32> = tour.stops().iter().map(|s| s.sequence).collect();
            let expected: Vec<u32> = (1..=tour.len() as u32).collect();
            prop_assert_eq!(sequences, expected);
        }
    }

    #[test]
    fn one_tour_per_vehicle_and_date((orders, vehicles, customers) in scenario()) {
        let plan = TourBuilder::new(Settings::new(DEPOT))
            .build(&orders, &vehicles, &customers)
            .expect("valid");
        let mut keys = HashSet::new();
        for tour in plan.tours() {
            prop_assert!(keys.insert((tour.vehicle_id().to_string(), tour.date())));
        }
    }

    #[test]
    fn planning_is_deterministic((orders, vehicles, customers) in scenario()) {
        let builder = TourBuilder::new(Settings::new(DEPOT));
        let first = builder.build(&orders, &vehicles, &customers).expect("valid");
        let second = builder.build(&orders, &vehicles, &customers).expect("valid");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn improvement_never_worsens((orders, _vehicles, customers) in scenario()) {
        let refs: Vec<&Order> = orders.iter().collect();
        let route = RouteSequencer::new(DEPOT, &customers).sequence(&refs);
        prop_assert!(route.distance <= route.construction_distance + 1e-9);
        prop_assert_eq!(route.orders.len(), orders.len());
    }

    #[test]
    fn reversed_route_has_same_distance(points in prop::collection::vec(coordinate(), 0..10)) {
        let evaluator = RouteCostEvaluator::new(DEPOT);
        let forward = evaluator.distance(&points);
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert!((forward - evaluator.distance(&reversed)).abs() < 1e-9);
    }
}
