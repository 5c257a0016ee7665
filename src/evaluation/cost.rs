//! Round-trip route distance.

use crate::distance::{haversine, DistanceMatrix};
use crate::models::Coordinate;

/// Computes the total distance of a route: `depot → route[0] → ... → route[n-1] → depot`.
///
/// Returns 0 for an empty route.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::DistanceMatrix;
/// use u_tourplan::evaluation::route_distance;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// assert_eq!(route_distance(&[1, 2], 0, &dm), 4.0);
/// assert_eq!(route_distance(&[], 0, &dm), 0.0);
/// ```
pub fn route_distance(route: &[usize], depot: usize, distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return 0.0;
    };
    let mut dist = distances.get(depot, first);
    for pair in route.windows(2) {
        dist += distances.get(pair[0], pair[1]);
    }
    dist + distances.get(last, depot)
}

/// Computes round-trip travel distance from a depot through stops given as
/// coordinates.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
/// use u_tourplan::evaluation::RouteCostEvaluator;
///
/// let depot = Coordinate::new(52.52, 13.405);
/// let stop = Coordinate::new(52.53, 13.405);
/// let eval = RouteCostEvaluator::new(depot);
/// let d = eval.distance(&[stop]);
/// assert!((d - 2.0 * depot.distance_to(&stop)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteCostEvaluator {
    depot: Coordinate,
}

impl RouteCostEvaluator {
    /// Creates an evaluator for tours starting and ending at `depot`.
    pub fn new(depot: Coordinate) -> Self {
        Self { depot }
    }

    /// Depot position.
    pub fn depot(&self) -> Coordinate {
        self.depot
    }

    /// Round-trip distance in kilometers through `stops` in order.
    pub fn distance(&self, stops: &[Coordinate]) -> f64 {
        self.distance_by(stops, |c| *c)
    }

    /// Round-trip distance through arbitrary stops, located by `locate`.
    pub fn distance_by<T>(&self, stops: &[T], locate: impl Fn(&T) -> Coordinate) -> f64 {
        let mut current = self.depot;
        let mut dist = 0.0;
        for stop in stops {
            let next = locate(stop);
            dist += haversine(current, next);
            current = next;
        }
        if stops.is_empty() {
            return 0.0;
        }
        dist + haversine(current, self.depot)
    }

    /// Distance of each leg from the depot to stop 1, stop 1 to stop 2, and so on.
    ///
    /// The return leg to the depot is not included.
    pub fn legs(&self, stops: &[Coordinate]) -> Vec<f64> {
        let mut current = self.depot;
        stops
            .iter()
            .map(|&next| {
                let d = haversine(current, next);
                current = next;
                d
            })
            .collect()
    }
}
