//! Nearest-neighbor constructive heuristic.
//!
//! Orders the stops of a single vehicle greedily: starting from the depot,
//! always drive to the nearest stop not yet visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use crate::distance::DistanceMatrix;

/// Orders `stops` by repeatedly moving to the nearest unvisited stop.
///
/// Ties go to the stop that appears first in `stops`, so the result is
/// deterministic for a given input order. Returns a permutation of `stops`.
///
/// # Arguments
///
/// * `stops` - Matrix indices of the stops to visit (depot excluded)
/// * `depot` - Matrix index of the depot
/// * `distances` - Distance matrix
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
/// use u_tourplan::distance::DistanceMatrix;
/// use u_tourplan::constructive::nearest_neighbor_sequence;
///
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.3, 0.0),
///     Coordinate::new(0.1, 0.0),
///     Coordinate::new(0.2, 0.0),
/// ]);
/// assert_eq!(nearest_neighbor_sequence(&[1, 2, 3], 0, &dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor_sequence(
    stops: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
) -> Vec<usize> {
    let mut unvisited = stops.to_vec();
    let mut route = Vec::with_capacity(stops.len());
    let mut current = depot;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        if let Some(pos) = unvisited.iter().position(|&s| s == next) {
            unvisited.remove(pos);
        }
        route.push(next);
        current = next;
    }

    route
}
