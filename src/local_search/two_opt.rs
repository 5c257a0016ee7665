//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `(i, j)` with `1 <= i < n - 2`, `i + 1 < j < n`,
//! reverse the segment `route[i..=j]` and keep the reversal if the full
//! round-trip distance (depot legs included) strictly decreases. The first
//! stop and adjacent pairs are never reversed. Accepted reversals take effect
//! immediately for the rest of the pass. Passes repeat until one makes no
//! improvement or the [`ImprovementBudget`] runs out.
//!
//! Routes with fewer than four stops are returned unchanged.
//!
//! # Complexity
//!
//! O(n²) candidate moves per pass, each costing an O(n) route evaluation.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::evaluation::route_distance;

/// Limits on how long 2-opt may keep searching.
///
/// When a limit is hit the best route found so far is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImprovementBudget {
    /// Maximum number of full passes; `None` runs to a local optimum.
    pub max_passes: Option<usize>,
    /// Wall-clock limit in milliseconds; `None` for no limit.
    pub time_limit_ms: Option<u64>,
}

impl Default for ImprovementBudget {
    fn default() -> Self {
        Self {
            max_passes: Some(1000),
            time_limit_ms: None,
        }
    }
}

impl ImprovementBudget {
    /// A budget with no limits.
    pub fn unlimited() -> Self {
        Self {
            max_passes: None,
            time_limit_ms: None,
        }
    }

    /// Sets the pass limit.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Wall-clock limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementOutcome {
    /// Improved visiting sequence.
    pub route: Vec<usize>,
    /// Round-trip distance of `route`.
    pub distance: f64,
    /// Full or partial passes performed.
    pub passes: usize,
    /// `true` if a local optimum was reached, `false` if the budget ran out.
    pub converged: bool,
}

/// Applies 2-opt improvement to a single route.
///
/// The route is assumed to start and end at `depot`. Never returns a route
/// longer than the input.
///
/// # Arguments
///
/// * `route` - Ordered stop indices (excluding depot)
/// * `depot` - Depot location index
/// * `distances` - Distance matrix
/// * `budget` - Pass and time limits
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
/// use u_tourplan::distance::DistanceMatrix;
/// use u_tourplan::evaluation::route_distance;
/// use u_tourplan::local_search::{two_opt_improve, ImprovementBudget};
///
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 0.1),
///     Coordinate::new(0.1, 0.1),
///     Coordinate::new(0.1, 0.2),
///     Coordinate::new(0.0, 0.2),
/// ]);
/// let start = [1, 3, 2, 4];
/// let out = two_opt_improve(&start, 0, &dm, &ImprovementBudget::default());
/// assert!(out.converged);
/// assert!(out.distance < route_distance(&start, 0, &dm));
/// ```
pub fn two_opt_improve(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    budget: &ImprovementBudget,
) -> ImprovementOutcome {
    let mut best = route.to_vec();
    let mut best_dist = route_distance(&best, depot, distances);
    let n = best.len();

    if n < 4 {
        return ImprovementOutcome {
            route: best,
            distance: best_dist,
            passes: 0,
            converged: true,
        };
    }

    let started = Instant::now();
    let deadline = budget.time_limit().map(|limit| started + limit);
    let out_of_time = || deadline.is_some_and(|d| Instant::now() >= d);
    let mut passes = 0;

    let converged = loop {
        if budget.max_passes.is_some_and(|max| passes >= max) || out_of_time() {
            break false;
        }
        passes += 1;
        let mut improved = false;
        let mut interrupted = false;

        'pass: for i in 1..n - 2 {
            if out_of_time() {
                interrupted = true;
                break 'pass;
            }
            for j in i + 2..n {
                best[i..=j].reverse();
                let candidate = route_distance(&best, depot, distances);
                if candidate < best_dist {
                    best_dist = candidate;
                    improved = true;
                } else {
                    best[i..=j].reverse();
                }
            }
        }

        debug!(pass = passes, distance = best_dist, improved, "2-opt pass");

        if interrupted {
            break false;
        }
        if !improved {
            break true;
        }
    };

    ImprovementOutcome {
        route: best,
        distance: best_dist,
        passes,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    /// Depot plus the four corners of a small square.
    fn square() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.1),
            Coordinate::new(0.1, 0.1),
            Coordinate::new(0.1, 0.2),
            Coordinate::new(0.0, 0.2),
        ])
    }

    #[test]
    fn test_2opt_short_routes_unchanged() {
        let dm = square();
        for route in [vec![], vec![2], vec![3, 1], vec![3, 1, 2]] {
            let out = two_opt_improve(&route, 0, &dm, &ImprovementBudget::default());
            assert_eq!(out.route, route);
            assert_eq!(out.passes, 0);
            assert!(out.converged);
        }
    }

    #[test]
    fn test_2opt_single_customer_distance() {
        let dm = square();
        let out = two_opt_improve(&[2], 0, &dm, &ImprovementBudget::default());
        assert!((out.distance - 2.0 * dm.get(0, 2)).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_improves_crossing() {
        let dm = square();
        let start = vec![1, 3, 2, 4];
        let out = two_opt_improve(&start, 0, &dm, &ImprovementBudget::default());
        // With four stops the only candidate move reverses stops 2..=4.
        assert_eq!(out.route, vec![1, 4, 2, 3]);
        assert!(out.converged);
        assert_eq!(out.passes, 2);
    }

    #[test]
    fn test_2opt_local_optimum_is_stable() {
        let dm = square();
        let first = two_opt_improve(&[1, 3, 2, 4], 0, &dm, &ImprovementBudget::default());
        let again = two_opt_improve(&first.route, 0, &dm, &ImprovementBudget::default());
        assert_eq!(again.route, first.route);
        assert_eq!(again.passes, 1);
        assert!(again.converged);
    }

    #[test]
    fn test_2opt_keeps_first_stop() {
        let dm = square();
        let out = two_opt_improve(&[3, 1, 4, 2], 0, &dm, &ImprovementBudget::unlimited());
        assert_eq!(out.route[0], 3);
    }

    #[test]
    fn test_2opt_pass_limit() {
        let dm = square();
        let budget = ImprovementBudget::unlimited().with_max_passes(0);
        let out = two_opt_improve(&[1, 3, 2, 4], 0, &dm, &budget);
        assert_eq!(out.route, vec![1, 3, 2, 4]);
        assert_eq!(out.passes, 0);
        assert!(!out.converged);
    }

    #[test]
    fn test_2opt_zero_time_limit() {
        let dm = square();
        let budget = ImprovementBudget::unlimited().with_time_limit(Duration::ZERO);
        let start = [1, 3, 2, 4];
        let out = two_opt_improve(&start, 0, &dm, &budget);
        assert!(!out.converged);
        assert!(out.distance <= route_distance(&start, 0, &dm));
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let dm = DistanceMatrix::from_coordinates(&[
            Coordinate::new(52.50, 13.40),
            Coordinate::new(52.45, 13.30),
            Coordinate::new(52.55, 13.50),
            Coordinate::new(52.45, 13.50),
            Coordinate::new(52.55, 13.30),
            Coordinate::new(52.60, 13.40),
        ]);
        let initial = vec![1, 2, 3, 4, 5];
        let initial_dist = route_distance(&initial, 0, &dm);
        let out = two_opt_improve(&initial, 0, &dm, &ImprovementBudget::default());
        assert!(out.distance <= initial_dist);
        let mut sorted = out.route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, initial);
    }

    #[test]
    fn test_budget_serde_defaults() {
        let b: ImprovementBudget = serde_json::from_str("{}").expect("valid");
        assert_eq!(b, ImprovementBudget::default());
        let b: ImprovementBudget =
            serde_json::from_str(r#"{"maxPasses": null, "timeLimitMs": 50}"#).expect("valid");
        assert_eq!(b.max_passes, None);
        assert_eq!(b.time_limit(), Some(Duration::from_millis(50)));
    }
}
