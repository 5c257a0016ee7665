//! Constructive heuristics for building initial visiting sequences.
//!
//! - [`nearest_neighbor_sequence`] - Greedy nearest-neighbor ordering, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_sequence;
