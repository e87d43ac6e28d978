//! # Candidate Passages
//!
//! Every cell flips a coin towards each of its grid neighbours. Winning
//! flips become candidate passages for the spanning-tree stage. A cell that
//! ends its turn with no passage at all is given one towards a random
//! neighbour, so nothing enters the spanning stage isolated.

use crate::generation::GridTopology;
use crate::Direction;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Undirected passage between two cells, by row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub origin: usize,
    pub destination: usize,
}

impl Edge {
    pub fn new(origin: usize, destination: usize) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Endpoint pair with the lower index first; equal for both orientations.
    pub fn signature(&self) -> (usize, usize) {
        (
            self.origin.min(self.destination),
            self.origin.max(self.destination),
        )
    }

    pub fn touches(&self, cell: usize) -> bool {
        self.origin == cell || self.destination == cell
    }
}

/// Candidates drawn so far, with per-cell passage counts.
struct CandidateSet {
    edges: Vec<Edge>,
    seen: HashSet<(usize, usize)>,
    degree: Vec<usize>,
}

impl CandidateSet {
    fn new(cells: usize) -> Self {
        Self {
            edges: Vec::new(),
            seen: HashSet::new(),
            degree: vec![0; cells],
        }
    }

    /// Records the pair from its lower-index cell, unless already present.
    fn add(&mut self, a: usize, b: usize) {
        let edge = Edge::new(a.min(b), a.max(b));
        if self.seen.insert(edge.signature()) {
            self.edges.push(edge);
            self.degree[a] += 1;
            self.degree[b] += 1;
        }
    }
}

/// Draws the candidate passages for `topology`, in generation order.
///
/// A pair of neighbours becomes a candidate the first time either of them
/// wins its flip towards the other, and is recorded once, from the
/// lower-index cell.
pub fn candidate_edges(topology: &GridTopology, rng: &mut StdRng) -> Vec<Edge> {
    let mut candidates = CandidateSet::new(topology.len());

    for index in 0..topology.len() {
        let neighbours = topology.neighbours(topology.location(index));

        for neighbour in neighbours.iter().flatten() {
            let Some(other) = topology.index(*neighbour) else {
                continue;
            };
            if rng.gen_bool(0.5) {
                candidates.add(index, other);
            }
        }

        if candidates.degree[index] == 0 && neighbours.iter().any(Option::is_some) {
            // Redraw until the direction has a real neighbour
            loop {
                let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
                if let Some(other) = neighbours[direction.index()].and_then(|n| topology.index(n)) {
                    candidates.add(index, other);
                    break;
                }
            }
        }
    }

    log::debug!(
        "Drew {} candidate passages for {} cells",
        candidates.edges.len(),
        topology.len()
    );
    candidates.edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;
    use crate::DungeonConfig;

    fn rng(seed: u64) -> StdRng {
        utils::create_rng(&DungeonConfig::for_testing(seed))
    }

    #[test]
    fn test_edge_signature_ignores_orientation() {
        assert_eq!(Edge::new(7, 2).signature(), Edge::new(2, 7).signature());
        assert!(Edge::new(7, 2).touches(2));
        assert!(!Edge::new(7, 2).touches(3));
    }

    #[test]
    fn test_every_cell_gets_a_candidate() {
        for seed in 0..50 {
            for wrapped in [true, false] {
                let topology = GridTopology::new(4, 5, wrapped).unwrap();
                let edges = candidate_edges(&topology, &mut rng(seed));
                for cell in 0..topology.len() {
                    assert!(
                        edges.iter().any(|e| e.touches(cell)),
                        "cell {} has no candidate (seed {}, wrapped {})",
                        cell,
                        seed,
                        wrapped
                    );
                }
            }
        }
    }

    #[test]
    fn test_candidates_join_grid_neighbours_once() {
        let topology = GridTopology::new(5, 5, true).unwrap();
        let pairs = topology.adjacent_pairs();
        let edges = candidate_edges(&topology, &mut rng(11));

        let mut signatures = HashSet::new();
        for edge in &edges {
            assert!(edge.origin < edge.destination);
            assert!(pairs.contains(&edge.signature()));
            assert!(signatures.insert(edge.signature()), "duplicate {:?}", edge);
        }
    }

    #[test]
    fn test_same_seed_same_candidates() {
        let topology = GridTopology::new(6, 4, false).unwrap();
        assert_eq!(
            candidate_edges(&topology, &mut rng(5)),
            candidate_edges(&topology, &mut rng(5))
        );
    }

    #[test]
    fn test_single_cell_has_no_candidates() {
        let topology = GridTopology::new(1, 1, true).unwrap();
        assert!(candidate_edges(&topology, &mut rng(0)).is_empty());
    }
}
