//! # All-Pairs Distances
//!
//! Floyd–Warshall over the final passages. The cubic cost in the cell count
//! is fine for dungeons of a few dozen cells.

use crate::generation::GridTopology;
use crate::{config, Cell};
use serde::Serialize;

/// Hop counts between every pair of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    /// Row-major `size x size` entries
    hops: Vec<u32>,
}

impl DistanceMatrix {
    /// Computes shortest hop counts over the passages of `cells`.
    ///
    /// Pairs with no path keep the [`config::UNREACHABLE`] sentinel.
    pub fn compute(topology: &GridTopology, cells: &[Cell]) -> Self {
        let size = cells.len();
        let mut hops = vec![config::UNREACHABLE; size * size];

        for (from, cell) in cells.iter().enumerate() {
            for to in cell.neighbours().into_iter().filter_map(|n| topology.index(n)) {
                hops[from * size + to] = 1;
                hops[to * size + from] = 1;
            }
        }
        for i in 0..size {
            hops[i * size + i] = 0;
        }

        for via in 0..size {
            for from in 0..size {
                let first_leg = hops[from * size + via];
                if first_leg == config::UNREACHABLE {
                    continue;
                }
                for to in 0..size {
                    let second_leg = hops[via * size + to];
                    if second_leg == config::UNREACHABLE {
                        continue;
                    }
                    let through = first_leg + second_leg;
                    if through < hops[from * size + to] {
                        hops[from * size + to] = through;
                    }
                }
            }
        }

        Self { size, hops }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between cells `a` and `b`, by row-major index.
    ///
    /// Both orientations are read and the smaller one returned, so the answer
    /// is symmetric even if the matrix were not.
    pub fn distance(&self, a: usize, b: usize) -> u32 {
        self.hops[a * self.size + b].min(self.hops[b * self.size + a])
    }

    /// Whether every cell can reach every other.
    pub fn is_fully_connected(&self) -> bool {
        self.hops.iter().all(|&h| h < config::UNREACHABLE)
    }

    /// Longest shortest path in the dungeon.
    pub fn diameter(&self) -> u32 {
        self.hops
            .iter()
            .copied()
            .filter(|&h| h < config::UNREACHABLE)
            .max()
            .unwrap_or(0)
    }
}
