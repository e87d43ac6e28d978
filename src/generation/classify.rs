//! # Cell Classification
//!
//! Turns the final passage list into cells. Runs after selection and
//! promotion, because a cell's role depends on its final degree.

use crate::generation::{Edge, GridTopology};
use crate::Cell;
use std::collections::HashSet;

/// Builds one cell per grid square with the passages in `edges`.
///
/// A direction is open when the passage to the grid neighbour in that
/// direction was selected.
pub fn classify(topology: &GridTopology, edges: &[Edge]) -> Vec<Cell> {
    let open: HashSet<(usize, usize)> = edges.iter().map(Edge::signature).collect();

    let cells: Vec<Cell> = (0..topology.len())
        .map(|index| {
            let location = topology.location(index);
            let exits = topology.neighbours(location).map(|neighbour| {
                neighbour.filter(|&n| {
                    topology
                        .index(n)
                        .map_or(false, |other| open.contains(&Edge::new(index, other).signature()))
                })
            });
            Cell::new(location, exits)
        })
        .collect();

    let tunnels = cells.iter().filter(|c| c.is_tunnel()).count();
    log::debug!(
        "Classified {} caves and {} tunnels",
        cells.len() - tunnels,
        tunnels
    );
    cells
}
