//! # Spanning Tree Selection
//!
//! Kruskal-style selection over unweighted candidates: candidates are taken
//! in generation order and kept whenever they join two disjoint sets. The
//! rest are discarded, and the first `interconnectivity` usable discarded
//! candidates are promoted back to add loops.

use crate::generation::{Edge, GridTopology};
use crate::{CavernError, CavernResult};
use std::collections::HashSet;
use union_find::{QuickUnionUf, UnionByRank, UnionFind};

/// Result of the selection stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Tree passages followed by promoted ones
    pub selected: Vec<Edge>,
    /// Candidates left out of the final dungeon
    pub discarded: Vec<Edge>,
    /// Grid passages added because the candidates alone left the grid split
    pub bridges: usize,
}

/// Selects a spanning tree from `candidates` and promotes
/// `interconnectivity` discarded candidates on top of it.
///
/// Fails with [`CavernError::ExcessiveInterconnectivity`] when the discarded
/// pool runs out first.
pub fn select(
    topology: &GridTopology,
    candidates: &[Edge],
    interconnectivity: usize,
) -> CavernResult<SpanningTree> {
    let mut sets: QuickUnionUf<UnionByRank> = QuickUnionUf::new(topology.len());
    let mut components = topology.len();
    let mut selected = Vec::new();
    let mut discarded = Vec::new();

    for &edge in candidates {
        if join(&mut sets, edge) {
            components -= 1;
            selected.push(edge);
        } else {
            discarded.push(edge);
        }
    }

    let mut bridges = 0;
    if components > 1 {
        log::warn!(
            "Candidate passages left {} separate regions, bridging them",
            components
        );
        for (a, b) in topology.adjacent_pairs() {
            if components == 1 {
                break;
            }
            let edge = Edge::new(a, b);
            if join(&mut sets, edge) {
                components -= 1;
                bridges += 1;
                selected.push(edge);
            }
        }
    }

    let promoted = promote(&mut selected, &mut discarded, interconnectivity)?;

    log::debug!(
        "Selected {} tree passages ({} bridges), promoted {}, discarded {}",
        selected.len() - promoted,
        bridges,
        promoted,
        discarded.len()
    );

    Ok(SpanningTree {
        selected,
        discarded,
        bridges,
    })
}

/// Unions the endpoint sets of `edge`; returns whether they were disjoint.
fn join(sets: &mut QuickUnionUf<UnionByRank>, edge: Edge) -> bool {
    if sets.find(edge.origin) == sets.find(edge.destination) {
        return false;
    }
    sets.union(edge.origin, edge.destination);
    true
}

/// Moves up to `count` discarded edges into `selected`, in discard order.
///
/// An edge whose endpoint pair already appears among the selected edges is
/// skipped and stays discarded.
fn promote(
    selected: &mut Vec<Edge>,
    discarded: &mut Vec<Edge>,
    count: usize,
) -> CavernResult<usize> {
    let mut signatures: HashSet<(usize, usize)> =
        selected.iter().map(Edge::signature).collect();
    let mut promoted = 0;
    let mut remaining = Vec::with_capacity(discarded.len());

    for edge in discarded.drain(..) {
        if promoted < count && signatures.insert(edge.signature()) {
            selected.push(edge);
            promoted += 1;
        } else {
            remaining.push(edge);
        }
    }
    *discarded = remaining;

    if promoted < count {
        return Err(CavernError::ExcessiveInterconnectivity {
            requested: count,
            promoted,
        });
    }
    Ok(promoted)
}
