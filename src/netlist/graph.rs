//! Wire connectivity graph over raw nodes.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::warn;

use crate::geometry::Wire;

use super::assign::NodeAssigner;
use super::types::RawNodeId;

/// Undirected adjacency between raw nodes joined by a wire.
///
/// Only wires contribute edges. Two component pins that share a point but
/// have no wire between them are not joined here.
#[derive(Debug, Default)]
pub struct WireGraph {
    adj: BTreeMap<RawNodeId, BTreeSet<RawNodeId>>,
    skipped: usize,
}

impl WireGraph {
    /// Build the graph from the layout's wires.
    ///
    /// Endpoints are resolved lookup-only. A wire with an endpoint that does
    /// not resolve is skipped with a warning; the run continues with
    /// degraded connectivity.
    pub fn build(wires: &[Wire], nodes: &NodeAssigner) -> Self {
        let mut graph = Self::default();

        for wire in wires {
            match (nodes.lookup(wire.a), nodes.lookup(wire.b)) {
                (Some(n1), Some(n2)) => graph.add_edge(n1, n2),
                (n1, n2) => {
                    let point = if n1.is_none() { wire.a } else { wire.b };
                    warn!(
                        "skipping wire {} -> {}: endpoint {} does not resolve to any node ({:?}, {:?})",
                        wire.a, wire.b, point, n1, n2
                    );
                    graph.skipped += 1;
                }
            }
        }

        graph
    }

    /// Add a symmetric edge.
    pub fn add_edge(&mut self, a: RawNodeId, b: RawNodeId) {
        self.adj.entry(a).or_default().insert(b);
        self.adj.entry(b).or_default().insert(a);
    }

    pub fn contains(&self, node: RawNodeId) -> bool {
        self.adj.contains_key(&node)
    }

    pub fn neighbors(&self, node: RawNodeId) -> impl Iterator<Item = RawNodeId> + '_ {
        self.adj.get(&node).into_iter().flatten().copied()
    }

    /// Number of wires dropped because an endpoint did not resolve.
    pub fn skipped_wires(&self) -> usize {
        self.skipped
    }

    /// Connected components ("islands") of the graph.
    ///
    /// Traversal uses an explicit stack. Islands are returned in order of
    /// their lowest raw id, which is discovery order; members within an
    /// island are in visit order.
    pub fn islands(&self) -> Vec<Vec<RawNodeId>> {
        let mut visited = HashSet::new();
        let mut islands = Vec::new();

        for &start in self.adj.keys() {
            if visited.contains(&start) {
                continue;
            }

            let mut stack = vec![start];
            let mut island = Vec::new();
            while let Some(cur) = stack.pop() {
                if !visited.insert(cur) {
                    continue;
                }
                island.push(cur);
                stack.extend(self.neighbors(cur).filter(|n| !visited.contains(n)));
            }
            islands.push(island);
        }

        islands
    }
}
