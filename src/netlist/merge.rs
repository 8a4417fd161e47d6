//! Collapse wire-connected islands into final nodes.

use std::collections::HashMap;

use super::assign::NodeAssigner;
use super::graph::WireGraph;
use super::types::{NodeId, RawNodeId};

/// Total mapping from raw node ids to final node ids.
#[derive(Debug, Clone, Default)]
pub struct MergeTable {
    map: HashMap<RawNodeId, NodeId>,
    /// Number of non-ground final nodes
    node_count: usize,
}

impl MergeTable {
    /// Build the table for every raw node known to `nodes`.
    ///
    /// 1. Every island containing ground maps to node 0.
    /// 2. Remaining islands get 1, 2, ... in discovery order, one id per island.
    /// 3. Raw nodes untouched by any wire get their own id after that,
    ///    again in discovery order.
    ///
    /// Points on a ground anchor never get a raw id of their own (the
    /// assigner hands out [`RawNodeId::GROUND`] for them), so the pre-seeded
    /// ground entry covers them.
    pub fn build(nodes: &NodeAssigner, graph: &WireGraph) -> Self {
        let mut map = HashMap::new();
        map.insert(RawNodeId::GROUND, NodeId::GROUND);

        let islands = graph.islands();

        for island in islands.iter().filter(|i| i.iter().any(|n| n.is_ground())) {
            for &raw in island {
                map.insert(raw, NodeId::GROUND);
            }
        }

        let mut next_id = 1;
        for island in islands.iter().filter(|i| !i.iter().any(|n| n.is_ground())) {
            for &raw in island {
                map.insert(raw, NodeId(next_id));
            }
            next_id += 1;
        }

        for (_, raw) in nodes.nodes() {
            if map.contains_key(raw) {
                continue;
            }
            map.insert(*raw, NodeId(next_id));
            next_id += 1;
        }

        Self {
            map,
            node_count: next_id - 1,
        }
    }

    pub fn get(&self, raw: RawNodeId) -> Option<NodeId> {
        self.map.get(&raw).copied()
    }

    /// Number of distinct non-ground final nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Entries sorted by raw id.
    pub fn entries(&self) -> Vec<(RawNodeId, NodeId)> {
        let mut entries: Vec<_> = self.map.iter().map(|(&r, &n)| (r, n)).collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetlistConfig;
    use crate::geometry::{Component, ComponentKind, Layout, Point};

    /// Assigner with raw nodes 1..=count at well-separated points.
    fn assigner_with(count: usize) -> NodeAssigner {
        let mut nodes = NodeAssigner::new(&Layout::new(), &NetlistConfig::default()).unwrap();
        for i in 0..count {
            nodes.get_or_create(Point::new(i as i32 * 100, 0));
        }
        nodes
    }

    #[test]
    fn test_ground_island_maps_to_zero() {
        let nodes = assigner_with(3);
        let mut graph = WireGraph::default();
        graph.add_edge(RawNodeId(1), RawNodeId::GROUND);
        graph.add_edge(RawNodeId(1), RawNodeId(2));

        let merge = MergeTable::build(&nodes, &graph);
        assert_eq!(merge.get(RawNodeId(1)), Some(NodeId::GROUND));
        assert_eq!(merge.get(RawNodeId(2)), Some(NodeId::GROUND));
        assert_eq!(merge.get(RawNodeId(3)), Some(NodeId(1)));
        assert_eq!(merge.node_count(), 1);
    }

    #[test]
    fn test_one_id_per_island() {
        let nodes = assigner_with(5);
        let mut graph = WireGraph::default();
        graph.add_edge(RawNodeId(4), RawNodeId(5));
        graph.add_edge(RawNodeId(1), RawNodeId(2));

        let merge = MergeTable::build(&nodes, &graph);
        assert_eq!(merge.get(RawNodeId(1)), Some(NodeId(1)));
        assert_eq!(merge.get(RawNodeId(2)), Some(NodeId(1)));
        assert_eq!(merge.get(RawNodeId(4)), Some(NodeId(2)));
        assert_eq!(merge.get(RawNodeId(5)), Some(NodeId(2)));
        // Isolated pin numbered after the islands
        assert_eq!(merge.get(RawNodeId(3)), Some(NodeId(3)));
        assert_eq!(merge.node_count(), 3);
    }

    #[test]
    fn test_total_over_raw_nodes() {
        let nodes = assigner_with(4);
        let merge = MergeTable::build(&nodes, &WireGraph::default());
        assert_eq!(merge.get(RawNodeId::GROUND), Some(NodeId::GROUND));
        for raw in 1..=4 {
            assert_eq!(merge.get(RawNodeId(raw)), Some(NodeId(raw)));
        }
        assert_eq!(merge.entries().len(), 5);
    }

    #[test]
    fn test_ground_only_layout_maps_only_ground() {
        let mut layout = Layout::new();
        layout.components.push(Component::new(ComponentKind::Ground, Point::new(0, 0)));
        layout.components.push(Component::new(ComponentKind::Ground, Point::new(200, 0)));
        let mut nodes = NodeAssigner::new(&layout, &NetlistConfig::default()).unwrap();
        for anchor in [Point::new(0, 0), Point::new(200, 0), Point::new(204, 3)] {
            assert_eq!(nodes.get_or_create(anchor), RawNodeId::GROUND);
        }
        assert!(nodes.is_empty());

        let merge = MergeTable::build(&nodes, &WireGraph::default());
        assert_eq!(merge.entries(), vec![(RawNodeId::GROUND, NodeId::GROUND)]);
        assert_eq!(merge.node_count(), 0);
    }
}
