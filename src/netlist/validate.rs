//! Netlist diagnostics.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use crate::error::{Result, SketchnetError};

use super::generator::Netlist;
use super::types::NodeId;

/// Nodes with no path to ground through the netlist's elements, ascending.
///
/// Elements are treated as edges between their two nodes. A netlist that
/// never references ground reports every node.
pub fn find_floating_nodes(netlist: &Netlist) -> Vec<NodeId> {
    let mut adj: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for line in netlist.lines() {
        adj.entry(line.node1).or_default().insert(line.node2);
        adj.entry(line.node2).or_default().insert(line.node1);
    }

    let mut reached = BTreeSet::new();
    let mut stack = vec![NodeId::GROUND];
    while let Some(cur) = stack.pop() {
        if !reached.insert(cur) {
            continue;
        }
        if let Some(next) = adj.get(&cur) {
            stack.extend(next.iter().filter(|n| !reached.contains(*n)));
        }
    }

    adj.into_keys().filter(|n| !reached.contains(n)).collect()
}

/// Check a netlist for simulation.
///
/// Checks:
/// - A non-empty netlist references ground
/// - Every node has a path to ground
pub fn validate_netlist(netlist: &Netlist) -> Result<()> {
    if netlist.is_empty() {
        return Ok(());
    }

    if !netlist.nodes().contains(&NodeId::GROUND) {
        return Err(SketchnetError::MissingGround);
    }

    match find_floating_nodes(netlist).first() {
        Some(&node) => Err(SketchnetError::FloatingNode { node }),
        None => Ok(()),
    }
}

/// Log every diagnostic as a warning instead of failing.
pub fn report_diagnostics(netlist: &Netlist) {
    if netlist.is_empty() {
        return;
    }
    if !netlist.nodes().contains(&NodeId::GROUND) {
        warn!("netlist has no ground node");
    }
    for node in find_floating_nodes(netlist) {
        warn!("floating node {} has no path to ground", node);
    }
}
