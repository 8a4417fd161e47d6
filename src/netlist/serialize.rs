//! Netlist line emission.

use std::collections::HashMap;
use std::fmt;

use crate::config::ComponentValues;
use crate::error::{Result, SketchnetError};
use crate::geometry::{Component, Point, Prefix};

use super::assign::NodeAssigner;
use super::merge::MergeTable;
use super::types::NodeId;

/// One element line: `<Prefix><Index> <Node1> <Node2> <Value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetlistLine {
    pub prefix: Prefix,
    /// 1-based, counted per prefix
    pub index: usize,
    pub node1: NodeId,
    pub node2: NodeId,
    pub value: String,
}

impl NetlistLine {
    /// Element name such as `R1`.
    pub fn name(&self) -> String {
        format!("{}{}", self.prefix, self.index)
    }

    pub fn nodes(&self) -> [NodeId; 2] {
        [self.node1, self.node2]
    }
}

impl fmt::Display for NetlistLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} {} {}",
            self.prefix, self.index, self.node1, self.node2, self.value
        )
    }
}

/// Emit one line per two-terminal element, in placement order.
///
/// Fails on the first component whose terminals land on the same final
/// node. Meters and grounds are skipped.
pub fn serialize(
    components: &[Component],
    merge: &MergeTable,
    nodes: &NodeAssigner,
    values: &ComponentValues,
) -> Result<Vec<NetlistLine>> {
    let mut lines = Vec::new();
    let mut counts: HashMap<Prefix, usize> = HashMap::new();

    for component in components {
        let Some(prefix) = component.kind.prefix() else {
            continue;
        };

        let pins = component.pins()?;
        let node1 = resolve(pins[0], nodes, merge)?;
        let node2 = resolve(pins[1], nodes, merge)?;

        if node1 == node2 {
            return Err(SketchnetError::short_circuit(component.kind, node1));
        }

        let count = counts.entry(prefix).or_insert(0);
        *count += 1;

        lines.push(NetlistLine {
            prefix,
            index: *count,
            node1,
            node2,
            value: values.get(prefix).to_string(),
        });
    }

    Ok(lines)
}

fn resolve(pin: Point, nodes: &NodeAssigner, merge: &MergeTable) -> Result<NodeId> {
    nodes
        .lookup(pin)
        .and_then(|raw| merge.get(raw))
        .ok_or(SketchnetError::UnresolvedPin { point: pin })
}
