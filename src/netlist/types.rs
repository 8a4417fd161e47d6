//! Node identifiers.

use std::fmt;

/// A raw node id, assigned to a canonical electrical point before merging.
///
/// Raw ids are allocated sequentially from 1 in discovery order, so sorting
/// them recovers the order points were first seen. Id 0 is ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawNodeId(pub usize);

impl RawNodeId {
    /// Every ground pin resolves here.
    pub const GROUND: RawNodeId = RawNodeId(0);

    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RawNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "raw{}", self.0)
    }
}

/// A final node id, as written into the netlist.
/// Node 0 is always ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
