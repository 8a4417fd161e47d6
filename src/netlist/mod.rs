//! Netlist generation.
//!
//! Converting a [`Layout`](crate::geometry::Layout) into a netlist runs in
//! five stages, all on scratch state owned by a single call:
//!
//! 1. Every component pin and wire endpoint is snapped and given a raw node
//!    id ([`NodeAssigner`]). Ground pins are raw node 0.
//! 2. Wires become edges between raw nodes ([`WireGraph`]).
//! 3. Each wire-connected island collapses into one final node; islands
//!    touching ground become node 0 ([`MergeTable`]).
//! 4. Every two-terminal element becomes one [`NetlistLine`], failing on a
//!    short circuit.
//! 5. Optionally, [`validate_netlist`] checks for floating nodes.
//!
//! The output format is one line per element:
//!
//! ```text
//! V1 0 1 5
//! R1 1 0 100
//! ```

mod assign;
mod generator;
mod graph;
mod merge;
mod serialize;
mod types;
mod validate;

pub use assign::NodeAssigner;
pub use generator::{Netlist, NetlistGenerator};
pub use graph::WireGraph;
pub use merge::MergeTable;
pub use serialize::{serialize, NetlistLine};
pub use types::*;
pub use validate::{find_floating_nodes, report_diagnostics, validate_netlist};
