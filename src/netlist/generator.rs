//! Netlist generation pipeline.

use std::fmt;

use log::{debug, warn};

use crate::config::{ComponentValues, NetlistConfig};
use crate::error::Result;
use crate::geometry::Layout;

use super::assign::NodeAssigner;
use super::graph::WireGraph;
use super::merge::MergeTable;
use super::serialize::{serialize, NetlistLine};
use super::types::NodeId;

/// A generated netlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netlist {
    lines: Vec<NetlistLine>,
}

impl Netlist {
    pub fn new(lines: Vec<NetlistLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[NetlistLine] {
        &self.lines
    }

    /// True when the layout had nothing to simulate.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Distinct final nodes referenced by any line, ascending.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.lines.iter().flat_map(|l| l.nodes()).collect();
        nodes.sort();
        nodes.dedup();
        nodes
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Scratch state for a single generation run.
///
/// Created at the start of [`NetlistGenerator::generate`] and dropped at the
/// end, so no node id survives from one call to the next.
struct GenerationContext<'a> {
    layout: &'a Layout,
    nodes: NodeAssigner,
}

impl<'a> GenerationContext<'a> {
    fn new(layout: &'a Layout, config: &NetlistConfig) -> Result<Self> {
        Ok(Self {
            layout,
            nodes: NodeAssigner::new(layout, config)?,
        })
    }

    /// Give every pin and wire endpoint a raw node id.
    fn assign_pins(&mut self) {
        let pins = self.nodes.candidates().to_vec();
        for &pin in &pins {
            self.nodes.get_or_create(pin);
        }
        debug!(
            "collected {} pins into {} raw nodes",
            pins.len(),
            self.nodes.len()
        );
    }

    fn run(mut self, values: &ComponentValues) -> Result<Netlist> {
        self.assign_pins();

        let graph = WireGraph::build(&self.layout.wires, &self.nodes);
        if graph.skipped_wires() > 0 {
            warn!(
                "{} wire(s) skipped; connectivity may be incomplete",
                graph.skipped_wires()
            );
        }

        let merge = MergeTable::build(&self.nodes, &graph);
        debug!("final node map: {:?}", merge.entries());

        let lines = serialize(&self.layout.components, &merge, &self.nodes, values)?;
        Ok(Netlist::new(lines))
    }
}

/// Turns a [`Layout`] into a [`Netlist`].
#[derive(Debug, Clone, Default)]
pub struct NetlistGenerator {
    config: NetlistConfig,
}

impl NetlistGenerator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: NetlistConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NetlistConfig {
        &self.config
    }

    /// Generate the netlist for a layout.
    ///
    /// Deterministic: an unchanged layout always yields the same netlist.
    /// Fails with [`crate::SketchnetError::ShortCircuit`] if any element's
    /// terminals share a node; no partial netlist is returned.
    pub fn generate(&self, layout: &Layout, values: &ComponentValues) -> Result<Netlist> {
        let netlist = GenerationContext::new(layout, &self.config)?.run(values)?;
        if netlist.is_empty() {
            warn!("no components found to simulate");
        }
        Ok(netlist)
    }
}
