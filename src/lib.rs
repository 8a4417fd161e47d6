//! # Sketchnet Core
//!
//! Netlist generation for hand-sketched circuit layouts.
//!
//! A user places components and draws wires on a 2-D canvas. This library
//! turns that geometric sketch into a numbered netlist that an external
//! simulation engine can consume:
//! - Loose wire endpoints snap onto nearby pins
//! - Points a few pixels apart are treated as the same electrical point
//! - Ground pins, and everything wired to them, become node 0
//! - Elements whose terminals end up on the same node are reported as shorts
//!
//! ## Architecture
//!
//! - [`geometry`] - Layout model, per-kind pin geometry, and pin snapping
//! - [`netlist`] - Node assignment, wire connectivity, merging, and output
//! - [`config`] - Snap/grid parameters and element values
//! - [`error`] - Error type shared by all of the above
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! sketchnet layout.json -s R=1k -s V=9 -o circuit.net
//! ```
//!
//! ### Library
//!
//! ```
//! use sketchnet_core::geometry::{Component, ComponentKind, Layout, Point, Wire};
//! use sketchnet_core::{generate_netlist, ComponentValues};
//!
//! let mut layout = Layout::new();
//! layout.components.push(Component::new(ComponentKind::Battery, Point::new(0, 0)));
//! layout.components.push(Component::new(ComponentKind::Resistor, Point::new(0, 100)));
//! layout.components.push(Component::new(ComponentKind::Ground, Point::new(-60, 50)));
//! layout.wires.push(Wire::new(Point::new(30, 0), Point::new(30, 100)));
//! layout.wires.push(Wire::new(Point::new(-30, 0), Point::new(-60, 50)));
//! layout.wires.push(Wire::new(Point::new(-30, 100), Point::new(-60, 50)));
//!
//! let netlist = generate_netlist(&layout, &ComponentValues::new()).unwrap();
//! assert_eq!(netlist, "V1 0 1 5\nR1 0 1 100");
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod netlist;

// Re-export main types for convenience
pub use config::{ComponentValues, NetlistConfig};
pub use error::{Result, SketchnetError};
pub use geometry::Layout;
pub use netlist::{Netlist, NetlistGenerator};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmNetlister;

/// Default Manhattan radius for snapping points onto pins.
pub const DEFAULT_SNAP_TOLERANCE: i32 = 50;

/// Default placement grid pitch.
pub const DEFAULT_GRID_SIZE: i32 = 20;

/// Generate the netlist text for a layout with default configuration.
///
/// Returns an empty string when the layout has no two-terminal elements.
pub fn generate_netlist(layout: &Layout, values: &ComponentValues) -> Result<String> {
    Ok(NetlistGenerator::new().generate(layout, values)?.to_string())
}
