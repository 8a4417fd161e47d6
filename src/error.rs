//! Error types for the Sketchnet netlist generator.
//!
//! This module provides a unified error type [`SketchnetError`] that covers
//! all error conditions that can occur while editing a layout, generating a
//! netlist from it, and checking the result.

use thiserror::Error;

use crate::geometry::{ComponentKind, Point};
use crate::netlist::NodeId;

/// Result type alias using [`SketchnetError`].
pub type Result<T> = std::result::Result<T, SketchnetError>;

/// Unified error type for all Sketchnet operations.
#[derive(Error, Debug)]
pub enum SketchnetError {
    // ============ Layout Editing Errors ============
    /// Wire endpoint is not close enough to any pin or wire endpoint
    #[error("Wire endpoint {point} is not on a pin")]
    WireNotSnapped { point: Point },

    /// Both wire endpoints snap to the same point
    #[error("Zero-length wire at {point}")]
    ZeroLengthWire { point: Point },

    /// Component index out of range
    #[error("No component at index {index}")]
    ComponentNotFound { index: usize },

    /// A component placed near the edge of the coordinate space has a pin
    /// that falls outside it
    #[error("Component at {point} has a pin outside the coordinate range")]
    CoordinateOutOfRange { point: Point },

    // ============ Netlist Generation Errors ============
    /// Both terminals of a two-terminal component resolve to the same node
    #[error("{kind} shorted - both pins map to node {node}")]
    ShortCircuit { kind: ComponentKind, node: NodeId },

    /// A pin could not be resolved to any node during a lookup-only pass
    #[error("Pin at {point} does not resolve to any node")]
    UnresolvedPin { point: Point },

    // ============ Netlist Validation Errors ============
    /// Floating node (not connected to ground path)
    #[error("Floating node {node} detected - no path to ground")]
    FloatingNode { node: NodeId },

    /// Missing ground node
    #[error("Circuit has no ground node (place a ground and wire it in)")]
    MissingGround,

    // ============ Configuration Errors ============
    /// Invalid generation parameter
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ============ I/O Errors ============
    /// Error reading a layout file
    #[error("Failed to read layout file '{path}': {source}")]
    LayoutReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding a layout document
    #[error("Failed to parse layout: {source}")]
    LayoutParseError {
        #[from]
        source: serde_json::Error,
    },

    /// Error writing the netlist
    #[error("Failed to write netlist '{path}': {source}")]
    NetlistWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SketchnetError {
    /// Create a short-circuit error
    pub fn short_circuit(kind: ComponentKind, node: NodeId) -> Self {
        Self::ShortCircuit { kind, node }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
