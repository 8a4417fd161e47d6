//! Generation parameters and component values.

use std::collections::BTreeMap;

use crate::error::{Result, SketchnetError};
use crate::geometry::Prefix;
use crate::{DEFAULT_GRID_SIZE, DEFAULT_SNAP_TOLERANCE};

/// Configuration for layout editing and netlist generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetlistConfig {
    /// Manhattan radius (exclusive) for snapping points onto pins.
    pub snap_tolerance: i32,
    /// Placement grid pitch, also the per-axis radius (exclusive) within
    /// which two points count as the same electrical point.
    pub grid_size: i32,
}

impl Default for NetlistConfig {
    fn default() -> Self {
        Self {
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl NetlistConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snap tolerance.
    pub fn with_snap_tolerance(mut self, snap_tolerance: i32) -> Self {
        self.snap_tolerance = snap_tolerance;
        self
    }

    /// Set the grid size.
    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Reject non-positive parameters.
    pub fn validate(&self) -> Result<()> {
        if self.snap_tolerance <= 0 {
            return Err(SketchnetError::invalid_config(format!(
                "snap tolerance must be positive, got {}",
                self.snap_tolerance
            )));
        }
        if self.grid_size <= 0 {
            return Err(SketchnetError::invalid_config(format!(
                "grid size must be positive, got {}",
                self.grid_size
            )));
        }
        Ok(())
    }
}

/// Caller-supplied element values keyed by netlist prefix.
///
/// Values are emitted verbatim. A prefix with no override, or with a blank
/// one, falls back to [`Prefix::default_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentValues {
    overrides: BTreeMap<Prefix, String>,
}

impl ComponentValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a prefix.
    pub fn with(mut self, prefix: Prefix, value: impl Into<String>) -> Self {
        self.set(prefix, value);
        self
    }

    pub fn set(&mut self, prefix: Prefix, value: impl Into<String>) {
        self.overrides.insert(prefix, value.into());
    }

    /// Value to emit for a prefix.
    pub fn get(&self, prefix: Prefix) -> &str {
        match self.overrides.get(&prefix) {
            Some(value) if !value.trim().is_empty() => value.as_str(),
            _ => prefix.default_value(),
        }
    }

    /// Parse a JSON object such as `{"R": "1k", "V": "9"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: BTreeMap<Prefix, String> = serde_json::from_str(json)?;
        Ok(Self { overrides })
    }
}

impl From<BTreeMap<Prefix, String>> for ComponentValues {
    fn from(overrides: BTreeMap<Prefix, String>) -> Self {
        Self { overrides }
    }
}
