//! The sketched layout: placed components and drawn wires.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::snap::PinSnapper;
use super::types::{Component, ComponentKind, Point, Wire};
use crate::config::NetlistConfig;
use crate::error::{Result, SketchnetError};

/// Components and wires in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub wires: Vec<Wire>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a layout from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the layout as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a layout file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SketchnetError::LayoutReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Every point a wire may attach to: component pins in placement order,
    /// then wire endpoints in drawing order.
    pub fn snap_candidates(&self) -> Result<Vec<Point>> {
        let mut candidates = Vec::with_capacity(self.components.len() * 2 + self.wires.len() * 2);
        for component in &self.components {
            candidates.extend(component.pins()?);
        }
        candidates.extend(self.wires.iter().flat_map(|w| w.endpoints()));
        Ok(candidates)
    }

    /// Snap a point onto the nearest pin or wire endpoint.
    pub fn snap(&self, point: Point, config: &NetlistConfig) -> Result<Option<Point>> {
        config.validate()?;
        Ok(PinSnapper::new(config.snap_tolerance).snap(point, self.snap_candidates()?))
    }

    /// Anchors of every ground component.
    pub fn ground_anchors(&self) -> impl Iterator<Item = Point> + '_ {
        self.components
            .iter()
            .filter(|c| c.kind.is_ground())
            .map(|c| c.anchor)
    }

    /// Place a component, quantizing its anchor onto the grid.
    ///
    /// Returns the index of the new component.
    pub fn place(&mut self, kind: ComponentKind, at: Point, config: &NetlistConfig) -> Result<usize> {
        let anchor = Self::grid_anchor(kind, at, config)?;
        self.components.push(Component::new(kind, anchor));
        debug!("placed {} at {}", kind, anchor);
        Ok(self.components.len() - 1)
    }

    /// Move a component to a new grid-quantized anchor.
    pub fn move_component(&mut self, index: usize, to: Point, config: &NetlistConfig) -> Result<()> {
        let kind = self
            .components
            .get(index)
            .ok_or(SketchnetError::ComponentNotFound { index })?
            .kind;
        let anchor = Self::grid_anchor(kind, to, config)?;
        self.components[index].anchor = anchor;
        Ok(())
    }

    /// Quantized anchor for `kind` at `at`, checked so every pin stays in range.
    fn grid_anchor(kind: ComponentKind, at: Point, config: &NetlistConfig) -> Result<Point> {
        config.validate()?;
        let anchor = at
            .quantize(config.grid_size)
            .ok_or(SketchnetError::CoordinateOutOfRange { point: at })?;
        kind.pins(anchor)?;
        Ok(anchor)
    }

    /// Remove a component by index.
    pub fn remove_component(&mut self, index: usize) -> Result<Component> {
        if index >= self.components.len() {
            return Err(SketchnetError::ComponentNotFound { index });
        }
        Ok(self.components.remove(index))
    }

    /// Draw a wire between two points.
    ///
    /// Both endpoints must snap onto an existing pin or wire endpoint, and
    /// must not snap onto the same one. The snapped wire is stored.
    pub fn connect(&mut self, from: Point, to: Point, config: &NetlistConfig) -> Result<Wire> {
        let a = self
            .snap(from, config)?
            .ok_or(SketchnetError::WireNotSnapped { point: from })?;
        let b = self
            .snap(to, config)?
            .ok_or(SketchnetError::WireNotSnapped { point: to })?;

        if a == b {
            return Err(SketchnetError::ZeroLengthWire { point: a });
        }

        let wire = Wire::new(a, b);
        self.wires.push(wire);
        debug!("wire {} -> {}", a, b);
        Ok(wire)
    }

    /// Remove the first wire equal to `wire`. Returns whether one was found.
    pub fn remove_wire(&mut self, wire: &Wire) -> bool {
        match self.wires.iter().position(|w| w == wire) {
            Some(pos) => {
                self.wires.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every component and wire.
    pub fn clear(&mut self) {
        self.components.clear();
        self.wires.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.wires.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NetlistConfig {
        NetlistConfig::default()
    }

    #[test]
    fn test_place_quantizes_anchor() {
        let mut layout = Layout::new();
        let idx = layout
            .place(ComponentKind::Resistor, Point::new(107, 53), &config())
            .unwrap();
        assert_eq!(idx, 0);
        assert_eq!(layout.components[0].anchor, Point::new(100, 40));
    }

    #[test]
    fn test_connect_snaps_endpoints() {
        let mut layout = Layout::new();
        layout.place(ComponentKind::Resistor, Point::new(100, 100), &config()).unwrap();
        layout.place(ComponentKind::Ground, Point::new(200, 100), &config()).unwrap();

        let wire = layout
            .connect(Point::new(135, 104), Point::new(195, 98), &config())
            .unwrap();
        assert_eq!(wire, Wire::new(Point::new(130, 100), Point::new(200, 100)));
        assert_eq!(layout.wires.len(), 1);
    }

    #[test]
    fn test_connect_rejects_unsnapped_endpoint() {
        let mut layout = Layout::new();
        layout.place(ComponentKind::Resistor, Point::new(100, 100), &config()).unwrap();

        let err = layout
            .connect(Point::new(130, 100), Point::new(400, 400), &config())
            .unwrap_err();
        assert!(matches!(err, SketchnetError::WireNotSnapped { point } if point == Point::new(400, 400)));
        assert!(layout.wires.is_empty());
    }

    #[test]
    fn test_connect_rejects_zero_length() {
        let mut layout = Layout::new();
        layout.place(ComponentKind::Resistor, Point::new(100, 100), &config()).unwrap();

        let err = layout
            .connect(Point::new(128, 100), Point::new(133, 101), &config())
            .unwrap_err();
        assert!(matches!(err, SketchnetError::ZeroLengthWire { .. }));
    }

    #[test]
    fn test_connect_to_existing_wire_endpoint() {
        let mut layout = Layout::new();
        layout.place(ComponentKind::Resistor, Point::new(100, 100), &config()).unwrap();
        layout.wires.push(Wire::new(Point::new(130, 100), Point::new(130, 200)));

        let wire = layout
            .connect(Point::new(132, 198), Point::new(70, 100), &config())
            .unwrap();
        assert_eq!(wire.a, Point::new(130, 200));
    }

    #[test]
    fn test_move_and_remove() {
        let mut layout = Layout::new();
        layout.place(ComponentKind::Capacitor, Point::new(0, 0), &config()).unwrap();
        layout.move_component(0, Point::new(45, 45), &config()).unwrap();
        assert_eq!(layout.components[0].anchor, Point::new(40, 40));

        assert!(matches!(
            layout.move_component(3, Point::new(0, 0), &config()),
            Err(SketchnetError::ComponentNotFound { index: 3 })
        ));

        let removed = layout.remove_component(0).unwrap();
        assert_eq!(removed.kind, ComponentKind::Capacitor);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_edits_reject_invalid_config() {
        let bad_grid = NetlistConfig::new().with_grid_size(0);
        let bad_snap = NetlistConfig::new().with_snap_tolerance(0);
        let mut layout = Layout::new();

        assert!(matches!(
            layout.place(ComponentKind::Resistor, Point::new(5, 5), &bad_grid),
            Err(SketchnetError::InvalidConfig { .. })
        ));
        assert!(layout.is_empty());

        layout.place(ComponentKind::Resistor, Point::new(0, 0), &config()).unwrap();
        assert!(matches!(
            layout.move_component(0, Point::new(45, 45), &bad_grid),
            Err(SketchnetError::InvalidConfig { .. })
        ));
        assert_eq!(layout.components[0].anchor, Point::new(0, 0));

        assert!(matches!(
            layout.connect(Point::new(-30, 0), Point::new(30, 0), &bad_snap),
            Err(SketchnetError::InvalidConfig { .. })
        ));
        assert!(layout.wires.is_empty());
    }

    #[test]
    fn test_place_near_edge_is_rejected() {
        let mut layout = Layout::new();
        let err = layout
            .place(ComponentKind::Resistor, Point::new(i32::MAX - 10, 0), &config())
            .unwrap_err();
        assert!(matches!(err, SketchnetError::CoordinateOutOfRange { .. }));
        assert!(layout.is_empty());

        // Ground has a single pin on its anchor and fits anywhere on the grid
        layout.place(ComponentKind::Ground, Point::new(i32::MAX - 10, 0), &config()).unwrap();
        let idx = layout
            .place(ComponentKind::Resistor, Point::new(0, 0), &config())
            .unwrap();
        assert!(matches!(
            layout.move_component(idx, Point::new(0, i32::MIN + 1), &config()),
            Err(SketchnetError::CoordinateOutOfRange { .. })
        ));
        assert_eq!(layout.components[idx].anchor, Point::new(0, 0));
    }

    #[test]
    fn test_remove_wire_matches_endpoint_order() {
        let mut layout = Layout::new();
        let wire = Wire::new(Point::new(0, 0), Point::new(40, 0));
        layout.wires.push(wire);

        assert!(!layout.remove_wire(&Wire::new(wire.b, wire.a)));
        assert!(layout.remove_wire(&wire));
        assert!(layout.wires.is_empty());
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{
            "components": [
                {"kind": "battery", "anchor": {"x": 0, "y": 0}},
                {"kind": "ground", "anchor": {"x": -60, "y": 0}}
            ],
            "wires": [
                {"a": {"x": -30, "y": 0}, "b": {"x": -60, "y": 0}}
            ]
        }"#;
        let layout = Layout::from_json(json).unwrap();
        assert_eq!(layout.components.len(), 2);
        assert_eq!(layout.components[1].kind, ComponentKind::Ground);
        assert_eq!(layout.ground_anchors().collect::<Vec<_>>(), vec![Point::new(-60, 0)]);

        let again = Layout::from_json(&layout.to_json().unwrap()).unwrap();
        assert_eq!(again, layout);
    }

    #[test]
    fn test_clear() {
        let mut layout = Layout::new();
        layout.place(ComponentKind::Inductor, Point::new(0, 0), &config()).unwrap();
        layout.wires.push(Wire::new(Point::new(-30, 0), Point::new(-30, 40)));
        layout.clear();
        assert!(layout.is_empty());
    }
}
