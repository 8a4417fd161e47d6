//! Core types for the geometric model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchnetError};

/// An integer pixel coordinate on the canvas.
///
/// Equality is exact. Proximity is decided separately by the snapper and
/// the node assigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point.
    ///
    /// Computed in `i64`, so any two coordinates are comparable.
    pub fn manhattan_distance(&self, other: Point) -> i64 {
        (i64::from(self.x) - i64::from(other.x)).abs() + (i64::from(self.y) - i64::from(other.y)).abs()
    }

    /// Translate by a pin offset, or `None` if the result leaves the canvas.
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Option<Point> {
        Some(Point::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// Quantize down onto the grid (floor division on both axes).
    ///
    /// Returns `None` if `grid_size` is not positive or the floored
    /// coordinate does not fit in an `i32`.
    pub fn quantize(&self, grid_size: i32) -> Option<Point> {
        if grid_size <= 0 {
            return None;
        }
        let grid = i64::from(grid_size);
        let floor = |v: i32| i32::try_from(i64::from(v).div_euclid(grid) * grid).ok();
        Some(Point::new(floor(self.x)?, floor(self.y)?))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Netlist line prefix for an electrical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prefix {
    /// Resistor
    R,
    /// Voltage source (battery)
    V,
    /// Capacitor
    C,
    /// Inductor
    L,
}

impl Prefix {
    /// The prefix letter.
    pub fn as_char(&self) -> char {
        match self {
            Prefix::R => 'R',
            Prefix::V => 'V',
            Prefix::C => 'C',
            Prefix::L => 'L',
        }
    }

    /// Parse a prefix from its letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Prefix::R),
            'V' => Some(Prefix::V),
            'C' => Some(Prefix::C),
            'L' => Some(Prefix::L),
            _ => None,
        }
    }

    /// Value used when the caller supplies no override.
    pub fn default_value(&self) -> &'static str {
        match self {
            Prefix::R => "100",
            Prefix::V => "5",
            Prefix::C => "1e-6",
            Prefix::L => "1e-3",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Component kinds that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Resistor,
    Battery,
    Capacitor,
    Inductor,
    Voltmeter,
    Ammeter,
    Ground,
}

/// Static per-kind data: name, pin geometry, and netlist prefix.
#[derive(Debug)]
pub struct KindInfo {
    pub name: &'static str,
    /// Pin offsets relative to the anchor, in pin order
    pub pin_offsets: &'static [(i32, i32)],
    /// Netlist prefix, `None` for kinds that never produce a line
    pub prefix: Option<Prefix>,
}

const TWO_TERMINAL_PINS: &[(i32, i32)] = &[(-30, 0), (30, 0)];
const METER_PINS: &[(i32, i32)] = &[(-40, 0), (40, 0)];
const GROUND_PINS: &[(i32, i32)] = &[(0, 0)];

static RESISTOR: KindInfo = KindInfo {
    name: "resistor",
    pin_offsets: TWO_TERMINAL_PINS,
    prefix: Some(Prefix::R),
};
static BATTERY: KindInfo = KindInfo {
    name: "battery",
    pin_offsets: TWO_TERMINAL_PINS,
    prefix: Some(Prefix::V),
};
static CAPACITOR: KindInfo = KindInfo {
    name: "capacitor",
    pin_offsets: TWO_TERMINAL_PINS,
    prefix: Some(Prefix::C),
};
static INDUCTOR: KindInfo = KindInfo {
    name: "inductor",
    pin_offsets: TWO_TERMINAL_PINS,
    prefix: Some(Prefix::L),
};
static VOLTMETER: KindInfo = KindInfo {
    name: "voltmeter",
    pin_offsets: METER_PINS,
    prefix: None,
};
static AMMETER: KindInfo = KindInfo {
    name: "ammeter",
    pin_offsets: METER_PINS,
    prefix: None,
};
static GROUND: KindInfo = KindInfo {
    name: "ground",
    pin_offsets: GROUND_PINS,
    prefix: None,
};

impl ComponentKind {
    /// Every placeable kind.
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Resistor,
        ComponentKind::Battery,
        ComponentKind::Capacitor,
        ComponentKind::Inductor,
        ComponentKind::Voltmeter,
        ComponentKind::Ammeter,
        ComponentKind::Ground,
    ];

    /// Look up the static table entry for this kind.
    pub fn info(&self) -> &'static KindInfo {
        match self {
            ComponentKind::Resistor => &RESISTOR,
            ComponentKind::Battery => &BATTERY,
            ComponentKind::Capacitor => &CAPACITOR,
            ComponentKind::Inductor => &INDUCTOR,
            ComponentKind::Voltmeter => &VOLTMETER,
            ComponentKind::Ammeter => &AMMETER,
            ComponentKind::Ground => &GROUND,
        }
    }

    /// Netlist prefix, if this kind is a two-terminal electrical element.
    pub fn prefix(&self) -> Option<Prefix> {
        self.info().prefix
    }

    pub fn is_ground(&self) -> bool {
        *self == ComponentKind::Ground
    }

    /// Pin positions for a component of this kind anchored at `anchor`.
    ///
    /// Fails with [`SketchnetError::CoordinateOutOfRange`] when a pin would
    /// fall outside the `i32` coordinate space.
    pub fn pins(&self, anchor: Point) -> Result<Vec<Point>> {
        self.info()
            .pin_offsets
            .iter()
            .map(|&offset| {
                anchor
                    .offset(offset)
                    .ok_or(SketchnetError::CoordinateOutOfRange { point: anchor })
            })
            .collect()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().name)
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.info().name == name)
            .ok_or_else(|| format!("unknown component kind '{}'", s.trim()))
    }
}

/// A placed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub kind: ComponentKind,
    pub anchor: Point,
}

impl Component {
    pub fn new(kind: ComponentKind, anchor: Point) -> Self {
        Self { kind, anchor }
    }

    /// Pin positions in pin order.
    pub fn pins(&self) -> Result<Vec<Point>> {
        self.kind.pins(self.anchor)
    }
}

/// A wire segment between two endpoints.
///
/// Direction carries no meaning electrically, but endpoint order is kept
/// so that removal matches the exact wire that was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    pub a: Point,
    pub b: Point,
}

impl Wire {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_terminal_pins() {
        let pins = ComponentKind::Battery.pins(Point::new(0, 0)).unwrap();
        assert_eq!(pins, vec![Point::new(-30, 0), Point::new(30, 0)]);
    }

    #[test]
    fn test_meter_and_ground_pins() {
        let anchor = Point::new(100, 40);
        assert_eq!(
            ComponentKind::Ammeter.pins(anchor).unwrap(),
            vec![Point::new(60, 40), Point::new(140, 40)]
        );
        assert_eq!(ComponentKind::Ground.pins(anchor).unwrap(), vec![anchor]);
    }

    #[test]
    fn test_prefix_table() {
        assert_eq!(ComponentKind::Resistor.prefix(), Some(Prefix::R));
        assert_eq!(ComponentKind::Battery.prefix(), Some(Prefix::V));
        assert_eq!(ComponentKind::Capacitor.prefix(), Some(Prefix::C));
        assert_eq!(ComponentKind::Inductor.prefix(), Some(Prefix::L));
        assert_eq!(ComponentKind::Voltmeter.prefix(), None);
        assert_eq!(ComponentKind::Ground.prefix(), None);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(" Resistor ".parse::<ComponentKind>(), Ok(ComponentKind::Resistor));
        assert_eq!("ground".parse::<ComponentKind>(), Ok(ComponentKind::Ground));
        assert!("diode".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_quantize_floors_negative_coordinates() {
        assert_eq!(Point::new(39, 41).quantize(20), Some(Point::new(20, 40)));
        assert_eq!(Point::new(-1, -21).quantize(20), Some(Point::new(-20, -40)));
    }

    #[test]
    fn test_quantize_rejects_bad_grid_and_overflow() {
        assert_eq!(Point::new(5, 5).quantize(0), None);
        assert_eq!(Point::new(5, 5).quantize(-20), None);
        // Flooring i32::MIN + 1 onto a 20px grid lands below i32::MIN
        assert_eq!(Point::new(i32::MIN + 1, 0).quantize(20), None);
        assert_eq!(Point::new(i32::MAX, 0).quantize(1), Some(Point::new(i32::MAX, 0)));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Point::new(0, 0).manhattan_distance(Point::new(-3, 4)), 7);
    }

    #[test]
    fn test_manhattan_distance_across_full_range() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert_eq!(a.manhattan_distance(b), 2 * (u32::MAX as i64));
    }

    #[test]
    fn test_pins_past_edge_are_rejected() {
        let anchor = Point::new(i32::MAX - 10, 0);
        let err = ComponentKind::Resistor.pins(anchor).unwrap_err();
        assert!(matches!(err, SketchnetError::CoordinateOutOfRange { point } if point == anchor));
        // A ground pin sits on its anchor, so any anchor works
        assert_eq!(ComponentKind::Ground.pins(Point::new(i32::MAX, i32::MIN)).unwrap().len(), 1);
    }
}
