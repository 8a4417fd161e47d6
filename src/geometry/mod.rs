//! Geometric model of a sketched circuit.
//!
//! A [`Layout`] is an ordered list of placed components and drawn wires.
//! Pins are not stored; they are derived from a component's kind and anchor
//! through the per-kind table in [`ComponentKind::info`]. The [`PinSnapper`]
//! resolves loose points onto known pins and wire endpoints.

mod layout;
mod snap;
mod types;

pub use layout::Layout;
pub use snap::PinSnapper;
pub use types::*;
