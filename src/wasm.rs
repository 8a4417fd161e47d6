//! WASM bindings for Sketchnet Core.
//!
//! Lets a browser canvas front end hand its sketch over as JSON and get the
//! netlist text back.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmNetlister } from 'sketchnet_core';
//!
//! await init();
//!
//! const layout = JSON.stringify({
//!   components: [
//!     { kind: "resistor", anchor: { x: 100, y: 100 } },
//!     { kind: "ground", anchor: { x: 160, y: 160 } },
//!   ],
//!   wires: [{ a: { x: 130, y: 100 }, b: { x: 160, y: 160 } }],
//! });
//!
//! const netlister = new WasmNetlister(layout);
//! const netlist = netlister.generate(JSON.stringify({ R: "1k" }));
//! ```

use wasm_bindgen::prelude::*;

use crate::config::{ComponentValues, NetlistConfig};
use crate::error::SketchnetError;
use crate::geometry::Layout;
use crate::netlist::NetlistGenerator;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: SketchnetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible netlist generator.
#[wasm_bindgen]
pub struct WasmNetlister {
    layout: Layout,
    generator: NetlistGenerator,
}

#[wasm_bindgen]
impl WasmNetlister {
    /// Create a netlister from a layout JSON document.
    #[wasm_bindgen(constructor)]
    pub fn new(layout_json: &str) -> Result<WasmNetlister, JsValue> {
        Self::with_config(layout_json, crate::DEFAULT_SNAP_TOLERANCE, crate::DEFAULT_GRID_SIZE)
    }

    /// Create a netlister with custom snap tolerance and grid size.
    #[wasm_bindgen]
    pub fn with_config(
        layout_json: &str,
        snap_tolerance: i32,
        grid_size: i32,
    ) -> Result<WasmNetlister, JsValue> {
        let layout = Layout::from_json(layout_json).map_err(to_js)?;
        let config = NetlistConfig::new()
            .with_snap_tolerance(snap_tolerance)
            .with_grid_size(grid_size);
        let generator = NetlistGenerator::with_config(config).map_err(to_js)?;
        Ok(WasmNetlister { layout, generator })
    }

    /// Replace the layout, e.g. after the user edits the sketch.
    #[wasm_bindgen]
    pub fn set_layout(&mut self, layout_json: &str) -> Result<(), JsValue> {
        self.layout = Layout::from_json(layout_json).map_err(to_js)?;
        Ok(())
    }

    /// Generate the netlist.
    ///
    /// `values_json` maps prefixes to values, e.g. `{"R": "1k"}`; pass `"{}"`
    /// for defaults. Returns an empty string when there is nothing to simulate.
    #[wasm_bindgen]
    pub fn generate(&self, values_json: &str) -> Result<String, JsValue> {
        let values = ComponentValues::from_json(values_json).map_err(to_js)?;
        let netlist = self
            .generator
            .generate(&self.layout, &values)
            .map_err(to_js)?;
        Ok(netlist.to_string())
    }
}
