//! WASM bindings for ElectraCalc Core.
//!
//! This module exposes the bidirectional solver to browser hosts, which
//! render the four fields as form inputs and push every edit through
//! [`WasmOhmSolver::set_field`].
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmOhmSolver } from 'electracalc_core';
//!
//! await init();
//!
//! const solver = new WasmOhmSolver();
//! solver.set_field('voltage', '12');
//! solver.set_field('current', '3');
//! solver.display('resistance');  // "4.00"
//! solver.display('power');       // "36.00"
//! ```

use wasm_bindgen::prelude::*;

use crate::solver::{Field, OhmSolver};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible bidirectional Ohm's-law solver.
///
/// Field names are the lowercase strings `voltage`, `current`,
/// `resistance` and `power` (single letters also work).
#[wasm_bindgen]
pub struct WasmOhmSolver {
    solver: OhmSolver,
}

#[wasm_bindgen]
impl WasmOhmSolver {
    /// Create a solver with all four fields unset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmOhmSolver {
        WasmOhmSolver {
            solver: OhmSolver::new(),
        }
    }

    /// Apply a user edit to the named field.
    ///
    /// Empty text clears the field; unparseable text raises a JavaScript
    /// error and leaves all fields unchanged.
    #[wasm_bindgen]
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field = Field::from_name(field).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.solver
            .set_field(field, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The named field formatted at its display precision, or `undefined`.
    #[wasm_bindgen]
    pub fn display(&self, field: &str) -> Result<Option<String>, JsValue> {
        let field = Field::from_name(field).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.solver.display(field))
    }

    /// Whether the named field is one of the two driving edits.
    #[wasm_bindgen]
    pub fn recently_edited(&self, field: &str) -> Result<bool, JsValue> {
        let field = Field::from_name(field).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.solver.recently_edited(field))
    }

    /// Clear all four fields.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.solver.reset();
    }
}

impl Default for WasmOhmSolver {
    fn default() -> Self {
        Self::new()
    }
}
