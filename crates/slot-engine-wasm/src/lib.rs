//! WASM bindings for slot-engine.
//!
//! Exposes slot computation and operating-hours validation to the Express API
//! and the React booking calendar via `wasm-bindgen`. Requests and results
//! cross the boundary as JSON strings in the same camelCase shape the API
//! already stores (see `slot_engine::request`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::{first_available_slot, OperatingHours, SlotRequest};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in / JSON-out core, kept free of JsValue so it runs natively in tests
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn compute_slots_json(request_json: &str) -> Result<String, String> {
    let request = SlotRequest::from_json(request_json).map_err(|e| e.to_string())?;
    let slots = request.evaluate().map_err(|e| e.to_string())?;
    to_json(&slots)
}

fn next_available_slot_json(request_json: &str) -> Result<String, String> {
    let request = SlotRequest::from_json(request_json).map_err(|e| e.to_string())?;
    let slots = request.evaluate().map_err(|e| e.to_string())?;
    to_json(&first_available_slot(&slots))
}

fn validate_operating_hours_json(hours_json: &str) -> Result<(), String> {
    let hours: OperatingHours = serde_json::from_str(hours_json)
        .map_err(|e| format!("Invalid operating hours JSON: {}", e))?;
    hours.validate().map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute every candidate slot for a request.
///
/// `request_json` is a slot request object (`operatingHours`, `date` or
/// `weekday`, `serviceDurationMinutes`, optional `bookings` and
/// `strideMinutes`). Returns a JSON array of `{startTime, endTime, available}`.
#[wasm_bindgen(js_name = "computeSlots")]
pub fn compute_slots(request_json: &str) -> Result<String, JsValue> {
    compute_slots_json(request_json).map_err(|e| JsValue::from_str(&e))
}

/// The earliest available slot for a request as a JSON object, or `"null"`.
#[wasm_bindgen(js_name = "nextAvailableSlot")]
pub fn next_available_slot(request_json: &str) -> Result<String, JsValue> {
    next_available_slot_json(request_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate a vendor's weekly operating-hours object before it is saved.
///
/// Throws with a description of the first problem found.
#[wasm_bindgen(js_name = "validateOperatingHours")]
pub fn validate_operating_hours(hours_json: &str) -> Result<(), JsValue> {
    validate_operating_hours_json(hours_json).map_err(|e| JsValue::from_str(&e))
}
