//! WASM bindings for slot-engine.
//!
//! Exposes slot computation and viewer-zone rendering to the booking front-end
//! via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Deserialize;
use slot_engine::query::{parse_instant, SlotDto};
use slot_engine::CandidateSlot;
use wasm_bindgen::prelude::*;

/// Slots as handed back by JavaScript, e.g. the output of `computeSlots`.
#[derive(Deserialize)]
struct SlotInput {
    start: String,
    end: String,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a JSON array of `{start, end}` slot objects into `Vec<CandidateSlot>`.
fn parse_slots_json(json: &str) -> Result<Vec<CandidateSlot>, JsValue> {
    let inputs: Vec<SlotInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid slots JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_instant(&input.start).map_err(js_err)?;
            let end = parse_instant(&input.end).map_err(js_err)?;
            Ok(CandidateSlot { start, end })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the bookable slots for one host-local date.
///
/// `query_json` is a `{date, policy, busyIntervals, slotDurationMinutes?}` object.
/// Returns a JSON array of `{start, end}` objects with RFC 3339 UTC strings,
/// ascending by start. An empty array means no availability.
#[wasm_bindgen(js_name = "computeSlots")]
pub fn compute_slots(query_json: &str) -> Result<String, JsValue> {
    slot_engine::run_query_json(query_json).map_err(js_err)
}

/// Compute the bookable slots for every host-local date from `from` to `to`.
///
/// The query's own `date` is ignored.
#[wasm_bindgen(js_name = "computeSlotsRange")]
pub fn compute_slots_range(query_json: &str, from: &str, to: &str) -> Result<String, JsValue> {
    let query: slot_engine::SlotQuery = serde_json::from_str(query_json).map_err(js_err)?;
    let policy = query.policy.to_policy().map_err(js_err)?;
    let busy = query.busy().map_err(js_err)?;

    let slots = slot_engine::compute_slots_range(from, to, &policy, &busy, query.duration_minutes())
        .map_err(js_err)?;
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Render slots in the viewer's IANA timezone.
///
/// `slots_json` is a JSON array of `{start, end}` objects. Returns a JSON array
/// of `{start, end, localDate, weekday}` objects with the viewer's offset.
#[wasm_bindgen(js_name = "localizeSlots")]
pub fn localize_slots(slots_json: &str, viewer_tz: &str) -> Result<String, JsValue> {
    let slots = parse_slots_json(slots_json)?;
    let local = slot_engine::localize_slots(&slots, viewer_tz).map_err(js_err)?;

    serde_json::to_string(&local)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // JsValue cannot be constructed off wasm32, so only the Ok paths are
    // exercised natively.

    const QUERY: &str = r#"{
        "date": "2026-03-04",
        "policy": {"timezone": "Asia/Tokyo", "workStart": "09:00", "workEnd": "17:00", "workDays": [1,2,3,4,5]},
        "busyIntervals": [{"start": "2026-03-04T01:00:00Z", "end": "2026-03-04T02:00:00Z"}]
    }"#;

    #[test]
    fn compute_returns_json_array() {
        let out = compute_slots(QUERY).unwrap();
        let slots: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0]["start"], "2026-03-04T00:00:00Z");
    }

    #[test]
    fn compute_output_feeds_localize() {
        let out = compute_slots(QUERY).unwrap();
        let local = localize_slots(&out, "America/Los_Angeles").unwrap();
        let slots: Vec<serde_json::Value> = serde_json::from_str(&local).unwrap();
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0]["localDate"], "2026-03-03");
    }

    #[test]
    fn range_spans_days() {
        let out = compute_slots_range(QUERY, "2026-03-02", "2026-03-06").unwrap();
        let slots: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(slots.len(), 39);
    }
}
