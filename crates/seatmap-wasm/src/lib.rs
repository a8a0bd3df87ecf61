// WASM bindings for the seatmap guest lookup engine.
//
// Provides a `WasmSeatmap` class exported via wasm-bindgen that wraps the
// `SeatmapHandle` from seatmap-engine. Lookups and the layout are serialized
// to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const text = await (await fetch("guests.csv")).text();
//   const seatmap = new WasmSeatmap(text);         // throws on a bad roster
//   seatmap.lookup("ana tran", "bride");          // => { guestName: "Anna Tran", ... }
//   seatmap.lookup("zzzz", "bride");              // => null (no match)
//   seatmap.lookup("   ", "bride");               // => undefined (nothing searched)
//   seatmap.layout();                             // => { width: 1000, height: 800, ... }
//   seatmap.skippedRows();                        // => [{ line: 9, reason: "..." }]
//   seatmap.setLanguage("vi");
//   seatmap.reload(newText);                      // throws, keeps the old roster

use serde::Serialize;
use wasm_bindgen::prelude::*;

use seatmap_core::{Side, VenueLayout};
use seatmap_engine::handle::{GuestView, SeatmapError, SeatmapHandle};
use seatmap_engine::locale::Locale;
use seatmap_engine::matcher::SearchOutcome;
use seatmap_engine::roster::{RosterOptions, SkippedRow};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a found guest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGuest {
    guest_name: String,
    table_id: u32,
    table_label: String,
    table_x: i32,
    table_y: i32,
    seat_label: String,
    tablemates: Vec<String>,
    approximate: bool,
    notice: Option<String>,
}

/// Serializable representation of a venue fixture.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFixture {
    name: &'static str,
    label: &'static str,
    left: i32,
    top: i32,
    width: u32,
    height: u32,
}

/// Serializable representation of a positioned table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTable {
    id: u32,
    name: String,
    label: String,
    x: i32,
    y: i32,
    size: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLayout {
    width: u32,
    height: u32,
    fixtures: Vec<JsFixture>,
    tables: Vec<JsTable>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSkippedRow {
    line: usize,
    reason: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn guest_to_js(view: GuestView) -> JsGuest {
    JsGuest {
        guest_name: view.guest_name,
        table_id: view.table_id,
        table_label: view.table_label,
        table_x: view.table_position.x,
        table_y: view.table_position.y,
        seat_label: view.seat_label,
        tablemates: view.tablemates,
        approximate: view.approximate,
        notice: view.notice,
    }
}

/// `None` when the query was blank, `Some(None)` when nothing matched.
fn lookup_to_js(handle: &SeatmapHandle, query: &str, side: Side) -> Option<Option<JsGuest>> {
    match handle.search(query, side) {
        SearchOutcome::NoSearch => None,
        outcome => Some(handle.outcome_view(&outcome, query).map(guest_to_js)),
    }
}

fn layout_to_js(handle: &SeatmapHandle) -> JsLayout {
    let layout: &VenueLayout = handle.layout();
    JsLayout {
        width: layout.width,
        height: layout.height,
        fixtures: layout
            .fixtures
            .iter()
            .map(|f| {
                let (left, top, width, height) = f.bounds();
                JsFixture {
                    name: f.name,
                    label: handle.fixture_label(f),
                    left,
                    top,
                    width,
                    height,
                }
            })
            .collect(),
        tables: layout
            .tables
            .iter()
            .map(|t| JsTable {
                id: t.id,
                name: t.name.clone(),
                label: t.map_label(),
                x: t.position.x,
                y: t.position.y,
                size: t.size,
            })
            .collect(),
    }
}

fn skipped_to_js(rows: &[SkippedRow]) -> Vec<JsSkippedRow> {
    rows.iter()
        .map(|row| JsSkippedRow {
            line: row.line,
            reason: row.reason.to_string(),
        })
        .collect()
}

fn seatmap_error_to_js(e: SeatmapError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_side(side: &str) -> Result<Side, JsError> {
    side.parse::<Side>().map_err(|e| JsError::new(&format!("{e}")))
}

// ============================================================================
// WasmSeatmap
// ============================================================================

/// Guest lookup engine for WebAssembly.
///
/// Holds one parsed roster and its venue layout. The page fetches the
/// roster text itself and hands it over; a failed fetch never reaches here.
#[wasm_bindgen]
pub struct WasmSeatmap {
    handle: SeatmapHandle,
}

#[wasm_bindgen]
impl WasmSeatmap {
    /// Parse roster text and build the venue layout.
    ///
    /// Throws with the user-facing message when the roster is unusable.
    #[wasm_bindgen(constructor)]
    pub fn new(csv_text: &str) -> Result<WasmSeatmap, JsError> {
        let handle = SeatmapHandle::from_text(csv_text, RosterOptions::default())
            .map_err(seatmap_error_to_js)?;
        Ok(WasmSeatmap { handle })
    }

    /// Replace the roster. On error the previous roster stays loaded.
    pub fn reload(&mut self, csv_text: &str) -> Result<(), JsError> {
        self.handle
            .reload_text(csv_text)
            .map_err(seatmap_error_to_js)
    }

    /// Look up a guest on `side` (`"bride"` or `"groom"`).
    ///
    /// Returns a guest object, `null` when nothing matched, or `undefined`
    /// when the query is blank and no result should be shown at all.
    pub fn lookup(&self, query: &str, side: &str) -> Result<JsValue, JsError> {
        let side = parse_side(side)?;
        match lookup_to_js(&self.handle, query, side) {
            Some(Some(guest)) => to_js(&guest),
            Some(None) => Ok(JsValue::NULL),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Canvas size, fixtures and positioned tables.
    pub fn layout(&self) -> Result<JsValue, JsError> {
        to_js(&layout_to_js(&self.handle))
    }

    /// Rows skipped by the last successful load.
    #[wasm_bindgen(js_name = "skippedRows")]
    pub fn skipped_rows(&self) -> Result<JsValue, JsError> {
        to_js(&skipped_to_js(self.handle.skipped_rows()))
    }

    /// Number of guests in the loaded roster.
    #[wasm_bindgen(js_name = "guestCount")]
    pub fn guest_count(&self) -> usize {
        self.handle.guests().len()
    }

    /// Set the display language (`"en"` or `"vi"`).
    #[wasm_bindgen(js_name = "setLanguage")]
    pub fn set_language(&mut self, code: &str) -> Result<(), JsError> {
        let locale = code.parse::<Locale>().map_err(|e| JsError::new(&format!("{e}")))?;
        self.handle.set_locale(locale);
        Ok(())
    }

    /// Set the similarity threshold (clamped to 0..=1).
    #[wasm_bindgen(js_name = "setThreshold")]
    pub fn set_threshold(&mut self, threshold: f64) {
        self.handle.set_threshold(threshold);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        SeatmapHandle::get_version().to_string()
    }
}
