// crates/loadsheet-ffi-wasm/src/lib.rs
//
// WASM bindings: one load-sheet session per `JsLoadSheet`.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;

// --- our crates ---
use loadsheet_engine::{
    BalanceSheet, Edit, EngineConfig, EnvelopePolygon, EnvelopeStatus, LoadPoint, LoadSheet,
    LoadingGraph, LoadingStation, StationId, StationParseError,
};

// Better panic messages in browser console
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/* --------------------------- Shared DTOs (JS) --------------------------- */

/// A chart marker: the point plus its legend text, e.g. `"Takeoff (1.05)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsChartPoint {
    pub moment: f64,
    pub weight: f64,
    pub name: String,
}

impl JsChartPoint {
    fn new(point: LoadPoint, kind: &str, cog: &str) -> Self {
        Self {
            moment: point.moment,
            weight: point.weight,
            name: format!("{kind} ({cog})"),
        }
    }
}

/// Everything a UI needs to redraw after an edit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsReport {
    pub sheet: BalanceSheet,
    pub status: EnvelopeStatus,
    pub takeoff: JsChartPoint,
    pub landing: JsChartPoint,
    pub stations: Vec<LoadingStation>,
}

fn build_report(sheet: &LoadSheet) -> JsReport {
    let balance = sheet.balance_sheet();
    JsReport {
        status: sheet.status(),
        takeoff: JsChartPoint::new(balance.takeoff_point(), "Takeoff", &balance.takeoff_cog),
        landing: JsChartPoint::new(balance.landing_point(), "Landing", &balance.landing_cog),
        stations: sheet.stations().to_vec(),
        sheet: balance,
    }
}

fn station_id(name: &str) -> Result<StationId, JsValue> {
    name.parse().map_err(|e: StationParseError| JsValue::from_str(&e.to_string()))
}

/* ------------------------------- Session -------------------------------- */

#[wasm_bindgen]
pub struct JsLoadSheet {
    inner: LoadSheet,
}

#[wasm_bindgen]
impl JsLoadSheet {
    /// Empty sheet against the default envelope.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsLoadSheet {
        JsLoadSheet { inner: LoadSheet::new() }
    }

    /// Sheet configured from JSON, e.g. `{"envelope":"hexagon"}`.
    pub fn with_config(json: &str) -> Result<JsLoadSheet, JsValue> {
        let config = EngineConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsLoadSheet { inner: LoadSheet::with_config(config) })
    }

    /// Weight edit. `station` is e.g. "fuel", "pilotPax", "fuelBurn".
    pub fn update_station(&mut self, station: &str, raw: &str) -> Result<JsValue, JsValue> {
        let id = station_id(station)?;
        self.inner.update_station(id, raw);
        swb::to_value(&build_report(&self.inner)).map_err(|e| e.into())
    }

    pub fn update_arm(&mut self, station: &str, raw: &str) -> Result<JsValue, JsValue> {
        let id = station_id(station)?;
        self.inner.update_arm(id, raw);
        swb::to_value(&build_report(&self.inner)).map_err(|e| e.into())
    }

    pub fn update_fuel_burn(&mut self, raw: &str) -> Result<JsValue, JsValue> {
        self.inner.update_fuel_burn(raw);
        swb::to_value(&build_report(&self.inner)).map_err(|e| e.into())
    }

    /// `{ station, field: "weight" | "arm", raw }`
    pub fn apply(&mut self, edit: JsValue) -> Result<JsValue, JsValue> {
        let edit: Edit = swb::from_value(edit)?;
        self.inner.apply(&edit);
        swb::to_value(&build_report(&self.inner)).map_err(|e| e.into())
    }

    pub fn report(&self) -> Result<JsValue, JsValue> {
        swb::to_value(&build_report(&self.inner)).map_err(|e| e.into())
    }

    pub fn balance_sheet(&self) -> Result<JsValue, JsValue> {
        swb::to_value(&self.inner.balance_sheet()).map_err(|e| e.into())
    }

    /// Status against a caller-supplied outline: `[{ moment, weight }, ...]`.
    pub fn envelope_status(&self, polygon: JsValue) -> Result<JsValue, JsValue> {
        let envelope: EnvelopePolygon = swb::from_value(polygon)?;
        swb::to_value(&self.inner.envelope_status(&envelope)).map_err(|e| e.into())
    }

    /// Vertices of the configured envelope, for drawing.
    pub fn envelope(&self) -> Result<JsValue, JsValue> {
        swb::to_value(self.inner.config().envelope.vertices()).map_err(|e| e.into())
    }

    pub fn loading_graph(&self) -> Result<JsValue, JsValue> {
        let graph: LoadingGraph = self.inner.loading_graph();
        swb::to_value(&graph).map_err(|e| e.into())
    }
}

impl Default for JsLoadSheet {
    fn default() -> Self {
        Self::new()
    }
}

/* -------------------------------- tests -------------------------------- */
