//! The loading session.
//!
//! A [`LoadSheet`] owns the five stations. Every edit touches exactly one
//! field of one station; the balance sheet and envelope status are then
//! re-derived in full before the call returns.

use log::{debug, trace};
use loadsheet_core::EnvelopePolygon;
use loadsheet_models::{StationId, C150_STATIONS};
use serde::{Deserialize, Serialize};

use crate::balance::{BalanceSheet, EnvelopeStatus};
use crate::config::EngineConfig;
use crate::graph::LoadingGraph;
use crate::input::validate;
use crate::station::LoadingStation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Weight,
    Arm,
}

/// A single raw keystroke-level change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edit {
    pub station: StationId,
    pub field: Field,
    pub raw: String,
}

impl Edit {
    pub fn weight(station: StationId, raw: impl Into<String>) -> Self {
        Self { station, field: Field::Weight, raw: raw.into() }
    }

    pub fn arm(station: StationId, raw: impl Into<String>) -> Self {
        Self { station, field: Field::Arm, raw: raw.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadSheet {
    stations: [LoadingStation; 5],
    config: EngineConfig,
}

impl Default for LoadSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadSheet {
    /// Empty sheet against the default envelope.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            stations: C150_STATIONS.map(|spec| LoadingStation::new(&spec)),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn station(&self, id: StationId) -> &LoadingStation {
        &self.stations[id.index()]
    }

    pub fn stations(&self) -> &[LoadingStation] {
        &self.stations
    }

    /// Apply one edit and return the re-derived sheet.
    ///
    /// Malformed text leaves the station untouched; values over the station's
    /// ceiling are clamped to it. Neither is reported to the caller.
    pub fn apply(&mut self, edit: &Edit) -> BalanceSheet {
        let id = edit.station;
        let max = match edit.field {
            Field::Weight => self.stations[id.index()].max_weight,
            Field::Arm => None,
        };
        let value = match validate(&edit.raw, max) {
            Ok(value) => value,
            Err(err) => {
                trace!("{id}: ignoring {:?} edit: {err}", edit.field);
                return self.balance_sheet();
            }
        };

        match edit.field {
            Field::Weight => {
                let typed = validate(&edit.raw, None).unwrap_or(value);
                if value < typed {
                    debug!("{id}: weight {typed} clamped to {value}");
                }
                self.stations[id.index()].set_weight(value);
                if id == StationId::Fuel {
                    self.track_fuel_on_board();
                }
            }
            Field::Arm => {
                let station = &mut self.stations[id.index()];
                if station.arm_editable {
                    station.set_arm(value);
                } else {
                    trace!("{id}: arm is fixed at {}, edit ignored", station.arm);
                }
            }
        }

        let sheet = self.balance_sheet();
        debug!(
            "recomputed: auw={:.2} moment={:.2} takeoff cog={} landing={:.2}/{:.2} cog={}",
            sheet.total_weight,
            sheet.total_moment,
            sheet.takeoff_cog,
            sheet.landing_weight,
            sheet.landing_moment,
            sheet.landing_cog,
        );
        sheet
    }

    /// Weight edit for one station.
    pub fn update_station(&mut self, id: StationId, raw: &str) -> BalanceSheet {
        self.apply(&Edit::weight(id, raw))
    }

    /// Arm edit. A no-op for stations with a fixed arm.
    pub fn update_arm(&mut self, id: StationId, raw: &str) -> BalanceSheet {
        self.apply(&Edit::arm(id, raw))
    }

    /// Planned burn, capped at the fuel currently on board.
    pub fn update_fuel_burn(&mut self, raw: &str) -> BalanceSheet {
        self.update_station(StationId::FuelBurn, raw)
    }

    pub fn balance_sheet(&self) -> BalanceSheet {
        BalanceSheet::derive(&self.stations)
    }

    /// Test both points against `envelope`.
    pub fn envelope_status(&self, envelope: &EnvelopePolygon) -> EnvelopeStatus {
        EnvelopeStatus::evaluate(&self.balance_sheet(), envelope)
    }

    /// Test both points against the configured envelope.
    pub fn status(&self) -> EnvelopeStatus {
        self.envelope_status(&self.config.envelope)
    }

    pub fn loading_graph(&self) -> LoadingGraph {
        LoadingGraph::from_stations(&self.stations)
    }

    // The burn ceiling is the fuel on board, so it moves with every fuel edit.
    fn track_fuel_on_board(&mut self) {
        let fuel = self.stations[StationId::Fuel.index()].weight;
        let burn = &mut self.stations[StationId::FuelBurn.index()];
        let before = burn.weight;
        if burn.set_max_weight(fuel) {
            debug!("fuel burn {before} re-clamped to fuel on board {fuel}");
        }
    }
}
