//! Loading graph data: one line per drawn station for the visual cross-check.
//!
//! Each line runs from the origin along the station's rate line. `reference`
//! is where the printed line ends (the station's graph extent), `current` is
//! where the station's actual load sits. Nothing here feeds the envelope test.

use loadsheet_core::{LoadPoint, RateLine};
use loadsheet_models::{spec, StationId};
use serde::Serialize;

use crate::station::LoadingStation;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadLine {
    pub station: StationId,
    pub label: &'static str,
    pub rate: RateLine,
    pub reference: LoadPoint,
    pub current: LoadPoint,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoadingGraph {
    pub lines: Vec<LoadLine>,
}

impl LoadingGraph {
    pub fn from_stations(stations: &[LoadingStation]) -> Self {
        let lines = stations
            .iter()
            .filter_map(|st| {
                let extent = spec(st.id).graph_extent?;
                let rate = RateLine::new(st.arm);
                Some(LoadLine {
                    station: st.id,
                    label: st.label,
                    rate,
                    reference: rate.point_at(extent),
                    current: st.point(),
                })
            })
            .collect();
        Self { lines }
    }

    pub fn line(&self, id: StationId) -> Option<&LoadLine> {
        self.lines.iter().find(|l| l.station == id)
    }
}
