//! One loading point: weight, arm and the moment derived from them.

use loadsheet_core::{moment, LoadPoint};
use loadsheet_models::{StationId, StationSpec, WeightLimit};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingStation {
    pub id: StationId,
    pub label: &'static str,
    pub weight: f64, // kg
    pub arm: f64,    // m
    pub moment: f64, // m·kg, always moment(weight, arm)
    pub arm_editable: bool,
    /// Current ceiling for `weight`. For FuelBurn this follows the fuel on board.
    pub max_weight: Option<f64>,
}

impl LoadingStation {
    /// Empty station as laid out in `spec`.
    pub fn new(spec: &StationSpec) -> Self {
        let max_weight = match spec.limit {
            WeightLimit::Unlimited => None,
            WeightLimit::Fixed(max) => Some(max),
            WeightLimit::FuelOnBoard => Some(0.0),
        };
        let arm = spec.initial_arm();
        Self {
            id: spec.id,
            label: spec.label,
            weight: 0.0,
            arm,
            moment: moment(0.0, arm),
            arm_editable: spec.arm_editable(),
            max_weight,
        }
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
        self.recompute();
    }

    pub fn set_arm(&mut self, arm: f64) {
        self.arm = arm;
        self.recompute();
    }

    /// Move the ceiling and pull the weight down under it if needed.
    /// Returns `true` when the weight had to be reduced.
    pub fn set_max_weight(&mut self, max: f64) -> bool {
        self.max_weight = Some(max);
        if self.weight > max {
            self.set_weight(max);
            true
        } else {
            false
        }
    }

    pub fn point(&self) -> LoadPoint {
        LoadPoint::new(self.moment, self.weight)
    }

    fn recompute(&mut self) {
        self.moment = moment(self.weight, self.arm);
    }
}
