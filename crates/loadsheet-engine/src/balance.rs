//! Totals, C.O.G and the landing adjustment.
//!
//! Everything here is a pure function of the station set. The sheet is derived
//! from scratch on every call; nothing is cached between edits.

use loadsheet_core::{round2, EnvelopePolygon, LoadPoint};
use loadsheet_models::StationId;
use serde::Serialize;

use crate::station::LoadingStation;

/// C.O.G reported when the weight it divides by is zero or less.
pub const UNDEFINED_COG: &str = "0";

/// Take-off weight & moment over the physical stations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub weight: f64,
    pub moment: f64,
}

/// Sum BasicEmptyWeight, PilotPax, Fuel and Baggage. FuelBurn never counts.
pub fn aggregate(stations: &[LoadingStation]) -> Totals {
    stations
        .iter()
        .filter(|s| StationId::TAKEOFF.contains(&s.id))
        .fold(Totals::default(), |acc, s| Totals {
            weight: acc.weight + s.weight,
            moment: acc.moment + s.moment,
        })
}

/// C.O.G [m] as text: `moment / weight` to 2 decimals, or `"0"` for `weight <= 0`
/// or a non-finite operand.
pub fn cog(moment: f64, weight: f64) -> String {
    if weight > 0.0 && weight.is_finite() && moment.is_finite() {
        format!("{:.2}", round2(moment / weight))
    } else {
        UNDEFINED_COG.to_owned()
    }
}

/// Figures after the planned burn has left the tanks.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Landing {
    pub weight: f64,
    pub moment: f64,
    pub cog: String,
}

/// Take the burn station's weight & moment off the take-off totals.
///
/// The burn weight is expected to be capped at the fuel on board already; that
/// happens when it is entered.
pub fn adjust_for_landing(totals: Totals, fuel_burn: &LoadingStation) -> Landing {
    let weight = totals.weight - fuel_burn.weight;
    let moment = totals.moment - fuel_burn.moment;
    Landing { weight, moment, cog: cog(moment, weight) }
}

/// Fully derived loading figures. Never edited directly.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub total_weight: f64,
    pub total_moment: f64,
    #[serde(rename = "takeoffCOG")]
    pub takeoff_cog: String,
    pub landing_weight: f64,
    pub landing_moment: f64,
    #[serde(rename = "landingCOG")]
    pub landing_cog: String,
}

impl BalanceSheet {
    /// Derive the sheet from a full station set (one of each [`StationId`]).
    pub fn derive(stations: &[LoadingStation]) -> Self {
        let totals = aggregate(stations);
        let landing = match stations.iter().find(|s| s.id == StationId::FuelBurn) {
            Some(burn) => adjust_for_landing(totals, burn),
            None => Landing {
                weight: totals.weight,
                moment: totals.moment,
                cog: cog(totals.moment, totals.weight),
            },
        };
        Self {
            total_weight: totals.weight,
            total_moment: totals.moment,
            takeoff_cog: cog(totals.moment, totals.weight),
            landing_weight: landing.weight,
            landing_moment: landing.moment,
            landing_cog: landing.cog,
        }
    }

    pub fn takeoff_point(&self) -> LoadPoint {
        LoadPoint::new(self.total_moment, self.total_weight)
    }

    pub fn landing_point(&self) -> LoadPoint {
        LoadPoint::new(self.landing_moment, self.landing_weight)
    }
}

/// Whether each point sits inside the envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeStatus {
    pub takeoff_inside: bool,
    pub landing_inside: bool,
}

impl EnvelopeStatus {
    pub fn evaluate(sheet: &BalanceSheet, envelope: &EnvelopePolygon) -> Self {
        let status = Self {
            takeoff_inside: envelope.contains(sheet.takeoff_point()),
            landing_inside: envelope.contains(sheet.landing_point()),
        };
        if sheet.total_weight > 0.0 && !status.within_limits() {
            log::debug!(
                "loading outside C.O.G envelope (takeoff inside={}, landing inside={})",
                status.takeoff_inside,
                status.landing_inside
            );
        }
        status
    }

    pub fn within_limits(self) -> bool {
        self.takeoff_inside && self.landing_inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use loadsheet_models::{spec, C150_STATIONS};

    fn stations(weights: [f64; 5], bew_arm: f64) -> Vec<LoadingStation> {
        C150_STATIONS
            .iter()
            .zip(weights)
            .map(|(sp, w)| {
                let mut st = LoadingStation::new(sp);
                if st.arm_editable {
                    st.set_arm(bew_arm);
                }
                st.set_weight(w);
                st
            })
            .collect()
    }

    #[test]
    fn totals_skip_fuel_burn() {
        let t = aggregate(&stations([400.0, 150.0, 95.0, 54.0, 20.0], 1.0));
        assert_abs_diff_eq!(t.weight, 699.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.moment, 731.15, epsilon = 1e-9);
    }

    #[test]
    fn cog_text() {
        assert_eq!(cog(731.15, 699.0), "1.05");
        assert_eq!(cog(709.75, 679.0), "1.05");
        assert_eq!(cog(100.0, 100.0), "1.00");
        assert_eq!(cog(0.0, 0.0), UNDEFINED_COG);
        assert_eq!(cog(50.0, -1.0), "0");
        assert_eq!(cog(731.15, 699.0), cog(731.15, 699.0));
        assert_eq!(cog(f64::NAN, 100.0), UNDEFINED_COG);
        assert_eq!(cog(100.0, f64::INFINITY), UNDEFINED_COG);
    }

    #[test]
    fn landing_takes_off_the_burn() {
        let totals = Totals { weight: 699.0, moment: 731.15 };
        let mut burn = LoadingStation::new(spec(StationId::FuelBurn));
        burn.set_max_weight(95.0);
        burn.set_weight(20.0);
        let landing = adjust_for_landing(totals, &burn);
        assert_abs_diff_eq!(landing.weight, 679.0, epsilon = 1e-9);
        assert_abs_diff_eq!(landing.moment, 709.75, epsilon = 1e-9);
        assert_eq!(landing.cog, "1.05");
    }

    #[test]
    fn empty_sheet_is_zero_and_outside() {
        let sheet = BalanceSheet::derive(&stations([0.0; 5], 0.0));
        assert_abs_diff_eq!(sheet.total_weight, 0.0);
        assert_eq!(sheet.takeoff_cog, "0");
        assert_eq!(sheet.landing_cog, "0");
        let status = EnvelopeStatus::evaluate(&sheet, &loadsheet_models::envelopes::cog_quadrilateral());
        assert_eq!(status, EnvelopeStatus { takeoff_inside: false, landing_inside: false });
    }

    #[test]
    fn serializes_with_js_field_names() {
        let sheet = BalanceSheet::derive(&stations([0.0; 5], 0.0));
        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json["takeoffCOG"], "0");
        assert_eq!(json["landingCOG"], "0");
        assert!(json.get("totalWeight").is_some());
    }
}
