//! loadsheet-models
//!
//! Loading data for a C-150 class airframe:
//!
//!   - the five fixed loading stations with their arms (m from datum) and
//!     weight limits (kg)
//!   - C.O.G envelope outlines on the (moment, weight) plane
//!
//! Only BasicEmptyWeight has an editable arm; every other station sits at a
//! fixed arm. FuelBurn is not a physical station: it is the fuel expected to
//! be gone by landing, carried at the fuel arm and capped by the fuel on board.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fuel tank capacity [kg].
pub const MAX_FUEL: f64 = 95.0;
/// Baggage compartment limit [kg].
pub const MAX_BAGGAGE: f64 = 54.0;
/// Extent of the pilot & passenger line on the loading graph [kg]. Not a limit.
pub const PILOT_PAX_GRAPH_EXTENT: f64 = 170.0;

pub const PILOT_PAX_ARM: f64 = 0.99;
pub const FUEL_ARM: f64 = 1.07;
pub const BAGGAGE_ARM: f64 = 1.50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub enum StationId {
    BasicEmptyWeight,
    PilotPax,
    Fuel,
    Baggage,
    FuelBurn,
}

impl StationId {
    pub const ALL: [StationId; 5] = [
        StationId::BasicEmptyWeight,
        StationId::PilotPax,
        StationId::Fuel,
        StationId::Baggage,
        StationId::FuelBurn,
    ];

    /// Stations summed into the takeoff totals (A.U.W.). FuelBurn is excluded.
    pub const TAKEOFF: [StationId; 4] = [
        StationId::BasicEmptyWeight,
        StationId::PilotPax,
        StationId::Fuel,
        StationId::Baggage,
    ];

    /// Position in [`StationId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable machine name, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            StationId::BasicEmptyWeight => "basicEmptyWeight",
            StationId::PilotPax => "pilotPax",
            StationId::Fuel => "fuel",
            StationId::Baggage => "baggage",
            StationId::FuelBurn => "fuelBurn",
        }
    }

    pub fn label(self) -> &'static str {
        spec(self).label
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown loading station `{0}`")]
pub struct StationParseError(pub String);

impl FromStr for StationId {
    type Err = StationParseError;

    /// Accepts the key in any case, with or without `_`/`-` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        StationId::ALL
            .into_iter()
            .find(|id| id.key().to_lowercase() == norm)
            .ok_or_else(|| StationParseError(s.to_owned()))
    }
}

/// How heavy a station may get.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightLimit {
    Unlimited,
    Fixed(f64),
    /// Capped at whatever the Fuel station currently holds.
    FuelOnBoard,
}

/// Static description of one loading station.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
pub struct StationSpec {
    pub id: StationId,
    pub label: &'static str,
    /// `None` when the arm is entered by the user.
    pub fixed_arm: Option<f64>,
    pub limit: WeightLimit,
    /// Where the station's reference line ends on the loading graph, if drawn.
    pub graph_extent: Option<f64>,
}

impl StationSpec {
    pub fn arm_editable(&self) -> bool {
        self.fixed_arm.is_none()
    }

    /// Arm a freshly created station starts with.
    pub fn initial_arm(&self) -> f64 {
        self.fixed_arm.unwrap_or(0.0)
    }
}

/// The C-150 station table, in [`StationId::ALL`] order.
pub const C150_STATIONS: [StationSpec; 5] = [
    StationSpec {
        id: StationId::BasicEmptyWeight,
        label: "BASIC EMPTY WEIGHT",
        fixed_arm: None,
        limit: WeightLimit::Unlimited,
        graph_extent: None,
    },
    StationSpec {
        id: StationId::PilotPax,
        label: "PILOT & PAX",
        fixed_arm: Some(PILOT_PAX_ARM),
        limit: WeightLimit::Unlimited,
        graph_extent: Some(PILOT_PAX_GRAPH_EXTENT),
    },
    StationSpec {
        id: StationId::Fuel,
        label: "FUEL",
        fixed_arm: Some(FUEL_ARM),
        limit: WeightLimit::Fixed(MAX_FUEL),
        graph_extent: Some(MAX_FUEL),
    },
    StationSpec {
        id: StationId::Baggage,
        label: "BAGGAGE",
        fixed_arm: Some(BAGGAGE_ARM),
        limit: WeightLimit::Fixed(MAX_BAGGAGE),
        graph_extent: Some(MAX_BAGGAGE),
    },
    StationSpec {
        id: StationId::FuelBurn,
        label: "FUEL BURN",
        fixed_arm: Some(FUEL_ARM),
        limit: WeightLimit::FuelOnBoard,
        graph_extent: None,
    },
];

pub fn spec(id: StationId) -> &'static StationSpec {
    &C150_STATIONS[id.index()]
}

/* ------------------------------ envelopes ------------------------------ */

/// C.O.G envelope outlines. Which one is authoritative is aircraft data, so
/// callers pick; the engine defaults to [`envelopes::cog_quadrilateral`].
pub mod envelopes {
    use loadsheet_core::{EnvelopePolygon, LoadPoint};

    //   moment [m·kg], weight [kg]
    const QUADRILATERAL: [(f64, f64); 4] = [
        (440.0, 550.0),
        (510.0, 550.0),
        (700.0, 750.0),
        (630.0, 750.0),
    ];

    const HEXAGON: [(f64, f64); 6] = [
        (367.57, 499.0),
        (434.86, 590.0),
        (590.03, 726.0),
        (691.5, 726.0),
        (562.13, 590.0),
        (443.67, 499.0),
    ];

    fn from_table(table: &[(f64, f64)]) -> EnvelopePolygon {
        let vertices: Vec<LoadPoint> = table.iter().copied().map(LoadPoint::from).collect();
        EnvelopePolygon::new(vertices).expect("built-in envelope table is a valid polygon")
    }

    /// Default tilted quadrilateral.
    pub fn cog_quadrilateral() -> EnvelopePolygon {
        from_table(&QUADRILATERAL)
    }

    /// Six-sided outline following the forward/aft C.O.G limit lines.
    pub fn cog_hexagon() -> EnvelopePolygon {
        from_table(&HEXAGON)
    }

    /// Coarse box: moment 475..780, weight 500..750.
    pub fn coarse_bounds() -> EnvelopePolygon {
        from_table(&[(475.0, 500.0), (780.0, 500.0), (780.0, 750.0), (475.0, 750.0)])
    }
}

/* -------------------------------- tests -------------------------------- */
