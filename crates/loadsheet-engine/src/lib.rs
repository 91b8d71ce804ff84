//! loadsheet-engine
//!
//! Weight & balance for a single C-150 class aircraft.
//! - Raw text entries are filtered (unsigned decimals only) and clamped to the
//!   station limits: fuel 95 kg, baggage 54 kg, burn ≤ fuel on board.
//! - Each station's moment is `weight × arm` rounded to 2 decimals.
//! - A.U.W. and total moment sum the four physical stations; landing figures
//!   subtract the planned fuel burn.
//! - C.O.G is `moment / weight` to 2 decimals, reported as `"0"` at zero weight.
//! - Take-off and landing points are tested against the C.O.G envelope polygon.
//!
//! Usage:
//!
//! ```
//! use loadsheet_engine::{LoadSheet, StationId};
//!
//! let mut sheet = LoadSheet::new();
//! sheet.update_station(StationId::BasicEmptyWeight, "400");
//! sheet.update_arm(StationId::BasicEmptyWeight, "1.00");
//! sheet.update_station(StationId::PilotPax, "150");
//! let out = sheet.update_station(StationId::Fuel, "150"); // clamped to 95
//! assert_eq!(out.takeoff_cog, "1.01");
//! ```
//!
//! Nothing here blocks or shares state: a `LoadSheet` is a plain value owned by
//! its caller, and each edit recomputes everything before returning.

pub mod balance;
pub mod config;
pub mod graph;
pub mod input;
pub mod sheet;
pub mod station;

pub use balance::{adjust_for_landing, aggregate, cog, BalanceSheet, EnvelopeStatus, Landing, Totals};
pub use config::{EngineConfig, EnvelopePreset};
pub use graph::{LoadLine, LoadingGraph};
pub use input::{validate, InputError};
pub use sheet::{Edit, Field, LoadSheet};
pub use station::LoadingStation;

pub use loadsheet_core::{moment, round2, EnvelopeError, EnvelopePolygon, LoadPoint};
pub use loadsheet_models::{envelopes, StationId, StationParseError};
