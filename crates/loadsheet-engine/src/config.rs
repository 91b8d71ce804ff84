//! Engine configuration.
//!
//! The only tunable is the C.O.G envelope. In JSON it is either a preset name
//! or an explicit vertex list:
//!
//! ```json
//! { "envelope": "hexagon" }
//! { "envelope": [ { "moment": 440, "weight": 550 }, ... ] }
//! ```
//!
//! A missing `envelope` falls back to the default quadrilateral.

use loadsheet_core::{EnvelopeError, EnvelopePolygon};
use loadsheet_models::envelopes;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvelopePreset {
    #[default]
    Quadrilateral,
    Hexagon,
    CoarseBounds,
}

impl EnvelopePreset {
    pub fn polygon(self) -> EnvelopePolygon {
        match self {
            EnvelopePreset::Quadrilateral => envelopes::cog_quadrilateral(),
            EnvelopePreset::Hexagon => envelopes::cog_hexagon(),
            EnvelopePreset::CoarseBounds => envelopes::coarse_bounds(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EnvelopeSetting {
    Preset(EnvelopePreset),
    Vertices(EnvelopePolygon),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    envelope: Option<EnvelopeSetting>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct EngineConfig {
    pub envelope: EnvelopePolygon,
}

impl EngineConfig {
    pub fn with_envelope(envelope: EnvelopePolygon) -> Self {
        Self { envelope }
    }

    pub fn from_json(json: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { envelope: EnvelopePreset::default().polygon() }
    }
}

impl From<EnvelopePreset> for EngineConfig {
    fn from(preset: EnvelopePreset) -> Self {
        Self::with_envelope(preset.polygon())
    }
}

impl From<RawConfig> for EngineConfig {
    fn from(raw: RawConfig) -> Self {
        let envelope = match raw.envelope {
            Some(EnvelopeSetting::Preset(preset)) => preset.polygon(),
            Some(EnvelopeSetting::Vertices(polygon)) => polygon,
            None => EnvelopePreset::default().polygon(),
        };
        Self { envelope }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_quadrilateral() {
        assert_eq!(EngineConfig::default().envelope, envelopes::cog_quadrilateral());
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn preset_by_name() {
        let cfg = EngineConfig::from_json(r#"{ "envelope": "hexagon" }"#).unwrap();
        assert_eq!(cfg.envelope, envelopes::cog_hexagon());
        let cfg = EngineConfig::from_json(r#"{ "envelope": "coarseBounds" }"#).unwrap();
        assert_eq!(cfg.envelope, envelopes::coarse_bounds());
    }

    #[test]
    fn explicit_vertices() {
        let cfg = EngineConfig::from_json(
            r#"{ "envelope": [
                { "moment": 0, "weight": 0 },
                { "moment": 10, "weight": 0 },
                { "moment": 10, "weight": 10 },
                { "moment": 0, "weight": 0 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(cfg.envelope.vertices().len(), 3);
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(EngineConfig::from_json(r#"{ "envelope": "square" }"#).is_err());
        assert!(EngineConfig::from_json(r#"{ "envelope": [] }"#).is_err());
        assert!(EngineConfig::from_json(r#"{ "aircraft": "c172" }"#).is_err());
        assert!(matches!(EngineConfig::from_json("not json"), Err(EnvelopeError::Json(_))));
    }
}
