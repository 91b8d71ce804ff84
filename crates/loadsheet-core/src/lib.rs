//! Core weight-and-balance math
//!
//! Includes:
//! - Moment arithmetic & 2-decimal rounding
//! - Load points on the (moment, weight) plane
//! - Envelope polygons with ray-casting containment
//! - Rate lines (weight vs moment at a fixed arm)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// -------------------------
/// Rounding & Moments
/// -------------------------

/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Moment [m·kg] of `weight` [kg] at `arm` [m], rounded to 2 decimals.
pub fn moment(weight: f64, arm: f64) -> f64 {
    round2(weight * arm)
}

/// -------------------------
/// Load Points
/// -------------------------

/// A point on the loading chart. `x` is moment, `y` is weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadPoint {
    pub moment: f64, // m·kg
    pub weight: f64, // kg
}

impl LoadPoint {
    pub fn new(moment: f64, weight: f64) -> Self {
        Self { moment, weight }
    }

    fn is_finite(self) -> bool {
        self.moment.is_finite() && self.weight.is_finite()
    }
}

impl From<(f64, f64)> for LoadPoint {
    fn from((moment, weight): (f64, f64)) -> Self {
        Self { moment, weight }
    }
}

/// -------------------------
/// Envelope
/// -------------------------

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("envelope needs at least 3 distinct vertices (got {found})")]
    TooFewVertices { found: usize },
    #[error("envelope vertex {index} is not finite")]
    NonFinite { index: usize },
    #[error("envelope json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Closed polygon of (moment, weight) vertices bounding the safe loading region.
///
/// The closing edge (last vertex back to first) is implicit. A vertex list that
/// repeats its first vertex at the end is accepted and the repeat dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LoadPoint>", into = "Vec<LoadPoint>")]
pub struct EnvelopePolygon {
    vertices: Vec<LoadPoint>,
}

impl EnvelopePolygon {
    pub fn new(mut vertices: Vec<LoadPoint>) -> Result<Self, EnvelopeError> {
        if let Some(index) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(EnvelopeError::NonFinite { index });
        }
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(EnvelopeError::TooFewVertices { found: vertices.len() });
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned box, counter-clockwise from the low-moment/low-weight corner.
    pub fn rectangle(
        min_moment: f64,
        max_moment: f64,
        min_weight: f64,
        max_weight: f64,
    ) -> Result<Self, EnvelopeError> {
        Self::new(vec![
            LoadPoint::new(min_moment, min_weight),
            LoadPoint::new(max_moment, min_weight),
            LoadPoint::new(max_moment, max_weight),
            LoadPoint::new(min_moment, max_weight),
        ])
    }

    /// Parse from a JSON array of `{ "moment": .., "weight": .. }` objects.
    pub fn from_json(json: &str) -> Result<Self, EnvelopeError> {
        let vertices: Vec<LoadPoint> = serde_json::from_str(json)?;
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[LoadPoint] {
        &self.vertices
    }

    pub fn contains(&self, point: LoadPoint) -> bool {
        point_in_polygon(point, &self.vertices)
    }
}

impl TryFrom<Vec<LoadPoint>> for EnvelopePolygon {
    type Error = EnvelopeError;

    fn try_from(vertices: Vec<LoadPoint>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<EnvelopePolygon> for Vec<LoadPoint> {
    fn from(envelope: EnvelopePolygon) -> Self {
        envelope.vertices
    }
}

/// Ray-casting containment test.
///
/// Casts a ray from `point` toward +moment and counts edge crossings; odd means
/// inside. An edge counts only when exactly one endpoint lies strictly above the
/// ray (`(yi > y) != (yj > y)`), so a vertex shared by two edges is counted once
/// and horizontal edges never count. Points on a boundary resolve
/// deterministically: left and bottom edges are inside, right and top edges are
/// outside (for the default quadrilateral, vertex (440, 550) is inside).
pub fn point_in_polygon(point: LoadPoint, vertices: &[LoadPoint]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let (x, y) = (point.moment, point.weight);
    let mut inside = false;

    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        let (xi, yi) = (vi.moment, vi.weight);
        let (xj, yj) = (vj.moment, vj.weight);

        // yi != yj whenever the straddle test passes, so the division is safe.
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// -------------------------
/// Rate Lines
/// -------------------------

/// Weight-vs-moment line through the origin for a station at a fixed arm.
/// Slope on the loading graph is `1 / arm`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateLine {
    pub arm: f64, // m
}

impl RateLine {
    pub fn new(arm: f64) -> Self {
        Self { arm }
    }

    /// dWeight/dMoment. Zero for a zero arm (the line degenerates to the moment axis).
    pub fn slope(self) -> f64 {
        if self.arm > 0.0 { 1.0 / self.arm } else { 0.0 }
    }

    pub fn weight_at(self, moment: f64) -> f64 {
        moment * self.slope()
    }

    pub fn moment_at(self, weight: f64) -> f64 {
        moment(weight, self.arm)
    }

    /// Point on the line for a station carrying `weight`.
    pub fn point_at(self, weight: f64) -> LoadPoint {
        LoadPoint::new(self.moment_at(weight), weight)
    }
}

/* -------------------------------- tests -------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn quad() -> EnvelopePolygon {
        EnvelopePolygon::new(vec![
            (440.0, 550.0).into(),
            (510.0, 550.0).into(),
            (700.0, 750.0).into(),
            (630.0, 750.0).into(),
        ])
        .unwrap()
    }

    #[test]
    fn moments_round_to_cents() {
        assert_abs_diff_eq!(moment(95.0, 1.07), 101.65, epsilon = 1e-9);
        assert_abs_diff_eq!(moment(150.0, 0.99), 148.5, epsilon = 1e-9);
        assert_abs_diff_eq!(moment(20.0, 1.07), 21.4, epsilon = 1e-9);
        assert_abs_diff_eq!(round2(1.045_1), 1.05, epsilon = 1e-12);
        assert_abs_diff_eq!(round2(-0.125), -0.13, epsilon = 1e-12);
    }

    #[test]
    fn inside_and_outside() {
        let env = quad();
        assert!(env.contains(LoadPoint::new(500.0, 600.0)));
        assert!(!env.contains(LoadPoint::new(400.0, 500.0)));
        assert!(!env.contains(LoadPoint::default()));
        assert!(!env.contains(LoadPoint::new(731.15, 699.0)));
    }

    #[test]
    fn boundary_convention() {
        let env = quad();
        // lower-left vertex and bottom edge resolve inside
        assert!(env.contains(LoadPoint::new(440.0, 550.0)));
        assert!(env.contains(LoadPoint::new(480.0, 550.0)));
        // top edge and lower-right vertex resolve outside
        assert!(!env.contains(LoadPoint::new(650.0, 750.0)));
        assert!(!env.contains(LoadPoint::new(510.0, 550.0)));
        // stable across calls
        assert_eq!(
            env.contains(LoadPoint::new(440.0, 550.0)),
            env.contains(LoadPoint::new(440.0, 550.0))
        );
    }

    #[test]
    fn closed_lists_and_bad_input() {
        let closed = EnvelopePolygon::new(vec![
            (440.0, 550.0).into(),
            (510.0, 550.0).into(),
            (700.0, 750.0).into(),
            (630.0, 750.0).into(),
            (440.0, 550.0).into(),
        ])
        .unwrap();
        assert_eq!(closed, quad());

        assert!(matches!(
            EnvelopePolygon::new(vec![(0.0, 0.0).into(), (1.0, 1.0).into(), (0.0, 0.0).into()]),
            Err(EnvelopeError::TooFewVertices { found: 2 })
        ));
        assert!(matches!(
            EnvelopePolygon::new(vec![(0.0, 0.0).into(), (f64::NAN, 1.0).into(), (2.0, 0.0).into()]),
            Err(EnvelopeError::NonFinite { index: 1 })
        ));
        assert!(!point_in_polygon(LoadPoint::new(1.0, 1.0), &[]));
    }

    #[test]
    fn json_envelope() {
        let env = EnvelopePolygon::from_json(
            r#"[{"moment":440,"weight":550},{"moment":510,"weight":550},
                {"moment":700,"weight":750},{"moment":630,"weight":750}]"#,
        )
        .unwrap();
        assert_eq!(env, quad());
        assert!(matches!(EnvelopePolygon::from_json("[1,2"), Err(EnvelopeError::Json(_))));
        assert!(serde_json::from_str::<EnvelopePolygon>("[]").is_err());
    }

    #[test]
    fn rectangle_box() {
        let env = EnvelopePolygon::rectangle(475.0, 780.0, 500.0, 750.0).unwrap();
        assert!(env.contains(LoadPoint::new(600.0, 600.0)));
        assert!(!env.contains(LoadPoint::new(800.0, 600.0)));
        assert!(!env.contains(LoadPoint::new(600.0, 760.0)));
    }

    #[test]
    fn rate_lines() {
        let fuel = RateLine::new(1.07);
        assert_abs_diff_eq!(fuel.moment_at(95.0), 101.65, epsilon = 1e-9);
        assert_abs_diff_eq!(fuel.weight_at(107.0), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(RateLine::new(0.0).slope(), 0.0);
        let p = RateLine::new(1.5).point_at(54.0);
        assert_abs_diff_eq!(p.moment, 81.0, epsilon = 1e-9);
    }
}
