//! Kubisches Parameterpolynom-Segment.
//!
//! Lokale Kurve (u(p), v(p)) relativ zur Startpose: u zeigt entlang der
//! Fahrtrichtung, v quer dazu. Koeffizienten in aufsteigender Ordnung,
//! u(p) = aU + bU·p + cU·p² + dU·p³ und analog v(p).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::options::{GeometryOptions, PARAM_SEARCH_MAX_ITERATIONS, PARAM_SEARCH_TOLERANCE};
use super::pose::Pose;
use super::segment::SegmentEnd;
use crate::math::adaptive_simpson;

/// Interpretation des Kurvenparameters p.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParamRange {
    /// p läuft über [0, 1]; die Segmentlänge wird per Quadratur bestimmt
    #[default]
    #[serde(rename = "normalized")]
    Normalized,
    /// p läuft über [0, Segmentlänge]; die Länge ist Pflichtangabe
    #[serde(rename = "arcLength")]
    ArcLength,
}

impl ParamRange {
    /// OpenDRIVE-Attributwert
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normalized => "normalized",
            Self::ArcLength => "arcLength",
        }
    }
}

/// Kubisches Polynomsegment in lokalen Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamPoly3 {
    u: [f64; 4],
    v: [f64; 4],
    prange: ParamRange,
    length: Option<f64>,
}

impl ParamPoly3 {
    /// Allgemeiner Konstruktor.
    ///
    /// Koeffizienten als `[a, b, c, d]`. Im arcLength-Modus ist `length`
    /// Pflicht; im normalized-Modus wird eine Längenangabe ignoriert,
    /// weil die Länge dort aus der Quadratur stammt.
    pub fn new(
        u: [f64; 4],
        v: [f64; 4],
        prange: ParamRange,
        length: Option<f64>,
    ) -> Result<Self, GeometryError> {
        if let Some(l) = length {
            if l <= 0.0 || !l.is_finite() {
                return Err(GeometryError::InvalidLength(l));
            }
        }
        match (prange, length) {
            (ParamRange::ArcLength, None) => Err(GeometryError::MissingPolyLength),
            (ParamRange::Normalized, Some(_)) => {
                log::warn!("ParamPoly3: Laengenangabe im normalized-Modus wird ignoriert");
                Ok(Self {
                    u,
                    v,
                    prange,
                    length: None,
                })
            }
            _ => Ok(Self {
                u,
                v,
                prange,
                length,
            }),
        }
    }

    /// Normalisierte Variante, p ∈ [0, 1]
    pub fn normalized(u: [f64; 4], v: [f64; 4]) -> Self {
        Self {
            u,
            v,
            prange: ParamRange::Normalized,
            length: None,
        }
    }

    /// arcLength-Variante, p ∈ [0, `length`]
    pub fn arc_length(u: [f64; 4], v: [f64; 4], length: f64) -> Result<Self, GeometryError> {
        Self::new(u, v, ParamRange::ArcLength, Some(length))
    }

    /// Koeffizienten [aU, bU, cU, dU]
    pub fn u_coefficients(&self) -> [f64; 4] {
        self.u
    }

    /// Koeffizienten [aV, bV, cV, dV]
    pub fn v_coefficients(&self) -> [f64; 4] {
        self.v
    }

    /// Parameter-Modus
    pub fn prange(&self) -> ParamRange {
        self.prange
    }

    /// Lokale Position (u(p), v(p))
    fn local_position(&self, p: f64) -> DVec2 {
        DVec2::new(eval_cubic(&self.u, p), eval_cubic(&self.v, p))
    }

    /// Lokale Ableitung (u'(p), v'(p))
    fn local_derivative(&self, p: f64) -> DVec2 {
        DVec2::new(eval_cubic_derivative(&self.u, p), eval_cubic_derivative(&self.v, p))
    }

    /// Bogenlänge des normalisierten Polynoms über [0, p]
    fn arc_length_to(&self, p: f64, options: &GeometryOptions) -> Result<f64, GeometryError> {
        adaptive_simpson(
            &|q| self.local_derivative(q).length(),
            0.0,
            p,
            options.integration_tolerance,
            options.integration_max_depth,
        )
    }

    pub(crate) fn end_data(
        &self,
        start: Pose,
        options: &GeometryOptions,
    ) -> Result<SegmentEnd, GeometryError> {
        let (p_end, length) = match (self.prange, self.length) {
            (ParamRange::ArcLength, Some(length)) => (length, length),
            (ParamRange::ArcLength, None) => return Err(GeometryError::MissingPolyLength),
            (ParamRange::Normalized, _) => (1.0, self.arc_length_to(1.0, options)?),
        };
        Ok(SegmentEnd {
            pose: self.pose_at_param(start, p_end),
            length,
        })
    }

    /// Pose am Kurvenparameter p (nicht an der Bogenlänge)
    fn pose_at_param(&self, start: Pose, p: f64) -> Pose {
        let derivative = self.local_derivative(p);
        Pose {
            position: start.transform(self.local_position(p)),
            heading: start.heading + derivative.y.atan2(derivative.x),
        }
    }

    pub(crate) fn pose_at(
        &self,
        start: Pose,
        s: f64,
        options: &GeometryOptions,
    ) -> Result<Pose, GeometryError> {
        let p = match self.prange {
            ParamRange::ArcLength => s,
            ParamRange::Normalized => self.param_at_arc_length(s, options)?,
        };
        Ok(self.pose_at_param(start, p))
    }

    /// Invertiert s(p) per Bisektion; s(p) ist monoton in p.
    fn param_at_arc_length(
        &self,
        s: f64,
        options: &GeometryOptions,
    ) -> Result<f64, GeometryError> {
        if s <= 0.0 {
            return Ok(0.0);
        }
        let total = self.arc_length_to(1.0, options)?;
        if s >= total {
            return Ok(1.0);
        }

        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        for _ in 0..PARAM_SEARCH_MAX_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            let arc = self.arc_length_to(mid, options)?;
            if (arc - s).abs() < PARAM_SEARCH_TOLERANCE {
                return Ok(mid);
            }
            if arc < s {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(0.5 * (lo + hi))
    }
}

/// Horner-Auswertung a + b·p + c·p² + d·p³
fn eval_cubic(c: &[f64; 4], p: f64) -> f64 {
    c[0] + p * (c[1] + p * (c[2] + p * c[3]))
}

/// Ableitung b + 2c·p + 3d·p²
fn eval_cubic_derivative(c: &[f64; 4], p: f64) -> f64 {
    c[1] + p * (2.0 * c[2] + p * (3.0 * c[3]))
}
