//! Gemeinsame Segmentschnittstelle.
//!
//! [`Segment`] fasst die vier Geometrietypen zusammen und leitet
//! Auswertungen an die jeweilige Variante weiter. Gerade und Kreisbogen
//! rechnen geschlossen, Klothoide über Fresnel-Integrale, das
//! Parameterpolynom per Quadratur; deshalb liefern die Auswertungen
//! ein `Result`.

use serde::{Deserialize, Serialize};

use super::arc::Arc;
use super::error::GeometryError;
use super::line::Line;
use super::options::GeometryOptions;
use super::param_poly3::ParamPoly3;
use super::pose::Pose;
use super::spiral::Spiral;

/// Ergebnis einer Segmentauswertung: Endpose und Bogenlänge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentEnd {
    /// Pose am Segmentende
    pub pose: Pose,
    /// Bogenlänge des Segments
    pub length: f64,
}

/// Ein Element der Referenzlinie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    Line(Line),
    Arc(Arc),
    Spiral(Spiral),
    ParamPoly3(ParamPoly3),
}

impl Segment {
    /// Endpose und Länge ab der Startpose, mit Standardoptionen.
    pub fn evaluate(&self, start: Pose) -> Result<SegmentEnd, GeometryError> {
        self.evaluate_with(start, &GeometryOptions::default())
    }

    /// Endpose und Länge ab der Startpose.
    pub fn evaluate_with(
        &self,
        start: Pose,
        options: &GeometryOptions,
    ) -> Result<SegmentEnd, GeometryError> {
        match self {
            Self::Line(line) => Ok(line.end_data(start)),
            Self::Arc(arc) => Ok(arc.end_data(start)),
            Self::Spiral(spiral) => Ok(spiral.end_data(start)),
            Self::ParamPoly3(poly) => poly.end_data(start, options),
        }
    }

    /// Pose an der Bogenlänge `s` ab Segmentanfang, mit Standardoptionen.
    pub fn pose_at(&self, start: Pose, s: f64) -> Result<Pose, GeometryError> {
        self.pose_at_with(start, s, &GeometryOptions::default())
    }

    /// Pose an der Bogenlänge `s` ab Segmentanfang.
    pub fn pose_at_with(
        &self,
        start: Pose,
        s: f64,
        options: &GeometryOptions,
    ) -> Result<Pose, GeometryError> {
        match self {
            Self::Line(line) => Ok(line.pose_at(start, s)),
            Self::Arc(arc) => Ok(arc.pose_at(start, s)),
            Self::Spiral(spiral) => Ok(spiral.pose_at(start, s)),
            Self::ParamPoly3(poly) => poly.pose_at(start, s, options),
        }
    }

    /// OpenDRIVE-Elementname der Variante
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Arc(_) => "arc",
            Self::Spiral(_) => "spiral",
            Self::ParamPoly3(_) => "paramPoly3",
        }
    }

    /// Variantenspezifische Attribute als Name/Wert-Paare.
    ///
    /// Geraden tragen keine eigenen Attribute; alle gemeinsamen Werte
    /// (s, x, y, hdg, length) liegen auf der Geometrie-Ebene.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Line(_) => Vec::new(),
            Self::Arc(arc) => vec![("curvature", arc.curvature().to_string())],
            Self::Spiral(spiral) => vec![
                ("curvStart", spiral.curv_start().to_string()),
                ("curvEnd", spiral.curv_end().to_string()),
            ],
            Self::ParamPoly3(poly) => {
                let [au, bu, cu, du] = poly.u_coefficients();
                let [av, bv, cv, dv] = poly.v_coefficients();
                vec![
                    ("aU", au.to_string()),
                    ("bU", bu.to_string()),
                    ("cU", cu.to_string()),
                    ("dU", du.to_string()),
                    ("aV", av.to_string()),
                    ("bV", bv.to_string()),
                    ("cV", cv.to_string()),
                    ("dV", dv.to_string()),
                    ("pRange", poly.prange().as_str().to_string()),
                ]
            }
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Spiral> for Segment {
    fn from(spiral: Spiral) -> Self {
        Self::Spiral(spiral)
    }
}

impl From<ParamPoly3> for Segment {
    fn from(poly: ParamPoly3) -> Self {
        Self::ParamPoly3(poly)
    }
}
