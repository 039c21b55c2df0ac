//! Klothoidensegment (Übergangsbogen).

use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::pose::Pose;
use super::segment::SegmentEnd;
use crate::math::EulerSpiral;

/// Übergangsbogen: die Krümmung läuft linear von `curv_start` nach
/// `curv_end` über die Segmentlänge.
///
/// Die Entartungen (beide Krümmungen 0 bzw. gleich) fallen auf Gerade
/// und Kreisbogen zurück und stimmen mit [`Line`](super::Line) bzw.
/// [`Arc`](super::Arc) überein.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spiral {
    curv_start: f64,
    curv_end: f64,
    length: f64,
}

impl Spiral {
    /// Erstellt eine Klothoide der Länge `length` (> 0)
    pub fn new(curv_start: f64, curv_end: f64, length: f64) -> Result<Self, GeometryError> {
        if length <= 0.0 || !length.is_finite() {
            return Err(GeometryError::InvalidLength(length));
        }
        Ok(Self {
            curv_start,
            curv_end,
            length,
        })
    }

    /// Krümmung am Segmentanfang
    pub fn curv_start(&self) -> f64 {
        self.curv_start
    }

    /// Krümmung am Segmentende
    pub fn curv_end(&self) -> f64 {
        self.curv_end
    }

    /// Segmentlänge
    pub fn length(&self) -> f64 {
        self.length
    }

    fn solver(&self) -> EulerSpiral {
        EulerSpiral::from_curvatures(self.curv_start, self.curv_end, self.length)
    }

    pub(crate) fn end_data(&self, start: Pose) -> SegmentEnd {
        SegmentEnd {
            pose: self.pose_at(start, self.length),
            length: self.length,
        }
    }

    pub(crate) fn pose_at(&self, start: Pose, s: f64) -> Pose {
        let (position, heading) =
            self.solver()
                .eval(s, start.position, self.curv_start, start.heading);
        Pose { position, heading }
    }
}
