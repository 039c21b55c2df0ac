//! Geradensegment.

use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::pose::Pose;
use super::segment::SegmentEnd;

/// Geradenstück konstanter Fahrtrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    length: f64,
}

impl Line {
    /// Erstellt eine Gerade der Länge `length` (> 0)
    pub fn new(length: f64) -> Result<Self, GeometryError> {
        if length <= 0.0 || !length.is_finite() {
            return Err(GeometryError::InvalidLength(length));
        }
        Ok(Self { length })
    }

    /// Segmentlänge
    pub fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn end_data(&self, start: Pose) -> SegmentEnd {
        SegmentEnd {
            pose: start.advanced(self.length),
            length: self.length,
        }
    }

    pub(crate) fn pose_at(&self, start: Pose, s: f64) -> Pose {
        start.advanced(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gerade_entlang_der_x_achse() {
        let line = Line::new(10.0).expect("gueltige Laenge");
        let end = line.end_data(Pose::new(0.0, 0.0, 0.0));
        assert_relative_eq!(end.pose.position.x, 10.0);
        assert_relative_eq!(end.pose.position.y, 0.0);
        assert_eq!(end.pose.heading, 0.0);
        assert_eq!(end.length, 10.0);
    }

    #[test]
    fn test_gerade_unter_winkel() {
        let line = Line::new(2.0).expect("gueltige Laenge");
        let end = line.end_data(Pose::new(1.0, 1.0, std::f64::consts::FRAC_PI_4));
        let expected = 2.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(end.pose.position.x, 1.0 + expected, epsilon = 1e-12);
        assert_relative_eq!(end.pose.position.y, 1.0 + expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zwischenpunkt() {
        let line = Line::new(10.0).expect("gueltige Laenge");
        let pose = line.pose_at(Pose::new(0.0, 0.0, 0.0), 4.0);
        assert_relative_eq!(pose.position.x, 4.0);
        assert_relative_eq!(pose.position.y, 0.0);
    }

    #[test]
    fn test_ungueltige_laenge_wird_abgelehnt() {
        assert!(matches!(
            Line::new(0.0),
            Err(GeometryError::InvalidLength(_))
        ));
        assert!(matches!(
            Line::new(-5.0),
            Err(GeometryError::InvalidLength(_))
        ));
        assert!(matches!(
            Line::new(f64::NAN),
            Err(GeometryError::InvalidLength(_))
        ));
    }
}
