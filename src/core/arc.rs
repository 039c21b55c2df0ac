//! Kreisbogensegment mit konstanter Krümmung.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use super::error::GeometryError;
use super::pose::Pose;
use super::segment::SegmentEnd;

/// Ausdehnung des Bogens: entweder Länge oder Öffnungswinkel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum ArcExtent {
    /// Bogenlänge in Metern
    Length(f64),
    /// Öffnungswinkel in Radiant; das Vorzeichen bestimmt die Laufrichtung
    /// um das Zentrum
    SweepAngle(f64),
}

/// Kreisbogen konstanter Krümmung ≠ 0.
///
/// Genau eine der Angaben Länge/Öffnungswinkel legt die Ausdehnung fest.
/// Die jeweils andere Größe wird bei Bedarf abgeleitet und nie in die
/// Definition zurückgeschrieben. Positive Krümmung biegt nach links
/// (Zentrum auf der linken Seite der Fahrtrichtung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    curvature: f64,
    extent: ArcExtent,
}

impl Arc {
    /// Historische Schnittstelle: genau eine der beiden Optionen darf
    /// gesetzt sein, sonst `InvalidArcExtent`.
    pub fn new(
        curvature: f64,
        length: Option<f64>,
        sweep_angle: Option<f64>,
    ) -> Result<Self, GeometryError> {
        match (length, sweep_angle) {
            (Some(l), None) => Self::with_length(curvature, l),
            (None, Some(a)) => Self::with_sweep_angle(curvature, a),
            _ => Err(GeometryError::InvalidArcExtent),
        }
    }

    /// Bogen über seine Länge (> 0)
    pub fn with_length(curvature: f64, length: f64) -> Result<Self, GeometryError> {
        check_curvature(curvature)?;
        if length <= 0.0 || !length.is_finite() {
            return Err(GeometryError::InvalidLength(length));
        }
        Ok(Self {
            curvature,
            extent: ArcExtent::Length(length),
        })
    }

    /// Bogen über seinen Öffnungswinkel (≠ 0)
    pub fn with_sweep_angle(curvature: f64, sweep_angle: f64) -> Result<Self, GeometryError> {
        check_curvature(curvature)?;
        if sweep_angle == 0.0 || !sweep_angle.is_finite() {
            return Err(GeometryError::ZeroSweepAngle);
        }
        Ok(Self {
            curvature,
            extent: ArcExtent::SweepAngle(sweep_angle),
        })
    }

    /// Krümmung des Bogens (1/Radius, vorzeichenbehaftet)
    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    /// Radius des Bogens
    pub fn radius(&self) -> f64 {
        1.0 / self.curvature.abs()
    }

    /// Bogenlänge; abgeleitet, falls der Öffnungswinkel vorgegeben wurde
    pub fn arc_length(&self) -> f64 {
        match self.extent {
            ArcExtent::Length(length) => length,
            ArcExtent::SweepAngle(angle) => (angle / self.curvature).abs(),
        }
    }

    /// Öffnungswinkel; abgeleitet, falls die Länge vorgegeben wurde
    pub fn sweep_angle(&self) -> f64 {
        match self.extent {
            ArcExtent::Length(length) => length * self.curvature,
            ArcExtent::SweepAngle(angle) => angle,
        }
    }

    pub(crate) fn end_data(&self, start: Pose) -> SegmentEnd {
        let length = self.arc_length();
        SegmentEnd {
            pose: self.pose_at(start, length),
            length,
        }
    }

    pub(crate) fn pose_at(&self, start: Pose, s: f64) -> Pose {
        let swept = self.sweep_angle() * (s / self.arc_length());
        let radius = self.radius();
        // Winkel vom Zentrum zum Startpunkt; Seite durch das
        // Krümmungsvorzeichen
        let anchor = start.heading - self.curvature.signum() * FRAC_PI_2;
        let center = start.position - radius * DVec2::from_angle(anchor);
        Pose {
            position: center + radius * DVec2::from_angle(anchor + swept),
            heading: start.heading + swept,
        }
    }
}

fn check_curvature(curvature: f64) -> Result<(), GeometryError> {
    if curvature == 0.0 || !curvature.is_finite() {
        return Err(GeometryError::ZeroCurvature);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_viertelkreis_nach_links() {
        // κ = 0.1, L = 10: Öffnungswinkel 1 rad, Ende bei (10·sin 1, 10·(1−cos 1))
        let arc = Arc::with_length(0.1, 10.0).expect("gueltiger Bogen");
        let end = arc.end_data(Pose::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(end.pose.position.x, 8.414_709_848_078_965, epsilon = 1e-9);
        assert_abs_diff_eq!(end.pose.position.y, 4.596_976_941_318_602, epsilon = 1e-9);
        assert_abs_diff_eq!(end.pose.heading, 1.0, epsilon = 1e-12);
        assert_eq!(end.length, 10.0);
    }

    #[test]
    fn test_negative_kruemmung_spiegelt() {
        let left = Arc::with_length(0.1, 10.0).expect("gueltiger Bogen");
        let right = Arc::with_length(-0.1, 10.0).expect("gueltiger Bogen");
        let el = left.end_data(Pose::new(0.0, 0.0, 0.0));
        let er = right.end_data(Pose::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(el.pose.position.x, er.pose.position.x, epsilon = 1e-12);
        assert_abs_diff_eq!(el.pose.position.y, -er.pose.position.y, epsilon = 1e-12);
        assert_abs_diff_eq!(el.pose.heading, -er.pose.heading, epsilon = 1e-12);
    }

    #[test]
    fn test_laenge_winkel_roundtrip() {
        // Aus der Länge abgeleiteter Winkel definiert denselben Bogen
        let by_length = Arc::with_length(0.2, 7.853_981_633_974_483).expect("gueltiger Bogen");
        assert_abs_diff_eq!(by_length.sweep_angle(), FRAC_PI_2, epsilon = 1e-9);

        let by_angle =
            Arc::with_sweep_angle(0.2, by_length.sweep_angle()).expect("gueltiger Bogen");
        assert_abs_diff_eq!(by_angle.arc_length(), by_length.arc_length(), epsilon = 1e-9);

        let el = by_length.end_data(Pose::new(0.0, 0.0, 0.0));
        let ea = by_angle.end_data(Pose::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(el.pose.position.x, ea.pose.position.x, epsilon = 1e-9);
        assert_abs_diff_eq!(el.pose.position.y, ea.pose.position.y, epsilon = 1e-9);
        assert_abs_diff_eq!(el.pose.heading, ea.pose.heading, epsilon = 1e-9);
    }

    #[test]
    fn test_halbkreis_ueber_winkel() {
        // κ = 0.5 (r = 2), Winkel π: Ende gegenüber dem Start
        let arc = Arc::with_sweep_angle(0.5, PI).expect("gueltiger Bogen");
        let end = arc.end_data(Pose::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(end.pose.position.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.pose.position.y, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.pose.heading, PI, epsilon = 1e-12);
        assert_relative_eq!(end.length, 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_zwischenpunkt_auf_halber_laenge() {
        let arc = Arc::with_length(0.1, 10.0).expect("gueltiger Bogen");
        let start = Pose::new(0.0, 0.0, 0.0);
        let mid = arc.pose_at(start, 5.0);
        assert_abs_diff_eq!(mid.heading, 0.5, epsilon = 1e-12);
        // Zwischenpunkt liegt auf dem Kreis um (0, 10)
        let center = DVec2::new(0.0, 10.0);
        assert_abs_diff_eq!(mid.position.distance(center), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ungueltige_definitionen() {
        assert!(matches!(
            Arc::new(0.0, Some(10.0), None),
            Err(GeometryError::ZeroCurvature)
        ));
        assert!(matches!(
            Arc::new(0.1, Some(10.0), Some(1.0)),
            Err(GeometryError::InvalidArcExtent)
        ));
        assert!(matches!(
            Arc::new(0.1, None, None),
            Err(GeometryError::InvalidArcExtent)
        ));
        assert!(matches!(
            Arc::with_length(0.1, -1.0),
            Err(GeometryError::InvalidLength(_))
        ));
        assert!(matches!(
            Arc::with_sweep_angle(0.1, 0.0),
            Err(GeometryError::ZeroSweepAngle)
        ));
    }
}
