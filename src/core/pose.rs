//! Position und Fahrtrichtung auf der Referenzlinie.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pose auf der Referenzlinie: Position in der Ebene plus Fahrtrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Position in der Ebene
    pub position: DVec2,
    /// Fahrtrichtung (Radiant, mathematisch positiv)
    pub heading: f64,
}

impl Pose {
    /// Erstellt eine Pose aus Koordinaten und Fahrtrichtung
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            heading,
        }
    }

    /// Einheitsvektor in Fahrtrichtung
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.heading)
    }

    /// Um `distance` entlang der Fahrtrichtung verschobene Pose
    pub fn advanced(&self, distance: f64) -> Self {
        Self {
            position: self.position + distance * self.direction(),
            heading: self.heading,
        }
    }

    /// Pose mit ersetzter Fahrtrichtung (Position bleibt)
    pub fn with_heading(&self, heading: f64) -> Self {
        Self {
            position: self.position,
            heading,
        }
    }

    /// Dreht einen lokalen Offset in Weltkoordinaten und addiert ihn auf die Position
    pub fn transform(&self, local: DVec2) -> DVec2 {
        self.position + self.direction().rotate(local)
    }
}
