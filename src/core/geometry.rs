//! Positioniertes Segment auf der Referenzlinie.
//!
//! Eine [`Geometry`] bindet ein [`Segment`] an seine globale
//! Startstation und Startpose. Endpose und Länge werden einmal beim
//! Anlegen berechnet und danach nur noch gelesen.

use serde::Serialize;

use super::error::GeometryError;
use super::options::GeometryOptions;
use super::pose::Pose;
use super::segment::{Segment, SegmentEnd};

/// Segment mit Station, Startpose und ausgewerteten Enddaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    s: f64,
    start: Pose,
    segment: Segment,
    end: Pose,
    length: f64,
}

impl Geometry {
    /// Wertet das Segment an der Startpose aus, mit Standardoptionen.
    pub fn new(s: f64, start: Pose, segment: Segment) -> Result<Self, GeometryError> {
        Self::with_options(s, start, segment, &GeometryOptions::default())
    }

    /// Wertet das Segment an der Startpose aus.
    pub fn with_options(
        s: f64,
        start: Pose,
        segment: Segment,
        options: &GeometryOptions,
    ) -> Result<Self, GeometryError> {
        let SegmentEnd { pose, length } = segment.evaluate_with(start, options)?;
        Ok(Self {
            s,
            start,
            segment,
            end: pose,
            length,
        })
    }

    /// Globale Station des Segmentanfangs
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Pose am Segmentanfang
    pub fn start_pose(&self) -> Pose {
        self.start
    }

    /// Pose am Segmentende
    pub fn end_pose(&self) -> Pose {
        self.end
    }

    /// Bogenlänge des Segments
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Das zugrunde liegende Segment
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Pose an der lokalen Bogenlänge `ds` ab Segmentanfang, mit Standardoptionen.
    pub fn pose_at(&self, ds: f64) -> Result<Pose, GeometryError> {
        self.pose_at_with(ds, &GeometryOptions::default())
    }

    /// Pose an der lokalen Bogenlänge `ds` ab Segmentanfang.
    ///
    /// `ds` muss in `[0, length]` liegen.
    pub fn pose_at_with(&self, ds: f64, options: &GeometryOptions) -> Result<Pose, GeometryError> {
        if ds < 0.0 || ds > self.length || !ds.is_finite() {
            return Err(GeometryError::StationOutOfRange {
                s: ds,
                total: self.length,
            });
        }
        self.segment.pose_at_with(self.start, ds, options)
    }

    /// Gemeinsame Attribute des Geometrie-Headers als Name/Wert-Paare
    /// (s, x, y, hdg, length).
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("s", self.s.to_string()),
            ("x", self.start.position.x.to_string()),
            ("y", self.start.position.y.to_string()),
            ("hdg", self.start.heading.to_string()),
            ("length", self.length.to_string()),
        ]
    }
}
