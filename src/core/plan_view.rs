//! Die Referenzlinie eines OpenDRIVE-Straßenabschnitts.
//!
//! Ein [`PlanView`] sammelt rohe Segmentdefinitionen in Fahrtrichtung
//! und faltet sie mit [`adjust`](PlanView::adjust) zu einer Kette
//! positionierter [`Geometry`]-Einträge: die Endpose jedes Segments
//! wird zur Startpose des nächsten, die Bogenlänge akkumuliert zur
//! globalen Station s. Vor dem Falten ist die Referenzlinie offen
//! (Segmente und Startpose änderbar), danach versiegelt.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use super::geometry::Geometry;
use super::options::GeometryOptions;
use super::pose::Pose;
use super::segment::Segment;

/// Rohe Segmentdefinition mit optionaler Richtungsüberschreibung.
///
/// Ist `heading_override` gesetzt, ersetzt der Wert beim Falten die
/// aus der Kette ererbte Startrichtung dieses Segments. Die Bindung an
/// das Segment selbst statt an eine Positionsliste hält Zuordnung und
/// Einfügereihenfolge zusammen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSegment {
    /// Die Segmentdefinition
    pub segment: Segment,
    /// Ersetzt die ererbte Startrichtung (Radiant), falls gesetzt
    pub heading_override: Option<f64>,
}

/// Referenzlinie aus verketteten Segmenten.
#[derive(Debug, Clone)]
pub struct PlanView {
    /// Pose am Anfang der Referenzlinie
    start_pose: Pose,
    /// Rohe Segmentdefinitionen in Einfügereihenfolge
    entries: Vec<RawSegment>,
    /// Gefaltete Kette, erst nach `adjust` gefüllt
    geometries: Vec<Geometry>,
    /// Summe der Segmentlängen, erst nach `adjust` gültig
    total_length: f64,
    /// Versiegelt nach erfolgreichem `adjust`
    adjusted: bool,
    /// Numerik-Parameter für alle Auswertungen dieser Referenzlinie
    options: GeometryOptions,
}

impl PlanView {
    /// Erstellt eine leere Referenzlinie am Ursprung mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(GeometryOptions::default())
    }

    /// Erstellt eine leere Referenzlinie am Ursprung.
    pub fn with_options(options: GeometryOptions) -> Self {
        Self {
            start_pose: Pose::default(),
            entries: Vec::new(),
            geometries: Vec::new(),
            total_length: 0.0,
            adjusted: false,
            options,
        }
    }

    /// Setzt die Startpose; nur vor dem Falten erlaubt.
    pub fn set_start_pose(&mut self, x: f64, y: f64, heading: f64) -> Result<(), GeometryError> {
        self.ensure_open()?;
        self.start_pose = Pose::new(x, y, heading);
        Ok(())
    }

    /// Hängt ein Segment ans Ende an; nur vor dem Falten erlaubt.
    ///
    /// `heading_override` ersetzt beim Falten die ererbte Startrichtung
    /// dieses Segments.
    pub fn add_segment(
        &mut self,
        segment: impl Into<Segment>,
        heading_override: Option<f64>,
    ) -> Result<(), GeometryError> {
        self.ensure_open()?;
        self.entries.push(RawSegment {
            segment: segment.into(),
            heading_override,
        });
        Ok(())
    }

    /// Faltet die rohen Segmente zur positionierten Kette.
    ///
    /// Läuft in Einfügereihenfolge: Startpose des ersten Segments ist
    /// die Startpose der Referenzlinie, danach jeweils die Endpose des
    /// Vorgängers; die Station s akkumuliert die Bogenlängen. Schlägt
    /// ein Segment fehl, bleibt die Referenzlinie offen und unverändert,
    /// der Fehler nennt den Index des Segments. Wiederholtes Falten
    /// ersetzt die Kette, statt sie zu verlängern.
    pub fn adjust(&mut self) -> Result<(), GeometryError> {
        let mut chain = Vec::with_capacity(self.entries.len());
        let mut pose = self.start_pose;
        let mut s = 0.0;
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(heading) = entry.heading_override {
                pose = pose.with_heading(heading);
            }
            let geometry = Geometry::with_options(s, pose, entry.segment, &self.options)
                .map_err(|source| GeometryError::rejected(index, source))?;
            pose = geometry.end_pose();
            s += geometry.length();
            chain.push(geometry);
        }
        self.geometries = chain;
        self.total_length = s;
        self.adjusted = true;
        log::debug!(
            "PlanView adjustiert: {} Segmente, Gesamtlaenge {:.3}",
            self.geometries.len(),
            self.total_length
        );
        Ok(())
    }

    /// Pose am Anfang der Referenzlinie
    pub fn start_pose(&self) -> Pose {
        self.start_pose
    }

    /// Anzahl der rohen Segmentdefinitionen
    pub fn segment_count(&self) -> usize {
        self.entries.len()
    }

    /// Rohe Segmentdefinitionen in Einfügereihenfolge
    pub fn entries(&self) -> &[RawSegment] {
        &self.entries
    }

    /// Numerik-Parameter dieser Referenzlinie
    pub fn options(&self) -> &GeometryOptions {
        &self.options
    }

    /// True nach erfolgreichem Falten
    pub fn is_adjusted(&self) -> bool {
        self.adjusted
    }

    /// Gesamtlänge der Referenzlinie; `None` vor dem Falten
    pub fn total_length(&self) -> Option<f64> {
        self.adjusted.then_some(self.total_length)
    }

    /// Gefaltete Kette in Stationsreihenfolge; `None` vor dem Falten
    pub fn geometries(&self) -> Option<&[Geometry]> {
        self.adjusted.then_some(self.geometries.as_slice())
    }

    /// Pose am Ende der Referenzlinie; `None` vor dem Falten.
    ///
    /// Eine leere Referenzlinie endet an ihrer Startpose.
    pub fn end_pose(&self) -> Option<Pose> {
        self.adjusted.then_some(
            self.geometries
                .last()
                .map(Geometry::end_pose)
                .unwrap_or(self.start_pose),
        )
    }

    /// Pose an der globalen Station `s` auf der gefalteten Kette.
    ///
    /// `s` muss in `[0, Gesamtlänge]` liegen; Segmentgrenzen gehören
    /// zum nachfolgenden Segment.
    pub fn pose_at(&self, s: f64) -> Result<Pose, GeometryError> {
        if !self.adjusted {
            return Err(GeometryError::PlanViewNotAdjusted);
        }
        if s < 0.0 || s > self.total_length || !s.is_finite() {
            return Err(GeometryError::StationOutOfRange {
                s,
                total: self.total_length,
            });
        }
        if self.geometries.is_empty() {
            return Ok(self.start_pose);
        }
        let index = self
            .geometries
            .partition_point(|geometry| geometry.s() <= s)
            .saturating_sub(1);
        let geometry = &self.geometries[index];
        // min fängt Rundungsreste an der letzten Segmentgrenze ab
        let ds = (s - geometry.s()).min(geometry.length());
        geometry.pose_at_with(ds, &self.options)
    }

    /// Tastet die Referenzlinie als Punktzug ab.
    ///
    /// Der Punktabstand ist höchstens `max_spacing` und über die Länge
    /// gleichverteilt; Start- und Endpunkt sind immer enthalten. Eine
    /// leere Referenzlinie liefert nur den Startpunkt.
    pub fn sample_polyline(&self, max_spacing: f64) -> Result<Vec<DVec2>, GeometryError> {
        if max_spacing <= 0.0 || !max_spacing.is_finite() {
            return Err(GeometryError::InvalidSpacing(max_spacing));
        }
        if !self.adjusted {
            return Err(GeometryError::PlanViewNotAdjusted);
        }
        if self.geometries.is_empty() || self.total_length <= 0.0 {
            return Ok(vec![self.start_pose.position]);
        }
        let steps = (self.total_length / max_spacing).ceil().max(1.0) as usize;
        let spacing = self.total_length / steps as f64;
        let mut points = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let s = (step as f64 * spacing).min(self.total_length);
            points.push(self.pose_at(s)?.position);
        }
        Ok(points)
    }

    fn ensure_open(&self) -> Result<(), GeometryError> {
        if self.adjusted {
            return Err(GeometryError::PlanViewSealed);
        }
        Ok(())
    }
}

impl Default for PlanView {
    fn default() -> Self {
        Self::new()
    }
}
