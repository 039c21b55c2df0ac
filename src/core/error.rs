//! Fehlertypen der Geometrie-Auswertung.
//!
//! Alle Fehler entstehen bei der Konstruktion bzw. beim Adjustieren;
//! es gibt keine Retries und keinen partiell abgeleiteten Zustand.

use thiserror::Error;

/// Fehler bei Segmentdefinition, Auswertung oder PlanView-Zugriff.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Segmentlänge (oder explizite Längenangabe) ist nicht positiv.
    #[error("Segmentlaenge muss positiv sein: {0}")]
    InvalidLength(f64),

    /// Kreisbogen mit Krümmung 0 wäre eine Gerade.
    #[error("Kruemmung eines Kreisbogens darf nicht 0 sein")]
    ZeroCurvature,

    /// Öffnungswinkel 0 ergäbe einen leeren Bogen.
    #[error("Oeffnungswinkel eines Kreisbogens darf nicht 0 sein")]
    ZeroSweepAngle,

    /// Beide oder keine der Angaben Länge/Öffnungswinkel übergeben.
    #[error("Kreisbogen braucht genau eine Angabe: Laenge oder Oeffnungswinkel")]
    InvalidArcExtent,

    /// ParamPoly3 im arcLength-Modus ohne Längenangabe.
    #[error("ParamPoly3 im arcLength-Modus braucht eine explizite Laenge")]
    MissingPolyLength,

    /// Adaptive Quadratur hat die Tiefengrenze ohne Konvergenz erreicht.
    #[error("Bogenlaengen-Integration nicht konvergiert (Restfehler {residual:e})")]
    IntegrationDiverged {
        /// Restfehler des letzten Verfeinerungsschritts
        residual: f64,
    },

    /// Beim Adjustieren ist ein Segment fehlgeschlagen; der Index zeigt
    /// auf den Eintrag in Einfügereihenfolge.
    #[error("Segment {index} zurueckgewiesen: {source}")]
    SegmentRejected {
        /// Index des fehlgeschlagenen Eintrags
        index: usize,
        /// Ursprünglicher Segmentfehler
        source: Box<GeometryError>,
    },

    /// Mutation nach erfolgreichem `adjust()`.
    #[error("PlanView ist bereits adjustiert und damit unveraenderlich")]
    PlanViewSealed,

    /// Lesender Zugriff auf abgeleitete Daten vor `adjust()`.
    #[error("PlanView ist noch nicht adjustiert")]
    PlanViewNotAdjusted,

    /// Stationswert außerhalb der Referenzlinie.
    #[error("Station {s} liegt ausserhalb von [0, {total}]")]
    StationOutOfRange {
        /// Angefragte Station
        s: f64,
        /// Gesamtlänge der Referenzlinie bzw. des Segments
        total: f64,
    },

    /// Abtastabstand für die Polyline-Erzeugung ist nicht positiv.
    #[error("Abtastabstand muss positiv sein: {0}")]
    InvalidSpacing(f64),
}

impl GeometryError {
    /// Verpackt einen Segmentfehler mit dem Index des PlanView-Eintrags.
    #[must_use]
    pub fn rejected(index: usize, source: GeometryError) -> Self {
        Self::SegmentRejected {
            index,
            source: Box::new(source),
        }
    }

    /// Index des fehlgeschlagenen Eintrags, falls beim Adjustieren entstanden.
    #[must_use]
    pub fn offending_segment(&self) -> Option<usize> {
        match self {
            Self::SegmentRejected { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Prüft ob der Fehler aus einer ungültigen Segmentdefinition stammt.
    #[must_use]
    pub fn is_invalid_definition(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength(_)
                | Self::ZeroCurvature
                | Self::ZeroSweepAngle
                | Self::InvalidArcExtent
                | Self::MissingPolyLength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fehlermeldung_traegt_segmentindex() {
        let err = GeometryError::rejected(3, GeometryError::ZeroCurvature);
        assert_eq!(err.offending_segment(), Some(3));
        assert!(err.to_string().contains("Segment 3"));
        assert!(err.to_string().contains("Kruemmung"));
    }

    #[test]
    fn test_definitionsfehler_klassifikation() {
        assert!(GeometryError::InvalidLength(-1.0).is_invalid_definition());
        assert!(GeometryError::InvalidArcExtent.is_invalid_definition());
        assert!(GeometryError::MissingPolyLength.is_invalid_definition());
        assert!(!GeometryError::PlanViewSealed.is_invalid_definition());
        assert!(!GeometryError::IntegrationDiverged { residual: 0.1 }.is_invalid_definition());
    }
}
