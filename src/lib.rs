//! Referenzlinien-Geometrie für Straßen im OpenDRIVE-Stil.
//!
//! Vier Segmenttypen (Gerade, Kreisbogen, Klothoide, kubisches
//! Parameterpolynom) werden über einen [`PlanView`] zu einer
//! durchgehenden Referenzlinie verkettet: Endpose an Startpose, mit
//! akkumulierter Station s. Klothoiden rechnen geschlossen über
//! Fresnel-Integrale, Polynomlängen per adaptiver Quadratur.

pub mod core;
pub mod math;

pub use core::{
    Arc, Geometry, GeometryError, GeometryOptions, Line, ParamPoly3, ParamRange, PlanView, Pose,
    RawSegment, Segment, SegmentEnd, Spiral,
};
pub use math::EulerSpiral;
