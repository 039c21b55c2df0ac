//! Core-Domänentypen: Pose, Segmentvarianten, Geometrie und Referenzlinie.

pub mod arc;
pub mod error;
pub mod geometry;
pub mod line;
pub mod options;
pub mod param_poly3;
pub mod plan_view;
pub mod pose;
pub mod segment;
pub mod spiral;

pub use arc::Arc;
pub use error::GeometryError;
pub use geometry::Geometry;
pub use line::Line;
pub use options::GeometryOptions;
pub use param_poly3::{ParamPoly3, ParamRange};
pub use plan_view::{PlanView, RawSegment};
pub use pose::Pose;
pub use segment::{Segment, SegmentEnd};
pub use spiral::Spiral;
