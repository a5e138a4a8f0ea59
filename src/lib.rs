//! Bezier Lane Kernel.
//! Geometriekern für Fahrspuren: Bézier-Auswertung beliebigen Grades,
//! Bogenlängen-Parametrisierung, links/rechts ausgerichtete Spurpunkte und
//! Strip-Mesh-Triangulierung. Darstellung, Undo und Szenen-Verwaltung liegen
//! beim Host; der Kern liefert nur Daten.

pub mod core;
pub mod geometry;
pub mod mesh;
pub mod nodes;
pub mod shared;
pub mod spline;

pub use crate::core::{
    ControlPoints, KernelError, KernelResult, MAX_CONTROL_POINTS, MIN_CONTROL_POINTS, SamplePlan,
};
pub use geometry::{ArcLengthTable, LanePair, LanePoints, LaneSampler};
pub use mesh::{Aabb, StripMesh, StripVertex};
pub use nodes::{MarkerHost, NodeSet};
pub use shared::LaneOptions;
pub use spline::LaneSpline;
