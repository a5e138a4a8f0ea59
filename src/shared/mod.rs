//! Geteilte Konfiguration und Konstanten.
//!
//! Wird von `geometry`, `mesh` und `spline` gleichermaßen genutzt,
//! um Zirkel-Abhängigkeiten zwischen den Modulen zu vermeiden.

pub mod options;

pub use options::LaneOptions;
pub use options::{ARC_LENGTH_SAMPLES, LANE_WIDTH, TESSELLATION_RESOLUTION};
