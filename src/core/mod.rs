//! Core-Eingabetypen: validierte Kontrollpunkte, Sampling-Plan, Fehler.

mod control_points;
mod error;
mod sample_plan;

pub use control_points::ControlPoints;
pub use error::{KernelError, KernelResult};
pub use sample_plan::{MAX_SAMPLE_COUNT, SamplePlan};

/// Minimale Anzahl Kontrollpunkte (Grad 1).
pub const MIN_CONTROL_POINTS: usize = 2;
/// Maximale Anzahl Kontrollpunkte (Grad 9).
///
/// Obergrenze für die Fakultäts-basierte Binomialberechnung im Evaluator.
pub const MAX_CONTROL_POINTS: usize = 10;

#[cfg(test)]
mod tests;
