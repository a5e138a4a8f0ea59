//! Fehlertypen des Geometriekerns.
//!
//! Alle Fehler sind lokal und synchron: sie werden direkt an den Aufrufer
//! zurückgegeben, nie still verschluckt und nie wiederholt (identische
//! Eingaben liefern immer dasselbe Ergebnis).

use thiserror::Error;

/// Fehler einer Kern-Operation (Kurve, Sampling, Mesh, Marker).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// Anzahl der Kontrollpunkte liegt außerhalb von `MIN..=MAX`.
    #[error(
        "ungültige Anzahl Kontrollpunkte: {count} (erlaubt {}..={})",
        super::MIN_CONTROL_POINTS,
        super::MAX_CONTROL_POINTS
    )]
    InvalidControlPoints {
        /// Übergebene Anzahl
        count: usize,
    },

    /// Sampling-Parameter (Abstand, Spurbreite, …) ist nicht positiv oder nicht endlich.
    #[error("ungültiger Sampling-Parameter `{name}`: {value}")]
    InvalidSamplingParameter {
        /// Name des Parameters
        name: &'static str,
        /// Übergebener Wert
        value: f32,
    },

    /// Geometrie ohne Ausdehnung bzw. zu wenige Spurpunkte für ein Mesh.
    #[error("degenerierte Geometrie: {0}")]
    DegenerateGeometry(String),
}

/// Kurzform für Ergebnisse des Kerns.
pub type KernelResult<T> = Result<T, KernelError>;
