//! Aufteilung einer Kurve in Sample-Positionen (nach Abstand oder Anzahl).

use super::{KernelError, KernelResult};
use serde::{Deserialize, Serialize};

/// Obergrenze für die Anzahl der Samples pro Durchlauf.
///
/// `Distance`-Pläne darüber sind ein Fehler, `Count`-Pläne werden geklemmt.
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

/// Wie der `LaneSampler` die Kurve unterteilt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplePlan {
    /// Fester Abstand entlang der Kurve (Welteinheiten, > 0)
    Distance(f32),
    /// Feste Anzahl Samples inkl. Start und Ende (≥ 2, kleinere Werte werden geklemmt)
    Count(usize),
}

impl Default for SamplePlan {
    fn default() -> Self {
        SamplePlan::Distance(crate::shared::options::SAMPLE_SPACING)
    }
}

impl SamplePlan {
    /// Leitet Sample-Anzahl und Abstand aus der Kurvenlänge ab.
    ///
    /// - `Distance(s)`: Anzahl = max(2, ⌊länge / s⌋ + 1), Abstand = s;
    ///   mehr als [`MAX_SAMPLE_COUNT`] Samples ergeben `InvalidSamplingParameter`
    /// - `Count(n)`: Anzahl = max(2, n), Abstand = länge / (Anzahl − 1)
    pub fn resolve(&self, total_length: f32) -> KernelResult<(usize, f32)> {
        match *self {
            SamplePlan::Distance(spacing) => {
                if !spacing.is_finite() || spacing <= 0.0 {
                    return Err(KernelError::InvalidSamplingParameter {
                        name: "spacing",
                        value: spacing,
                    });
                }
                // In f64 rechnen: ein winziger Abstand darf beim Cast nicht überlaufen
                let raw = (f64::from(total_length) / f64::from(spacing)).floor() + 1.0;
                if !raw.is_finite() || raw > MAX_SAMPLE_COUNT as f64 {
                    log::warn!(
                        "Abstand {:.3e} ergibt zu viele Samples für Länge {:.3} (max. {})",
                        spacing,
                        total_length,
                        MAX_SAMPLE_COUNT
                    );
                    return Err(KernelError::InvalidSamplingParameter {
                        name: "spacing",
                        value: spacing,
                    });
                }
                let count = (raw as usize).max(2);
                Ok((count, spacing))
            }
            SamplePlan::Count(requested) => {
                let count = requested.clamp(2, MAX_SAMPLE_COUNT);
                if count != requested {
                    log::warn!("Sample-Anzahl {} auf {} geklemmt", requested, count);
                }
                Ok((count, total_length / (count - 1) as f32))
            }
        }
    }

    /// Distanzen entlang der Kurve, an denen gesampelt wird.
    ///
    /// Bei `Count` fällt der letzte Wert exakt auf `total_length`.
    pub fn distances(&self, total_length: f32) -> KernelResult<Vec<f32>> {
        let (count, spacing) = self.resolve(total_length)?;
        let distances = match self {
            SamplePlan::Distance(_) => (0..count).map(|i| i as f32 * spacing).collect(),
            SamplePlan::Count(_) => {
                let last = (count - 1) as f32;
                (0..count)
                    .map(|i| total_length * (i as f32 / last))
                    .collect()
            }
        };
        Ok(distances)
    }
}
