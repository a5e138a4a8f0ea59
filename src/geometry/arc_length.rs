//! Bogenlängen-Tabelle (LUT) und Umkehrung Distanz → Kurvenparameter.

use super::bezier;
use crate::shared::options::ARC_LENGTH_SAMPLES;
use glam::Vec3;

/// Kumulierte Bogenlängen an `sample_count + 1` gleichmäßigen Parameterwerten.
///
/// Eintrag `i` gehört zu `t = i / sample_count`. Der erste Eintrag ist 0,
/// die Folge ist monoton nicht fallend. Wird bei jedem Sampling-Aufruf neu
/// aufgebaut und nie zwischengespeichert.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<f32>,
}

impl ArcLengthTable {
    /// Baut die Tabelle mit der Standard-Stützstellenzahl (1000).
    pub fn build(points: &[Vec3]) -> Self {
        Self::with_samples(points, ARC_LENGTH_SAMPLES)
    }

    /// Baut die Tabelle mit `sample_count` Intervallen (mindestens 1).
    pub fn with_samples(points: &[Vec3], sample_count: usize) -> Self {
        let sample_count = sample_count.max(1);
        let mut lengths = Vec::with_capacity(sample_count + 1);
        let mut prev = bezier::position(points, 0.0);
        let mut cumulative = 0.0f32;
        lengths.push(0.0);
        for i in 1..=sample_count {
            let p = bezier::position(points, i as f32 / sample_count as f32);
            cumulative += prev.distance(p);
            lengths.push(cumulative);
            prev = p;
        }
        Self { lengths }
    }

    /// Gesamtlänge der Kurve (letzter Eintrag).
    pub fn total_length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Anzahl der Intervalle.
    pub fn sample_count(&self) -> usize {
        self.lengths.len() - 1
    }

    /// Kumulierte Längen.
    pub fn lengths(&self) -> &[f32] {
        &self.lengths
    }

    /// Kurvenparameter des Tabelleneintrags `index`.
    pub fn t_at_index(&self, index: usize) -> f32 {
        index as f32 / self.sample_count() as f32
    }

    /// Kurvenparameter `t` für eine Distanz entlang der Kurve.
    ///
    /// Die Distanz wird auf [0, Gesamtlänge] geklemmt; an den Grenzen wird
    /// exakt 0 bzw. 1 geliefert. Dazwischen: erster Eintrag ≥ Distanz per
    /// binärer Suche, dann lineare Interpolation zum Vorgänger. Eine Kurve
    /// der Länge 0 liefert immer 0.
    pub fn distance_to_t(&self, distance: f32) -> f32 {
        let total = self.total_length();
        if total <= 0.0 || distance.is_nan() || distance <= 0.0 {
            return 0.0;
        }
        if distance >= total {
            return 1.0;
        }

        let last = self.sample_count();
        let idx = self
            .lengths
            .partition_point(|&len| len < distance)
            .clamp(1, last);

        let len_before = self.lengths[idx - 1];
        let len_after = self.lengths[idx];
        let span = len_after - len_before;
        let frac = if span > 0.0 {
            ((distance - len_before) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };

        ((idx - 1) as f32 + frac) / last as f32
    }

    /// Kurvenposition bei einer Distanz entlang der Kurve.
    pub fn position_at_distance(&self, points: &[Vec3], distance: f32) -> Vec3 {
        bezier::position(points, self.distance_to_t(distance))
    }
}
