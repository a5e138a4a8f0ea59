//! Spur-Sampling: links/rechts versetzte Punktfolgen entlang der Mittelkurve.
//!
//! Beide Spuren werden aus **einer** Bogenlängen-Tabelle der Mittelkurve
//! parametrisiert. Dadurch teilen `left[i]` und `right[i]` exakt denselben
//! Parameter `t[i]`. Getrennte Tabellen pro Spur würden auseinanderlaufen,
//! weil Offset-Kurven andere Längen haben als die Mittelkurve.

use super::{ArcLengthTable, bezier};
use crate::core::{ControlPoints, KernelError, KernelResult, SamplePlan};
use crate::shared::options::{ARC_LENGTH_SAMPLES, NORMAL_FALLBACK_THRESHOLD};
use glam::Vec3;

/// Ein Eintrag der Spurpunkt-Folge (gemeinsamer Parameter für beide Seiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePair {
    /// Index in der Folge
    pub index: usize,
    /// Kurvenparameter
    pub t: f32,
    /// Punkt auf der Mittelkurve
    pub center: Vec3,
    /// Linke Spur (Mitte + Normale · Breite/2)
    pub left: Vec3,
    /// Rechte Spur (Mitte − Normale · Breite/2)
    pub right: Vec3,
}

/// Ausgerichtete linke/rechte Punktfolgen gleicher Länge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanePoints {
    params: Vec<f32>,
    center: Vec<Vec3>,
    left: Vec<Vec3>,
    right: Vec<Vec3>,
}

impl LanePoints {
    /// Folge aus fertigen Paaren (nur für Tests mit gezielten Eingaben).
    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[LanePair]) -> Self {
        Self {
            params: pairs.iter().map(|p| p.t).collect(),
            center: pairs.iter().map(|p| p.center).collect(),
            left: pairs.iter().map(|p| p.left).collect(),
            right: pairs.iter().map(|p| p.right).collect(),
        }
    }

    /// Anzahl der Paare.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// `true` wenn keine Paare vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Linke Spur.
    pub fn left(&self) -> &[Vec3] {
        &self.left
    }

    /// Rechte Spur.
    pub fn right(&self) -> &[Vec3] {
        &self.right
    }

    /// Punkte auf der Mittelkurve.
    pub fn center(&self) -> &[Vec3] {
        &self.center
    }

    /// Gemeinsame Kurvenparameter.
    pub fn params(&self) -> &[f32] {
        &self.params
    }

    /// Iteriert über alle Paare.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = LanePair> + '_ {
        (0..self.len()).map(move |i| LanePair {
            index: i,
            t: self.params[i],
            center: self.center[i],
            left: self.left[i],
            right: self.right[i],
        })
    }

    /// Zerlegt in (links, rechts).
    pub fn into_rails(self) -> (Vec<Vec3>, Vec<Vec3>) {
        (self.left, self.right)
    }
}

/// Erzeugt Spurpunkte nach Abstand oder Anzahl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneSampler {
    /// Intervalle der Bogenlängen-Tabelle
    pub arc_length_samples: usize,
    /// Schwelle für den Normalen-Fallback
    pub normal_threshold: f32,
}

impl Default for LaneSampler {
    fn default() -> Self {
        Self {
            arc_length_samples: ARC_LENGTH_SAMPLES,
            normal_threshold: NORMAL_FALLBACK_THRESHOLD,
        }
    }
}

impl LaneSampler {
    /// Spurpunkte im festen Abstand `spacing` entlang der Mittelkurve.
    pub fn by_distance(
        &self,
        points: &ControlPoints,
        lane_width: f32,
        spacing: f32,
    ) -> KernelResult<LanePoints> {
        self.sample(points, lane_width, SamplePlan::Distance(spacing))
    }

    /// Genau `count` Spurpunkte (mindestens 2) inkl. Start und Ende.
    pub fn by_count(
        &self,
        points: &ControlPoints,
        lane_width: f32,
        count: usize,
    ) -> KernelResult<LanePoints> {
        self.sample(points, lane_width, SamplePlan::Count(count))
    }

    /// Spurpunkte nach `plan`.
    ///
    /// Schlägt fehl bei nicht-positiver Spurbreite, ungültigem Abstand oder
    /// einer Kurve der Länge 0.
    pub fn sample(
        &self,
        points: &ControlPoints,
        lane_width: f32,
        plan: SamplePlan,
    ) -> KernelResult<LanePoints> {
        if !lane_width.is_finite() || lane_width <= 0.0 {
            return Err(KernelError::InvalidSamplingParameter {
                name: "lane_width",
                value: lane_width,
            });
        }

        let curve = points.as_slice();
        let table = ArcLengthTable::with_samples(curve, self.arc_length_samples);
        let total = table.total_length();
        if total.is_nan() || total <= 0.0 {
            return Err(KernelError::DegenerateGeometry(
                "Kurve hat Länge 0".to_string(),
            ));
        }

        let distances = plan.distances(total)?;
        let half_width = lane_width * 0.5;
        let mut lanes = LanePoints {
            params: Vec::with_capacity(distances.len()),
            center: Vec::with_capacity(distances.len()),
            left: Vec::with_capacity(distances.len()),
            right: Vec::with_capacity(distances.len()),
        };

        for distance in distances {
            let t = table.distance_to_t(distance);
            let center = bezier::position(curve, t);
            let offset = bezier::normal_with(curve, t, self.normal_threshold) * half_width;
            lanes.params.push(t);
            lanes.center.push(center);
            lanes.left.push(center + offset);
            lanes.right.push(center - offset);
        }

        log::debug!(
            "Spur-Sampling: {} Paare, Länge {:.3}, Breite {:.3}",
            lanes.len(),
            total,
            lane_width
        );
        Ok(lanes)
    }
}
