//! Validierte Kontrollpunkt-Sequenz einer Bézier-Kurve beliebigen Grades.

use super::{KernelError, KernelResult, MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};
use crate::geometry::bezier;
use glam::Vec3;

/// Geordnete Kontrollpunkte, Länge immer in `2..=10` (Grad = Länge − 1).
///
/// Wird von der externen Editier-Schicht besessen und verändert; der Kern
/// behandelt sie pro Aufruf als unveränderliche Eingabe.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    points: Vec<Vec3>,
}

impl ControlPoints {
    /// Übernimmt die Punkte, wenn ihre Anzahl in `2..=10` liegt.
    pub fn new(points: Vec<Vec3>) -> KernelResult<Self> {
        if !(MIN_CONTROL_POINTS..=MAX_CONTROL_POINTS).contains(&points.len()) {
            return Err(KernelError::InvalidControlPoints {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Wie [`ControlPoints::new`], aus einem Slice.
    pub fn from_slice(points: &[Vec3]) -> KernelResult<Self> {
        Self::new(points.to_vec())
    }

    /// Gleichmäßig verteilte Punkte auf der Strecke `start → end`.
    ///
    /// `count` wird auf `2..=10` geklemmt.
    pub fn line(start: Vec3, end: Vec3, count: usize) -> Self {
        let count = clamp_count(count);
        let last = (count - 1) as f32;
        let points = (0..count)
            .map(|i| start.lerp(end, i as f32 / last))
            .collect();
        Self { points }
    }

    /// Liefert eine neue Sequenz mit `count` Punkten (geklemmt auf `2..=10`).
    ///
    /// Die neuen Punkte werden gleichmäßig im Parameter auf der aktuellen Kurve
    /// abgegriffen; Start- und Endpunkt bleiben exakt erhalten.
    pub fn resized(&self, count: usize) -> Self {
        let count = clamp_count(count);
        if count == self.points.len() {
            return self.clone();
        }
        let last = (count - 1) as f32;
        let mut points: Vec<Vec3> = (0..count)
            .map(|i| bezier::position(&self.points, i as f32 / last))
            .collect();
        // Endpunkte exakt übernehmen (keine Rundungsdrift)
        points[0] = self.points[0];
        points[count - 1] = self.points[self.points.len() - 1];
        Self { points }
    }

    /// Verschiebt Punkt `index`. Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn set(&mut self, index: usize, position: Vec3) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = position;
                true
            }
            None => false,
        }
    }

    /// Fügt einen Punkt vor `index` ein (Index wird auf `len` geklemmt).
    ///
    /// Schlägt fehl, wenn bereits die Maximalanzahl erreicht ist.
    pub fn insert(&mut self, index: usize, position: Vec3) -> KernelResult<()> {
        if self.points.len() >= MAX_CONTROL_POINTS {
            return Err(KernelError::InvalidControlPoints {
                count: self.points.len() + 1,
            });
        }
        let index = index.min(self.points.len());
        self.points.insert(index, position);
        Ok(())
    }

    /// Entfernt Punkt `index`.
    ///
    /// - `Err` wenn danach weniger als 2 Punkte übrig wären
    /// - `Ok(None)` bei ungültigem Index
    pub fn remove(&mut self, index: usize) -> KernelResult<Option<Vec3>> {
        if self.points.len() <= MIN_CONTROL_POINTS {
            return Err(KernelError::InvalidControlPoints {
                count: self.points.len() - 1,
            });
        }
        if index >= self.points.len() {
            return Ok(None);
        }
        Ok(Some(self.points.remove(index)))
    }

    /// Anzahl der Kontrollpunkte.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Grad der Kurve (`len − 1`).
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Startpunkt der Kurve.
    pub fn first(&self) -> Vec3 {
        self.points[0]
    }

    /// Endpunkt der Kurve.
    pub fn last(&self) -> Vec3 {
        self.points[self.points.len() - 1]
    }

    /// Rohdaten als Slice.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }

    /// Kurvenposition bei Parameter `t`.
    pub fn position(&self, t: f32) -> Vec3 {
        bezier::position(&self.points, t)
    }

    /// Erste Ableitung bei Parameter `t`.
    pub fn tangent(&self, t: f32) -> Vec3 {
        bezier::tangent(&self.points, t)
    }

    /// Seitliche Einheitsnormale bei Parameter `t`.
    pub fn normal(&self, t: f32) -> Vec3 {
        bezier::normal(&self.points, t)
    }
}

impl AsRef<[Vec3]> for ControlPoints {
    fn as_ref(&self) -> &[Vec3] {
        &self.points
    }
}

impl TryFrom<Vec<Vec3>> for ControlPoints {
    type Error = KernelError;

    fn try_from(points: Vec<Vec3>) -> KernelResult<Self> {
        Self::new(points)
    }
}

/// Klemmt eine angeforderte Punktanzahl auf `2..=10` und protokolliert Korrekturen.
fn clamp_count(count: usize) -> usize {
    let clamped = count.clamp(MIN_CONTROL_POINTS, MAX_CONTROL_POINTS);
    if clamped != count {
        log::warn!(
            "Kontrollpunkt-Anzahl {} auf {} geklemmt",
            count,
            clamped
        );
    }
    clamped
}
