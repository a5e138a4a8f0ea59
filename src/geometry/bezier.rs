//! Bernstein-Auswertung für Bézier-Kurven beliebigen Grades.
//!
//! Alle Funktionen arbeiten zustandslos auf einem Slice von Kontrollpunkten.
//! Die Binomialkoeffizienten kommen aus Fakultäten und sind nur bis zur
//! Kontrollpunkt-Obergrenze (Grad 9) abgesichert; größere Grade sind eine
//! Verletzung der Vorbedingung und werden hier nicht separat geprüft.

use crate::shared::options::{
    CURVE_DEFAULT_DIRECTION, CURVE_SECONDARY_AXIS, CURVE_UP_AXIS, NORMAL_FALLBACK_THRESHOLD,
};
use glam::Vec3;

/// n! als Ganzzahl (exakt bis 20!).
fn factorial(n: usize) -> u64 {
    (2..=n as u64).product()
}

/// Binomialkoeffizient C(n, k) über Fakultäten.
pub fn binomial(n: usize, k: usize) -> f32 {
    if k > n {
        return 0.0;
    }
    (factorial(n) / (factorial(k) * factorial(n - k))) as f32
}

/// Bernstein-Basispolynom B(i, n, t) = C(n, i) · tⁱ · (1 − t)ⁿ⁻ⁱ.
pub fn bernstein(i: usize, n: usize, t: f32) -> f32 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Kurvenposition bei `t`.
///
/// `t` außerhalb von [0, 1] wird nicht geklemmt, sondern über dasselbe
/// Polynom extrapoliert. Ein leeres Slice ergibt den Nullpunkt.
pub fn position(points: &[Vec3], t: f32) -> Vec3 {
    let Some(n) = points.len().checked_sub(1) else {
        return Vec3::ZERO;
    };
    points
        .iter()
        .enumerate()
        .fold(Vec3::ZERO, |acc, (i, &p)| acc + p * bernstein(i, n, t))
}

/// Erste Ableitung bei `t`: n · Bézier(n−1) über den Punkt-Differenzen.
///
/// Für weniger als zwei Punkte gibt es keine Ableitung; dann wird die feste
/// Standardrichtung geliefert.
pub fn tangent(points: &[Vec3], t: f32) -> Vec3 {
    if points.len() < 2 {
        return CURVE_DEFAULT_DIRECTION;
    }
    let n = (points.len() - 1) as f32;
    let deltas: Vec<Vec3> = points.windows(2).map(|w| w[1] - w[0]).collect();
    position(&deltas, t) * n
}

/// Seitliche Einheitsnormale bei `t` mit Standard-Schwelle.
pub fn normal(points: &[Vec3], t: f32) -> Vec3 {
    normal_with(points, t, NORMAL_FALLBACK_THRESHOLD)
}

/// Seitliche Einheitsnormale: normierte Tangente × Up-Achse.
///
/// Liegt die Länge des Kreuzprodukts unter `threshold` (Tangente fast
/// parallel zu Up), wird stattdessen mit der Sekundärachse gekreuzt.
/// Das Ergebnis ist immer ein endlicher Einheitsvektor.
pub fn normal_with(points: &[Vec3], t: f32, threshold: f32) -> Vec3 {
    let dir = match tangent(points, t).try_normalize() {
        Some(dir) => dir,
        // Nullableitung (zusammenfallende Punkte) oder nicht-endliche Werte
        None => CURVE_DEFAULT_DIRECTION,
    };

    let side = dir.cross(CURVE_UP_AXIS);
    let side = if side.length() < threshold {
        dir.cross(CURVE_SECONDARY_AXIS)
    } else {
        side
    };
    side.try_normalize()
        .unwrap_or_else(|| CURVE_DEFAULT_DIRECTION.cross(CURVE_UP_AXIS))
}

/// Polylinie mit `resolution + 1` Punkten bei gleichmäßigem Parameter.
///
/// Dient nur der glatten Darstellung; unabhängig von der Stützstellenzahl
/// der Bogenlängen-Tabelle. `resolution` wird auf mindestens 1 angehoben.
pub fn tessellate(points: &[Vec3], resolution: usize) -> Vec<Vec3> {
    let resolution = resolution.max(1);
    (0..=resolution)
        .map(|i| position(points, i as f32 / resolution as f32))
        .collect()
}
