//! Zentrale Konfiguration für den Spur-Geometriekern.
//!
//! `LaneOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Persistenz übernimmt die Host-Anwendung; hier wird nur TOML-Text erzeugt
//! bzw. gelesen.

use crate::core::SamplePlan;
use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Up-Achse für die seitliche Normale (Tangente × Up).
pub const CURVE_UP_AXIS: Vec3 = Vec3::Y;
/// Ersatzachse, wenn die Tangente (fast) parallel zur Up-Achse liegt.
pub const CURVE_SECONDARY_AXIS: Vec3 = Vec3::Z;
/// Richtung, wenn keine Ableitung existiert (ein Punkt bzw. Nullableitung).
pub const CURVE_DEFAULT_DIRECTION: Vec3 = Vec3::X;
/// Mindestlänge von Tangente × Up, darunter greift die Ersatzachse.
pub const NORMAL_FALLBACK_THRESHOLD: f32 = 1e-4;

// ── Sampling ────────────────────────────────────────────────────────

/// Intervalle der Bogenlängen-Tabelle.
pub const ARC_LENGTH_SAMPLES: usize = 1000;
/// Standard-Abstand zwischen Spurpunkten (Welteinheiten).
pub const SAMPLE_SPACING: f32 = 2.0;
/// Standard-Spurbreite (Welteinheiten).
pub const LANE_WIDTH: f32 = 4.0;
/// Kleinste zulässige Spurbreite.
pub const LANE_WIDTH_MIN: f32 = 0.01;

// ── Darstellung ─────────────────────────────────────────────────────

/// Segmente der Vorschau-Polylinie (unabhängig von der Bogenlängen-Tabelle).
pub const TESSELLATION_RESOLUTION: usize = 64;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen einer Spur-Spline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneOptions {
    /// Abstand zwischen linker und rechter Spur
    #[serde(default = "default_lane_width")]
    pub lane_width: f32,
    /// Intervalle der Bogenlängen-Tabelle
    #[serde(default = "default_arc_length_samples")]
    pub arc_length_samples: usize,
    /// Segmente der Vorschau-Polylinie
    #[serde(default = "default_tessellation_resolution")]
    pub tessellation_resolution: usize,
    /// Schwelle für den Normalen-Fallback
    #[serde(default = "default_normal_fallback_threshold")]
    pub normal_fallback_threshold: f32,
    /// Unterteilung nach Abstand oder Anzahl
    #[serde(default)]
    pub sample_plan: SamplePlan,
}

impl Default for LaneOptions {
    fn default() -> Self {
        Self {
            lane_width: LANE_WIDTH,
            arc_length_samples: ARC_LENGTH_SAMPLES,
            tessellation_resolution: TESSELLATION_RESOLUTION,
            normal_fallback_threshold: NORMAL_FALLBACK_THRESHOLD,
            sample_plan: SamplePlan::default(),
        }
    }
}

fn default_lane_width() -> f32 {
    LANE_WIDTH
}

fn default_arc_length_samples() -> usize {
    ARC_LENGTH_SAMPLES
}

fn default_tessellation_resolution() -> usize {
    TESSELLATION_RESOLUTION
}

fn default_normal_fallback_threshold() -> f32 {
    NORMAL_FALLBACK_THRESHOLD
}

impl LaneOptions {
    /// Liest Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let options: Self =
            toml::from_str(content).context("Spur-Optionen konnten nicht gelesen werden")?;
        log::info!("Spur-Optionen geladen (Breite {:.3})", options.lane_width);
        Ok(options.sanitized())
    }

    /// Serialisiert die Optionen als TOML-Text.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Spur-Optionen konnten nicht serialisiert werden")
    }

    /// Klemmt alle Werte auf ihre Mindestgrenzen und protokolliert Korrekturen.
    ///
    /// Ein nicht-positiver Abstand im `sample_plan` wird nicht geklemmt: er
    /// bleibt ein Aufruferfehler und wird beim Sampling gemeldet.
    pub fn sanitized(mut self) -> Self {
        if !self.lane_width.is_finite() || self.lane_width < LANE_WIDTH_MIN {
            log::warn!(
                "Spurbreite {} ungültig, verwende {}",
                self.lane_width,
                LANE_WIDTH_MIN
            );
            self.lane_width = LANE_WIDTH_MIN;
        }
        if self.arc_length_samples < 1 {
            log::warn!("Bogenlängen-Stützstellen 0, verwende {}", ARC_LENGTH_SAMPLES);
            self.arc_length_samples = ARC_LENGTH_SAMPLES;
        }
        if self.tessellation_resolution < 1 {
            log::warn!("Tessellierung 0, verwende 1");
            self.tessellation_resolution = 1;
        }
        if !self.normal_fallback_threshold.is_finite() || self.normal_fallback_threshold <= 0.0 {
            self.normal_fallback_threshold = NORMAL_FALLBACK_THRESHOLD;
        }
        if let SamplePlan::Count(count @ 0..=1) = self.sample_plan {
            log::warn!("Sample-Anzahl {} auf 2 geklemmt", count);
            self.sample_plan = SamplePlan::Count(2);
        }
        self
    }

    /// Sampler mit den Tabellen-/Normalen-Einstellungen dieser Optionen.
    pub fn sampler(&self) -> crate::geometry::LaneSampler {
        crate::geometry::LaneSampler {
            arc_length_samples: self.arc_length_samples,
            normal_threshold: self.normal_fallback_threshold,
        }
    }
}
