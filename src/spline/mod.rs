//! Spur-Spline: bündelt Kontrollpunkte, Optionen und die erzeugten Marker.
//!
//! Die Spline besitzt ihr `NodeSet`; der Kern selbst hält keinen Zustand.
//! Kontrollpunkte werden von der externen Editier-Schicht gesetzt, jede
//! Neuberechnung arbeitet auf einem unveränderlichen Schnappschuss.

use crate::core::{ControlPoints, KernelResult};
use crate::geometry::{LanePoints, bezier};
use crate::nodes::{MarkerHost, NodeSet};
use crate::shared::LaneOptions;
use glam::Vec3;

/// Höhere Spline-Entität mit eigener Marker-Verwaltung.
pub struct LaneSpline<H: MarkerHost> {
    points: ControlPoints,
    options: LaneOptions,
    nodes: NodeSet<H>,
    lanes: Option<LanePoints>,
}

impl<H: MarkerHost> LaneSpline<H> {
    /// Erstellt eine Spline ohne erzeugte Marker. Optionen werden bereinigt.
    pub fn new(points: ControlPoints, options: LaneOptions) -> Self {
        Self {
            points,
            options: options.sanitized(),
            nodes: NodeSet::new(),
            lanes: None,
        }
    }

    /// Aktuelle Kontrollpunkte.
    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    /// Ersetzt die Kontrollpunkte (erzeugte Marker bleiben bis zur nächsten Neuberechnung).
    pub fn set_points(&mut self, points: ControlPoints) {
        self.points = points;
    }

    /// Ändert die Anzahl der Kontrollpunkte (geklemmt auf `2..=10`).
    pub fn set_point_count(&mut self, count: usize) {
        self.points = self.points.resized(count);
    }

    /// Aktuelle Optionen.
    pub fn options(&self) -> &LaneOptions {
        &self.options
    }

    /// Ersetzt die Optionen (bereinigt).
    pub fn set_options(&mut self, options: LaneOptions) {
        self.options = options.sanitized();
    }

    /// Spurpunkte für den aktuellen Stand, ohne Marker anzulegen.
    pub fn sample(&self) -> KernelResult<LanePoints> {
        self.options.sampler().sample(
            &self.points,
            self.options.lane_width,
            self.options.sample_plan,
        )
    }

    /// Glatte Vorschau-Polylinie der Mittelkurve.
    pub fn center_polyline(&self) -> Vec<Vec3> {
        bezier::tessellate(self.points.as_slice(), self.options.tessellation_resolution)
    }

    /// Sampelt neu und ersetzt Marker und Mesh als Einheit.
    ///
    /// Bei einem Fehler bleibt der vorherige Zustand vollständig erhalten.
    pub fn regenerate(&mut self, host: &mut H) -> KernelResult<()> {
        let lanes = self.sample()?;
        self.nodes.regenerate(host, &lanes)?;
        self.lanes = Some(lanes);
        Ok(())
    }

    /// Entfernt alle erzeugten Marker und das Mesh.
    pub fn clear(&mut self, host: &mut H) {
        self.nodes.clear(host);
        self.lanes = None;
    }

    /// Spurpunkte der letzten erfolgreichen Neuberechnung.
    pub fn lanes(&self) -> Option<&LanePoints> {
        self.lanes.as_ref()
    }

    /// Erzeugte Marker-/Mesh-Handles.
    pub fn nodes(&self) -> &NodeSet<H> {
        &self.nodes
    }
}
