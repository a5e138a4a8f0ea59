//! Verwaltung der extern besessenen Marker-/Mesh-Ressourcen eines Sampling-Durchlaufs.
//!
//! Der Kern kennt nur opake Handles. Erzeugen und Zerstören übernimmt die
//! Host-Anwendung über [`MarkerHost`]; `NodeSet` merkt sich die Handles und
//! ersetzt sie als Einheit.

use crate::core::KernelResult;
use crate::geometry::{LanePair, LanePoints};
use crate::mesh::StripMesh;
use std::fmt;

/// Schnittstelle zur Host-Szene, die Marker und Meshes tatsächlich anlegt.
pub trait MarkerHost {
    /// Opakes Handle eines Markers
    type Marker;
    /// Opakes Handle eines Meshes
    type Mesh;

    /// Legt einen Marker für ein Spurpunkt-Paar an.
    fn create_marker(&mut self, pair: &LanePair) -> Self::Marker;
    /// Zerstört einen Marker.
    fn destroy_marker(&mut self, marker: Self::Marker);
    /// Übernimmt ein fertiges Mesh in die Szene.
    fn create_mesh(&mut self, mesh: StripMesh) -> Self::Mesh;
    /// Entfernt ein Mesh aus der Szene.
    fn destroy_mesh(&mut self, mesh: Self::Mesh);
}

/// Handles der aktuell erzeugten Marker und des Meshes.
pub struct NodeSet<H: MarkerHost> {
    markers: Vec<H::Marker>,
    mesh: Option<H::Mesh>,
    generation: u64,
}

impl<H: MarkerHost> fmt::Debug for NodeSet<H>
where
    H::Marker: fmt::Debug,
    H::Mesh: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeSet")
            .field("markers", &self.markers)
            .field("mesh", &self.mesh)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<H: MarkerHost> Default for NodeSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: MarkerHost> NodeSet<H> {
    /// Leerer Zustand ohne Handles.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            mesh: None,
            generation: 0,
        }
    }

    /// Ersetzt Marker und Mesh durch neue aus `lanes`.
    ///
    /// Ablauf:
    /// 1. Mesh bauen (rein, kann fehlschlagen; dann bleibt alles unverändert)
    /// 2. alle alten Marker und das alte Mesh zerstören
    /// 3. neue Marker anlegen, Mesh übergeben, Handles speichern
    ///
    /// Ein Aufrufer sieht nie eine Mischung aus alten und neuen Handles.
    pub fn regenerate(&mut self, host: &mut H, lanes: &LanePoints) -> KernelResult<()> {
        let mesh = StripMesh::from_lanes(lanes)?;

        self.clear(host);

        let markers: Vec<H::Marker> = lanes
            .pairs()
            .map(|pair| host.create_marker(&pair))
            .collect();
        let mesh = host.create_mesh(mesh);

        self.markers = markers;
        self.mesh = Some(mesh);
        self.generation += 1;

        log::debug!(
            "NodeSet neu erzeugt: {} Marker (Generation {})",
            self.markers.len(),
            self.generation
        );
        Ok(())
    }

    /// Zerstört alle Marker und das Mesh. Ohne Handles wirkungslos.
    pub fn clear(&mut self, host: &mut H) {
        if self.is_empty() {
            return;
        }
        let count = self.markers.len();
        for marker in self.markers.drain(..) {
            host.destroy_marker(marker);
        }
        if let Some(mesh) = self.mesh.take() {
            host.destroy_mesh(mesh);
        }
        log::debug!("NodeSet geleert: {} Marker zerstört", count);
    }

    /// `true` wenn weder Marker noch Mesh gehalten werden.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.mesh.is_none()
    }

    /// Anzahl gehaltener Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// `true` wenn ein Mesh gehalten wird.
    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }

    /// Gehaltene Marker-Handles in Spur-Reihenfolge.
    pub fn markers(&self) -> &[H::Marker] {
        &self.markers
    }

    /// Gehaltenes Mesh-Handle.
    pub fn mesh(&self) -> Option<&H::Mesh> {
        self.mesh.as_ref()
    }

    /// Anzahl abgeschlossener Neuerzeugungen.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests;
