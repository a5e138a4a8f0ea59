//! Triangulierung zweier ausgerichteter Punktfolgen zu einem Strip-Mesh.

use super::{Aabb, StripVertex};
use crate::core::{KernelError, KernelResult};
use crate::geometry::LanePoints;
use crate::shared::options::CURVE_UP_AXIS;
use glam::{Vec2, Vec3};

/// Fertiges Strip-Mesh (Vertices, Indizes, UVs, Normalen, Bounds).
///
/// Wird bei jeder Neuberechnung vollständig ersetzt, nie inkrementell
/// verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct StripMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
    bounds: Aabb,
}

impl StripMesh {
    /// Baut das Mesh aus linker und rechter Spur.
    ///
    /// - Vertices verschränkt: `[l0, r0, l1, r1, …]`, also `2i = l_i`, `2i+1 = r_i`
    /// - pro Quad zwei Dreiecke `(l_i, l_i+1, r_i)` und `(r_i, l_i+1, r_i+1)`,
    ///   Vorderseite zeigt bei Start→Ende / links→rechts nach oben
    /// - UV: `u = 0` links, `u = 1` rechts, `v = i / (n − 1)`
    ///
    /// Beide Seiten müssen gleich lang sein und mindestens 2 Punkte haben,
    /// sonst `DegenerateGeometry` (es entsteht kein Mesh).
    pub fn build(left: &[Vec3], right: &[Vec3]) -> KernelResult<Self> {
        if left.len() != right.len() {
            return Err(KernelError::DegenerateGeometry(format!(
                "Spurlängen unterschiedlich: links {}, rechts {}",
                left.len(),
                right.len()
            )));
        }
        let count = left.len();
        if count < 2 {
            return Err(KernelError::DegenerateGeometry(format!(
                "mindestens 2 Spurpunkte nötig, erhalten {}",
                count
            )));
        }

        let mut positions = Vec::with_capacity(count * 2);
        let mut uvs = Vec::with_capacity(count * 2);
        let last = (count - 1) as f32;
        for (i, (&l, &r)) in left.iter().zip(right).enumerate() {
            let v = i as f32 / last;
            positions.push(l);
            positions.push(r);
            uvs.push(Vec2::new(0.0, v));
            uvs.push(Vec2::new(1.0, v));
        }

        let mut indices = Vec::with_capacity((count - 1) * 6);
        for i in 0..count as u32 - 1 {
            let l0 = 2 * i;
            let r0 = l0 + 1;
            let l1 = l0 + 2;
            let r1 = l0 + 3;
            indices.extend_from_slice(&[l0, l1, r0, r0, l1, r1]);
        }

        let normals = vertex_normals(&positions, &indices);
        let bounds = Aabb::from_points(&positions);

        log::debug!(
            "Strip-Mesh: {} Vertices, {} Dreiecke",
            positions.len(),
            indices.len() / 3
        );

        Ok(Self {
            positions,
            indices,
            uvs,
            normals,
            bounds,
        })
    }

    /// Baut das Mesh aus einer gesampelten Spurpunkt-Folge.
    pub fn from_lanes(lanes: &LanePoints) -> KernelResult<Self> {
        Self::build(lanes.left(), lanes.right())
    }

    /// Vertex-Positionen (verschränkt links/rechts).
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Dreiecks-Indizes (3 pro Dreieck).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Texturkoordinaten pro Vertex.
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Gemittelte Flächennormalen pro Vertex.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Achsenparallele Hülle aller Vertices.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Verschränkte GPU-Vertices (Position, Normale, UV).
    pub fn vertices(&self) -> Vec<StripVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| StripVertex::new(*p, *n, *uv))
            .collect()
    }

    /// Index-Buffer als Bytes für den Upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Flächengewichtete Vertex-Normalen aus den fertigen Dreiecken.
fn vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(CURVE_UP_AXIS))
        .collect()
}
