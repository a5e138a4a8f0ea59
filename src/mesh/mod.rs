//! Mesh-Erzeugung aus Spurpunkten und Vertex-Format für den GPU-Upload.

mod strip;

pub use strip::StripMesh;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Vertex eines Strip-Meshes (Position, Normale, UV).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StripVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// Vertex-Normale
    pub normal: [f32; 3],
    /// Texturkoordinate (u quer, v längs)
    pub uv: [f32; 2],
}

impl StripVertex {
    /// Erstellt einen neuen StripVertex.
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl Aabb {
    /// Hülle aller Punkte; leer ergibt eine Box im Ursprung.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            };
        };
        rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, &p| Self {
                min: acc.min.min(p),
                max: acc.max.max(p),
            },
        )
    }

    /// Mittelpunkt.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Kantenlängen.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// `true` wenn `p` innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}
