//! Core 2D triangle mesh type.
//!
//! Geometry and topology are stored as row arrays:
//! - `geometry: [[x0, y0], [x1, y1], ...]`
//! - `topology: [[a0, b0, c0], [a1, b1, c1], ...]`
//!
//! The row position is the identifier: vertex `i` is `geometry[i]`,
//! triangle `t` is `topology[t]`.

use std::collections::BTreeSet;

use plainmesh_types::{MeshError, MeshResult, TriangleId, VertexId};

use crate::attribute::Attribute;

/// A two-dimensional triangle mesh with optional named data fields.
///
/// Meshes are produced in one shot by a reader or a generator and are
/// not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex coordinates `[x, y]`.
    pub geometry: Vec<[f64; 2]>,
    /// Triangles as three vertex identifiers each.
    pub topology: Vec<[u32; 3]>,
    /// Named data fields in declaration order.
    pub data: Vec<Attribute>,
}

/// Axis-aligned bounding box of a mesh's geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> [f64; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }
}

impl Mesh {
    /// Creates a mesh without data fields.
    pub fn new(geometry: Vec<[f64; 2]>, topology: Vec<[u32; 3]>) -> Self {
        Self {
            geometry,
            topology,
            data: Vec::new(),
        }
    }

    /// Creates a mesh carrying data fields.
    pub fn with_data(
        geometry: Vec<[f64; 2]>,
        topology: Vec<[u32; 3]>,
        data: Vec<Attribute>,
    ) -> Self {
        Self {
            geometry,
            topology,
            data,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.geometry.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.topology.len()
    }

    /// Returns the position of a vertex.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> [f64; 2] {
        self.geometry[id.index()]
    }

    /// Returns the three vertex identifiers of a triangle.
    #[inline]
    pub fn triangle(&self, id: TriangleId) -> [VertexId; 3] {
        let [a, b, c] = self.topology[id.index()];
        [VertexId(a), VertexId(b), VertexId(c)]
    }

    /// Iterates over every triangle id in topology order.
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.topology.len() as u32).map(TriangleId)
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn corners(&self, id: TriangleId) -> [[f64; 2]; 3] {
        self.triangle(id).map(|v| self.vertex(v))
    }

    /// Looks up a data field by its `Name` metadata.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.data.iter().find(|a| a.name() == Some(name))
    }

    /// Bounding box of the geometry, `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.geometry.split_first()?;
        let init = Bounds {
            min: *first,
            max: *first,
        };
        Some(rest.iter().fold(init, |b, p| Bounds {
            min: [b.min[0].min(p[0]), b.min[1].min(p[1])],
            max: [b.max[0].max(p[0]), b.max[1].max(p[1])],
        }))
    }

    /// Unique undirected edges, each stored with the smaller id first.
    pub fn edges(&self) -> Vec<[VertexId; 2]> {
        let mut set = BTreeSet::new();
        for &[a, b, c] in &self.topology {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                set.insert([VertexId(u.min(v)), VertexId(u.max(v))]);
            }
        }
        set.into_iter().collect()
    }

    /// Checks that every triangle references an existing vertex.
    pub fn check_indices(&self) -> MeshResult<()> {
        let n = self.vertex_count();
        for t in self.triangle_ids() {
            if let Some(v) = self.triangle(t).into_iter().find(|v| v.index() >= n) {
                return Err(MeshError::InvalidMesh(format!(
                    "Triangle {t} references vertex {v} (vertex count: {n})"
                )));
            }
        }
        Ok(())
    }
}
