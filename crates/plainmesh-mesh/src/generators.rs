//! Procedural mesh generators.
//!
//! Generators are deterministic: identical arguments produce
//! bit-identical meshes.

use plainmesh_types::{MeshError, MeshResult};

use crate::mesh::Mesh;

/// Generates the unit square `[0, 1] × [0, 1]` as a structured grid of
/// right triangles.
///
/// Vertices are emitted column by column: vertex `j + i*ny` sits at
/// `(i/(nx-1), j/(ny-1))`. Each grid cell with lower-left vertex `ij`
/// is split along the diagonal `ij → ij+ny+1`.
///
/// # Arguments
/// - `nx`: Number of vertices along X (at least 2).
/// - `ny`: Number of vertices along Y (at least 2).
///
/// # Example
/// ```
/// use plainmesh_mesh::generators::rectangle_mesh;
/// let mesh = rectangle_mesh(3, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 12); // 2 × 2 × 3 cells
/// ```
pub fn rectangle_mesh(nx: usize, ny: usize) -> MeshResult<Mesh> {
    if nx < 2 || ny < 2 {
        return Err(MeshError::InputContract(format!(
            "rectangle_mesh needs at least 2 vertices per axis, got nx={nx}, ny={ny}"
        )));
    }
    let vertex_count = nx
        .checked_mul(ny)
        .filter(|&n| u32::try_from(n).is_ok())
        .ok_or_else(|| {
            MeshError::InputContract(format!("rectangle_mesh({nx}, {ny}) has too many vertices"))
        })?;

    let mut geometry = Vec::with_capacity(vertex_count);
    for i in 0..nx {
        for j in 0..ny {
            geometry.push([i as f64 / (nx - 1) as f64, j as f64 / (ny - 1) as f64]);
        }
    }

    let mut topology = Vec::with_capacity(2 * (nx - 1) * (ny - 1));
    let stride = ny as u32;
    for i in 0..nx - 1 {
        for j in 0..ny - 1 {
            let ij = (j + i * ny) as u32;
            topology.push([ij, ij + stride, ij + stride + 1]);
            topology.push([ij + 1, ij, ij + stride + 1]);
        }
    }

    Ok(Mesh::new(geometry, topology))
}
