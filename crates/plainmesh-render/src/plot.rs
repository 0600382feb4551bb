//! Mesh plotting.
//!
//! A plot is issued as: view, optional field layer, wireframe. The
//! field layer is picked by array length alone: `V` values draw filled
//! contours, `T` values draw flat per-triangle colors. When `V == T`
//! the per-vertex interpretation wins.

use plainmesh_mesh::Mesh;
use plainmesh_types::{MeshError, MeshResult};
use tracing::debug;

use crate::canvas::{Canvas, ColorScale, ContourLevels, ViewBox};
use crate::options::PlotOptions;

/// Where a data field's values live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    /// One value per vertex.
    Vertex,
    /// One value per triangle.
    Triangle,
}

/// Classifies a field of `len` values against a mesh.
pub fn field_location(mesh: &Mesh, len: usize) -> MeshResult<FieldLocation> {
    if len == mesh.vertex_count() {
        Ok(FieldLocation::Vertex)
    } else if len == mesh.triangle_count() {
        Ok(FieldLocation::Triangle)
    } else {
        Err(MeshError::Shape {
            len,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
        })
    }
}

/// Plots a mesh and an optional data field onto `canvas`.
///
/// All validation happens before the first draw call, so a failed plot
/// leaves the canvas untouched.
pub fn plot<C: Canvas + ?Sized>(
    canvas: &mut C,
    mesh: &Mesh,
    field: Option<&[f64]>,
    options: &PlotOptions,
) -> MeshResult<()> {
    options.validate()?;
    let bounds = mesh
        .bounds()
        .ok_or_else(|| MeshError::InvalidMesh("cannot plot a mesh without vertices".into()))?;
    mesh.check_indices()?;
    let layer = field
        .map(|values| field_location(mesh, values.len()).map(|loc| (loc, values)))
        .transpose()?;

    debug!(
        canvas = canvas.name(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        field = ?layer.map(|(loc, _)| loc),
        "plotting mesh"
    );

    canvas.set_view(&ViewBox::around(bounds, options.margin))?;
    match layer {
        Some((FieldLocation::Vertex, values)) => {
            let levels = ContourLevels::spanning(values, options.contour_levels);
            canvas.fill_contours(mesh, values, &levels, options.colormap)?;
        }
        Some((FieldLocation::Triangle, values)) => {
            let scale = ColorScale::spanning(values);
            canvas.fill_triangles(mesh, values, &scale, options.colormap)?;
        }
        None => {}
    }
    canvas.draw_edges(mesh, &options.edge_style())?;
    Ok(())
}

/// Plots the mesh's data field called `name`.
pub fn plot_attribute<C: Canvas + ?Sized>(
    canvas: &mut C,
    mesh: &Mesh,
    name: &str,
    options: &PlotOptions,
) -> MeshResult<()> {
    let attr = mesh.attribute(name).ok_or_else(|| {
        let available: Vec<&str> = mesh.data.iter().filter_map(|a| a.name()).collect();
        MeshError::InvalidMesh(format!(
            "no data field named '{name}'. Available: {}",
            available.join(", ")
        ))
    })?;
    plot(canvas, mesh, Some(&attr.value), options)
}
