//! XDMF Light Data parser.
//!
//! Accepts exactly this layout (extra siblings are ignored):
//!
//! ```text
//! <Xdmf>
//!   <Domain>
//!     <Grid>
//!       <Topology TopologyType="Triangle">
//!         <DataItem Dimensions="T 3"> a0 b0 c0 a1 b1 c1 ... </DataItem>
//!       </Topology>
//!       <Geometry GeometryType="XY">
//!         <DataItem Dimensions="V 2"> x0 y0 x1 y1 ... </DataItem>
//!       </Geometry>
//!       <Attribute Name="..." Center="Node|Cell">
//!         <DataItem Dimensions="N"> v0 v1 ... </DataItem>
//!       </Attribute>
//!     </Grid>
//!   </Domain>
//! </Xdmf>
//! ```
//!
//! Any deviation is a [`MeshError::Schema`]; nothing is returned for a
//! document that fails part-way.

use std::collections::BTreeMap;
use std::str::FromStr;

use plainmesh_mesh::{Attribute, Mesh};
use plainmesh_types::{MeshError, MeshResult};
use roxmltree::{Document, Node};
use tracing::debug;

/// Parses a Light Data XDMF document into a mesh.
pub fn parse(text: &str) -> MeshResult<Mesh> {
    let doc = Document::parse(text)
        .map_err(|e| MeshError::schema(format!("malformed XML: {e}")))?;

    let root = doc.root_element();
    expect_tag(root, "Xdmf")?;
    let domain = first_element(root, "Xdmf")?;
    expect_tag(domain, "Domain")?;
    let grid = first_element(domain, "Domain")?;
    expect_tag(grid, "Grid")?;

    let topology = parse_topology(grid)?;
    let geometry = parse_geometry(grid)?;
    let data = grid
        .children()
        .filter(|n| n.has_tag_name("Attribute"))
        .map(parse_attribute)
        .collect::<MeshResult<Vec<_>>>()?;

    let mesh = Mesh::with_data(geometry, topology, data);
    mesh.check_indices()
        .map_err(|e| MeshError::schema(format!("Topology: {e}")))?;

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        attributes = mesh.data.len(),
        "parsed XDMF document"
    );
    Ok(mesh)
}

fn parse_topology(grid: Node) -> MeshResult<Vec<[u32; 3]>> {
    let topology = find_child(grid, "Topology")?;
    expect_attr(topology, "TopologyType", "Triangle")?;
    let item = first_element(topology, "Topology")?;
    let values: Vec<u32> = parse_values(item, "Topology")?;
    let rows = reshape(&values, item, 3, "Topology")?;
    Ok(rows.map(|r| [r[0], r[1], r[2]]).collect())
}

fn parse_geometry(grid: Node) -> MeshResult<Vec<[f64; 2]>> {
    let geometry = find_child(grid, "Geometry")?;
    expect_attr(geometry, "GeometryType", "XY")?;
    let item = first_element(geometry, "Geometry")?;
    let values: Vec<f64> = parse_values(item, "Geometry")?;
    let rows = reshape(&values, item, 2, "Geometry")?;
    Ok(rows.map(|r| [r[0], r[1]]).collect())
}

fn parse_attribute(node: Node) -> MeshResult<Attribute> {
    let metadata: BTreeMap<String, String> = node
        .attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect();
    let label = metadata
        .get("Name")
        .map(|n| format!("Attribute '{n}'"))
        .unwrap_or_else(|| "Attribute".to_string());

    let item = first_element(node, &label)?;
    let value: Vec<f64> = parse_values(item, &label)?;
    if let Some(dims) = item.attribute("Dimensions") {
        let dims = parse_dimensions(dims, &label)?;
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| MeshError::schema(format!("{label}: Dimensions overflow")))?;
        if expected != value.len() {
            return Err(MeshError::schema(format!(
                "{label}: Dimensions declare {expected} values, found {}",
                value.len()
            )));
        }
    }
    Ok(Attribute::new(metadata, value))
}

/// Splits `values` into rows of `width`, checking them against the
/// item's `Dimensions = "rows width"` declaration.
fn reshape<'a, T>(
    values: &'a [T],
    item: Node,
    width: usize,
    what: &str,
) -> MeshResult<std::slice::ChunksExact<'a, T>> {
    let raw = item
        .attribute("Dimensions")
        .ok_or_else(|| MeshError::schema(format!("{what}: DataItem has no Dimensions")))?;
    let dims = parse_dimensions(raw, what)?;
    let [rows, cols] = dims[..] else {
        return Err(MeshError::schema(format!(
            "{what}: expected two Dimensions, got '{raw}'"
        )));
    };
    if cols != width {
        return Err(MeshError::schema(format!(
            "{what}: expected {width} columns, Dimensions declare {cols}"
        )));
    }
    if rows.checked_mul(cols) != Some(values.len()) {
        return Err(MeshError::schema(format!(
            "{what}: cannot reshape {} values into {rows} x {cols}",
            values.len()
        )));
    }
    Ok(values.chunks_exact(width))
}

fn parse_dimensions(raw: &str, what: &str) -> MeshResult<Vec<usize>> {
    let dims = parse_tokens::<usize>(raw, what)?;
    if dims.is_empty() {
        return Err(MeshError::schema(format!("{what}: empty Dimensions")));
    }
    Ok(dims)
}

fn parse_values<T: FromStr>(item: Node, what: &str) -> MeshResult<Vec<T>> {
    if let Some(format) = item.attribute("Format") {
        if format != "XML" {
            return Err(MeshError::schema(format!(
                "{what}: DataItem Format '{format}' is not inline XML"
            )));
        }
    }
    let text: String = item
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ");
    parse_tokens(&text, what)
}

fn parse_tokens<T: FromStr>(text: &str, what: &str) -> MeshResult<Vec<T>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| MeshError::schema(format!("{what}: cannot parse '{tok}'")))
        })
        .collect()
}

fn expect_tag(node: Node, tag: &str) -> MeshResult<()> {
    let found = node.tag_name().name();
    if found != tag {
        return Err(MeshError::schema(format!(
            "found element '{found}', expected '{tag}'"
        )));
    }
    Ok(())
}

fn expect_attr(node: Node, name: &str, expected: &str) -> MeshResult<()> {
    match node.attribute(name) {
        Some(v) if v == expected => Ok(()),
        Some(v) => Err(MeshError::schema(format!(
            "{name} is '{v}', only '{expected}' is supported"
        ))),
        None => Err(MeshError::schema(format!(
            "{} has no {name} attribute",
            node.tag_name().name()
        ))),
    }
}

fn first_element<'a, 'i>(node: Node<'a, 'i>, what: &str) -> MeshResult<Node<'a, 'i>> {
    node.children()
        .find(|n| n.is_element())
        .ok_or_else(|| MeshError::schema(format!("{what} has no child element")))
}

fn find_child<'a, 'i>(node: Node<'a, 'i>, tag: &str) -> MeshResult<Node<'a, 'i>> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .ok_or_else(|| MeshError::schema(format!("Grid has no {tag} element")))
}
