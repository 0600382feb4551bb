//! CLI command implementations.

use plainmesh_mesh::generators::rectangle_mesh;
use plainmesh_mesh::Mesh;
use plainmesh_render::{plot_attribute, RasterCanvas, RenderConfig};
use plainmesh_types::MeshResult;

/// Arguments of the `plot` command.
pub struct PlotArgs<'a> {
    pub source: Option<&'a str>,
    pub rectangle: Option<&'a [usize]>,
    pub field: Option<&'a str>,
    pub config: Option<&'a str>,
    pub colormap: Option<&'a str>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub output: &'a str,
}

/// Reads a mesh from a URL or a local file.
fn load(source: &str) -> MeshResult<Mesh> {
    if source.starts_with("http://") || source.starts_with("https://") {
        plainmesh_io::get(source)
    } else {
        plainmesh_io::read_file(source)
    }
}

fn print_summary(mesh: &Mesh) {
    println!("Vertices:     {}", mesh.vertex_count());
    println!("Triangles:    {}", mesh.triangle_count());
    if let Some(b) = mesh.bounds() {
        println!("X range:      [{:.4}, {:.4}]", b.min[0], b.max[0]);
        println!("Y range:      [{:.4}, {:.4}]", b.min[1], b.max[1]);
    }
    if mesh.data.is_empty() {
        println!("Data fields:  none");
        return;
    }
    println!("Data fields:");
    for attr in &mesh.data {
        let location = if attr.len() == mesh.vertex_count() {
            "per-vertex"
        } else if attr.len() == mesh.triangle_count() {
            "per-triangle"
        } else {
            "mismatched length"
        };
        println!(
            "  {:<20} {:>8} values  ({location})",
            attr.name().unwrap_or("<unnamed>"),
            attr.len(),
        );
    }
}

/// Summarize a mesh.
pub fn info(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("plainmesh Info");
    println!("──────────────");
    println!("Source:       {source}");

    let mesh = load(source)?;
    print_summary(&mesh);
    Ok(())
}

/// Generate and summarize a rectangle mesh.
pub fn rectangle(nx: usize, ny: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("plainmesh Rectangle");
    println!("───────────────────");
    println!("Grid:         {nx} x {ny}");

    let mesh = rectangle_mesh(nx, ny)?;
    print_summary(&mesh);
    Ok(())
}

/// Plot a mesh to PNG.
pub fn plot(args: PlotArgs<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(path) => RenderConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => RenderConfig::default(),
    };
    if let Some(name) = args.colormap {
        config.plot.colormap = name.parse()?;
    }
    if let Some(width) = args.width {
        config.raster.width = width;
    }
    if let Some(height) = args.height {
        config.raster.height = height;
    }

    let mesh = match (args.source, args.rectangle) {
        (_, Some(&[nx, ny])) => rectangle_mesh(nx, ny)?,
        (Some(source), _) => load(source)?,
        _ => return Err("either a source or --rectangle NX NY is required".into()),
    };

    let mut canvas = RasterCanvas::new(&config.raster)?;
    match args.field {
        Some(name) => plot_attribute(&mut canvas, &mesh, name, &config.plot)?,
        None => plainmesh_render::plot(&mut canvas, &mesh, None, &config.plot)?,
    }
    canvas.save(args.output)?;

    println!(
        "Plotted {} vertices, {} triangles to {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        args.output
    );
    Ok(())
}

/// Print the default rendering configuration.
pub fn config() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", RenderConfig::default().to_toml_string()?);
    Ok(())
}
