//! Integration tests for plainmesh-render.

use plainmesh_mesh::generators::rectangle_mesh;
use plainmesh_mesh::{Attribute, Mesh};
use plainmesh_render::{
    field_location, plot, plot_attribute, Canvas, ColorScale, Colormap, ContourLevels, DrawCall,
    FieldLocation, PlotOptions, RasterCanvas, RasterOptions, RecordingCanvas, RenderConfig,
    ViewBox,
};
use plainmesh_types::MeshError;

fn close(a: [u8; 3], b: [u8; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(&x, &y)| (x as i16 - y as i16).abs() <= 1)
}

// ─── Dispatch Tests ───────────────────────────────────────────

#[test]
fn vertex_field_draws_contours() {
    let mesh = rectangle_mesh(3, 4).unwrap();
    let field = vec![1.0; mesh.vertex_count()];
    let mut canvas = RecordingCanvas::new();
    plot(&mut canvas, &mesh, Some(&field), &PlotOptions::default()).unwrap();

    assert_eq!(canvas.calls.len(), 3);
    assert!(matches!(canvas.calls[0], DrawCall::SetView(_)));
    assert!(matches!(
        canvas.calls[1],
        DrawCall::FillContours { values: 12, .. }
    ));
    assert!(matches!(canvas.calls[2], DrawCall::DrawEdges { .. }));
}

#[test]
fn contour_band_count_follows_options() {
    let mesh = rectangle_mesh(3, 3).unwrap();
    let field: Vec<f64> = (0..mesh.vertex_count()).map(|i| i as f64).collect();
    let mut canvas = RecordingCanvas::new();
    plot(&mut canvas, &mesh, Some(&field), &PlotOptions::default()).unwrap();
    assert!(matches!(
        canvas.calls[1],
        DrawCall::FillContours { bands: 40, colormap: Colormap::Viridis, .. }
    ));
}

#[test]
fn triangle_field_draws_flat_colors() {
    let mesh = rectangle_mesh(3, 3).unwrap();
    let field = vec![0.5; mesh.triangle_count()];
    let mut canvas = RecordingCanvas::new();
    plot(&mut canvas, &mesh, Some(&field), &PlotOptions::default()).unwrap();
    assert!(matches!(
        canvas.calls[1],
        DrawCall::FillTriangles { values: 8, .. }
    ));
}

#[test]
fn wrong_length_is_shape_error_and_draws_nothing() {
    let mesh = rectangle_mesh(3, 3).unwrap();
    let field = vec![0.0; 5];
    let mut canvas = RecordingCanvas::new();
    let err = plot(&mut canvas, &mesh, Some(&field), &PlotOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        MeshError::Shape { len: 5, vertices: 9, triangles: 8 }
    ));
    assert!(canvas.calls.is_empty());
}

#[test]
fn vertex_interpretation_wins_when_counts_match() {
    let mesh = Mesh::new(
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        vec![[0, 1, 2], [0, 2, 3], [0, 1, 3], [1, 2, 3]],
    );
    assert_eq!(field_location(&mesh, 4).unwrap(), FieldLocation::Vertex);
}

#[test]
fn no_field_draws_only_wireframe() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let mut canvas = RecordingCanvas::new();
    plot(&mut canvas, &mesh, None, &PlotOptions::default()).unwrap();
    assert_eq!(canvas.calls.len(), 2);
    match &canvas.calls[1] {
        DrawCall::DrawEdges { edges, style } => {
            assert_eq!(*edges, 5);
            assert_eq!(style.color, [0, 0, 0]);
            assert!((style.alpha - 0.5).abs() < 1e-6);
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn view_has_ten_percent_margin() {
    let mesh = rectangle_mesh(4, 4).unwrap();
    let mut canvas = RecordingCanvas::new();
    plot(&mut canvas, &mesh, None, &PlotOptions::default()).unwrap();
    let DrawCall::SetView(view) = canvas.calls[0] else {
        panic!("first call should set the view");
    };
    assert!((view.x[0] + 0.1).abs() < 1e-12);
    assert!((view.x[1] - 1.1).abs() < 1e-12);
    assert!((view.y[0] + 0.1).abs() < 1e-12);
    assert!((view.y[1] - 1.1).abs() < 1e-12);
}

#[test]
fn degenerate_extent_still_has_a_view() {
    let mesh = Mesh::new(vec![[2.0, 0.0], [2.0, 1.0], [2.0, 2.0]], vec![[0, 1, 2]]);
    let view = ViewBox::around(mesh.bounds().unwrap(), 0.1);
    assert!(view.width() > 0.0);
    assert!((view.height() - 2.4).abs() < 1e-12);
}

#[test]
fn empty_mesh_is_rejected() {
    let mut canvas = RecordingCanvas::new();
    let err = plot(&mut canvas, &Mesh::default(), None, &PlotOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::InvalidMesh(_)));
    assert!(canvas.calls.is_empty());
}

#[test]
fn out_of_range_topology_is_rejected_before_drawing() {
    let mesh = Mesh::new(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], vec![[0, 1, 7]]);
    let mut canvas = RecordingCanvas::new();
    assert!(plot(&mut canvas, &mesh, None, &PlotOptions::default()).is_err());
    assert!(canvas.calls.is_empty());
}

#[test]
fn invalid_options_are_rejected() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let options = PlotOptions {
        wire_alpha: 2.0,
        ..Default::default()
    };
    let mut canvas = RecordingCanvas::new();
    let err = plot(&mut canvas, &mesh, None, &options).unwrap_err();
    assert!(matches!(err, MeshError::InvalidConfig(_)));
    assert!(canvas.calls.is_empty());
}

#[test]
fn plot_attribute_by_name() {
    let base = rectangle_mesh(2, 2).unwrap();
    let mesh = Mesh::with_data(
        base.geometry,
        base.topology,
        vec![Attribute::named("material", vec![1.0, 2.0])],
    );
    let mut canvas = RecordingCanvas::new();
    plot_attribute(&mut canvas, &mesh, "material", &PlotOptions::default()).unwrap();
    assert!(matches!(canvas.calls[1], DrawCall::FillTriangles { values: 2, .. }));

    let err = plot_attribute(&mut canvas, &mesh, "pressure", &PlotOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::InvalidMesh(ref m) if m.contains("material")));
}

// ─── Level / Scale Tests ──────────────────────────────────────

#[test]
fn linear_levels_bands() {
    let levels = ContourLevels::linear(0.0, 4.0, 4);
    assert_eq!(levels.boundaries, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(levels.band(0.0), 0);
    assert_eq!(levels.band(3.99), 3);
    assert_eq!(levels.band(4.0), 3);
    assert_eq!(levels.band(-1.0), 0);
    assert_eq!(levels.band(10.0), 3);
    assert!((levels.band_position(0) - 0.125).abs() < 1e-12);
}

#[test]
fn constant_field_has_one_band() {
    let levels = ContourLevels::spanning(&[2.0, 2.0, 2.0], 40);
    assert_eq!(levels.band_count(), 1);
    assert_eq!(levels.band(2.0), 0);
}

#[test]
fn color_scale_ignores_non_finite() {
    let scale = ColorScale::spanning(&[f64::NAN, 1.0, 3.0, f64::INFINITY]);
    assert_eq!((scale.min, scale.max), (1.0, 3.0));
    assert!((scale.normalize(2.0) - 0.5).abs() < 1e-12);
    assert_eq!(scale.normalize(5.0), 1.0);
}

// ─── Colormap Tests ───────────────────────────────────────────

#[test]
fn colormap_endpoints() {
    assert!(close(Colormap::Greys.sample(0.0), [255, 255, 255]));
    assert!(close(Colormap::Greys.sample(1.0), [0, 0, 0]));
    assert!(close(Colormap::Viridis.sample(0.0), [0x44, 0x01, 0x54]));
    assert!(close(Colormap::Viridis.sample(1.0), [0xfd, 0xe7, 0x25]));
}

#[test]
fn colormap_clamps_out_of_range() {
    assert_eq!(Colormap::Jet.sample(-3.0), Colormap::Jet.sample(0.0));
    assert_eq!(Colormap::Jet.sample(7.0), Colormap::Jet.sample(1.0));
    assert_eq!(Colormap::Jet.sample(f64::NAN), Colormap::Jet.sample(0.0));
}

#[test]
fn greys_darken_monotonically() {
    let reds: Vec<u8> = (0..=10)
        .map(|i| Colormap::Greys.sample(i as f64 / 10.0)[0])
        .collect();
    assert!(reds.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn colormap_from_str() {
    assert_eq!("Plasma".parse::<Colormap>().unwrap(), Colormap::Plasma);
    assert_eq!(Colormap::Coolwarm.to_string(), "coolwarm");
    assert!(matches!(
        "rainbow".parse::<Colormap>(),
        Err(MeshError::InvalidConfig(_))
    ));
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_options() {
    let options = PlotOptions::default();
    assert_eq!(options.contour_levels, 40);
    assert_eq!(options.wire_color, [0, 0, 0]);
    assert!((options.margin - 0.1).abs() < 1e-12);
    assert!(options.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = RenderConfig::from_toml_str(
        r#"
        [plot]
        colormap = "plasma"
        contour_levels = 20

        [raster]
        width = 320
        "#,
    )
    .unwrap();
    assert_eq!(config.plot.colormap, Colormap::Plasma);
    assert_eq!(config.plot.contour_levels, 20);
    assert!((config.plot.wire_alpha - 0.5).abs() < 1e-6);
    assert_eq!(config.raster.width, 320);
    assert_eq!(config.raster.height, 600);
}

#[test]
fn config_toml_round_trip() {
    let mut config = RenderConfig::default();
    config.plot.colormap = Colormap::Coolwarm;
    config.raster.background = [0, 0, 0, 255];
    let text = config.to_toml_string().unwrap();
    let recovered = RenderConfig::from_toml_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn toml_out_of_range_rejected() {
    assert!(RenderConfig::from_toml_str("[plot]\ncontour_levels = 0\n").is_err());
    assert!(RenderConfig::from_toml_str("[plot]\nmargin = -0.5\n").is_err());
    assert!(RenderConfig::from_toml_str("[plot]\ncolormap = \"rainbow\"\n").is_err());
    assert!(RenderConfig::from_toml_str("[raster]\nwidth = 0\n").is_err());
}

#[test]
fn toml_oversized_values_rejected() {
    let err = RenderConfig::from_toml_str("[plot]\ncontour_levels = 9000000000000000000\n")
        .unwrap_err();
    assert!(matches!(err, MeshError::InvalidConfig(_)));
    let err =
        RenderConfig::from_toml_str("[raster]\nwidth = 100000\nheight = 100000\n").unwrap_err();
    assert!(matches!(err, MeshError::InvalidConfig(_)));
    assert!(RenderConfig::from_toml_str("[plot]\ncontour_levels = 1024\n").is_ok());
}

#[test]
fn too_many_contour_levels_draw_nothing() {
    let mesh = rectangle_mesh(3, 3).unwrap();
    let field: Vec<f64> = (0..mesh.vertex_count()).map(|i| i as f64).collect();
    let options = PlotOptions {
        contour_levels: 9_000_000_000_000_000_000,
        ..Default::default()
    };
    let mut canvas = RecordingCanvas::new();
    let err = plot(&mut canvas, &mesh, Some(&field), &options).unwrap_err();
    assert!(matches!(err, MeshError::InvalidConfig(_)));
    assert!(canvas.calls.is_empty());
}

// ─── Raster Tests ─────────────────────────────────────────────

fn raster(width: u32, height: u32) -> RasterCanvas {
    RasterCanvas::new(&RasterOptions {
        width,
        height,
        ..Default::default()
    })
    .unwrap()
}

fn pixel_at(canvas: &RasterCanvas, p: [f64; 2]) -> [u8; 4] {
    let [x, y] = canvas.to_pixel(p).unwrap();
    canvas.pixel(x.floor() as u32, y.floor() as u32)
}

#[test]
fn raster_flat_colors_fill_each_triangle() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let options = PlotOptions {
        colormap: Colormap::Jet,
        wire_alpha: 0.0,
        ..Default::default()
    };
    let mut canvas = raster(100, 100);
    plot(&mut canvas, &mesh, Some(&[0.0, 1.0]), &options).unwrap();

    // Triangle 0 is the lower-right half of the square, triangle 1 the upper-left.
    let low = pixel_at(&canvas, [0.8, 0.2]);
    let high = pixel_at(&canvas, [0.2, 0.8]);
    assert!(close([low[0], low[1], low[2]], Colormap::Jet.sample(0.0)));
    assert!(close([high[0], high[1], high[2]], Colormap::Jet.sample(1.0)));
    assert_eq!(low[3], 255);

    // The margin stays at background.
    assert_eq!(canvas.pixel(0, 0), [255, 255, 255, 255]);
}

#[test]
fn raster_contours_vary_across_field() {
    let mesh = rectangle_mesh(5, 5).unwrap();
    let field: Vec<f64> = mesh.geometry.iter().map(|p| p[0]).collect();
    let mut canvas = raster(200, 200);
    plot(&mut canvas, &mesh, Some(&field), &PlotOptions::default()).unwrap();

    let left = pixel_at(&canvas, [0.01, 0.4]);
    let right = pixel_at(&canvas, [0.97, 0.4]);
    assert_ne!(left, right);
    assert_ne!(left, [255, 255, 255, 255]);
    assert!(close([left[0], left[1], left[2]], Colormap::Viridis.sample(0.5 / 40.0)));
}

#[test]
fn raster_wireframe_is_half_transparent() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let mut canvas = raster(120, 120);
    plot(&mut canvas, &mesh, None, &PlotOptions::default()).unwrap();

    // Midpoint of the bottom boundary edge.
    assert_eq!(pixel_at(&canvas, [0.5, 0.0]), [128, 128, 128, 255]);
    // Interior away from every edge stays background.
    assert_eq!(pixel_at(&canvas, [0.75, 0.25]), [255, 255, 255, 255]);
}

#[test]
fn raster_keeps_equal_aspect() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let mut canvas = raster(300, 100);
    plot(&mut canvas, &mesh, None, &PlotOptions::default()).unwrap();
    let a = canvas.to_pixel([0.0, 0.0]).unwrap();
    let b = canvas.to_pixel([1.0, 1.0]).unwrap();
    assert!(((b[0] - a[0]) - (a[1] - b[1])).abs() < 1e-9);
}

#[test]
fn raster_requires_view_before_drawing() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let mut canvas = raster(10, 10);
    let style = PlotOptions::default().edge_style();
    assert!(matches!(
        canvas.draw_edges(&mesh, &style),
        Err(MeshError::InvalidConfig(_))
    ));
}

#[test]
fn raster_direct_call_checks_length() {
    let mesh = rectangle_mesh(2, 2).unwrap();
    let mut canvas = raster(10, 10);
    canvas
        .set_view(&ViewBox::around(mesh.bounds().unwrap(), 0.1))
        .unwrap();
    let scale = ColorScale { min: 0.0, max: 1.0 };
    let err = canvas
        .fill_triangles(&mesh, &[0.0; 3], &scale, Colormap::Viridis)
        .unwrap_err();
    assert!(matches!(err, MeshError::Shape { len: 3, .. }));
}

#[test]
fn raster_rejects_zero_size() {
    assert!(RasterCanvas::new(&RasterOptions {
        width: 0,
        ..Default::default()
    })
    .is_err());
}

#[test]
fn raster_saves_png() {
    let mesh = rectangle_mesh(3, 3).unwrap();
    let mut canvas = raster(64, 48);
    plot(&mut canvas, &mesh, None, &PlotOptions::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mesh.png");
    canvas.save(&path).unwrap();
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
}
