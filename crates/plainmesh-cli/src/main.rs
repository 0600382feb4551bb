//! plainmesh CLI: read, generate, and plot 2D triangle meshes.

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "plainmesh")]
#[command(version, about = "plainmesh: small 2D triangle meshes from XDMF, plotted to PNG")]
struct Cli {
    /// Increase log output (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a mesh read from a URL or a local XDMF file.
    Info {
        /// `http(s)://` URL or file path.
        source: String,
    },

    /// Generate the unit-square mesh and summarize it.
    Rectangle {
        /// Vertices along X (>= 2).
        #[arg(long)]
        nx: usize,

        /// Vertices along Y (>= 2).
        #[arg(long)]
        ny: usize,
    },

    /// Plot a mesh, optionally colored by one of its data fields, to PNG.
    Plot {
        /// `http(s)://` URL or file path. Omit when using `--rectangle`.
        #[arg(required_unless_present = "rectangle", conflicts_with = "rectangle")]
        source: Option<String>,

        /// Plot a generated unit-square mesh instead of reading one.
        #[arg(long, num_args = 2, value_names = ["NX", "NY"])]
        rectangle: Option<Vec<usize>>,

        /// Name of the data field to color by.
        #[arg(short, long)]
        field: Option<String>,

        /// Rendering configuration (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Colormap override (viridis, plasma, greys, coolwarm, jet).
        #[arg(long)]
        colormap: Option<String>,

        /// Image width override in pixels.
        #[arg(long)]
        width: Option<u32>,

        /// Image height override in pixels.
        #[arg(long)]
        height: Option<u32>,

        /// Output PNG path.
        #[arg(short, long, default_value = "mesh.png")]
        output: String,
    },

    /// Print the default rendering configuration as TOML.
    Config,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Info { source } => commands::info(&source),
        Commands::Rectangle { nx, ny } => commands::rectangle(nx, ny),
        Commands::Plot {
            source,
            rectangle,
            field,
            config,
            colormap,
            width,
            height,
            output,
        } => commands::plot(commands::PlotArgs {
            source: source.as_deref(),
            rectangle: rectangle.as_deref(),
            field: field.as_deref(),
            config: config.as_deref(),
            colormap: colormap.as_deref(),
            width,
            height,
            output: &output,
        }),
        Commands::Config => commands::config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
