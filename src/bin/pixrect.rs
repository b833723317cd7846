use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Convert a raster image into a rectangle-mosaic SVG document.
#[derive(Parser, Debug)]
#[command(name = "pixrect", version)]
struct Cli {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path for the SVG document.
    #[arg(long)]
    out: PathBuf,

    /// Largest side kept before downsizing the input (0 disables downsizing).
    #[arg(long = "max-dim", default_value_t = pixrect::MAX_DIMENSION)]
    max_dimension: u32,

    /// Write a `{"svg": ...}` JSON envelope instead of raw SVG.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.in_path)
        .with_context(|| format!("read input '{}'", cli.in_path.display()))?;

    let buffer = pixrect::decode_image(&bytes, cli.max_dimension)?;
    let document = pixrect::convert(&buffer)?;
    let svg = document.to_svg();

    let output = if cli.json {
        serde_json::json!({ "svg": svg }).to_string()
    } else {
        svg
    };

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&cli.out, output)
        .with_context(|| format!("write output '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
