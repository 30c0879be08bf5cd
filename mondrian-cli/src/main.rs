use mondrian_core::{Canvas, OutputFormat, Variant, create_art, save_art};

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, event};

#[derive(Parser, Debug)]
#[command(version, about = "Generates Mondrian-style art", long_about = None)]
struct Args {
    /// Width of the canvas
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Height of the canvas
    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(short, long, default_value_t, value_enum)]
    variant: Variant,

    /// Where to write the artwork, defaults to a fixed path per variant
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Log debug output
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let canvas = Canvas::new(args.width, args.height)
        .with_context(|| format!("Invalid canvas size [{}x{}]", args.width, args.height))?;

    let artwork = create_art(canvas, args.variant);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(args.variant.default_output_path(args.format)));

    event!(
        Level::INFO,
        "Saving [{}] artwork with [{}] shapes to: {}",
        args.variant,
        artwork.shapes.len(),
        output.display()
    );

    save_art(&artwork, &output, args.format)
        .with_context(|| format!("Failed to save artwork to {}", output.display()))?;

    Ok(())
}
