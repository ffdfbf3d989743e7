use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pill_variants::batch::{generate, BatchConfig};
use pill_variants::template::Template;

#[derive(Parser, Debug)]
#[command(name = "pill_variants")]
#[command(about = "Generate randomly colored variants of an SVG template")]
struct Args {
    /// Template SVG to colorize
    #[arg(long, default_value = "pill.svg")]
    template: PathBuf,

    /// Directory for generated images
    #[arg(long, default_value = "generated_images")]
    output_dir: PathBuf,

    /// Number of variants to generate
    #[arg(long, default_value = "100")]
    count: u32,

    /// Seed the color generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BatchConfig {
        template: Template::load(&args.template)?,
        output_dir: args.output_dir,
        count: args.count,
    };

    match args.seed {
        Some(seed) => generate(&config, &mut StdRng::seed_from_u64(seed)),
        None => generate(&config, &mut rand::thread_rng()),
    }
}
