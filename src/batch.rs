use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use crate::color::Color;
use crate::rasterize;
use crate::template::Template;

/// Everything one batch run needs, passed in explicitly.
pub struct BatchConfig {
    pub template: Template,
    pub output_dir: PathBuf,
    pub count: u32,
}

/// Filenames for iteration `i`: a literal `image0` followed by the index
/// zero-padded to at least two digits, so i = 100 yields `image0100.*`.
fn artifact_names(i: u32) -> (String, String) {
    (format!("image0{i:02}.svg"), format!("image0{i:02}.png"))
}

/// Generate `count` colorized (SVG, PNG) pairs into the output directory.
///
/// The directory is created if absent and never cleaned. Iterations run
/// sequentially; the first write or rasterization failure aborts the batch.
pub fn generate<R: Rng + ?Sized>(config: &BatchConfig, rng: &mut R) -> Result<()> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    for i in 1..=config.count {
        let bg = Color::random(rng);
        let fg = Color::random(rng);

        let (svg_name, png_name) = artifact_names(i);
        let svg_path = config.output_dir.join(svg_name);
        let png_path = config.output_dir.join(png_name);

        let svg = config.template.apply_colors(bg, fg);
        fs::write(&svg_path, svg)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;

        rasterize::render_png(&svg_path, &png_path)?;

        info!("Generated: {}", png_path.display());
    }

    Ok(())
}
