use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Render an SVG file to a PNG at the document's intrinsic size.
pub fn render_png(svg_path: &Path, png_path: &Path) -> Result<()> {
    let svg = fs::read_to_string(svg_path)
        .with_context(|| format!("failed to read {}", svg_path.display()))?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &opt)
        .with_context(|| format!("failed to parse {}", svg_path.display()))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("invalid raster size {width}x{height}"))?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .with_context(|| format!("failed to write {}", png_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_minimal_svg() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("square.svg");
        let png_path = dir.path().join("square.png");
        fs::write(
            &svg_path,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect width="16" height="16" fill="#ff0000"/></svg>"##,
        )
        .unwrap();

        render_png(&svg_path, &png_path).unwrap();

        let img = image::open(&png_path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(img.get_pixel(8, 8).0, [255, 0, 0, 255]);
    }

    #[test]
    fn fails_on_unparsable_svg() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("broken.svg");
        fs::write(&svg_path, "not an svg").unwrap();

        assert!(render_png(&svg_path, &dir.path().join("broken.png")).is_err());
    }

    #[test]
    fn fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_png(
            &dir.path().join("missing.svg"),
            &dir.path().join("missing.png"),
        );
        assert!(result.is_err());
    }
}
