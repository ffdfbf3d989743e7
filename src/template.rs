use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Color;

/// Literal marker for the background rect's fill declaration.
const BG_MARKER: &str = r##"id="bg" width="100%" height="100%" fill="#e0fbfc""##;

/// Literal marker for foreground fill declarations.
const FG_MARKER: &str = r##"fill="#000000""##;

/// The source SVG document all outputs are derived from.
pub struct Template {
    contents: String,
}

impl Template {
    /// Read the template once, fully into memory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?;
        Ok(Template { contents })
    }

    pub fn from_contents(contents: impl Into<String>) -> Self {
        Template {
            contents: contents.into(),
        }
    }

    /// Substitute the background and foreground fill colors.
    ///
    /// Matching is literal text replacement: the background marker is
    /// substituted wherever it appears and the foreground marker at every
    /// occurrence. A marker that does not appear is silently left alone.
    pub fn apply_colors(&self, bg: Color, fg: Color) -> String {
        self.contents
            .replace(
                BG_MARKER,
                &format!(r##"id="bg" width="100%" height="100%" fill="{bg}""##),
            )
            .replace(FG_MARKER, &format!(r##"fill="{fg}""##))
    }
}
