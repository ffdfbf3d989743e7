use std::fmt;

use rand::Rng;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    pub fn new(value: u32) -> Self {
        Color(value & 0xFF_FFFF)
    }

    /// Draw a color uniformly from all 2^24 RGB values.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color(rng.gen_range(0..=0xFF_FFFF))
    }
}

impl fmt::Display for Color {
    /// Renders as `#` followed by exactly six lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
