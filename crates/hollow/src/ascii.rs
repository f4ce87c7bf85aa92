//! # ASCII Painter
//!
//! The simplest possible [`GridPainter`]: a character canvas. Solid rock
//! is `#`, default floor is `.`, ore is `*`, and biomes cycle through
//! lowercase letters. Good enough to eyeball a generated layout in a
//! terminal.

use hollow_core::Grid;
use hollow_procedural::{CellKind, GridPainter};

/// Glyphs assigned to biome indices, cycled when there are more kinds
/// than glyphs.
const BIOME_GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A character canvas sized to one generated grid.
pub struct AsciiCanvas {
    width: u32,
    height: u32,
    glyphs: Vec<u8>,
}

impl AsciiCanvas {
    /// Creates a canvas filled with solid rock (`#`).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            glyphs: vec![b'#'; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| x as usize * self.height as usize + y as usize)
    }

    /// Overlays `glyph` wherever `mask` is `true` (used for outlines).
    pub fn overlay(&mut self, mask: &Grid<bool>, glyph: char) {
        for (x, y) in mask.positions() {
            if mask.get(x, y) == Some(true) {
                if let Some(idx) = self.index(x, y) {
                    self.glyphs[idx] = glyph as u8;
                }
            }
        }
    }

    /// Renders the canvas, top row first (y grows upward, like the grid).
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let idx = x as usize * self.height as usize + y as usize;
                out.push(char::from(self.glyphs[idx]));
            }
            out.push('\n');
        }
        out
    }
}

impl GridPainter for AsciiCanvas {
    fn paint(&mut self, x: u32, y: u32, kind: CellKind) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        self.glyphs[idx] = match kind {
            CellKind::Default => b'.',
            CellKind::Ore => b'*',
            CellKind::Biome(i) => BIOME_GLYPHS[i as usize % BIOME_GLYPHS.len()],
        };
    }
}
