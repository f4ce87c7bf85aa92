//! # Painter Seam
//!
//! Generation produces data; drawing it is somebody else's job. This
//! module is the narrow interface that somebody else implements: a
//! [`GridPainter`] receives one [`paint`](GridPainter::paint) call per
//! open cell, in canonical scan order, with the cell's resolved
//! [`CellKind`]. The core never calls its own painter.
//!
//! Solid cells are not painted. Which concrete tile an ore cell shows -
//! one of `ore_kinds` variants - is decided by the painter at paint time,
//! not during generation.

use crate::biome::BIOME_ORE;
use crate::generator::CaveWorld;

/// What an open cell should look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Default rock floor (biome sentinel `-1`).
    Default,
    /// Ore deposit (sentinel `-2`). Variant choice is the painter's.
    Ore,
    /// A specific biome, by index into the host's biome-kind list.
    Biome(u32),
}

impl CellKind {
    /// Decodes a raw biome-map entry.
    #[inline]
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        if raw == BIOME_ORE {
            Self::Ore
        } else if let Ok(index) = u32::try_from(raw) {
            Self::Biome(index)
        } else {
            Self::Default
        }
    }
}

/// Consumer interface for materializing generated cells.
pub trait GridPainter {
    /// Materializes one open cell.
    fn paint(&mut self, x: u32, y: u32, kind: CellKind);
}

impl CaveWorld {
    /// Feeds every open cell to `painter`, in canonical scan order.
    pub fn paint_open_cells<P: GridPainter>(&self, painter: &mut P) {
        for (x, y) in self.cave_mask().positions() {
            if self.cave_mask().get(x, y) != Some(true) {
                continue;
            }
            let raw = self.biome_map().get(x, y).unwrap_or(crate::biome::BIOME_DEFAULT);
            painter.paint(x, y, CellKind::from_raw(raw));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaveConfig;
    use crate::generator::{CaveGenerator, SeedMode};
    use crate::noise::OctaveLayer;

    struct RecordingPainter {
        calls: Vec<(u32, u32, CellKind)>,
    }

    impl GridPainter for RecordingPainter {
        fn paint(&mut self, x: u32, y: u32, kind: CellKind) {
            self.calls.push((x, y, kind));
        }
    }

    #[test]
    fn test_from_raw_mapping() {
        assert_eq!(CellKind::from_raw(-1), CellKind::Default);
        assert_eq!(CellKind::from_raw(-2), CellKind::Ore);
        assert_eq!(CellKind::from_raw(0), CellKind::Biome(0));
        assert_eq!(CellKind::from_raw(5), CellKind::Biome(5));
        // Anything below the sentinels decodes defensively to default
        assert_eq!(CellKind::from_raw(-3), CellKind::Default);
    }

    #[test]
    fn test_painter_sees_exactly_the_open_cells() {
        let generator = CaveGenerator::new(CaveConfig {
            width: 16,
            height: 16,
            octaves: vec![OctaveLayer::new(1.0, 1.0)],
            ..CaveConfig::default()
        })
        .unwrap();
        let world = generator.generate(SeedMode::Fixed(42));

        let mut painter = RecordingPainter { calls: Vec::new() };
        world.paint_open_cells(&mut painter);

        assert_eq!(painter.calls.len(), world.cave_mask().count(|open| open));
        for &(x, y, _) in &painter.calls {
            assert_eq!(world.cave_mask().get(x, y), Some(true));
        }
    }
}
