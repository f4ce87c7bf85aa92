//! # Outline Detection
//!
//! Final pipeline stage: mark every open cell that touches solid rock or
//! the map edge anywhere in its 8-neighborhood.
//!
//! Pure function of the cave mask - no noise, no draws - so it can be
//! recomputed at will. The design is a full rescan per generation; there
//! is no incremental invalidation.

use hollow_core::Grid;

/// The 8-neighborhood, excluding the cell itself.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Builds the outline mask from a finished cave mask.
///
/// Marked cells are always open; solid cells are never marked.
pub(crate) fn trace_outline(cave: &Grid<bool>) -> Grid<bool> {
    let mut outline = Grid::filled(cave.width(), cave.height(), false);

    for (x, y) in cave.positions() {
        if cave.get(x, y) != Some(true) {
            continue;
        }

        let borders_solid = NEIGHBORS.iter().any(|&(dx, dy)| {
            let nx = i64::from(x) + dx;
            let ny = i64::from(y) + dy;
            match (u32::try_from(nx), u32::try_from(ny)) {
                // Off-grid neighbors count as solid
                (Ok(nx), Ok(ny)) => cave.get(nx, ny) != Some(true),
                _ => true,
            }
        });

        if borders_solid {
            outline.set(x, y, true);
        }
    }

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_open_cell_is_outlined() {
        let mut cave = Grid::filled(5, 5, false);
        cave.set(2, 2, true);

        let outline = trace_outline(&cave);
        assert_eq!(outline.get(2, 2), Some(true));
        assert_eq!(outline.count(|c| c), 1);
    }

    #[test]
    fn test_interior_of_open_block_is_not_outlined() {
        let mut cave = Grid::filled(5, 5, false);
        for x in 1..4 {
            for y in 1..4 {
                cave.set(x, y, true);
            }
        }

        let outline = trace_outline(&cave);
        // The 3x3 block's center has 8 open neighbors
        assert_eq!(outline.get(2, 2), Some(false));
        // Every other open cell touches solid rock
        assert_eq!(outline.count(|c| c), 8);
    }

    #[test]
    fn test_fully_open_grid_outlines_exactly_the_rim() {
        let cave = Grid::filled(6, 4, true);
        let outline = trace_outline(&cave);

        for (x, y) in outline.positions() {
            let on_rim = x == 0 || y == 0 || x == 5 || y == 3;
            assert_eq!(
                outline.get(x, y),
                Some(on_rim),
                "rim mismatch at ({x},{y})"
            );
        }
    }

    #[test]
    fn test_solid_cells_never_marked() {
        let mut cave = Grid::filled(4, 4, true);
        cave.set(1, 1, false);

        let outline = trace_outline(&cave);
        assert_eq!(outline.get(1, 1), Some(false));
    }

    #[test]
    fn test_all_solid_yields_empty_outline() {
        let cave = Grid::filled(8, 8, false);
        assert_eq!(trace_outline(&cave).count(|c| c), 0);
    }
}
