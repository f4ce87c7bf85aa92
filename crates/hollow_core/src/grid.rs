//! # 2D Grid Storage
//!
//! A width x height grid of cells backed by one contiguous allocation.
//!
//! ## Scan Order
//!
//! The canonical scan order of every HOLLOW grid is **outer x, inner y**:
//! `(0,0), (0,1), ..., (0,h-1), (1,0), ...`. Storage is laid out in that
//! order (column-major), so a canonical scan walks memory sequentially.
//! Generation stages consume random draws in scan order, which makes the
//! order part of the seed-reproducibility contract - do not change it.

use bytemuck::NoUninit;

/// An owned `width x height` grid of cells.
///
/// Accessors are bounds-checked; out-of-range reads return `None` and
/// out-of-range writes are ignored. Generated grids are created once,
/// fully populated, and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: T) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![fill; len],
        }
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Flat index of `(x, y)` in canonical scan order.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Returns the cell at `(x, y)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Sets the cell at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = value;
        }
    }

    /// Iterates all coordinates in canonical scan order (outer x, inner y).
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> {
        let (w, h) = (self.width, self.height);
        (0..w).flat_map(move |x| (0..h).map(move |y| (x, y)))
    }

    /// The backing cell slice, in canonical scan order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Counts cells matching `predicate`.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(T) -> bool) -> usize {
        self.cells.iter().filter(|&&c| predicate(c)).count()
    }
}

impl<T: NoUninit> Grid<T> {
    /// The backing storage viewed as raw bytes.
    ///
    /// Two grids of the same dimensions are bit-identical iff these slices
    /// are equal; the reproducibility checks compare maps this way.
    #[must_use]
    pub fn as_raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}
