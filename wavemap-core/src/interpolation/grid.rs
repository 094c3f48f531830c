//! Dense grid of interpolated signal strength

use alloc::vec;
use alloc::vec::Vec;

use crate::constants::PERCENT_SPAN;

/// `width x height` array of RSSI estimates (dBm)
///
/// Cell `(i, j)` sits at percentage position
/// `(i / (width - 1) * 100, j / (height - 1) * 100)`, so the first and last
/// columns and rows land exactly on the floor plan edges. Storage is
/// column-major: all of column `i` is contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedGrid {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl InterpolatedGrid {
    /// Grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Build a grid by evaluating `f` at every cell coordinate
    pub(crate) fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(f64, f64) -> f64,
    {
        let mut cells = Vec::with_capacity(width * height);
        for i in 0..width {
            let gx = axis_position(i, width);
            for j in 0..height {
                cells.push(f(gx, axis_position(j, height)));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at column `i`, row `j`; `None` outside the grid
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.cells.get(i * self.height + j).copied()
    }

    /// Percentage position of cell `(i, j)`
    pub fn coordinate(&self, i: usize, j: usize) -> (f64, f64) {
        (axis_position(i, self.width), axis_position(j, self.height))
    }

    /// All cells, column-major
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// One column (fixed `i`, every `j`)
    pub fn column(&self, i: usize) -> Option<&[f64]> {
        if i >= self.width {
            return None;
        }
        let start = i * self.height;
        Some(&self.cells[start..start + self.height])
    }

    /// Iterate `(i, j, value)` over every cell
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (idx / height, idx % height, v))
    }

    /// Smallest and largest cell value
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.cells.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Percentage position of index `idx` on an axis with `len` cells
pub(crate) fn axis_position(idx: usize, len: usize) -> f64 {
    idx as f64 / (len - 1) as f64 * PERCENT_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_span_edges() {
        let grid = InterpolatedGrid::filled(5, 3, -100.0);
        assert_eq!(grid.coordinate(0, 0), (0.0, 0.0));
        assert_eq!(grid.coordinate(4, 2), (100.0, 100.0));
        assert_eq!(grid.coordinate(2, 1), (50.0, 50.0));
    }

    #[test]
    fn indexing_is_column_major() {
        let grid = InterpolatedGrid::from_fn(3, 2, |x, y| x + y / 1000.0);
        assert_eq!(grid.get(1, 0), Some(50.0));
        assert_eq!(grid.get(2, 1), Some(100.1));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.column(1), Some(&[50.0, 50.1][..]));

        let (i, j, v) = grid.iter().nth(3).unwrap();
        assert_eq!((i, j), (1, 1));
        assert_eq!(v, 50.1);
    }

    #[test]
    fn value_range_covers_all_cells() {
        let grid = InterpolatedGrid::from_fn(2, 2, |x, y| -(x + y));
        assert_eq!(grid.value_range(), Some((-200.0, 0.0)));
    }
}
