//! Uniformity checks for rectangular regions
//!
//! The encoder asks one question per region: do all of its pixels share a
//! value, and if so which one? Two probes answer it with identical results:
//! a direct scan over the packed rows, and a summed-area table that trades
//! one up-front pass for constant-time queries.

use ndarray::Array2;

use crate::grid::{Pixel, PixelGrid, Region};

/// Answers whether a region is uniform
pub trait UniformityProbe {
    /// Shared value of every pixel in `region`, or `None` if mixed
    ///
    /// `region` must be non-degenerate and inside the grid.
    fn uniform_value(&self, region: Region) -> Option<Pixel>;
}

/// Scans each row of the region against the grid bits
///
/// Worst case O(w*h) per region, O(W*H*log(max(W,H))) over a full encoding.
#[derive(Debug, Clone, Copy)]
pub struct ScanProbe<'g> {
    grid: &'g PixelGrid,
}

impl<'g> ScanProbe<'g> {
    /// Create a probe over `grid`
    pub const fn new(grid: &'g PixelGrid) -> Self {
        Self { grid }
    }
}

impl UniformityProbe for ScanProbe<'_> {
    fn uniform_value(&self, region: Region) -> Option<Pixel> {
        let first = self.grid.pixel_at(region.row, region.col).ok()?;

        for row in region.row..region.row_end() {
            let span = self.grid.row(row)?.get(region.col..region.col_end())?;
            let uniform = match first {
                Pixel::Black => span.all(),
                Pixel::White => span.not_any(),
            };
            if !uniform {
                return None;
            }
        }

        Some(first)
    }
}

/// Constant-time uniformity queries from a summed-area table
///
/// Entry `(r, c)` holds the number of black pixels above and left of
/// pixel `(r, c)`, with a zero border row and column.
#[derive(Debug, Clone)]
pub struct SummedAreaProbe {
    table: Array2<usize>,
}

impl SummedAreaProbe {
    /// Build the table in a single pass over `grid`
    pub fn new(grid: &PixelGrid) -> Self {
        let mut table: Array2<usize> = Array2::zeros((grid.height() + 1, grid.width() + 1));

        for (r, row) in grid.rows().enumerate() {
            let mut row_sum = 0;
            for (c, bit) in row.iter().by_vals().enumerate() {
                row_sum += usize::from(bit);
                let above = table.get([r, c + 1]).copied().unwrap_or(0);
                if let Some(cell) = table.get_mut([r + 1, c + 1]) {
                    *cell = above + row_sum;
                }
            }
        }

        Self { table }
    }

    fn at(&self, row: usize, col: usize) -> usize {
        self.table.get([row, col]).copied().unwrap_or(0)
    }

    /// Number of black pixels in `region`
    pub fn count_black(&self, region: Region) -> usize {
        let (r0, c0) = (region.row, region.col);
        let (r1, c1) = (region.row_end(), region.col_end());
        (self.at(r1, c1) + self.at(r0, c0)).saturating_sub(self.at(r0, c1) + self.at(r1, c0))
    }
}

impl UniformityProbe for SummedAreaProbe {
    fn uniform_value(&self, region: Region) -> Option<Pixel> {
        match self.count_black(region) {
            0 => Some(Pixel::White),
            black if black == region.area() => Some(Pixel::Black),
            _ => None,
        }
    }
}
