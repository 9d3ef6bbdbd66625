//! Rectangular sub-regions and the quadrant split rule

/// Axis-aligned rectangle of pixels inside a grid
///
/// `row`/`col` locate the top-left pixel; the region covers
/// `[row, row + height) x [col, col + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First row (inclusive)
    pub row: usize,
    /// First column (inclusive)
    pub col: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Region {
    /// Create a region from its offsets and size
    pub const fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Region covering a whole `width` x `height` image
    pub const fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Whether the region covers no pixels
    ///
    /// Only arises as the empty remainder of splitting a dimension of 1.
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// One past the last row
    pub const fn row_end(&self) -> usize {
        self.row + self.height
    }

    /// One past the last column
    pub const fn col_end(&self) -> usize {
        self.col + self.width
    }

    /// Part of the region inside a `width` x `height` image
    ///
    /// Regions lying wholly outside the image clip to a degenerate region.
    pub fn clipped_to(&self, width: usize, height: usize) -> Self {
        let row = self.row.min(height);
        let col = self.col.min(width);
        let row_end = self.row.saturating_add(self.height).min(height);
        let col_end = self.col.saturating_add(self.width).min(width);
        Self::new(row, col, col_end - col, row_end - row)
    }

    /// Split into four quadrants: top-left, top-right, bottom-left, bottom-right
    ///
    /// The top and left halves take the extra row/column of an odd
    /// dimension. Quadrants may be degenerate. The order is part of the
    /// code format.
    pub const fn quadrants(&self) -> [Self; 4] {
        let mid_w = self.width.div_ceil(2);
        let mid_h = self.height.div_ceil(2);
        let right_w = self.width - mid_w;
        let bottom_h = self.height - mid_h;

        [
            Self::new(self.row, self.col, mid_w, mid_h),
            Self::new(self.row, self.col + mid_w, right_w, mid_h),
            Self::new(self.row + mid_h, self.col, mid_w, bottom_h),
            Self::new(self.row + mid_h, self.col + mid_w, right_w, bottom_h),
        ]
    }
}

/// Maximum recursion depth when decomposing a `width` x `height` image
///
/// Counts the root as depth 1: `ceil(log2(max(width, height))) + 1`.
pub const fn depth_bound(width: usize, height: usize) -> usize {
    let longest = if width > height { width } else { height };
    if longest <= 1 {
        return 1;
    }
    (usize::BITS - (longest - 1).leading_zeros()) as usize + 1
}
