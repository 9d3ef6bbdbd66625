//! Immutable bit-packed pixel grid
//!
//! A `PixelGrid` is only ever built whole, after its dimensions and pixel
//! count have been checked against the configured limits. Pixels are stored
//! one bit each in row-major order.

use bitvec::prelude::*;
use std::fmt;

use crate::grid::pixel::Pixel;
use crate::grid::region::Region;
use crate::io::configuration::Limits;
use crate::io::error::{CodecError, Result};
use crate::io::pbm::pixel_count;

/// Validated binary image held entirely in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    bits: BitVec,
}

impl PixelGrid {
    /// Build a grid from row-major bits
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds `limits`
    /// - `width * height` overflows `usize`
    /// - `bits` holds fewer than `width * height` pixels
    /// - `bits` holds more than `width * height` pixels
    pub fn new(width: usize, height: usize, bits: BitVec, limits: &Limits) -> Result<Self> {
        let declared = |value: usize| i64::try_from(value).unwrap_or(i64::MAX);
        if !limits.contains(declared(width), declared(height)) {
            return Err(CodecError::DimensionsOutOfBounds {
                width: declared(width),
                height: declared(height),
                max_width: limits.max_width,
                max_height: limits.max_height,
            });
        }

        let expected = pixel_count(width, height)?;
        if bits.len() < expected {
            return Err(CodecError::Truncated {
                read: bits.len(),
                expected,
            });
        }
        if bits.len() > expected {
            return Err(CodecError::InvalidFormat {
                reason: format!(
                    "{} pixels supplied for a {width}x{height} image",
                    bits.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Build a grid from row-major numeric values
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not 0 or 1, or for any reason
    /// listed on [`PixelGrid::new`]
    pub fn from_values(width: usize, height: usize, values: &[u8], limits: &Limits) -> Result<Self> {
        let mut bits = BitVec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let pixel = Pixel::from_value(i64::from(value)).ok_or_else(|| {
                CodecError::InvalidPixel {
                    index,
                    token: value.to_string(),
                }
            })?;
            bits.push(pixel.is_set());
        }
        Self::new(width, height, bits, limits)
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Region covering the whole image
    pub const fn bounds(&self) -> Region {
        Region::full(self.width, self.height)
    }

    /// Pixel value at (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns an error if the position lies outside the grid
    pub fn pixel_at(&self, row: usize, col: usize) -> Result<Pixel> {
        if row >= self.height || col >= self.width {
            return Err(CodecError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        self.bits
            .get(row * self.width + col)
            .map(|bit| Pixel::from(*bit))
            .ok_or(CodecError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
    }

    /// Borrow one row of packed pixels
    pub fn row(&self, row: usize) -> Option<&BitSlice> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.bits.get(start..start + self.width)
    }

    /// Iterate over rows of pixels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &BitSlice> {
        self.bits.chunks(self.width)
    }

    /// Number of black pixels in the image
    pub fn count_black(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut separator = "";
            for bit in row.iter().by_vals() {
                write!(f, "{separator}{}", Pixel::from(bit))?;
                separator = " ";
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
