//! Plain PBM (`P1`) bitmap loading
//!
//! Accepts the ASCII flavour of the portable bitmap format: the `P1`
//! marker, width and height, then one `0`/`1` token per pixel in row-major
//! order. `#` comments may appear between any tokens.

use log::debug;
use std::path::Path;

use crate::grid::{Pixel, PixelGrid};
use crate::io::configuration::Limits;
use crate::io::error::{CodecError, Result, invalid_format};
use crate::io::tokens::CommentedTokens;

/// Marker that must open every accepted bitmap
pub const PBM_MAGIC: &str = "P1";

/// Load a plain PBM file into a validated grid
///
/// # Errors
///
/// Returns an error if the file cannot be read, or for any reason listed on
/// [`parse_pbm`]
pub fn load_pbm_file<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<PixelGrid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CodecError::FileSystem {
        path: path.to_path_buf(),
        operation: "read bitmap",
        source: e,
    })?;

    let grid = parse_pbm(&text, limits)?;
    debug!(
        "Loaded {}x{} bitmap from '{}'",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Parse plain PBM text into a validated grid
///
/// Reading stops at the first non-numeric pixel token; that case and
/// running out of input are both reported as truncation. Tokens after the
/// last declared pixel are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The text does not start with `P1`
/// - Width or height is missing or not an integer
/// - Width or height is outside `limits`
/// - A pixel value is an integer other than 0 or 1
/// - Fewer than `width * height` pixel values are present
/// - Grid storage cannot be allocated
pub fn parse_pbm(text: &str, limits: &Limits) -> Result<PixelGrid> {
    let body = text
        .trim_start()
        .strip_prefix(PBM_MAGIC)
        .ok_or_else(|| invalid_format(&format!("expected '{PBM_MAGIC}' marker")))?;

    let mut tokens = CommentedTokens::new(body);
    let width = parse_dimension(tokens.next(), "width")?;
    let height = parse_dimension(tokens.next(), "height")?;

    let (width, height, expected) = checked_dimensions(width, height, limits)?;

    let mut pixels = pixel_buffer(expected)?;
    for token in tokens.take(expected) {
        let Ok(value) = token.parse::<i64>() else {
            break;
        };
        let pixel = Pixel::from_value(value).ok_or_else(|| CodecError::InvalidPixel {
            index: pixels.len(),
            token: token.to_string(),
        })?;
        pixels.push(pixel.is_set());
    }

    PixelGrid::new(width, height, pixels.into_iter().collect(), limits)
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<i64> {
    let token = token.ok_or_else(|| invalid_format(&format!("missing image {name}")))?;
    token
        .parse()
        .map_err(|_parse_error| invalid_format(&format!("image {name} '{token}' is not an integer")))
}

/// Reserve room for `expected` pixels before any are read
///
/// # Errors
///
/// Returns an error if the storage cannot be allocated
pub fn pixel_buffer(expected: usize) -> Result<Vec<bool>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(expected)
        .map_err(|_reserve_error| CodecError::Allocation {
            purpose: "pixel grid",
            requested: expected,
        })?;
    Ok(pixels)
}

/// Number of pixels in a `width` x `height` image
///
/// # Errors
///
/// Returns an error if the product overflows `usize`
pub fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or(CodecError::Allocation {
        purpose: "pixel grid",
        requested: usize::MAX,
    })
}

/// Convert raw declared dimensions into grid dimensions and pixel count
///
/// # Errors
///
/// Returns an error if:
/// - Either dimension is non-positive or exceeds `limits`
/// - `width * height` does not fit in `usize`
pub fn checked_dimensions(
    width: i64,
    height: i64,
    limits: &Limits,
) -> Result<(usize, usize, usize)> {
    let out_of_bounds = || CodecError::DimensionsOutOfBounds {
        width,
        height,
        max_width: limits.max_width,
        max_height: limits.max_height,
    };

    if !limits.contains(width, height) {
        return Err(out_of_bounds());
    }
    let width = usize::try_from(width).map_err(|_conversion_error| out_of_bounds())?;
    let height = usize::try_from(height).map_err(|_conversion_error| out_of_bounds())?;
    let count = pixel_count(width, height)?;
    Ok((width, height, count))
}
