//! Pixel grid data model
//!
//! This module contains the image side of the codec:
//! - Binary pixel values
//! - Rectangular regions and the quadrant split rule
//! - The validated, immutable pixel grid

/// Binary pixel values
pub mod pixel;
/// Validated bit-packed pixel grid
pub mod raster;
/// Rectangular regions and quadrant splitting
pub mod region;

pub use pixel::Pixel;
pub use raster::PixelGrid;
pub use region::Region;
