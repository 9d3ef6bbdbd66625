//! Quadtree encoding of binary images into P/B/X codes
//!
//! An image is split recursively into quadrants until every region is
//! uniform. Uniform regions become `P` (black) or `B` (white); mixed
//! regions become `X` followed by the codes of their four quadrants.
//! Images are loaded from plain PBM files or entered interactively.

#![forbid(unsafe_code)]

/// Recursive quadrant encoder and code representation
pub mod encoding;
/// Pixel grid data model
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use encoding::{QuadCode, QuadrantEncoder, Strategy, Symbol, encode_grid};
pub use grid::{Pixel, PixelGrid, Region};
pub use io::error::{CodecError, Result};
