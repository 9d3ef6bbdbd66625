//! Recursive quadrant decomposition of a pixel grid into a P/B/X code
//!
//! A uniform region becomes one leaf symbol. A mixed region becomes `X`
//! followed by the codes of its four quadrants, top-left, top-right,
//! bottom-left, bottom-right, with the top and left quadrants taking the
//! extra row/column of an odd dimension. The result is a self-delimiting
//! pre-order serialization of the implicit quadtree.

use clap::ValueEnum;
use log::debug;

use crate::encoding::code::{QuadCode, Symbol};
use crate::encoding::uniformity::{ScanProbe, SummedAreaProbe, UniformityProbe};
use crate::grid::region::depth_bound;
use crate::grid::{Pixel, PixelGrid, Region};
use crate::io::error::Result;

/// How region uniformity is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Scan every pixel of each region
    #[default]
    Scan,
    /// Precompute a summed-area table and answer each region in O(1)
    SummedArea,
}

/// Walks a grid and emits its quadtree code
///
/// Encoding cannot fail: every region it visits is derived from the grid
/// bounds by the split rule and so lies inside the grid.
pub struct QuadrantEncoder<'g, P> {
    grid: &'g PixelGrid,
    probe: P,
    max_depth: usize,
}

impl<'g, P: UniformityProbe> QuadrantEncoder<'g, P> {
    /// Create an encoder over `grid` using `probe` for uniformity checks
    pub fn new(grid: &'g PixelGrid, probe: P) -> Self {
        Self {
            grid,
            probe,
            max_depth: depth_bound(grid.width(), grid.height()),
        }
    }

    /// Encode the whole grid into a freshly allocated buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the code buffer cannot be allocated; nothing is
    /// encoded in that case
    pub fn encode(&self) -> Result<QuadCode> {
        let mut code = QuadCode::allocate(self.grid.width(), self.grid.height())?;
        self.encode_into(&mut code);
        Ok(code)
    }

    /// Encode the whole grid, appending to `out`
    pub fn encode_into(&self, out: &mut QuadCode) {
        self.encode_region(self.grid.bounds(), 1, out);
    }

    /// Encode `region` at `depth`, appending its code to `out`
    ///
    /// Only the part of `region` inside the grid is encoded. Degenerate
    /// regions, and regions wholly outside the grid, emit nothing.
    pub fn encode_region(&self, region: Region, depth: usize, out: &mut QuadCode) {
        let region = region.clipped_to(self.grid.width(), self.grid.height());
        if region.is_degenerate() {
            return;
        }
        debug_assert!(
            depth <= self.max_depth,
            "recursion depth {depth} exceeds bound {}",
            self.max_depth
        );

        match self.probe.uniform_value(region) {
            Some(Pixel::Black) => out.push(Symbol::Black, depth),
            Some(Pixel::White) => out.push(Symbol::White, depth),
            None => {
                out.push(Symbol::Split, depth);
                for quadrant in region.quadrants() {
                    self.encode_region(quadrant, depth + 1, out);
                }
            }
        }
    }
}

/// Encode `grid` with the chosen uniformity strategy
///
/// # Errors
///
/// Returns an error if the code buffer cannot be allocated
pub fn encode_grid(grid: &PixelGrid, strategy: Strategy) -> Result<QuadCode> {
    let code = match strategy {
        Strategy::Scan => QuadrantEncoder::new(grid, ScanProbe::new(grid)).encode()?,
        Strategy::SummedArea => QuadrantEncoder::new(grid, SummedAreaProbe::new(grid)).encode()?,
    };

    debug!(
        "Encoded {}x{} grid with {strategy:?}: {} symbols, depth {}",
        grid.width(),
        grid.height(),
        code.len(),
        code.depth()
    );

    Ok(code)
}
