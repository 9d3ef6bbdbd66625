//! Text output of the loaded grid and the resulting code

use std::io::Write;

use crate::encoding::QuadCode;
use crate::grid::PixelGrid;
use crate::io::error::{Result, stream_error};

/// Echo the loaded image, one row per line
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_grid<W: Write>(out: &mut W, grid: &PixelGrid) -> Result<()> {
    write!(out, "Image ({}x{}):\n{grid}", grid.width(), grid.height())
        .map_err(|e| stream_error("write image", e))
}

/// Print the code followed by a line break
///
/// Unless `quiet`, a `Code:` header line comes first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_code<W: Write>(out: &mut W, code: &QuadCode, quiet: bool) -> Result<()> {
    let written = if quiet {
        writeln!(out, "{code}")
    } else {
        writeln!(out, "Code:\n{code}")
    };
    written
        .and_then(|()| out.flush())
        .map_err(|e| stream_error("write code", e))
}
