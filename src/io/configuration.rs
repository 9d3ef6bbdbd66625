//! Image size limits and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Default bounds on accepted images; both can be overridden per run
/// Default maximum image width in pixels
pub const DEFAULT_MAX_WIDTH: usize = 1024;
/// Default maximum image height in pixels
pub const DEFAULT_MAX_HEIGHT: usize = 768;

/// Symbols reserved in the code buffer beyond three per pixel
pub const CODE_BUFFER_SLACK: usize = 16;

/// Worst-case symbols emitted per pixel (leaf plus amortized split markers)
pub const SYMBOLS_PER_PIXEL: usize = 3;

/// Accepted image dimensions, passed explicitly to every loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum accepted width (inclusive)
    pub max_width: usize,
    /// Maximum accepted height (inclusive)
    pub max_height: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl Limits {
    /// Create limits, rejecting zero maxima
    ///
    /// # Errors
    ///
    /// Returns an error if either maximum is zero
    pub fn new(max_width: usize, max_height: usize) -> Result<Self> {
        if max_width == 0 {
            return Err(invalid_parameter(
                "max_width",
                &max_width,
                &"must be positive",
            ));
        }
        if max_height == 0 {
            return Err(invalid_parameter(
                "max_height",
                &max_height,
                &"must be positive",
            ));
        }
        Ok(Self {
            max_width,
            max_height,
        })
    }

    /// Check that both dimensions are positive and within the maxima
    ///
    /// Takes signed values so loaders can pass raw parsed numbers through.
    pub fn contains(&self, width: i64, height: i64) -> bool {
        let fits = |value: i64, max: usize| usize::try_from(value).is_ok_and(|v| v > 0 && v <= max);
        fits(width, self.max_width) && fits(height, self.max_height)
    }

    /// Number of symbols to reserve for encoding a `width` x `height` image
    pub const fn code_capacity(width: usize, height: usize) -> Option<usize> {
        match width.checked_mul(height) {
            Some(area) => match area.checked_mul(SYMBOLS_PER_PIXEL) {
                Some(symbols) => symbols.checked_add(CODE_BUFFER_SLACK),
                None => None,
            },
            None => None,
        }
    }
}
