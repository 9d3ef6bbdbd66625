//! Quadtree code alphabet and output buffer

use std::fmt;

use crate::io::configuration::Limits;
use crate::io::error::{CodecError, Result};

/// One symbol of the quadtree code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `P`: uniform region of value 1
    Black,
    /// `B`: uniform region of value 0
    White,
    /// `X`: mixed region, followed by its four quadrant codes
    Split,
}

impl Symbol {
    /// Character used for this symbol in the textual code
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => 'P',
            Self::White => 'B',
            Self::Split => 'X',
        }
    }

    /// Parse a code character
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Self::Black),
            'B' => Some(Self::White),
            'X' => Some(Self::Split),
            _ => None,
        }
    }

    /// Whether the symbol terminates a branch
    pub const fn is_leaf(self) -> bool {
        !matches!(self, Self::Split)
    }
}

/// Pre-order serialization of a quadrant decomposition
///
/// The buffer is reserved once for the worst case of the image it will
/// hold, so encoding never reallocates. Its length doubles as the write
/// cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadCode {
    symbols: String,
    depth: usize,
}

impl QuadCode {
    /// Reserve a buffer large enough for any `width` x `height` image
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity overflows or cannot be allocated
    pub fn allocate(width: usize, height: usize) -> Result<Self> {
        let requested = Limits::code_capacity(width, height).ok_or(CodecError::Allocation {
            purpose: "code buffer",
            requested: usize::MAX,
        })?;

        let mut symbols = String::new();
        symbols
            .try_reserve_exact(requested)
            .map_err(|_reserve_error| CodecError::Allocation {
                purpose: "code buffer",
                requested,
            })?;

        Ok(Self { symbols, depth: 0 })
    }

    /// Append a symbol emitted at `depth` (root is depth 1)
    pub(crate) fn push(&mut self, symbol: Symbol, depth: usize) {
        self.symbols.push(symbol.as_char());
        self.depth = self.depth.max(depth);
    }

    /// Code as text
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Number of symbols written
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols reserved for this code
    pub fn capacity(&self) -> usize {
        self.symbols.capacity()
    }

    /// Depth of the deepest node written
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Iterate over the symbols in order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.chars().filter_map(Symbol::from_char)
    }

    /// Number of `X` symbols (mixed regions)
    pub fn split_count(&self) -> usize {
        self.symbols().filter(|symbol| !symbol.is_leaf()).count()
    }

    /// Number of `P` and `B` symbols (uniform regions)
    pub fn leaf_count(&self) -> usize {
        self.symbols().filter(|symbol| symbol.is_leaf()).count()
    }
}

impl fmt::Display for QuadCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}
