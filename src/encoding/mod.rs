/// Code alphabet and output buffer
pub mod code;
/// Recursive quadrant encoder
pub mod encoder;
/// Region uniformity probes
pub mod uniformity;

pub use code::{QuadCode, Symbol};
pub use encoder::{QuadrantEncoder, Strategy, encode_grid};
