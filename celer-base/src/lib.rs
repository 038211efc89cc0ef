//! Shared geometry of the sine table and the angle units that index into it.
//!
//! Every lookup in the engine goes through the same mapping: an angle is
//! multiplied by a unit scale constant to land in table index space, the
//! integer part selects a sample, and a bitwise AND against [`TABLE_MASK`]
//! wraps it into range. The constants here are the single source of truth
//! for that mapping; the tables themselves live in `celer-table`.

pub mod math;

/// Precision-specific constants for `f32` consumers.
pub mod single;

/// Precision-specific constants for `f64` consumers.
pub mod double;

/// Log2 of the table size.
pub const TABLE_BITS: u32 = 14;

/// Number of samples covering one full rotation. Always a power of two so
/// that wraparound indexing reduces to a bitwise AND.
pub const TABLE_SIZE: usize = 1 << TABLE_BITS;

/// `TABLE_SIZE - 1`. ANDing a signed index against this wraps it into
/// `[0, TABLE_SIZE)`, including for negative indices via two's complement.
pub const TABLE_MASK: i64 = (TABLE_SIZE - 1) as i64;

/// A quarter rotation in index space. Adding this to a sine index (and
/// masking) turns it into a cosine index, keeping the two functions
/// phase-locked against a single table.
pub const SIN_TO_COS: i64 = (TABLE_SIZE / 4) as i64;
