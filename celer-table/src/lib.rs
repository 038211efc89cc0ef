//! Table-backed sine, cosine, and tangent.
//!
//! One shared table of `TABLE_SIZE + 1` sine samples covers a full rotation;
//! cosine is the same table read a quarter rotation ahead, and tangent is
//! the quotient of the two reads. Each function comes in a nearest-sample
//! form (one table read) and a `_smoother` form that linearly interpolates
//! between adjacent samples, cutting mean error by roughly two orders of
//! magnitude for one extra read and multiply-add. Callers pick per call
//! site; nothing here allocates, locks, or fails.
//!
//! The tables are generated by the build script and compiled in as `const`
//! data, so there is no runtime initialization to race on.

extern crate celer_base;

#[cfg(test)]
mod test;

pub mod single;
pub mod double;

include!(concat!(env!("OUT_DIR"), "/sin_table.rs"));
