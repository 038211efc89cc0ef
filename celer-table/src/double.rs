//! `f64` lookups, against the double-precision table.

use celer_base::double::{DEG_TO_INDEX, RAD_TO_INDEX, TURN_TO_INDEX};
use celer_base::math::{floor_biased, floor_to_index64, lerp64};
use celer_base::{SIN_TO_COS, TABLE_MASK};

use crate::SIN_TABLE_64;

/// Sine of an angle in radians, read from the nearest table sample.
///
/// Same contract as the single-precision form: periodic over all finite
/// inputs, worst-case error about half a table step, exact at the four
/// right angles.
pub fn sin(radians: f64) -> f64 {
	SIN_TABLE_64[(floor_to_index64(radians * RAD_TO_INDEX) & TABLE_MASK) as usize]
}

/// Cosine of an angle in radians.
pub fn cos(radians: f64) -> f64 {
	SIN_TABLE_64[((floor_to_index64(radians * RAD_TO_INDEX).wrapping_add(SIN_TO_COS)) & TABLE_MASK) as usize]
}

/// Tangent of an angle in radians: table sine over table cosine. An exact
/// zero in the cosine entry divides through to a signed infinity or NaN.
pub fn tan(radians: f64) -> f64 {
	let index = floor_to_index64(radians * RAD_TO_INDEX);

	SIN_TABLE_64[(index & TABLE_MASK) as usize]
		/ SIN_TABLE_64[(index.wrapping_add(SIN_TO_COS) & TABLE_MASK) as usize]
}

/// Sine of an angle in degrees.
pub fn sin_deg(degrees: f64) -> f64 {
	SIN_TABLE_64[(floor_to_index64(degrees * DEG_TO_INDEX) & TABLE_MASK) as usize]
}

/// Cosine of an angle in degrees.
pub fn cos_deg(degrees: f64) -> f64 {
	SIN_TABLE_64[((floor_to_index64(degrees * DEG_TO_INDEX).wrapping_add(SIN_TO_COS)) & TABLE_MASK) as usize]
}

/// Tangent of an angle in degrees.
pub fn tan_deg(degrees: f64) -> f64 {
	let index = floor_to_index64(degrees * DEG_TO_INDEX);

	SIN_TABLE_64[(index & TABLE_MASK) as usize]
		/ SIN_TABLE_64[(index.wrapping_add(SIN_TO_COS) & TABLE_MASK) as usize]
}

/// Sine of an angle in turns (1.0 = a full rotation).
pub fn sin_turns(turns: f64) -> f64 {
	SIN_TABLE_64[(floor_to_index64(turns * TURN_TO_INDEX) & TABLE_MASK) as usize]
}

/// Cosine of an angle in turns.
pub fn cos_turns(turns: f64) -> f64 {
	SIN_TABLE_64[((floor_to_index64(turns * TURN_TO_INDEX).wrapping_add(SIN_TO_COS)) & TABLE_MASK) as usize]
}

/// Tangent of an angle in turns.
pub fn tan_turns(turns: f64) -> f64 {
	let index = floor_to_index64(turns * TURN_TO_INDEX);

	SIN_TABLE_64[(index & TABLE_MASK) as usize]
		/ SIN_TABLE_64[(index.wrapping_add(SIN_TO_COS) & TABLE_MASK) as usize]
}

/// Reads the table at a real-valued index, interpolating between the two
/// samples either side.
///
/// Each table entry samples half a step past its index, so the index is
/// pulled back half a step first to line the interpolation nodes up with
/// the samples. The `+ 1` read is covered by the table's wraparound slot.
fn lerp_index(index: f64) -> f64 {
	let index = index - 0.5;
	let floor = floor_biased(index);
	let masked = (floor & TABLE_MASK) as usize;

	lerp64(SIN_TABLE_64[masked], SIN_TABLE_64[masked + 1], index - floor as f64)
}

/// Sine of an angle in radians, interpolated between the two nearest table
/// samples. Roughly two orders of magnitude less mean error than [`sin`].
pub fn sin_smoother(radians: f64) -> f64 {
	lerp_index(radians * RAD_TO_INDEX)
}

/// Interpolated counterpart of [`cos`].
pub fn cos_smoother(radians: f64) -> f64 {
	lerp_index(radians * RAD_TO_INDEX + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`tan`].
pub fn tan_smoother(radians: f64) -> f64 {
	let index = radians * RAD_TO_INDEX;

	lerp_index(index) / lerp_index(index + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`sin_deg`].
pub fn sin_deg_smoother(degrees: f64) -> f64 {
	lerp_index(degrees * DEG_TO_INDEX)
}

/// Interpolated counterpart of [`cos_deg`].
pub fn cos_deg_smoother(degrees: f64) -> f64 {
	lerp_index(degrees * DEG_TO_INDEX + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`tan_deg`].
pub fn tan_deg_smoother(degrees: f64) -> f64 {
	let index = degrees * DEG_TO_INDEX;

	lerp_index(index) / lerp_index(index + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`sin_turns`].
pub fn sin_turns_smoother(turns: f64) -> f64 {
	lerp_index(turns * TURN_TO_INDEX)
}

/// Interpolated counterpart of [`cos_turns`].
pub fn cos_turns_smoother(turns: f64) -> f64 {
	lerp_index(turns * TURN_TO_INDEX + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`tan_turns`].
pub fn tan_turns_smoother(turns: f64) -> f64 {
	let index = turns * TURN_TO_INDEX;

	lerp_index(index) / lerp_index(index + SIN_TO_COS as f64)
}
