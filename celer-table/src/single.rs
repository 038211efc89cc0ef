//! `f32` lookups.

use celer_base::math::{floor_biased, floor_to_index, lerp};
use celer_base::single::{DEG_TO_INDEX, RAD_TO_INDEX, TURN_TO_INDEX};
use celer_base::{double, SIN_TO_COS, TABLE_MASK};

use crate::SIN_TABLE;

/// Sine of an angle in radians, read from the nearest table sample.
///
/// Periodic for any finite input; the mask wraps negative and oversized
/// indices alike. Worst-case absolute error is about half a table step,
/// on the order of `2π / (2 · TABLE_SIZE)`. The four right angles return
/// exactly 0, 1, 0 and -1.
pub fn sin(radians: f32) -> f32 {
	SIN_TABLE[(floor_to_index(radians * RAD_TO_INDEX) & TABLE_MASK) as usize]
}

/// Cosine of an angle in radians: the sine table read a quarter rotation
/// ahead.
pub fn cos(radians: f32) -> f32 {
	SIN_TABLE[((floor_to_index(radians * RAD_TO_INDEX).wrapping_add(SIN_TO_COS)) & TABLE_MASK) as usize]
}

/// Tangent of an angle in radians: table sine over table cosine.
///
/// Where the cosine entry is exactly zero (the forced right-angle slots),
/// the quotient is an IEEE signed infinity, or NaN over the forced zero
/// sine entry. Not special-cased; sampled tables cannot represent the pole
/// anyway.
pub fn tan(radians: f32) -> f32 {
	let index = floor_to_index(radians * RAD_TO_INDEX);

	SIN_TABLE[(index & TABLE_MASK) as usize]
		/ SIN_TABLE[(index.wrapping_add(SIN_TO_COS) & TABLE_MASK) as usize]
}

/// Sine of an angle in degrees.
pub fn sin_deg(degrees: f32) -> f32 {
	SIN_TABLE[(floor_to_index(degrees * DEG_TO_INDEX) & TABLE_MASK) as usize]
}

/// Cosine of an angle in degrees.
pub fn cos_deg(degrees: f32) -> f32 {
	SIN_TABLE[((floor_to_index(degrees * DEG_TO_INDEX).wrapping_add(SIN_TO_COS)) & TABLE_MASK) as usize]
}

/// Tangent of an angle in degrees.
pub fn tan_deg(degrees: f32) -> f32 {
	let index = floor_to_index(degrees * DEG_TO_INDEX);

	SIN_TABLE[(index & TABLE_MASK) as usize]
		/ SIN_TABLE[(index.wrapping_add(SIN_TO_COS) & TABLE_MASK) as usize]
}

/// Sine of an angle in turns (1.0 = a full rotation).
pub fn sin_turns(turns: f32) -> f32 {
	SIN_TABLE[(floor_to_index(turns * TURN_TO_INDEX) & TABLE_MASK) as usize]
}

/// Cosine of an angle in turns.
pub fn cos_turns(turns: f32) -> f32 {
	SIN_TABLE[((floor_to_index(turns * TURN_TO_INDEX).wrapping_add(SIN_TO_COS)) & TABLE_MASK) as usize]
}

/// Tangent of an angle in turns.
pub fn tan_turns(turns: f32) -> f32 {
	let index = floor_to_index(turns * TURN_TO_INDEX);

	SIN_TABLE[(index & TABLE_MASK) as usize]
		/ SIN_TABLE[(index.wrapping_add(SIN_TO_COS) & TABLE_MASK) as usize]
}

/// Reads the table at a real-valued index, interpolating between the two
/// samples either side.
///
/// Each table entry samples half a step past its index, so the index is
/// pulled back half a step first to line the interpolation nodes up with
/// the samples. The `+ 1` read is covered by the table's wraparound slot.
fn lerp_index(index: f64) -> f32 {
	let index = index - 0.5;
	let floor = floor_biased(index);
	let masked = (floor & TABLE_MASK) as usize;

	lerp(SIN_TABLE[masked], SIN_TABLE[masked + 1], (index - floor as f64) as f32)
}

/// Sine of an angle in radians, interpolated between the two nearest table
/// samples.
///
/// Mean absolute error is roughly two orders of magnitude below [`sin`],
/// paid for with a second table read and a multiply-add. The index is
/// scaled in double precision; a single-precision product has almost no
/// fractional bits left once the angle exceeds a few rotations.
pub fn sin_smoother(radians: f32) -> f32 {
	lerp_index(radians as f64 * double::RAD_TO_INDEX)
}

/// Interpolated counterpart of [`cos`].
pub fn cos_smoother(radians: f32) -> f32 {
	lerp_index(radians as f64 * double::RAD_TO_INDEX + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`tan`].
pub fn tan_smoother(radians: f32) -> f32 {
	let index = radians as f64 * double::RAD_TO_INDEX;

	lerp_index(index) / lerp_index(index + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`sin_deg`].
pub fn sin_deg_smoother(degrees: f32) -> f32 {
	lerp_index(degrees as f64 * double::DEG_TO_INDEX)
}

/// Interpolated counterpart of [`cos_deg`].
pub fn cos_deg_smoother(degrees: f32) -> f32 {
	lerp_index(degrees as f64 * double::DEG_TO_INDEX + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`tan_deg`].
pub fn tan_deg_smoother(degrees: f32) -> f32 {
	let index = degrees as f64 * double::DEG_TO_INDEX;

	lerp_index(index) / lerp_index(index + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`sin_turns`].
pub fn sin_turns_smoother(turns: f32) -> f32 {
	lerp_index(turns as f64 * double::TURN_TO_INDEX)
}

/// Interpolated counterpart of [`cos_turns`].
pub fn cos_turns_smoother(turns: f32) -> f32 {
	lerp_index(turns as f64 * double::TURN_TO_INDEX + SIN_TO_COS as f64)
}

/// Interpolated counterpart of [`tan_turns`].
pub fn tan_turns_smoother(turns: f32) -> f32 {
	let index = turns as f64 * double::TURN_TO_INDEX;

	lerp_index(index) / lerp_index(index + SIN_TO_COS as f64)
}
