//! `f32` closed-form approximations.
//!
//! The forward functions run natively in `f32`. The inverse functions
//! evaluate in double precision and narrow at the end; the coefficient sets
//! carry more precision than `f32` arithmetic would preserve, and the
//! narrowing costs nothing next to the polynomial itself.

use crate::double;
use celer_base::single::{HALF_PI, PI};

/// Sine from Bhaskara I's degree-3 rational approximation. See
/// [`double::sin`] for the folding contract; worst-case error is about
/// 1.7e-3.
pub fn sin(radians: f32) -> f32 {
	let half_turns = (radians * (1.0 / PI)).ceil();
	let folded = radians - (half_turns - 1.0) * PI;

	let product = folded * (PI - folded);
	let value = 16.0 * product / (5.0 * PI * PI - 4.0 * product);

	if (half_turns as i64) & 1 == 0 {
		-value
	} else {
		value
	}
}

/// Cosine companion of [`sin`].
pub fn cos(radians: f32) -> f32 {
	sin(radians + HALF_PI)
}

/// Tangent from a Padé rational approximant; see [`double::tan`].
pub fn tan(radians: f32) -> f32 {
	let mut wrapped = radians * (1.0 / PI) + 0.5;
	wrapped -= wrapped.floor();
	wrapped -= 0.5;

	let x = wrapped * PI;
	let x2 = x * x;
	let x4 = x2 * x2;

	(x * (0.0010582011 * x4 - 0.11111111 * x2 + 1.0))
		/ (0.015873017 * x4 - 0.44444445 * x2 + 1.0)
}

/// Arcsine in radians; see [`double::asin`] for the out-of-range contract.
pub fn asin(a: f32) -> f32 {
	double::asin(a as f64) as f32
}

/// Arccosine in radians; see [`double::acos`].
pub fn acos(a: f32) -> f32 {
	double::acos(a as f64) as f32
}

/// Arcsine in degrees.
pub fn asin_deg(a: f32) -> f32 {
	double::asin_deg(a as f64) as f32
}

/// Arccosine in degrees.
pub fn acos_deg(a: f32) -> f32 {
	double::acos_deg(a as f64) as f32
}

/// Arcsine in turns.
pub fn asin_turns(a: f32) -> f32 {
	double::asin_turns(a as f64) as f32
}

/// Arccosine in turns.
pub fn acos_turns(a: f32) -> f32 {
	double::acos_turns(a as f64) as f32
}

/// Arctangent in radians; see [`double::atan`].
pub fn atan(value: f32) -> f32 {
	double::atan(value as f64) as f32
}

/// Arctangent in degrees.
pub fn atan_deg(value: f32) -> f32 {
	double::atan_deg(value as f64) as f32
}

/// Arctangent in turns.
pub fn atan_turns(value: f32) -> f32 {
	double::atan_turns(value as f64) as f32
}

/// Four-quadrant arctangent in radians, in `(-π, π]`; see
/// [`double::atan2`].
pub fn atan2(y: f32, x: f32) -> f32 {
	double::atan2(y as f64, x as f64) as f32
}

/// Four-quadrant arctangent in degrees, in `[-180, 180]`.
pub fn atan2_deg(y: f32, x: f32) -> f32 {
	double::atan2_deg(y as f64, x as f64) as f32
}

/// Four-quadrant arctangent in degrees folded to `[0, 360)`.
pub fn atan2_deg_360(y: f32, x: f32) -> f32 {
	double::atan2_deg_360(y as f64, x as f64) as f32
}

/// Four-quadrant arctangent in turns folded to `[0, 1)`.
pub fn atan2_turns(y: f32, x: f32) -> f32 {
	double::atan2_turns(y as f64, x as f64) as f32
}
