use crate::{double, single};
use celer_base::double::TAU;
use celer_base::single::{HALF_PI, PI};
use cgmath::{Deg, Rad};
use java_rand::Random;

/// Deterministic sweep angles so a failure reproduces bit-for-bit.
fn sweep(seed: u64, count: usize, range: f64) -> Vec<f64> {
	let mut rng = Random::new(seed);

	(0..count).map(|_| (rng.next_f64() * 2.0 - 1.0) * range).collect()
}

#[test]
fn test_right_angles_exact() {
	assert_eq!(single::sin(0.0), 0.0);
	assert_eq!(single::sin(HALF_PI), 1.0);
	assert_eq!(single::sin(PI), 0.0);
	assert_eq!(single::sin(PI + HALF_PI), -1.0);
	assert_eq!(single::cos(0.0), 1.0);
	assert_eq!(single::cos(PI), -1.0);
	assert_eq!(single::tan(0.0), 0.0);

	assert_eq!(double::sin(0.0), 0.0);
	assert_eq!(double::sin(celer_base::double::HALF_PI), 1.0);
	assert_eq!(double::sin(celer_base::double::PI), 0.0);
	assert_eq!(double::sin(celer_base::double::PI + celer_base::double::HALF_PI), -1.0);
	assert_eq!(double::cos(0.0), 1.0);
	assert_eq!(double::cos(celer_base::double::PI), -1.0);
}

#[test]
fn test_right_angles_exact_deg_turns() {
	assert_eq!(single::sin_deg(0.0), 0.0);
	assert_eq!(single::sin_deg(90.0), 1.0);
	assert_eq!(single::sin_deg(180.0), 0.0);
	assert_eq!(single::sin_deg(270.0), -1.0);
	assert_eq!(single::sin_deg(360.0), 0.0);
	assert_eq!(single::cos_deg(0.0), 1.0);
	assert_eq!(single::cos_deg(180.0), -1.0);

	assert_eq!(double::sin_deg(90.0), 1.0);
	assert_eq!(double::sin_deg(270.0), -1.0);

	assert_eq!(single::sin_turns(0.0), 0.0);
	assert_eq!(single::sin_turns(0.25), 1.0);
	assert_eq!(single::sin_turns(0.5), 0.0);
	assert_eq!(single::sin_turns(0.75), -1.0);
	assert_eq!(double::sin_turns(0.25), 1.0);
	assert_eq!(double::cos_turns(0.5), -1.0);
}

#[test]
fn test_nearest_tracks_reference() {
	// Half a table step plus indexing slop.
	for &x in &sweep(1, 4096, 50.0) {
		let reference = x.sin();

		let error = (single::sin(x as f32) as f64 - reference).abs();
		if error > 4.5e-4 {
			panic!("single::sin({}) error {} exceeds bound", x, error);
		}

		let error = (double::sin(x) - reference).abs();
		if error > 4.5e-4 {
			panic!("double::sin({}) error {} exceeds bound", x, error);
		}
	}
}

#[test]
fn test_smoother_tracks_reference() {
	for &x in &sweep(2, 4096, 50.0) {
		// The forced zero entries at 0 and 180 degrees sit half a step off
		// the sampled curve, so the slots around each multiple of pi carry
		// an extra error of up to half the forcing offset. Outside those
		// slots the error is quadratic in the table step.
		let half_turns = x / celer_base::double::PI;
		if (half_turns - half_turns.round()).abs() * celer_base::double::PI < 2e-3 {
			continue;
		}

		let reference = x.sin();

		let error = (single::sin_smoother(x as f32) as f64 - reference).abs();
		if error > 1e-5 {
			panic!("single::sin_smoother({}) error {} exceeds bound", x, error);
		}

		let error = (double::sin_smoother(x) - reference).abs();
		if error > 5e-8 {
			panic!("double::sin_smoother({}) error {} exceeds bound", x, error);
		}
	}
}

#[test]
fn test_smoother_bounded_at_forced_zeros() {
	// Inside the perturbed slots the error stays below the forcing offset.
	for &x in &sweep(26, 512, 2e-3) {
		let error = (double::sin_smoother(x) - x.sin()).abs();
		assert!(error < 2.5e-4, "sin_smoother({}) error {} near zero crossing", x, error);

		let error = (double::sin_smoother(x + celer_base::double::PI) - (x + celer_base::double::PI).sin()).abs();
		assert!(error < 2.5e-4, "sin_smoother({}) error {} near pi crossing", x, error);
	}
}

#[test]
fn test_periodicity() {
	for &x in &sweep(3, 1024, 20.0) {
		let a = double::sin(x);
		let b = double::sin(x + TAU);
		assert!((a - b).abs() < 4e-4, "double::sin not periodic at {}: {} vs {}", x, a, b);

		let a = single::sin(x as f32);
		let b = single::sin(x as f32 + celer_base::single::TAU);
		assert!((a - b).abs() < 1e-3, "single::sin not periodic at {}: {} vs {}", x, a, b);

		let a = double::sin_smoother(x);
		let b = double::sin_smoother(x + TAU);
		assert!((a - b).abs() < 1e-10, "sin_smoother not periodic at {}: {} vs {}", x, a, b);
	}
}

#[test]
fn test_phase_identity() {
	// Cosine is the sine table read a quarter rotation ahead, so the
	// identity holds to table resolution, not just analytically.
	for &x in &sweep(4, 1024, 20.0) {
		let x = x as f32;

		let direct = single::cos(x);
		let shifted = single::sin(x + HALF_PI);
		assert!((direct - shifted).abs() < 1e-3, "cos({}) = {} vs sin shifted {}", x, direct, shifted);

		let direct = single::cos_smoother(x);
		let shifted = single::sin_smoother(x + HALF_PI);
		assert!((direct - shifted).abs() < 1e-5, "cos_smoother({}) = {} vs {}", x, direct, shifted);
	}
}

#[test]
fn test_tangent_is_table_quotient() {
	for &x in &sweep(5, 1024, 8.0) {
		let x = x as f32;

		assert_eq!(single::tan(x), single::sin(x) / single::cos(x));
	}
}

#[test]
fn test_tangent_tracks_reference_away_from_poles() {
	for &x in &sweep(6, 2048, 8.0) {
		let reference = x.tan();

		// Skip the neighborhood of the poles; the table cannot represent them.
		if x.cos().abs() < 0.05 {
			continue;
		}

		let tolerance = 5e-4 * (1.0 + reference * reference);

		let error = (double::tan(x) - reference).abs();
		if error > tolerance {
			panic!("double::tan({}) error {} exceeds {}", x, error, tolerance);
		}

		let error = (double::tan_smoother(x) - reference).abs();
		if error > tolerance {
			panic!("double::tan_smoother({}) error {} exceeds {}", x, error, tolerance);
		}
	}
}

#[test]
fn test_tangent_pole_is_infinite() {
	// The forced cosine zero at the 270 degree slot divides through.
	assert!(double::tan_deg(270.0).is_infinite());
	assert!(single::tan_deg(270.0).is_infinite());
}

#[test]
fn test_wraparound_large_magnitudes() {
	for &x in &sweep(7, 1024, 3.0) {
		let near = double::sin(x);
		let far = double::sin(x - 4.0 * TAU);
		assert!((near - far).abs() < 4e-4, "wraparound mismatch at {}: {} vs {}", x, near, far);

		let far = double::sin(x - 1000.0 * TAU);
		assert!((near - far).abs() < 4e-4, "distant wraparound mismatch at {}: {} vs {}", x, near, far);
	}

	// Negative indices must wrap through the mask, not mirror.
	let negative = single::sin(-0.25);
	let wrapped = single::sin(-0.25 + celer_base::single::TAU);
	assert!((negative - wrapped).abs() < 1e-3, "negative wrap: {} vs {}", negative, wrapped);
	assert!(negative < 0.0, "sin(-0.25) should be negative, got {}", negative);
}

#[test]
fn test_degrees_agree_with_radians() {
	for &x in &sweep(8, 1024, 720.0) {
		let degrees = x as f32;
		let radians: Rad<f32> = Deg(degrees).into();

		let by_degrees = single::sin_deg(degrees);
		let by_radians = single::sin(radians.0);
		assert!(
			(by_degrees - by_radians).abs() < 1e-3,
			"sin_deg({}) = {} disagrees with sin({}) = {}",
			degrees, by_degrees, radians.0, by_radians
		);
	}
}

#[test]
fn test_turns_agree_with_radians() {
	for &x in &sweep(9, 1024, 4.0) {
		let by_turns = double::sin_turns(x);
		let by_radians = double::sin(x * TAU);
		assert!(
			(by_turns - by_radians).abs() < 1e-3,
			"sin_turns({}) = {} disagrees with sin = {}",
			x, by_turns, by_radians
		);
	}
}

#[test]
fn test_smoother_right_angles() {
	// Exactness at the right angles is only guaranteed for the nearest-sample
	// forms. At the peaks the forced entries agree with the curve to within
	// rounding, so the interpolated read is nearly exact; at the zero
	// crossings the forced entries sit half a step off the sampled curve and
	// pull the read off by up to half the forcing offset.
	assert!((single::sin_smoother(HALF_PI) - 1.0).abs() < 1e-6);
	assert!((double::sin_smoother(celer_base::double::HALF_PI) - 1.0).abs() < 1e-7);
	assert!((double::sin_turns_smoother(0.75) + 1.0).abs() < 1e-7);
	assert!(double::sin_smoother(0.0).abs() < 1e-4);
	assert!(double::sin_smoother(celer_base::double::PI).abs() < 1e-4);
}

#[test]
fn test_smoother_nan_propagates() {
	assert!(single::sin_smoother(f32::NAN).is_nan());
	assert!(double::cos_smoother(f64::NAN).is_nan());
}
