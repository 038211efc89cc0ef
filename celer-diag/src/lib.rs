//! Error statistics for the approximation variants.
//!
//! Each candidate is a named single-argument function over `f64`; the `f32`
//! variants participate by widening their result, so every variant can be
//! swept by the same driver and compared against the same reference. Sweeps
//! sample the comparison interval uniformly and reduce per-sample errors in
//! parallel, since a useful sweep runs millions of samples.

extern crate celer_base;
extern crate celer_poly;
extern crate celer_table;
extern crate rayon;


use rayon::prelude::*;

/// A single-argument numeric function under measurement.
pub trait Approx: Sync {
	/// Short name for report output.
	fn name(&self) -> &str;

	fn eval(&self, x: f64) -> f64;
}

/// Wraps a plain function as a named candidate.
pub struct Named {
	pub name: &'static str,
	pub function: fn(f64) -> f64,
}

impl Approx for Named {
	fn name(&self) -> &str {
		self.name
	}

	fn eval(&self, x: f64) -> f64 {
		(self.function)(x)
	}
}

/// Absolute-error statistics from one sweep.
pub struct ErrorStats {
	pub max_abs: f64,
	/// The sample that produced `max_abs`.
	pub worst_input: f64,
	pub mean_abs: f64,
}

/// Sweeps `samples` midpoints uniformly across `[start, end]`, comparing
/// the candidate against the reference at each one.
pub fn sweep(
	candidate: &dyn Approx, reference: fn(f64) -> f64, start: f64, end: f64, samples: u32,
) -> ErrorStats {
	let step = (end - start) / samples as f64;

	let (sum, max_abs, worst_input) = (0..samples)
		.into_par_iter()
		.map(|i| {
			let x = start + step * (i as f64 + 0.5);
			let error = (candidate.eval(x) - reference(x)).abs();

			(error, error, x)
		})
		.reduce(
			|| (0.0, 0.0, start),
			|a, b| {
				let sum = a.0 + b.0;

				if b.1 > a.1 {
					(sum, b.1, b.2)
				} else {
					(sum, a.1, a.2)
				}
			},
		);

	ErrorStats { max_abs, worst_input, mean_abs: sum / samples as f64 }
}

/// Every sine variant, table and closed-form, both precisions.
pub fn sin_candidates() -> Vec<Named> {
	vec![
		Named { name: "table sin", function: celer_table::double::sin },
		Named { name: "table sin smoother", function: celer_table::double::sin_smoother },
		Named { name: "bhaskara sin", function: celer_poly::double::sin },
		Named {
			name: "table sin (f32)",
			function: |x| celer_table::single::sin(x as f32) as f64,
		},
		Named {
			name: "table sin smoother (f32)",
			function: |x| celer_table::single::sin_smoother(x as f32) as f64,
		},
		Named {
			name: "bhaskara sin (f32)",
			function: |x| celer_poly::single::sin(x as f32) as f64,
		},
	]
}

/// The tangent variants. Sweep these away from the poles; every variant and
/// the reference blow up together there.
pub fn tan_candidates() -> Vec<Named> {
	vec![
		Named { name: "table tan", function: celer_table::double::tan },
		Named { name: "table tan smoother", function: celer_table::double::tan_smoother },
		Named { name: "pade tan", function: celer_poly::double::tan },
	]
}

/// The arctangent variants.
pub fn atan_candidates() -> Vec<Named> {
	vec![
		Named { name: "poly atan", function: celer_poly::double::atan },
		Named { name: "poly atan (f32)", function: |x| celer_poly::single::atan(x as f32) as f64 },
	]
}

/// The arcsine variants; sweep these over `[-1, 1]`.
pub fn asin_candidates() -> Vec<Named> {
	vec![
		Named { name: "poly asin", function: celer_poly::double::asin },
		Named { name: "poly asin (f32)", function: |x| celer_poly::single::asin(x as f32) as f64 },
	]
}

/// The arccosine variants; sweep these over `[-1, 1]`.
pub fn acos_candidates() -> Vec<Named> {
	vec![
		Named { name: "poly acos", function: celer_poly::double::acos },
		Named { name: "poly acos (f32)", function: |x| celer_poly::single::acos(x as f32) as f64 },
	]
}
