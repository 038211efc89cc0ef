extern crate celer_diag;
extern crate clap;
extern crate num_cpus;
extern crate rayon;

use celer_diag::{
	acos_candidates, asin_candidates, atan_candidates, sin_candidates, sweep, tan_candidates,
	Named,
};
use clap::{App, Arg};

fn validate_number(number: String) -> Result<(), String> {
	match number.parse::<u32>() {
		Ok(x) => {
			if x == 0 {
				Err("zero values are not a valid argument".to_owned())
			} else {
				Ok(())
			}
		}
		Err(parse) => Err(parse.to_string()),
	}
}

fn validate_spread(number: String) -> Result<(), String> {
	match number.parse::<f64>() {
		Ok(x) => {
			if x > 0.0 && x.is_finite() {
				Ok(())
			} else {
				Err("spread must be a positive finite number".to_owned())
			}
		}
		Err(parse) => Err(parse.to_string()),
	}
}

fn main() {
	let matches = App::new("celer Error Report")
		.version("0.1.0")
		.author("coderbot16 <coderbot16@gmail.com>")
		.about("Sweeps every approximation variant against the standard library and reports absolute error statistics")
		.arg(Arg::with_name("samples")
			.short("n")
			.long("samples")
			.value_name("COUNT")
			.help("Number of sweep samples per variant")
			.default_value("1048576")
			.validator(validate_number)
		)
		.arg(Arg::with_name("spread")
			.short("r")
			.long("spread")
			.value_name("RADIANS")
			.help("Half-width of the forward and arctangent sweeps, centered on zero")
			.default_value("50")
			.validator(validate_spread)
		)
		.arg(Arg::with_name("threads")
			.short("j")
			.long("threads")
			.value_name("COUNT")
			.help("Number of worker threads, defaulting to the CPU count")
			.takes_value(true)
			.validator(validate_number)
		)
		.get_matches();

	let samples = matches.value_of("samples").unwrap().parse::<u32>().unwrap();
	let spread = matches.value_of("spread").unwrap().parse::<f64>().unwrap();
	let threads = match matches.value_of("threads") {
		Some(count) => count.parse::<usize>().unwrap(),
		None => num_cpus::get(),
	};

	rayon::ThreadPoolBuilder::new().num_threads(threads).build_global().unwrap();

	let sections: Vec<(&str, fn(f64) -> f64, Vec<Named>, f64, f64)> = vec![
		("sine", f64::sin, sin_candidates(), -spread, spread),
		// The tangent sweep stays well inside (-pi/2, pi/2); error against
		// the poles is unbounded for every variant and the reference alike.
		("tangent", f64::tan, tan_candidates(), -1.2, 1.2),
		("arctangent", f64::atan, atan_candidates(), -spread, spread),
		("arcsine", f64::asin, asin_candidates(), -1.0, 1.0),
		("arccosine", f64::acos, acos_candidates(), -1.0, 1.0),
	];

	for (title, reference, candidates, start, end) in sections {
		println!("{} over [{}, {}], {} samples:", title, start, end, samples);
		println!("  {:<26} {:>12} {:>12} {:>14}", "variant", "max abs", "mean abs", "worst input");

		for candidate in &candidates {
			let stats = sweep(candidate, reference, start, end, samples);

			println!(
				"  {:<26} {:>12.3e} {:>12.3e} {:>14.6}",
				candidate.name, stats.max_abs, stats.mean_abs, stats.worst_input
			);
		}

		println!();
	}
}
