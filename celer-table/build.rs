use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const TABLE_SIZE: usize = 16384;
const DEG_TO_INDEX: f64 = TABLE_SIZE as f64 / 360.0;

/// Builds the shared sine table: `TABLE_SIZE` samples taken half a step past
/// each index so the nearest-sample lookup reads the midpoint of the range
/// that truncates to it, plus a wraparound duplicate of slot 0 so that
/// interpolated lookups may read one past the end.
fn compute_sin_table() -> Vec<f64> {
	let full_rotation = std::f64::consts::PI * 2.0;

	let mut table = Vec::with_capacity(TABLE_SIZE + 1);

	for i in 0..TABLE_SIZE {
		table.push(((i as f64 + 0.5) / TABLE_SIZE as f64 * full_rotation).sin());
	}

	// The right angles get their exact values. Selecting the slots through
	// the degree scale constant keeps the overwrite on the same entries the
	// degree lookups hit.
	for &(degrees, exact) in [(0.0, 0.0), (90.0, 1.0), (180.0, 0.0), (270.0, -1.0)].iter() {
		table[(degrees * DEG_TO_INDEX) as usize & (TABLE_SIZE - 1)] = exact;
	}

	let wrap = table[0];
	table.push(wrap);

	table
}

fn main() {
	let out_dir = env::var_os("OUT_DIR").unwrap();
	let dest_path = Path::new(&out_dir).join("sin_table.rs");
	let mut f = File::create(dest_path).unwrap();

	let table = compute_sin_table();
	let narrowed: Vec<f32> = table.iter().map(|&value| value as f32).collect();

	writeln!(&mut f, "pub(crate) const SIN_TABLE: [f32; {}] = {:?};", narrowed.len(), narrowed)
		.unwrap();
	writeln!(&mut f, "pub(crate) const SIN_TABLE_64: [f64; {}] = {:?};", table.len(), table)
		.unwrap();
}
