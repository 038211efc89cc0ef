use crate::TABLE_SIZE;

pub const PI: f64 = std::f64::consts::PI;

/// A full rotation in radians.
pub const TAU: f64 = PI * 2.0;

pub const HALF_PI: f64 = PI / 2.0;

/// Scale factor mapping radians into table index space.
pub const RAD_TO_INDEX: f64 = TABLE_SIZE as f64 / TAU;

/// Scale factor mapping degrees into table index space.
pub const DEG_TO_INDEX: f64 = TABLE_SIZE as f64 / 360.0;

/// Scale factor mapping turns into table index space.
pub const TURN_TO_INDEX: f64 = TABLE_SIZE as f64;
