use crate::TABLE_SIZE;

pub const PI: f32 = std::f32::consts::PI;

/// A full rotation in radians.
pub const TAU: f32 = PI * 2.0;

pub const HALF_PI: f32 = PI / 2.0;

/// Scale factor mapping radians into table index space. Derived in double
/// precision so this is the closest `f32` to the true ratio.
pub const RAD_TO_INDEX: f32 = crate::double::RAD_TO_INDEX as f32;

/// Scale factor mapping degrees into table index space. The four right
/// angles land on integer indices under this constant, which the table
/// builder relies on when forcing their exact values.
pub const DEG_TO_INDEX: f32 = TABLE_SIZE as f32 / 360.0;

/// Scale factor mapping turns into table index space.
pub const TURN_TO_INDEX: f32 = TABLE_SIZE as f32;
