//! Physical constants and simulation defaults.

/// Default gravity vector (m/s²). Matches the reference hanging-cloth
/// scene rather than standard gravity.
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -10.0, 0.0];

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default number of XPBD substeps per frame.
pub const DEFAULT_SUBSTEPS: u32 = 15;

/// Default bending compliance (inverse stiffness; 0 = rigid).
pub const DEFAULT_BENDING_COMPLIANCE: f32 = 1.0;

/// Epsilon for the top-corner pinning test against the bounding box.
pub const PIN_EPSILON: f32 = 1.0e-4;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
