//! Cloth simulation configuration.
//!
//! Parameters that control integration and constraint behavior.
//! Serializable so the CLI can load scenarios from TOML.

use serde::{Deserialize, Serialize};
use velum_types::{VelumError, VelumResult};

use crate::pinning::PinPolicy;

/// Configuration for one cloth instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothConfig {
    /// Number of XPBD substeps per frame. Stability improves with more
    /// substeps, not with more solver iterations per substep.
    pub substeps: u32,

    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Stretching compliance (inverse stiffness; 0 = rigid edges).
    pub stretching_compliance: f32,

    /// Bending compliance (inverse stiffness; larger = softer folds).
    pub bending_compliance: f32,

    /// Enforce the ground plane at y = 0 during prediction.
    pub ground_plane: bool,

    /// Which particles are structurally pinned.
    #[serde(default)]
    pub pin_policy: PinPolicy,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            substeps: velum_types::constants::DEFAULT_SUBSTEPS,
            gravity: velum_types::constants::DEFAULT_GRAVITY,
            stretching_compliance: 0.0,
            bending_compliance: velum_types::constants::DEFAULT_BENDING_COMPLIANCE,
            ground_plane: true,
            pin_policy: PinPolicy::default(),
        }
    }
}

impl ClothConfig {
    /// Validate parameter ranges.
    pub fn validate(&self) -> VelumResult<()> {
        if self.substeps == 0 {
            return Err(VelumError::InvalidConfig(
                "substeps must be at least 1".into(),
            ));
        }
        if self.stretching_compliance < 0.0 {
            return Err(VelumError::InvalidConfig(format!(
                "stretching_compliance must be non-negative, got {}",
                self.stretching_compliance
            )));
        }
        if self.bending_compliance < 0.0 {
            return Err(VelumError::InvalidConfig(format!(
                "bending_compliance must be non-negative, got {}",
                self.bending_compliance
            )));
        }
        Ok(())
    }

    /// A soft, cheap config for interactive debugging.
    pub fn debug() -> Self {
        Self {
            substeps: 5,
            bending_compliance: 10.0,
            ..Default::default()
        }
    }
}
