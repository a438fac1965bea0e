//! Boundary-condition policies for structural pinning.
//!
//! Pinning is a scene policy, not physical law. The reference scene
//! hangs the cloth from its two top corners; other drivers may want
//! explicit pin lists or no pinning at all, so the policy is a
//! configurable value rather than a hardcoded heuristic.

use serde::{Deserialize, Serialize};
use velum_math::kernel;
use velum_types::{VelumError, VelumResult};

/// Selects which particles are structurally pinned at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PinPolicy {
    /// No particle is pinned; the cloth is fully free.
    None,

    /// Pin every particle lying on the top edge of the bounding box
    /// and on either the left or right edge, within `epsilon`. This
    /// hangs the cloth from its two top corners (or top corner
    /// regions, when several vertices tie within epsilon).
    HangTopCorners { epsilon: f32 },

    /// Pin exactly the listed particle indices.
    Explicit { particles: Vec<u32> },
}

impl Default for PinPolicy {
    fn default() -> Self {
        Self::HangTopCorners {
            epsilon: velum_types::constants::PIN_EPSILON,
        }
    }
}

impl PinPolicy {
    /// Evaluate the policy against the rest positions.
    ///
    /// `positions` is the interleaved flat buffer; returns one flag per
    /// particle. Fails with `InvalidConfig` when an explicit index is
    /// out of range.
    pub fn pinned_mask(&self, positions: &[f32], num_particles: usize) -> VelumResult<Vec<bool>> {
        let mut mask = vec![false; num_particles];

        match self {
            Self::None => {}

            Self::HangTopCorners { epsilon } => {
                if num_particles == 0 {
                    return Ok(mask);
                }

                let mut min_x = f32::MAX;
                let mut max_x = f32::MIN;
                let mut max_y = f32::MIN;
                for i in 0..num_particles {
                    let p = kernel::read(positions, i);
                    min_x = min_x.min(p.x);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }

                for (i, flag) in mask.iter_mut().enumerate() {
                    let p = kernel::read(positions, i);
                    if p.y > max_y - epsilon
                        && (p.x < min_x + epsilon || p.x > max_x - epsilon)
                    {
                        *flag = true;
                    }
                }
            }

            Self::Explicit { particles } => {
                for &p in particles {
                    let i = p as usize;
                    if i >= num_particles {
                        return Err(VelumError::InvalidConfig(format!(
                            "pinned particle index {} out of range (particle count: {})",
                            p, num_particles
                        )));
                    }
                    mask[i] = true;
                }
            }
        }

        Ok(mask)
    }
}
