//! The cloth simulation object: integrator and interaction controller.
//!
//! `ClothSim` owns everything for one cloth instance and exposes the
//! per-frame contract:
//!
//! ```text
//! for _ in 0..substeps {
//!     sim.pre_solve(sdt, gravity);   // predict
//!     sim.solve(sdt);                // project constraints
//!     sim.post_solve(sdt);           // reconcile velocity
//! }
//! sim.end_frame();                   // finalize geometry
//! ```
//!
//! Positions are primary state; velocity is reconstructed from the
//! position change each substep. The renderer reads the position
//! buffer only after `end_frame`.

use tracing::{debug, info};
use velum_math::{kernel, Vec3};
use velum_mesh::normals::compute_vertex_normals;
use velum_mesh::{ClothTopology, TriangleMesh};
use velum_types::{VelumError, VelumResult};

use crate::config::ClothConfig;
use crate::constraints::DistanceConstraints;
use crate::state::ClothState;

/// Grab bookkeeping for one held particle.
#[derive(Debug, Clone, Copy)]
struct Grab {
    particle: usize,
    /// Inverse mass to restore on release.
    saved_inv_mass: f32,
}

/// One simulated cloth: mesh, constraint topology, particle state,
/// configuration, and grab state.
///
/// Instantiate one `ClothSim` per cloth; there is no process-wide
/// state. All stepping methods take `&mut self`, so the borrow checker
/// enforces that nothing else reads or writes the buffers while a
/// substep is in progress.
pub struct ClothSim {
    mesh: TriangleMesh,
    topology: ClothTopology,
    state: ClothState,
    stretching: DistanceConstraints,
    bending: DistanceConstraints,
    config: ClothConfig,
    grab: Option<Grab>,
}

impl ClothSim {
    /// Build a cloth from a mesh and configuration.
    ///
    /// Validates the mesh and config, derives constraint topology and
    /// rest lengths, lumps inverse masses from triangle areas, and
    /// applies the structural pin policy. Everything here is computed
    /// once; nothing is recomputed during simulation.
    pub fn new(mesh: TriangleMesh, config: ClothConfig) -> VelumResult<Self> {
        mesh.validate()?;
        config.validate()?;

        let topology = ClothTopology::build(&mesh)?;
        let mut state = ClothState::from_mesh(&mesh);

        let pinned = config.pin_policy.pinned_mask(&state.pos, state.num_particles)?;
        state.apply_pinned(&pinned);

        let stretching = DistanceConstraints::stretching(&topology, &state.pos);
        let bending = DistanceConstraints::bending(&topology, &state.pos);

        info!(
            particles = state.num_particles,
            triangles = mesh.triangle_count(),
            stretching = stretching.len(),
            bending = bending.len(),
            pinned = pinned.iter().filter(|&&p| p).count(),
            "cloth initialized"
        );

        Ok(Self {
            mesh,
            topology,
            state,
            stretching,
            bending,
            config,
            grab: None,
        })
    }

    // ─── Per-frame contract ───────────────────────────────────

    /// Predict: integrate gravity into velocities and advance positions.
    ///
    /// For every unpinned particle: `vel += gravity * dt`,
    /// `prev = pos`, `pos += vel * dt`. When the ground plane is
    /// enabled and the predicted `y` dips below zero, the position
    /// reverts to `prev` and only its y-component is clamped to zero,
    /// so horizontal motion survives while penetration halts.
    pub fn pre_solve(&mut self, dt: f32, gravity: Vec3) {
        let s = &mut self.state;
        let g = gravity.to_array();
        for i in 0..s.num_particles {
            if s.inv_mass[i] == 0.0 {
                continue;
            }
            kernel::add_scaled(&mut s.vel, i, &g, 0, dt);
            kernel::copy(&mut s.prev, i, &s.pos, i);
            kernel::add_scaled(&mut s.pos, i, &s.vel, i, dt);

            if self.config.ground_plane && s.pos[3 * i + 1] < 0.0 {
                kernel::copy(&mut s.pos, i, &s.prev, i);
                s.pos[3 * i + 1] = 0.0;
            }
        }
    }

    /// Solve: one sequential pass over stretching constraints, then one
    /// over bending constraints.
    pub fn solve(&mut self, dt: f32) {
        self.stretching.project(
            &mut self.state.pos,
            &self.state.inv_mass,
            self.config.stretching_compliance,
            dt,
        );
        self.bending.project(
            &mut self.state.pos,
            &self.state.inv_mass,
            self.config.bending_compliance,
            dt,
        );
    }

    /// Reconcile: derive velocities from the solved position change.
    ///
    /// `vel = (pos − prev) / dt` for every unpinned particle. Velocity
    /// is a byproduct of positions, never integrated independently.
    pub fn post_solve(&mut self, dt: f32) {
        let s = &mut self.state;
        let inv_dt = 1.0 / dt;
        for i in 0..s.num_particles {
            if s.inv_mass[i] == 0.0 {
                continue;
            }
            kernel::set_diff(&mut s.vel, i, &s.pos, i, &s.prev, i, inv_dt);
        }
    }

    /// Finalize the frame: write solved positions back into the mesh
    /// and recompute vertex normals for the renderer.
    pub fn end_frame(&mut self) {
        for i in 0..self.state.num_particles {
            let p = kernel::read(&self.state.pos, i);
            self.mesh.set_position(i, p.x, p.y, p.z);
        }
        compute_vertex_normals(&mut self.mesh);
    }

    /// Advance one frame: run the substep pipeline `substeps` times
    /// with `frame_dt / substeps`, then finalize.
    pub fn step(&mut self, frame_dt: f32) {
        let substeps = self.config.substeps.max(1);
        let sdt = frame_dt / substeps as f32;
        let gravity = Vec3::from_array(self.config.gravity);

        for _ in 0..substeps {
            self.pre_solve(sdt, gravity);
            self.solve(sdt);
            self.post_solve(sdt);
        }
        self.end_frame();
    }

    // ─── Interaction ──────────────────────────────────────────

    /// Grab the particle nearest to `point` (squared-distance scan),
    /// pin it, and snap it to `point`.
    ///
    /// Fails with [`VelumError::EmptyTopology`] on a zero-particle
    /// cloth rather than leaving a dangling grab index.
    pub fn start_grab(&mut self, point: Vec3) -> VelumResult<()> {
        if self.state.num_particles == 0 {
            return Err(VelumError::EmptyTopology(
                "cannot grab: cloth has no particles".into(),
            ));
        }

        let p = point.to_array();
        let mut nearest = 0;
        let mut min_d2 = f32::MAX;
        for i in 0..self.state.num_particles {
            let d2 = kernel::dist_sq(&p, 0, &self.state.pos, i);
            if d2 < min_d2 {
                min_d2 = d2;
                nearest = i;
            }
        }

        self.grab = Some(Grab {
            particle: nearest,
            saved_inv_mass: self.state.inv_mass[nearest],
        });
        self.state.inv_mass[nearest] = 0.0;
        kernel::write(&mut self.state.pos, nearest, point);

        debug!(particle = nearest, "grab started");
        Ok(())
    }

    /// While grabbed, force the held particle to follow `point`.
    ///
    /// This is a direct position override, bypassing the constraint
    /// solver for the held particle. No-op when nothing is grabbed.
    pub fn move_grabbed(&mut self, point: Vec3) {
        if let Some(grab) = self.grab {
            kernel::write(&mut self.state.pos, grab.particle, point);
        }
    }

    /// Release the held particle: restore its inverse mass, hand it the
    /// release velocity, and clear grab state. No-op when nothing is
    /// grabbed.
    pub fn end_grab(&mut self, release_velocity: Vec3) {
        if let Some(grab) = self.grab.take() {
            self.state.inv_mass[grab.particle] = grab.saved_inv_mass;
            kernel::write(&mut self.state.vel, grab.particle, release_velocity);
            debug!(particle = grab.particle, "grab released");
        }
    }

    /// Returns the index of the currently grabbed particle, if any.
    pub fn grabbed_particle(&self) -> Option<usize> {
        self.grab.map(|g| g.particle)
    }

    // ─── Accessors ────────────────────────────────────────────

    /// The live interleaved position buffer (read-only; valid for the
    /// renderer after `end_frame`).
    pub fn positions(&self) -> &[f32] {
        &self.state.pos
    }

    /// The live interleaved velocity buffer.
    pub fn velocities(&self) -> &[f32] {
        &self.state.vel
    }

    /// Per-particle inverse masses.
    pub fn inverse_masses(&self) -> &[f32] {
        &self.state.inv_mass
    }

    /// The owned mesh (positions and normals current as of the last
    /// `end_frame`).
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// The constraint topology.
    pub fn topology(&self) -> &ClothTopology {
        &self.topology
    }

    /// The particle state buffers.
    pub fn state(&self) -> &ClothState {
        &self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.state.num_particles
    }
}
