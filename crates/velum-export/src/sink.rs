//! Frame sink trait — the renderer-facing seam.
//!
//! A sink is handed the position buffer once per frame, after the
//! simulation's `end_frame`. Sinks must treat the buffer as read-only.

use velum_mesh::TriangleMesh;
use velum_types::VelumResult;

/// A single captured frame.
pub struct CapturedFrame {
    /// Frame number this capture corresponds to.
    pub timestep: u32,
    /// Interleaved positions `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
}

impl CapturedFrame {
    /// Copy a frame out of the live position buffer.
    pub fn from_positions(timestep: u32, positions: &[f32]) -> Self {
        Self {
            timestep,
            positions: positions.to_vec(),
        }
    }
}

/// Trait for consumers of per-frame simulation output.
pub trait FrameSink {
    /// Initialize with the static mesh topology.
    fn init(&mut self, mesh: &TriangleMesh) -> VelumResult<()>;

    /// Submit one frame of solved positions.
    fn submit_frame(&mut self, frame: &CapturedFrame) -> VelumResult<()>;

    /// Finalize output (flush buffers, close files, etc.).
    fn finalize(&mut self) -> VelumResult<()>;

    /// Returns the sink name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Frame sink that discards all frames.
///
/// Used for tests and headless runs where no output is needed.
#[derive(Default)]
pub struct NullSink {
    frames: u32,
}

impl NullSink {
    /// Creates a new null sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for NullSink {
    fn init(&mut self, _mesh: &TriangleMesh) -> VelumResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &CapturedFrame) -> VelumResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> VelumResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
