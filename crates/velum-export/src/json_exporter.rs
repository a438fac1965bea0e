//! JSON animation exporter — writes per-frame positions for inspection.
//!
//! Implements [`FrameSink`]. Captures vertex positions at each frame,
//! then serializes the entire animation to a JSON file on `finalize()`.
//! The output can be loaded by a Three.js-style viewer that replays the
//! position buffer over the static index list.

use serde::Serialize;
use velum_mesh::TriangleMesh;
use velum_types::VelumResult;

use crate::sink::{CapturedFrame, FrameSink};

/// A single frame of captured mesh data.
#[derive(Serialize)]
struct FrameData {
    timestep: u32,
    positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
}

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData {
    vertex_count: usize,
    triangle_count: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("animation.json");
/// exporter.init(&mesh)?;
/// // ... run simulation, calling submit_frame() after each end_frame ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    indices: Vec<u32>,
    vertex_count: usize,
    triangle_count: usize,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            indices: Vec::new(),
            vertex_count: 0,
            triangle_count: 0,
            frames: Vec::new(),
        }
    }
}

impl FrameSink for JsonFrameExporter {
    fn init(&mut self, mesh: &TriangleMesh) -> VelumResult<()> {
        self.vertex_count = mesh.vertex_count();
        self.triangle_count = mesh.triangle_count();
        self.indices = mesh.indices.clone();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &CapturedFrame) -> VelumResult<()> {
        self.frames.push(FrameData {
            timestep: frame.timestep,
            positions: frame.positions.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> VelumResult<()> {
        let data = AnimationData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            indices: self.indices.clone(),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data).map_err(|e| {
            velum_types::VelumError::Serialization(format!("JSON serialization failed: {e}"))
        })?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
