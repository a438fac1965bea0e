//! # velum-export
//!
//! Driver-side frame capture. The simulation core only guarantees a
//! valid position buffer after `end_frame`; this crate defines the seam
//! a rendering collaborator plugs into.
//!
//! ## Key Types
//!
//! - [`FrameSink`] — Per-frame consumer of solved positions.
//! - [`JsonFrameExporter`] — Serializes a whole run to a JSON animation
//!   file for offline inspection.
//! - [`NullSink`] — Discards frames (tests, benchmarks).

pub mod json_exporter;
pub mod sink;

pub use json_exporter::JsonFrameExporter;
pub use sink::{CapturedFrame, FrameSink, NullSink};
