//! Integration tests for velum-export.

use velum_export::{CapturedFrame, FrameSink, JsonFrameExporter, NullSink};
use velum_mesh::generators::quad_grid;
use velum_solver::{ClothConfig, ClothSim};

#[test]
fn null_sink_counts_frames() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut sink = NullSink::new();
    sink.init(&mesh).unwrap();

    for t in 0..5 {
        let frame = CapturedFrame::from_positions(t, &mesh.positions_interleaved());
        sink.submit_frame(&frame).unwrap();
    }
    sink.finalize().unwrap();
    assert_eq!(sink.frame_count(), 5);
}

#[test]
fn captured_frame_copies_buffer() {
    let positions = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let frame = CapturedFrame::from_positions(7, &positions);
    assert_eq!(frame.timestep, 7);
    assert_eq!(frame.positions, positions);
}

#[test]
fn json_exporter_writes_animation() {
    let path = std::env::temp_dir().join("velum_export_test.json");
    let path_str = path.to_str().unwrap();

    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut sim = ClothSim::new(mesh, ClothConfig::default()).unwrap();

    let mut exporter = JsonFrameExporter::new(path_str);
    exporter.init(sim.mesh()).unwrap();

    for t in 0..3 {
        sim.step(1.0 / 60.0);
        let frame = CapturedFrame::from_positions(t, sim.positions());
        exporter.submit_frame(&frame).unwrap();
    }
    assert_eq!(exporter.frame_count(), 3);
    exporter.finalize().unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["vertex_count"], 9);
    assert_eq!(value["triangle_count"], 8);
    assert_eq!(value["frames"].as_array().unwrap().len(), 3);
    assert_eq!(
        value["frames"][0]["positions"].as_array().unwrap().len(),
        27
    );

    std::fs::remove_file(&path).ok();
}

#[test]
fn exporter_name() {
    assert_eq!(JsonFrameExporter::new("x.json").name(), "json_exporter");
    assert_eq!(NullSink::new().name(), "null");
}
