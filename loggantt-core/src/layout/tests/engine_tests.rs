use crate::conf::RenderConfig;
use crate::layout::{RowKind, Status, build_layout, stream_summaries};
use crate::timeline::parse_lines;
use pretty_assertions::assert_eq;

#[test]
fn streams_ordered_by_start_then_name() {
    let model = parse_lines([
        "10:00:00 stream=zeta chunk=1",
        "10:00:00 stream=beta chunk=1",
        "10:00:05 stream=alpha chunk=1",
        "10:00:06 stream=zeta chunk=2",
    ])
    .unwrap();

    let order: Vec<String> = stream_summaries(&model)
        .into_iter()
        .map(|s| s.stream)
        .collect();

    assert_eq!(order, vec!["beta", "zeta", "alpha"]);
}

#[test]
fn summary_aggregates_window_and_rows() {
    let model = parse_lines([
        "10:00:00 stream=a chunk=1 rows=100",
        "10:00:10 stream=a chunk=2 rows=50",
        "10:00:20 stream=a chunk=1 rows=120",
        "10:00:30 stream=a chunk=2",
    ])
    .unwrap();

    let s = &stream_summaries(&model)[0];

    assert_eq!((s.start, s.end), (36_000, 36_030));
    assert_eq!(s.chunk_count, 2);
    assert_eq!(s.total_rows, 170);
    assert_eq!(s.duration(), 30);
    assert_eq!(s.status, Status::Running);
}

#[test]
fn layout_rows_interleave_summary_and_chunks() {
    // Arrange
    let model = parse_lines([
        "10:00:00 stream=b chunk=1",
        "10:00:01 stream=a chunk=10",
        "10:00:02 stream=a chunk=2",
    ])
    .unwrap();

    // Act
    let layout = build_layout(&model, &RenderConfig::default());
    let rows: Vec<(RowKind, &str)> = layout.rows().iter().map(|r| (r.kind, r.stream)).collect();

    // Assert
    assert_eq!(
        rows,
        vec![
            (RowKind::Summary, "b"),
            (RowKind::Chunk, "b"),
            (RowKind::Summary, "a"),
            (RowKind::Chunk, "a"),
            (RowKind::Chunk, "a"),
        ]
    );
    let chunks: Vec<&str> = layout.streams[1]
        .chunks
        .iter()
        .map(|c| c.window.chunk.as_str())
        .collect();
    assert_eq!(chunks, vec!["2", "10"]);
    assert_eq!(layout.chunk_count(), 3);
}

#[test]
fn layout_bars_follow_scale_and_minimum_width() {
    let model = parse_lines([
        "10:00:00 stream=a chunk=1",
        "10:00:00 stream=b chunk=1",
        "10:00:10 stream=a chunk=1",
    ])
    .unwrap();

    let layout = build_layout(&model, &RenderConfig::default());

    let a = &layout.streams[0];
    let b = &layout.streams[1];
    assert_eq!(a.bar.x, 260.0);
    assert_eq!(a.bar.width, 1400.0);
    assert_eq!(b.bar.width, 2.0);
}

#[test]
fn layout_carries_errors_and_chunk_status() {
    let model = parse_lines([
        "10:00:00 stream=a chunk=1",
        "10:00:01 stream=a chunk=2 fail: disk full",
        "10:00:02 stream=b chunk=1",
        "10:00:03 stream=b complete ===",
    ])
    .unwrap();

    let layout = build_layout(&model, &RenderConfig::default());

    let a = &layout.streams[0];
    assert_eq!(a.summary.status, Status::Error);
    assert_eq!(a.errors, &["10:00:01 stream=a chunk=2 fail: disk full".to_string()]);
    assert_eq!(a.chunks[0].status, Status::Error);
    assert_eq!(a.chunks[1].status, Status::Error);

    let b = &layout.streams[1];
    assert_eq!(b.summary.status, Status::Complete);
    assert!(b.errors.is_empty());
    assert_eq!(b.chunks[0].status, Status::Complete);
}

#[test]
fn initial_reflow_is_collapsed() {
    let model = parse_lines([
        "10:00:00 stream=a chunk=1",
        "10:00:01 stream=a chunk=2",
        "10:00:02 stream=b chunk=1",
    ])
    .unwrap();
    let layout = build_layout(&model, &RenderConfig::default());

    let r = layout.reflow(None);

    assert_eq!(r.visible_rows().count(), 2);
    assert_eq!(r.canvas_height, 52 + 2 * 24 + 64);
}

#[test]
fn row_totals_saturate_instead_of_overflowing() {
    let model = parse_lines([
        "10:00:00 stream=a chunk=1 rows=18446744073709551615",
        "10:00:01 stream=a chunk=2 rows=1",
    ])
    .unwrap();

    let summaries = stream_summaries(&model);

    assert_eq!(summaries[0].total_rows, u64::MAX);
    assert_eq!(model.total_rows(), u64::MAX);
}
