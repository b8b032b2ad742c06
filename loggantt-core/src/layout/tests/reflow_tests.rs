use crate::layout::{Reflow, RowKind, RowMetrics, RowRef, reflow};
use pretty_assertions::assert_eq;

const METRICS: RowMetrics = RowMetrics {
    top_pad: 52,
    row_height: 24,
    bottom_margin: 64,
};

fn rows() -> Vec<RowRef<'static>> {
    vec![
        RowRef { kind: RowKind::Summary, stream: "a" },
        RowRef { kind: RowKind::Chunk, stream: "a" },
        RowRef { kind: RowKind::Chunk, stream: "a" },
        RowRef { kind: RowKind::Summary, stream: "b" },
        RowRef { kind: RowKind::Chunk, stream: "b" },
    ]
}

#[test]
fn collapsed_shows_only_summaries() {
    let r = reflow(&rows(), None, METRICS);

    assert_eq!(
        r,
        Reflow {
            offsets: vec![Some(52), None, None, Some(76), None],
            canvas_height: 52 + 2 * 24 + 64,
        }
    );
}

#[test]
fn expanded_stream_shows_its_chunks_in_place() {
    let r = reflow(&rows(), Some("a"), METRICS);

    assert_eq!(
        r.offsets,
        vec![Some(52), Some(76), Some(100), Some(124), None]
    );
    assert_eq!(r.canvas_height, 52 + 4 * 24 + 64);
    assert_eq!(r.visible_rows().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn switching_streams_needs_no_collapse_first() {
    let r = reflow(&rows(), Some("b"), METRICS);

    assert_eq!(r.offsets, vec![Some(52), None, None, Some(76), Some(100)]);
    assert!(!r.is_visible(1));
    assert!(r.is_visible(4));
}

#[test]
fn unknown_stream_behaves_as_collapsed() {
    assert_eq!(
        reflow(&rows(), Some("zzz"), METRICS),
        reflow(&rows(), None, METRICS)
    );
}

#[test]
fn empty_rows_leave_only_margins() {
    let r = reflow(&[], None, METRICS);

    assert!(r.offsets.is_empty());
    assert_eq!(r.canvas_height, 52 + 64);
    assert!(!r.is_visible(0));
}
