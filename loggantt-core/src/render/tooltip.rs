use crate::layout::{ChunkRow, StreamRow, absolute_time_label, duration_label, format_int};

/// Hover text for a stream's summary bar. Raw error lines are appended for
/// errored streams.
pub fn stream_tooltip(row: &StreamRow<'_>) -> String {
    let s = &row.summary;
    let mut out = format!(
        "{} | status={} | start={} | end={} | duration={} | chunks={} | rows={}",
        s.stream,
        s.status,
        absolute_time_label(s.start),
        absolute_time_label(s.end),
        duration_label(s.duration()),
        s.chunk_count,
        format_int(s.total_rows),
    );
    if !row.errors.is_empty() {
        out.push_str("\n\nException:\n");
        out.push_str(&row.errors.join("\n\n"));
    }
    out
}

pub fn chunk_label(chunk: &ChunkRow<'_>) -> String {
    format!("{} / chunk={}", chunk.window.stream, chunk.window.chunk)
}

pub fn chunk_tooltip(chunk: &ChunkRow<'_>) -> String {
    let w = chunk.window;
    format!(
        "{} | status={} | start={} | end={} | duration={} | rows={}",
        chunk_label(chunk),
        chunk.status,
        absolute_time_label(w.start),
        absolute_time_label(w.end),
        duration_label(w.duration()),
        format_int(w.rows_processed),
    )
}
