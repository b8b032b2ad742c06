use crate::conf::RenderConfig;
use crate::layout::reflow::{Reflow, RowKind, RowMetrics, RowRef, reflow};
use crate::layout::scale::{Bar, Tick, TimeScale, ticks};
use crate::layout::status::{Status, chunk_status, stream_status};
use crate::timeline::{ChunkWindow, TimelineModel};
use serde::Serialize;

/// Aggregate view of one stream over all of its chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    pub stream: String,
    pub start: u64,
    pub end: u64,
    pub chunk_count: usize,
    pub total_rows: u64,
    pub status: Status,
}

impl StreamSummary {
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

#[derive(Debug, Clone)]
pub struct ChunkRow<'a> {
    pub window: &'a ChunkWindow,
    pub status: Status,
    pub bar: Bar,
}

#[derive(Debug, Clone)]
pub struct StreamRow<'a> {
    pub summary: StreamSummary,
    pub bar: Bar,
    pub errors: &'a [String],
    pub chunks: Vec<ChunkRow<'a>>,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    /// Earliest-starting stream first, ties broken by name.
    pub streams: Vec<StreamRow<'a>>,
    pub ticks: Vec<Tick>,
    pub scale: TimeScale,
    pub metrics: RowMetrics,
}

impl Layout<'_> {
    /// All rows in document order.
    pub fn rows(&self) -> Vec<RowRef<'_>> {
        let mut rows = Vec::with_capacity(self.streams.len() + self.chunk_count());
        for s in &self.streams {
            rows.push(RowRef {
                kind: RowKind::Summary,
                stream: &s.summary.stream,
            });
            rows.extend(s.chunks.iter().map(|_| RowRef {
                kind: RowKind::Chunk,
                stream: &s.summary.stream,
            }));
        }
        rows
    }

    pub fn reflow(&self, expanded: Option<&str>) -> Reflow {
        reflow(&self.rows(), expanded, self.metrics)
    }

    pub fn chunk_count(&self) -> usize {
        self.streams.iter().map(|s| s.chunks.len()).sum()
    }
}

pub fn stream_summaries(model: &TimelineModel) -> Vec<StreamSummary> {
    grouped(model).into_iter().map(|(s, _)| s).collect()
}

pub fn build_layout<'a>(model: &'a TimelineModel, cfg: &RenderConfig) -> Layout<'a> {
    let scale = TimeScale::new(model.timeline_start(), model.timeline_end(), cfg);

    let streams = grouped(model)
        .into_iter()
        .map(|(summary, windows)| StreamRow {
            bar: scale.bar(summary.start, summary.end),
            errors: model.stream_errors(&summary.stream),
            chunks: windows
                .iter()
                .map(|w| ChunkRow {
                    window: w,
                    status: chunk_status(model, summary.status, w),
                    bar: scale.bar(w.start, w.end),
                })
                .collect(),
            summary,
        })
        .collect();

    Layout {
        streams,
        ticks: ticks(
            model.timeline_start(),
            model.timeline_end(),
            cfg.tick_step_secs,
            &scale,
        ),
        scale,
        metrics: RowMetrics::from(cfg),
    }
}

/// Chunks are sorted by stream, so each stream is one contiguous run.
fn grouped(model: &TimelineModel) -> Vec<(StreamSummary, &[ChunkWindow])> {
    let mut groups: Vec<_> = model
        .chunks()
        .chunk_by(|a, b| a.stream == b.stream)
        .map(|windows| (summarize(model, windows), windows))
        .collect();

    groups.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then_with(|| a.stream.cmp(&b.stream)));
    groups
}

fn summarize(model: &TimelineModel, windows: &[ChunkWindow]) -> StreamSummary {
    let stream = windows.first().map(|w| w.stream.clone()).unwrap_or_default();
    let start = windows.iter().map(|w| w.start).min().unwrap_or_default();
    let end = windows.iter().map(|w| w.end).max().unwrap_or_default();

    StreamSummary {
        status: stream_status(model, &stream),
        start,
        end,
        chunk_count: windows.len(),
        total_rows: windows
            .iter()
            .map(|w| w.rows_processed)
            .fold(0, u64::saturating_add),
        stream,
    }
}
