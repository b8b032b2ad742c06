use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChunkKey {
    pub stream: String,
    pub chunk: String,
}

impl ChunkKey {
    pub fn new(stream: impl Into<String>, chunk: impl Into<String>) -> Self {
        Self {
            stream: stream.into(),
            chunk: chunk.into(),
        }
    }
}

/// The merged time interval of one (stream, chunk) pair.
///
/// `start <= end` holds from creation on: both begin at the first timestamp
/// and are only ever widened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkWindow {
    pub stream: String,
    pub chunk: String,
    pub start: u64,
    pub end: u64,
    pub line_count: u64,
    /// Largest row count seen. Row counts are progress counters, so the
    /// maximum is the amount of work done.
    pub rows_processed: u64,
}

impl ChunkWindow {
    pub(crate) fn open(stream: &str, chunk: &str, ts: u64, rows: Option<u64>) -> Self {
        Self {
            stream: stream.to_string(),
            chunk: chunk.to_string(),
            start: ts,
            end: ts,
            line_count: 1,
            rows_processed: rows.unwrap_or(0),
        }
    }

    pub(crate) fn observe(&mut self, ts: u64, rows: Option<u64>) {
        self.start = self.start.min(ts);
        self.end = self.end.max(ts);
        self.line_count += 1;
        if let Some(rows) = rows {
            self.rows_processed = self.rows_processed.max(rows);
        }
    }

    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn key(&self) -> ChunkKey {
        ChunkKey::new(&self.stream, &self.chunk)
    }
}

/// Finalized result of a log scan. Never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineModel {
    chunks: Vec<ChunkWindow>,
    timeline_start: u64,
    timeline_end: u64,
    completed_streams: BTreeSet<String>,
    stream_errors: BTreeMap<String, Vec<String>>,
    failed_chunks: BTreeSet<ChunkKey>,
}

impl TimelineModel {
    pub(crate) fn new(
        chunks: Vec<ChunkWindow>,
        (timeline_start, timeline_end): (u64, u64),
        completed_streams: BTreeSet<String>,
        stream_errors: BTreeMap<String, Vec<String>>,
        failed_chunks: BTreeSet<ChunkKey>,
    ) -> Self {
        Self {
            chunks,
            timeline_start,
            timeline_end,
            completed_streams,
            stream_errors,
            failed_chunks,
        }
    }

    /// Sorted by stream, then chunk sort key, then start.
    pub fn chunks(&self) -> &[ChunkWindow] {
        &self.chunks
    }

    pub fn timeline_start(&self) -> u64 {
        self.timeline_start
    }

    pub fn timeline_end(&self) -> u64 {
        self.timeline_end
    }

    pub fn span(&self) -> u64 {
        self.timeline_end - self.timeline_start
    }

    pub fn completed_streams(&self) -> &BTreeSet<String> {
        &self.completed_streams
    }

    pub fn is_completed(&self, stream: &str) -> bool {
        self.completed_streams.contains(stream)
    }

    pub fn stream_errors(&self, stream: &str) -> &[String] {
        self.stream_errors
            .get(stream)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_errors(&self, stream: &str) -> bool {
        self.stream_errors.contains_key(stream)
    }

    pub fn is_failed_chunk(&self, stream: &str, chunk: &str) -> bool {
        self.failed_chunks.contains(&ChunkKey::new(stream, chunk))
    }

    pub fn failed_chunks(&self) -> &BTreeSet<ChunkKey> {
        &self.failed_chunks
    }

    pub fn total_rows(&self) -> u64 {
        self.chunks
            .iter()
            .map(|c| c.rows_processed)
            .fold(0, u64::saturating_add)
    }
}
