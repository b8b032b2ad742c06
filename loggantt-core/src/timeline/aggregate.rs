use crate::timeline::clock::TimeNormalizer;
use crate::timeline::error::TimelineError;
use crate::timeline::extract::LineRecord;
use crate::timeline::sort::chunk_sort_key;
use crate::timeline::types::{ChunkKey, ChunkWindow, TimelineModel};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Stateful fold over extracted line records.
///
/// Owned by a single parse; feed records in file order with [`push`] and
/// freeze the result with [`finish`].
///
/// [`push`]: WindowAggregator::push
/// [`finish`]: WindowAggregator::finish
#[derive(Debug, Default)]
pub struct WindowAggregator {
    clock: TimeNormalizer,
    open_windows: HashMap<ChunkKey, ChunkWindow>,
    completed_streams: BTreeSet<String>,
    stream_errors: BTreeMap<String, Vec<String>>,
    failed_chunks: BTreeSet<ChunkKey>,
    span: Option<(u64, u64)>,
    timestamped_lines: u64,
}

impl WindowAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &LineRecord<'_>) {
        let ts = self.clock.normalize(record.time_of_day);
        self.timestamped_lines += 1;

        // Every timestamped line counts towards the visible span.
        self.span = Some(match self.span {
            Some((start, end)) => (start.min(ts), end.max(ts)),
            None => (ts, ts),
        });

        let Some(stream) = record.stream else {
            return;
        };

        if record.is_failure {
            self.stream_errors
                .entry(stream.to_string())
                .or_default()
                .push(record.text.to_string());
            if let Some(chunk) = record.chunk {
                self.failed_chunks.insert(ChunkKey::new(stream, chunk));
            }
        }
        if record.is_stream_complete {
            self.completed_streams.insert(stream.to_string());
        }

        let Some(chunk) = record.chunk else {
            return;
        };

        self.open_windows
            .entry(ChunkKey::new(stream, chunk))
            .and_modify(|w| w.observe(ts, record.rows))
            .or_insert_with(|| ChunkWindow::open(stream, chunk, ts, record.rows));
    }

    pub fn timestamped_lines(&self) -> u64 {
        self.timestamped_lines
    }

    pub fn rollovers(&self) -> u64 {
        self.clock.rollovers()
    }

    pub fn finish(self) -> Result<TimelineModel, TimelineError> {
        let mut chunks: Vec<ChunkWindow> = self.open_windows.into_values().collect();
        chunks.sort_by(|a, b| {
            a.stream
                .cmp(&b.stream)
                .then_with(|| chunk_sort_key(&a.chunk).cmp(&chunk_sort_key(&b.chunk)))
                .then_with(|| a.start.cmp(&b.start))
        });

        // A chunk window implies at least one timestamped line.
        let Some(span) = self.span.filter(|_| !chunks.is_empty()) else {
            return Err(TimelineError::Empty);
        };

        Ok(TimelineModel::new(
            chunks,
            span,
            self.completed_streams,
            self.stream_errors,
            self.failed_chunks,
        ))
    }
}
