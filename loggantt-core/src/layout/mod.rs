//! Timeline Layout
//!
//! Derives everything the renderer draws from a finished [`TimelineModel`]:
//! per-stream summaries and their order, the status of every stream and
//! chunk, the time-to-pixel scale, tick marks, and the vertical position of
//! each row for a given disclosure state.
//!
//! Nothing here mutates the model and nothing performs I/O.
//!
//! [`TimelineModel`]: crate::timeline::TimelineModel

mod engine;
mod labels;
mod reflow;
mod scale;
mod status;

#[cfg(test)]
mod tests;

pub use engine::{ChunkRow, Layout, StreamRow, StreamSummary, build_layout, stream_summaries};
pub use labels::{absolute_time_label, duration_label, format_int, seconds_label};
pub use reflow::{Reflow, RowKind, RowMetrics, RowRef, reflow};
pub use scale::{Bar, Tick, TimeScale, ticks};
pub use status::{Status, chunk_status, stream_status};
