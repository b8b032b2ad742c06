//! Log Interpretation Pipeline
//!
//! This module turns a pipeline execution log into a [`TimelineModel`].
//!
//! Every line is scanned once. Lines that do not start with a `HH:MM:SS`
//! timestamp are ignored. The remaining lines contribute to the global
//! timeline span, and lines that carry both a `stream=` and a `chunk=` tag
//! widen the time window of that (stream, chunk) pair.
//!
//! Logs carry no dates, only times of day. When a time of day goes backwards
//! we assume midnight was crossed and shift everything after it by one day.
//! A pause of more than 24h between two consecutive lines cannot be told
//! apart from no pause at all and is read as no rollover.
//!
//! The overall data processing architecture is:
//!
//! raw line
//! LineExtractor
//! LineRecord
//! WindowAggregator (with TimeNormalizer)
//! TimelineModel
//!

mod aggregate;
mod clock;
pub(crate) mod constants;
mod error;
mod extract;
mod parse;
mod sort;
mod types;

#[cfg(test)]
mod tests;

pub use aggregate::WindowAggregator;
pub use clock::TimeNormalizer;
pub use error::TimelineError;
pub use extract::{LineExtractor, LineRecord};
pub use parse::{parse_lines, parse_log, parse_reader};
pub use sort::{ChunkSortKey, chunk_sort_key};
pub use types::{ChunkKey, ChunkWindow, TimelineModel};
