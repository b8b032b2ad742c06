use crate::timeline::clock::hms_to_seconds;
use crate::timeline::constants::{
    CHUNK_PATTERN, FAILURE_MARKER, ROWS_PATTERN, STREAM_COMPLETE_MARKER, STREAM_PATTERN,
    TIME_PATTERN,
};
use regex::{Captures, Regex};

/// Fields pulled out of one timestamped log line.
///
/// `time_of_day` is the raw `HH:MM:SS` reading; day rollovers are resolved
/// later by the aggregator, which sees lines in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub time_of_day: u64,
    pub stream: Option<&'a str>,
    pub chunk: Option<&'a str>,
    pub rows: Option<u64>,
    pub is_failure: bool,
    pub is_stream_complete: bool,
    /// The whole line with surrounding whitespace removed.
    pub text: &'a str,
}

/// Precompiled tag matchers, built once per parse.
#[derive(Debug, Clone)]
pub struct LineExtractor {
    time: Regex,
    stream: Regex,
    chunk: Regex,
    rows: Regex,
}

impl LineExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            time: Regex::new(TIME_PATTERN)?,
            stream: Regex::new(STREAM_PATTERN)?,
            chunk: Regex::new(CHUNK_PATTERN)?,
            rows: Regex::new(ROWS_PATTERN)?,
        })
    }

    /// Returns `None` for lines without a leading timestamp.
    pub fn extract<'a>(&self, line: &'a str) -> Option<LineRecord<'a>> {
        let time = self.time.captures(line)?;
        let time_of_day = hms_to_seconds(
            capture_u64(&time, 1)?,
            capture_u64(&time, 2)?,
            capture_u64(&time, 3)?,
        );

        Some(LineRecord {
            time_of_day,
            stream: first_group(&self.stream, line),
            chunk: first_group(&self.chunk, line),
            // Digit runs too long for u64 are treated as absent.
            rows: first_group(&self.rows, line).and_then(|s| s.parse().ok()),
            is_failure: line.contains(FAILURE_MARKER),
            is_stream_complete: line.contains(STREAM_COMPLETE_MARKER),
            text: line.trim(),
        })
    }
}

fn first_group<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn capture_u64(caps: &Captures<'_>, group: usize) -> Option<u64> {
    caps.get(group)?.as_str().parse().ok()
}
