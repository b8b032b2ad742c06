use crate::timeline::aggregate::WindowAggregator;
use crate::timeline::error::TimelineError;
use crate::timeline::extract::LineExtractor;
use crate::timeline::types::TimelineModel;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn parse_log(path: &Path) -> Result<TimelineModel, TimelineError> {
    let file = File::open(path).map_err(|e| TimelineError::read_input(path, e))?;
    parse_reader(BufReader::new(file)).map_err(|e| match e {
        TimelineError::Io(source) => TimelineError::read_input(path, source),
        other => other,
    })
}

/// Reads newline-separated input, replacing malformed UTF-8 instead of
/// rejecting it.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<TimelineModel, TimelineError> {
    let extractor = LineExtractor::new()?;
    let mut agg = WindowAggregator::new();
    let mut lines_read = 0u64;

    for raw in reader.split(b'\n') {
        let raw = raw?;
        let line = String::from_utf8_lossy(raw.strip_suffix(b"\r").unwrap_or(raw.as_slice()));
        lines_read += 1;

        if let Some(record) = extractor.extract(&line) {
            agg.push(&record);
        }
    }

    finish(agg, lines_read)
}

pub fn parse_lines<I, S>(lines: I) -> Result<TimelineModel, TimelineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let extractor = LineExtractor::new()?;
    let mut agg = WindowAggregator::new();
    let mut lines_read = 0u64;

    for line in lines {
        lines_read += 1;
        if let Some(record) = extractor.extract(line.as_ref()) {
            agg.push(&record);
        }
    }

    finish(agg, lines_read)
}

fn finish(agg: WindowAggregator, lines_read: u64) -> Result<TimelineModel, TimelineError> {
    let timestamped = agg.timestamped_lines();
    let rollovers = agg.rollovers();

    let model = agg.finish().inspect_err(|_| {
        tracing::warn!(lines_read, timestamped, "no chunk-tagged lines in log");
    })?;

    let streams = model
        .chunks()
        .iter()
        .map(|c| c.stream.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    tracing::info!(
        lines_read,
        timestamped,
        rollovers,
        chunks = model.chunks().len(),
        streams,
        "timeline parsed"
    );

    Ok(model)
}
