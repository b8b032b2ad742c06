use crate::layout::{StreamSummary, stream_summaries};
use crate::timeline::{TimelineModel, parse_log};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Json,
    Yaml,
}

#[derive(Serialize)]
struct TimelineDump<'a> {
    #[serde(flatten)]
    model: &'a TimelineModel,
    streams: Vec<StreamSummary>,
}

pub fn dump(input: &Path, format: DumpFormat, out: &mut impl Write) -> Result<()> {
    let model = parse_log(input)?;
    let doc = TimelineDump {
        streams: stream_summaries(&model),
        model: &model,
    };

    match format {
        DumpFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        DumpFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &doc)?;
        }
    }
    Ok(())
}
