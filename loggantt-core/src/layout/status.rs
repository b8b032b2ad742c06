use crate::timeline::{ChunkWindow, TimelineModel};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Running,
    Complete,
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Complete => "complete",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors win over completion, whichever marker came first.
pub fn stream_status(model: &TimelineModel, stream: &str) -> Status {
    if model.has_errors(stream) {
        Status::Error
    } else if model.is_completed(stream) {
        Status::Complete
    } else {
        Status::Running
    }
}

/// A chunk named in a failure line is always an error; otherwise it shares
/// its stream's status.
pub fn chunk_status(model: &TimelineModel, stream_status: Status, window: &ChunkWindow) -> Status {
    if model.is_failed_chunk(&window.stream, &window.chunk) {
        Status::Error
    } else {
        stream_status
    }
}
