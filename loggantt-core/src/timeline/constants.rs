pub const SECONDS_PER_DAY: u64 = 86_400;

pub const FAILURE_MARKER: &str = "fail:";
pub const STREAM_COMPLETE_MARKER: &str = "complete ===";

pub const TIME_PATTERN: &str = r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\b";
pub const STREAM_PATTERN: &str = r"\bstream=([^\]\s]+)";
pub const CHUNK_PATTERN: &str = r"\bchunk=([^\]\s]+)";
pub const ROWS_PATTERN: &str = r"\brows=([0-9]+)\b";
