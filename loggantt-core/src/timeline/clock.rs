use crate::timeline::constants::SECONDS_PER_DAY;

/// Converts times of day, in file order, into absolute seconds.
///
/// The offset grows by one day each time a reading is smaller than the one
/// before it. The comparison always uses raw times of day, never the shifted
/// values, so a single rollover is detected exactly once.
#[derive(Debug, Default, Clone)]
pub struct TimeNormalizer {
    day_offset: u64,
    last_raw: Option<u64>,
    rollovers: u64,
}

impl TimeNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, raw: u64) -> u64 {
        if let Some(last) = self.last_raw {
            if raw < last {
                self.day_offset += SECONDS_PER_DAY;
                self.rollovers += 1;
                tracing::debug!(
                    previous = last,
                    current = raw,
                    day = self.day_offset / SECONDS_PER_DAY,
                    "day rollover inferred"
                );
            }
        }
        self.last_raw = Some(raw);
        raw + self.day_offset
    }

    pub fn rollovers(&self) -> u64 {
        self.rollovers
    }
}

pub fn hms_to_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours * 3600 + minutes * 60 + seconds
}
