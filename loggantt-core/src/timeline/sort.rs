use std::cmp::Ordering;

/// Ordering key for chunk ids.
///
/// All-digit ids come first and compare by numeric value, so `"2"` sorts
/// before `"10"`. Any other id sorts after them, as plain text. Equal
/// numeric values (`"7"` and `"007"`) fall back to text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSortKey<'a> {
    Numeric {
        /// Digits with leading zeros stripped.
        significant: &'a str,
        raw: &'a str,
    },
    Text(&'a str),
}

pub fn chunk_sort_key(chunk: &str) -> ChunkSortKey<'_> {
    if !chunk.is_empty() && chunk.bytes().all(|b| b.is_ascii_digit()) {
        ChunkSortKey::Numeric {
            significant: chunk.trim_start_matches('0'),
            raw: chunk,
        }
    } else {
        ChunkSortKey::Text(chunk)
    }
}

impl Ord for ChunkSortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                ChunkSortKey::Numeric {
                    significant: a,
                    raw: ra,
                },
                ChunkSortKey::Numeric {
                    significant: b,
                    raw: rb,
                },
            ) => a
                .len()
                .cmp(&b.len())
                .then_with(|| a.cmp(b))
                .then_with(|| ra.cmp(rb)),
            (ChunkSortKey::Numeric { .. }, ChunkSortKey::Text(_)) => Ordering::Less,
            (ChunkSortKey::Text(_), ChunkSortKey::Numeric { .. }) => Ordering::Greater,
            (ChunkSortKey::Text(a), ChunkSortKey::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for ChunkSortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
