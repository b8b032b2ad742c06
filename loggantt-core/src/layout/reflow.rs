use crate::conf::RenderConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Summary,
    Chunk,
}

/// One row of the chart in document order: a stream's summary row followed
/// directly by that stream's chunk rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowRef<'a> {
    pub kind: RowKind,
    pub stream: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowMetrics {
    pub top_pad: u32,
    pub row_height: u32,
    pub bottom_margin: u32,
}

impl From<&RenderConfig> for RowMetrics {
    fn from(cfg: &RenderConfig) -> Self {
        Self {
            top_pad: cfg.top_pad,
            row_height: cfg.row_height,
            bottom_margin: cfg.bottom_margin,
        }
    }
}

/// Vertical placement of every row for one disclosure state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflow {
    /// Top offset per row, `None` for hidden rows.
    pub offsets: Vec<Option<u32>>,
    pub canvas_height: u32,
}

impl Reflow {
    pub fn is_visible(&self, index: usize) -> bool {
        matches!(self.offsets.get(index), Some(Some(_)))
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.map(|_| i))
    }
}

/// Summary rows are always shown; chunk rows only for the expanded stream.
/// Only shown rows consume vertical space.
///
/// The script embedded in the rendered page runs the same walk on every
/// toggle.
pub fn reflow(rows: &[RowRef<'_>], expanded: Option<&str>, metrics: RowMetrics) -> Reflow {
    let mut y = metrics.top_pad;
    let offsets = rows
        .iter()
        .map(|row| {
            let visible = match row.kind {
                RowKind::Summary => true,
                RowKind::Chunk => expanded == Some(row.stream),
            };
            visible.then(|| {
                let at = y;
                y += metrics.row_height;
                at
            })
        })
        .collect();

    Reflow {
        offsets,
        canvas_height: y + metrics.bottom_margin,
    }
}
