/// Gap between a row's label and the start of the chart area.
pub const LABEL_GAP: i64 = 10;

/// Tick lines start this far above the first row.
pub const TICK_TOP_GAP: i64 = 16;
/// Tick labels sit this far above the first row.
pub const TICK_LABEL_GAP: i64 = 22;
/// Tick lines stop this far above the bottom of the canvas.
pub const TICK_BOTTOM_GAP: i64 = 28;

pub const BAR_CORNER_RADIUS: u32 = 3;
