use crate::conf::RenderConfig;
use crate::layout::labels::absolute_time_label;

/// Linear mapping from absolute seconds to horizontal pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    origin: u64,
    span: u64,
    left_pad: f64,
    chart_width: f64,
    min_width: f64,
}

/// Horizontal extent of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub seconds: u64,
    pub x: f64,
    pub label: String,
}

impl TimeScale {
    pub fn new(timeline_start: u64, timeline_end: u64, cfg: &RenderConfig) -> Self {
        Self {
            origin: timeline_start,
            // A single-instant log still gets a non-zero divisor.
            span: timeline_end.saturating_sub(timeline_start).max(1),
            left_pad: f64::from(cfg.left_pad),
            chart_width: f64::from(cfg.chart_width),
            min_width: cfg.min_bar_width,
        }
    }

    pub fn x_at(&self, ts: u64) -> f64 {
        let offset = ts.saturating_sub(self.origin) as f64;
        self.left_pad + offset / self.span as f64 * self.chart_width
    }

    pub fn bar(&self, start: u64, end: u64) -> Bar {
        let x = self.x_at(start);
        Bar {
            x,
            width: (self.x_at(end) - x).max(self.min_width),
        }
    }
}

/// One tick per multiple of `step` inside `[start, end]`.
pub fn ticks(start: u64, end: u64, step: u64, scale: &TimeScale) -> Vec<Tick> {
    if step == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut t = start.div_ceil(step) * step;
    while t <= end {
        out.push(Tick {
            seconds: t,
            x: scale.x_at(t),
            label: absolute_time_label(t),
        });
        t += step;
    }
    out
}
