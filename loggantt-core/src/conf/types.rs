use crate::conf::error::ConfigError;
use crate::layout::Status;
use serde::{Deserialize, Serialize};

/// Geometry and colors of the rendered chart. Every field has a default, so
/// a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Width of the label column left of the chart, in pixels.
    pub left_pad: u32,
    pub right_pad: u32,
    /// Space above the first row, holding the tick labels.
    pub top_pad: u32,
    pub row_height: u32,
    pub bar_height: u32,
    pub chart_width: u32,
    pub bottom_margin: u32,
    pub tick_step_secs: u64,
    /// Narrowest bar drawn, so zero-length windows stay clickable.
    pub min_bar_width: f64,
    pub summary_opacity: f64,
    pub detail_opacity: f64,
    pub colors: StatusColors,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            left_pad: 260,
            right_pad: 32,
            top_pad: 52,
            row_height: 24,
            bar_height: 14,
            chart_width: 1400,
            bottom_margin: 64,
            tick_step_secs: 3600,
            min_bar_width: 2.0,
            summary_opacity: 0.86,
            detail_opacity: 0.58,
            colors: StatusColors::default(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("row_height", self.row_height),
            ("bar_height", self.bar_height),
            ("chart_width", self.chart_width),
        ] {
            if value == 0 {
                return Err(ConfigError::invalid(field, "must be greater than zero"));
            }
        }
        if self.tick_step_secs == 0 {
            return Err(ConfigError::invalid(
                "tick_step_secs",
                "must be greater than zero",
            ));
        }
        if self.bar_height > self.row_height {
            return Err(ConfigError::invalid(
                "bar_height",
                format!("{} exceeds row_height {}", self.bar_height, self.row_height),
            ));
        }
        for (field, value) in [
            ("summary_opacity", self.summary_opacity),
            ("detail_opacity", self.detail_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, format!("{value} is outside 0..=1")));
            }
        }
        if !(self.min_bar_width >= 0.0 && self.min_bar_width.is_finite()) {
            return Err(ConfigError::invalid(
                "min_bar_width",
                "must be a finite, non-negative number",
            ));
        }
        Ok(())
    }

    pub fn svg_width(&self) -> u32 {
        self.left_pad + self.chart_width + self.right_pad
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusColors {
    pub error: String,
    pub complete: String,
    pub running: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            error: "#dc2626".to_string(),
            complete: "#16a34a".to_string(),
            running: "#6b7280".to_string(),
        }
    }
}

impl StatusColors {
    pub fn for_status(&self, status: Status) -> &str {
        match status {
            Status::Error => &self.error,
            Status::Complete => &self.complete,
            Status::Running => &self.running,
        }
    }
}
