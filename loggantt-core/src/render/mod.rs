//! Chart Rendering
//!
//! Emits one self-contained HTML page: inline CSS, an inline SVG Gantt chart
//! and a small inline script for the expand/collapse interaction. The page
//! fetches nothing at view time.
//!
//! Rows are laid out on the server for the collapsed state, so the chart is
//! correct before the script runs. The script then repeats the same reflow
//! walk on every toggle.

mod constants;
mod document;
mod error;
mod escape;
mod script;
mod svg;
mod tooltip;
mod write;


pub use document::render_html;
pub use error::RenderError;
pub use escape::escape_html;
pub use tooltip::{chunk_tooltip, stream_tooltip};
pub use write::write_document;
