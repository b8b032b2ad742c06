use crate::conf::RenderConfig;
use crate::layout::{Layout, absolute_time_label, duration_label};
use crate::render::error::RenderError;
use crate::render::escape::escape_html;
use crate::render::script::render_script;
use crate::render::svg::{render_rows, render_ticks};
use crate::timeline::TimelineModel;

const STYLE: &str = r#"    body { font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; margin: 16px; color: #0f172a; }
    h1 { font-size: 1.1rem; margin: 0 0 10px; }
    .meta { margin: 0 0 14px; color: #475569; font-size: .92rem; }
    .chart-wrap { border: 1px solid #e2e8f0; border-radius: 8px; padding: 12px; overflow-x: auto; background: #fff; }
    svg { min-width: __SVG_WIDTH__px; }
    .tick { font-size: 10px; fill: #64748b; }
    .label { font-size: 11px; fill: #1f2937; }
    .summary-row { cursor: pointer; }
    .summary-row:focus { outline: none; }
    .summary-label { font-weight: 600; }
    .summary-row.active .summary-label { fill: #0f172a; text-decoration: underline; }
"#;

/// Builds the complete page. Pure: nothing is written here.
pub fn render_html(
    model: &TimelineModel,
    layout: &Layout<'_>,
    cfg: &RenderConfig,
    title: &str,
) -> Result<String, RenderError> {
    let initial = layout.reflow(None);
    let width = cfg.svg_width();
    let title = escape_html(title);

    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!doctype html>\n");
    html.push_str("<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n");
    html.push_str(&format!("  <title>{title}</title>\n"));
    html.push_str("  <style>\n");
    html.push_str(&STYLE.replace("__SVG_WIDTH__", &width.to_string()));
    html.push_str("  </style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("  <h1>{title}</h1>\n"));
    html.push_str(&format!(
        "  <p class=\"meta\">{}</p>\n",
        escape_html(&meta_line(model, layout))
    ));

    html.push_str("  <div class=\"chart-wrap\">\n");
    html.push_str(&format!(
        "    <svg id=\"gantt\" width=\"{width}\" height=\"{}\" role=\"img\" aria-label=\"Chunk Gantt chart\">\n",
        initial.canvas_height
    ));
    html.push_str("      <rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    html.push_str(&render_ticks(layout, cfg, initial.canvas_height));
    html.push_str(&render_rows(layout, cfg, &initial));
    html.push_str("    </svg>\n");
    html.push_str("  </div>\n");

    html.push_str("  <script>\n");
    html.push_str(&render_script(layout.metrics)?);
    html.push_str("  </script>\n");
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn meta_line(model: &TimelineModel, layout: &Layout<'_>) -> String {
    format!(
        "Collapsed: 1 bar per stream. Click a stream bar to expand its chunks. \
         Total chunks: {} | Total rows: {} | Timeline: {} to {} ({})",
        layout.chunk_count(),
        model.total_rows(),
        absolute_time_label(model.timeline_start()),
        absolute_time_label(model.timeline_end()),
        duration_label(model.span().max(1)),
    )
}
