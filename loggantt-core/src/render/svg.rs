use crate::conf::RenderConfig;
use crate::layout::{ChunkRow, Layout, Reflow, StreamRow};
use crate::render::constants::{
    BAR_CORNER_RADIUS, LABEL_GAP, TICK_BOTTOM_GAP, TICK_LABEL_GAP, TICK_TOP_GAP,
};
use crate::render::escape::escape_html;
use crate::render::tooltip::{chunk_label, chunk_tooltip, stream_tooltip};

pub(crate) fn render_ticks(layout: &Layout<'_>, cfg: &RenderConfig, canvas_height: u32) -> String {
    let top = i64::from(cfg.top_pad);
    let bottom = i64::from(canvas_height) - TICK_BOTTOM_GAP;

    let mut svg = String::new();
    for tick in &layout.ticks {
        svg.push_str(&format!(
            r##"<line class="grid-tick" x1="{x:.2}" y1="{y1}" x2="{x:.2}" y2="{bottom}" stroke="#e5e7eb" stroke-width="1" />"##,
            x = tick.x,
            y1 = top - TICK_TOP_GAP,
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y}" class="tick" text-anchor="middle">{label}</text>"#,
            x = tick.x,
            y = top - TICK_LABEL_GAP,
            label = escape_html(&tick.label),
        ));
        svg.push('\n');
    }
    svg
}

/// Rows in document order, each stream's summary followed by its chunks.
/// Placement comes from `initial`, which must be a reflow of `layout.rows()`.
pub(crate) fn render_rows(layout: &Layout<'_>, cfg: &RenderConfig, initial: &Reflow) -> String {
    let mut svg = String::new();
    let mut offsets = initial.offsets.iter().copied();

    for stream in &layout.streams {
        svg.push_str(&summary_row(stream, cfg, offsets.next().flatten()));
        for chunk in &stream.chunks {
            svg.push_str(&chunk_row(chunk, cfg, offsets.next().flatten()));
        }
    }
    svg
}

fn summary_row(row: &StreamRow<'_>, cfg: &RenderConfig, offset: Option<u32>) -> String {
    let s = &row.summary;
    let stream = escape_html(&s.stream);
    let label = format!("{} ({} chunks)", s.stream, s.chunk_count);

    format!(
        concat!(
            r#"<g class="row summary-row" data-row-type="summary" data-stream="{stream}" "#,
            r#"tabindex="0" role="button" aria-expanded="false"{placement}>"#,
            r#"<text x="{label_x}" y="{text_y}" class="label summary-label" text-anchor="end">{label}</text>"#,
            "{bar}",
            "</g>\n",
        ),
        stream = stream,
        placement = placement(offset),
        label_x = label_x(cfg),
        text_y = text_y(cfg),
        label = escape_html(&label),
        bar = bar_rect(
            row.bar.x,
            row.bar.width,
            cfg,
            cfg.colors.for_status(s.status),
            cfg.summary_opacity,
            &stream_tooltip(row),
        ),
    )
}

fn chunk_row(chunk: &ChunkRow<'_>, cfg: &RenderConfig, offset: Option<u32>) -> String {
    format!(
        concat!(
            r#"<g class="row chunk-row" data-row-type="chunk" data-stream="{stream}" data-chunk="{chunk}"{placement}>"#,
            r#"<text x="{label_x}" y="{text_y}" class="label" text-anchor="end">{label}</text>"#,
            "{bar}",
            "</g>\n",
        ),
        stream = escape_html(&chunk.window.stream),
        chunk = escape_html(&chunk.window.chunk),
        placement = placement(offset),
        label_x = label_x(cfg),
        text_y = text_y(cfg),
        label = escape_html(&chunk_label(chunk)),
        bar = bar_rect(
            chunk.bar.x,
            chunk.bar.width,
            cfg,
            cfg.colors.for_status(chunk.status),
            cfg.detail_opacity,
            &chunk_tooltip(chunk),
        ),
    )
}

fn bar_rect(x: f64, width: f64, cfg: &RenderConfig, fill: &str, opacity: f64, title: &str) -> String {
    format!(
        r#"<rect x="{x:.2}" y="0" width="{width:.2}" height="{h}" rx="{r}" ry="{r}" fill="{fill}" opacity="{opacity}"><title>{title}</title></rect>"#,
        h = cfg.bar_height,
        r = BAR_CORNER_RADIUS,
        fill = escape_html(fill),
        title = escape_html(title),
    )
}

fn placement(offset: Option<u32>) -> String {
    match offset {
        Some(y) => format!(r#" transform="translate(0,{y})""#),
        None => r#" style="display:none""#.to_string(),
    }
}

fn label_x(cfg: &RenderConfig) -> i64 {
    i64::from(cfg.left_pad) - LABEL_GAP
}

fn text_y(cfg: &RenderConfig) -> i64 {
    i64::from(cfg.bar_height) - 1
}
