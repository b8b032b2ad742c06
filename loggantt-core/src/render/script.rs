use crate::layout::RowMetrics;
use crate::render::constants::TICK_BOTTOM_GAP;
use crate::render::error::RenderError;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptParams {
    top_pad: u32,
    row_height: u32,
    bottom_margin: u32,
    tick_bottom_gap: i64,
}

const PARAMS_PLACEHOLDER: &str = "__LOGGANTT_PARAMS__";

// `reflow` below is the browser-side twin of `layout::reflow`.
const SCRIPT_TEMPLATE: &str = r#"(() => {
  const params = __LOGGANTT_PARAMS__;
  const svg = document.getElementById("gantt");
  const rows = Array.from(svg.querySelectorAll(".row"));
  let expandedStream = null;

  function reflow(expanded) {
    let y = params.topPad;
    const offsets = rows.map((row) => {
      const visible =
        row.dataset.rowType === "summary" ||
        (expanded !== null && row.dataset.stream === expanded);
      if (!visible) {
        return null;
      }
      const at = y;
      y += params.rowHeight;
      return at;
    });
    return { offsets, canvasHeight: y + params.bottomMargin };
  }

  function layoutRows() {
    const { offsets, canvasHeight } = reflow(expandedStream);
    rows.forEach((row, i) => {
      const y = offsets[i];
      const isSummary = row.dataset.rowType === "summary";
      const active = isSummary && row.dataset.stream === expandedStream;
      row.style.display = y === null ? "none" : "";
      row.classList.toggle("active", active);
      if (isSummary) {
        row.setAttribute("aria-expanded", String(active));
      }
      if (y !== null) {
        row.setAttribute("transform", `translate(0,${y})`);
      }
    });

    svg.setAttribute("height", String(canvasHeight));
    svg.querySelectorAll(".grid-tick").forEach((line) => {
      line.setAttribute("y2", String(canvasHeight - params.tickBottomGap));
    });
  }

  function toggleStream(stream) {
    expandedStream = expandedStream === stream ? null : stream;
    layoutRows();
  }

  rows
    .filter((row) => row.dataset.rowType === "summary")
    .forEach((row) => {
      row.addEventListener("click", () => toggleStream(row.dataset.stream));
      row.addEventListener("keydown", (evt) => {
        if (evt.key === "Enter" || evt.key === " ") {
          evt.preventDefault();
          toggleStream(row.dataset.stream);
        }
      });
    });

  layoutRows();
})();
"#;

pub(crate) fn render_script(metrics: RowMetrics) -> Result<String, RenderError> {
    let params = serde_json::to_string(&ScriptParams {
        top_pad: metrics.top_pad,
        row_height: metrics.row_height,
        bottom_margin: metrics.bottom_margin,
        tick_bottom_gap: TICK_BOTTOM_GAP,
    })?;

    Ok(SCRIPT_TEMPLATE.replace(PARAMS_PLACEHOLDER, &params))
}
