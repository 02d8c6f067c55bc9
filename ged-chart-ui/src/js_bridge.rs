//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes figures and calls those globals.

use ged_data::figure::{ChartKind, Figure};

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static BOX_PLOT_JS: &str = include_str!("../assets/js/box-plot.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Global renderer names promoted to `window` once D3 is available.
const RENDERERS: [&str; 6] = [
    "renderBarChart",
    "renderBoxPlot",
    "renderPieChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GED JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
pub fn escape_js_arg(payload: &str) -> String {
    payload
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Name of the `window.*` function that draws `kind`.
pub fn renderer_for(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "renderBarChart",
        ChartKind::Box => "renderBoxPlot",
        ChartKind::Pie => "renderPieChart",
    }
}

/// Build the one-shot init script.
///
/// The chart scripts are assigned to `window` only after the init guard, so
/// later calls neither re-store them nor leave copies behind.
fn init_script() -> Option<String> {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, BOX_PLOT_JS, PIE_CHART_JS].join("\n");
    let scripts = match serde_json::to_string(&all_js) {
        Ok(scripts) => scripts,
        Err(e) => {
            log::error!("[GED] failed to encode chart scripts: {}", e);
            return None;
        }
    };

    let promote = RENDERERS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};"))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        r#"
        (function() {{
            if (window.__gedChartsReady || window.__gedChartsInit) return;
            window.__gedChartsInit = true;
            window.__gedChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__gedChartScripts);
                    delete window.__gedChartScripts;
                    {promote}
                    window.__gedChartsReady = true;
                    console.log('GED charts initialized');
                }}
            }}, 100);
        }})();
        "#
    ))
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Once D3 has loaded the scripts are evaluated at global scope via an
/// indirect eval and each renderer is promoted to `window.*`. Safe to call
/// more than once.
pub fn init_charts() {
    if let Some(init_js) = init_script() {
        let _ = js_sys::eval(&init_js);
    }
}

/// Call `window.<renderer>(container_id, data, config)` once D3, the chart
/// scripts and the container element are all available.
fn render_when_ready(renderer: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_arg(data_json);
    let escaped_config = escape_js_arg(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gedChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GED] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a figure into the container with the given DOM id.
pub fn render_figure(container_id: &str, figure: &Figure) {
    let (data_json, config_json) = match (figure.data_json(), figure.config_json()) {
        (Ok(data), Ok(config)) => (data, config),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("[GED] failed to serialize '{}': {}", figure.title, e);
            return;
        }
    };
    log::debug!(
        "[GED] rendering {:?} '{}' ({} points) into #{}",
        figure.kind,
        figure.title,
        figure.points.len(),
        container_id
    );
    render_when_ready(renderer_for(figure.kind), container_id, &data_json, &config_json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_quotes_and_newlines() {
        assert_eq!(
            escape_js_arg("[{\"label\":\"KOTA 'RAJA'\"}]\n"),
            "[{\"label\":\"KOTA \\'RAJA\\'\"}]"
        );
    }

    #[test]
    fn escape_doubles_backslashes_first() {
        assert_eq!(escape_js_arg(r#"a\"b"#), r#"a\\"b"#);
    }

    #[test]
    fn every_kind_has_a_promoted_renderer() {
        for kind in [ChartKind::Bar, ChartKind::Box, ChartKind::Pie] {
            assert!(RENDERERS.contains(&renderer_for(kind)));
        }
    }

    #[test]
    fn scripts_are_stored_only_past_the_init_guard() {
        let js = init_script().unwrap();
        let guard = js.find("window.__gedChartsInit = true;").unwrap();
        let store = js.find("window.__gedChartScripts =").unwrap();
        let early_return = js.find("return;").unwrap();
        assert!(early_return < guard);
        assert!(guard < store);
        assert_eq!(js.matches("window.__gedChartScripts =").count(), 1);
        assert!(js.contains("delete window.__gedChartScripts;"));
    }
}
