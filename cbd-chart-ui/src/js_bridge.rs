//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! Chart specs are serialized with serde and spliced into the call as JSON
//! object literals, so no string escaping is involved.

use cbd_chart::bar::BarChartSpec;
use cbd_chart::dual_axis::DualAxisChartSpec;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DUAL_AXIS_CHART_JS: &str = include_str!("../assets/js/dual-axis-chart.js");

/// Global functions promoted to `window.*` once the scripts are evaluated.
const CHART_GLOBALS: [&str; 6] = [
    "escapeHtml",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "renderBarChart",
    "renderDualAxisChart",
];

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CBD JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("[CBD] js_bridge: eval failed: {}", describe(&e));
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope via an
/// indirect `eval()` once D3 is ready, then each function is explicitly
/// promoted to `window.*`. Sets `window.__cbdChartsReady` when done.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, DUAL_AXIS_CHART_JS].join("\n");

    let store_js = format!(
        "window.__cbdChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__cbdChartScripts);
                    delete window.__cbdChartScripts;
                    {promote}
                    window.__cbdChartsReady = true;
                    console.log('[CBD] charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    if let Err(e) = js_sys::eval(&init_js) {
        log::error!("[CBD] js_bridge: chart init failed: {}", describe(&e));
    }
}

/// Poll until the chart scripts are ready and the container exists, then
/// call `window.<function>(container_id, spec)`.
fn render_when_ready(function: &str, container_id: &str, spec_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cbdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {spec_json});
                    }} catch(e) {{ console.error('[CBD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the top-stations bar chart into `container_id`.
pub fn render_bar_chart(container_id: &str, spec: &BarChartSpec) {
    match cbd_chart::to_json(spec) {
        Ok(json) => render_when_ready("renderBarChart", container_id, &json),
        Err(e) => log::error!("[CBD] js_bridge: failed to serialize bar chart: {}", e),
    }
}

/// Render the trips/temperature dual-axis chart into `container_id`.
pub fn render_dual_axis_chart(container_id: &str, spec: &DualAxisChartSpec) {
    match cbd_chart::to_json(spec) {
        Ok(json) => render_when_ready("renderDualAxisChart", container_id, &json),
        Err(e) => log::error!("[CBD] js_bridge: failed to serialize dual-axis chart: {}", e),
    }
}

/// Clear whatever a previous render left in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltips_escape_data_labels() {
        assert!(TOOLTIP_JS.contains("function escapeHtml(text)"));
        assert!(BAR_CHART_JS.contains("escapeHtml(d.label)"));
        assert!(!BAR_CHART_JS.contains("+ d.label +"));
        assert!(DUAL_AXIS_CHART_JS.contains("escapeHtml(r.name)"));
        assert!(!DUAL_AXIS_CHART_JS.contains("+ r.name +"));
    }

    #[test]
    fn test_every_global_is_defined() {
        let all_js = [TOOLTIP_JS, BAR_CHART_JS, DUAL_AXIS_CHART_JS].join("\n");
        for name in CHART_GLOBALS {
            assert!(all_js.contains(&format!("function {}(", name)), "{} missing", name);
        }
    }
}
