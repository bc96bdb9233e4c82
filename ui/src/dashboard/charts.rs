//! Rolling health-history chart.

use dioxus::prelude::*;

use crate::dashboard::state::DashboardState;

/// Render-ready geometry for one history bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    pub value: u8,
    pub height_pct: f64,
    /// Warm gradient below the risk line, cool above.
    pub at_risk: bool,
    /// Highlight border on the most recent point.
    pub is_latest: bool,
}

/// Recompute bar geometry from the full history, oldest first. The
/// scale never compresses below a 100-point baseline, so a max-health
/// week still reads as a full bar rather than a rescaled one.
pub fn bar_specs(history: &[u8]) -> Vec<BarSpec> {
    let max_val = history.iter().copied().max().unwrap_or(0).max(100) as f64;

    history
        .iter()
        .enumerate()
        .map(|(i, &value)| BarSpec {
            value,
            height_pct: value as f64 / max_val * 100.0,
            at_risk: value < 60,
            is_latest: i + 1 == history.len(),
        })
        .collect()
}

#[component]
pub fn HistoryChart() -> Element {
    let dashboard = use_context::<Signal<DashboardState>>();
    let bars = dashboard.with(|state| bar_specs(&state.history));

    rsx! {
        section { class: "dash-card dash-chart",
            div { class: "dash-card__header",
                h3 { "Field Health Index" }
                span { class: "dash-card__meta", "Rolling 7-scan window" }
            }
            div { class: "chart-container",
                for (i, bar) in bars.iter().enumerate() {
                    div { key: "{i}", class: "chart-bar-wrap",
                        div {
                            class: format!(
                                "chart-bar {} {}",
                                if bar.at_risk { "chart-bar--risk" } else { "chart-bar--ok" },
                                if bar.is_latest { "chart-bar--latest" } else { "" },
                            ),
                            style: "height:{bar.height_pct}%",
                            div { class: "chart-tooltip", "{bar.value}/100" }
                        }
                    }
                }
            }
        }
    }
}
