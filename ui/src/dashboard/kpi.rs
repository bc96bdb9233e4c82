//! KPI cards mirroring the most recent scan.

use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::state::{DashboardState, ScanSnapshot};

#[component]
pub fn KpiCards() -> Element {
    let dashboard = use_context::<Signal<DashboardState>>();
    let state = dashboard();
    let scan_count = state.scan_count;

    rsx! {
        div { class: "dash-kpis",
            match state.last_scan.as_ref() {
                Some(snap) => render_scan_cards(snap),
                None => render_placeholder_cards(),
            }

            div { class: "dash-kpi",
                span { class: "dash-kpi__label", "Scans Today" }
                strong { class: "dash-kpi__value", "{scan_count}" }
                span { class: "dash-kpi__meta", "Session total" }
            }
        }
    }
}

fn render_scan_cards(snap: &ScanSnapshot) -> Element {
    let health = format::format_score(snap.health_score);
    let health_meta = format!("dash-kpi__meta {}", snap.health_tier.css_class());
    let risk_name = snap.risk_level.name();
    let risk_pct = format::format_pct(snap.risk_pct);
    let risk_meta = format!("dash-kpi__meta {}", snap.risk_level.css_class());
    let yield_class = if snap.yield_delta.starts_with('+') {
        "dash-kpi__value tier--good"
    } else {
        "dash-kpi__value tier--critical"
    };

    rsx! {
        div { class: "dash-kpi",
            span { class: "dash-kpi__label", "Crop Health Index" }
            strong { class: "dash-kpi__value", "{health}" }
            span { class: "{health_meta}", {snap.health_tier.kpi_label()} }
        }
        div { class: "dash-kpi",
            span { class: "dash-kpi__label", "Bacterial Risk" }
            strong { class: "dash-kpi__value",
                "{risk_name} "
                span { class: "dash-kpi__aside", "{risk_pct}" }
            }
            span { class: "{risk_meta}", {snap.risk_level.advisory()} }
        }
        div { class: "dash-kpi",
            span { class: "dash-kpi__label", "Yield Forecast" }
            strong { class: "{yield_class}",
                "{snap.yield_delta}"
                span { class: "dash-kpi__aside", "%" }
            }
            span { class: "dash-kpi__meta", "vs seasonal baseline" }
        }
    }
}

fn render_placeholder_cards() -> Element {
    rsx! {
        div { class: "dash-kpi",
            span { class: "dash-kpi__label", "Crop Health Index" }
            strong { class: "dash-kpi__value dash-kpi__value--empty", "—" }
            span { class: "dash-kpi__meta", "Awaiting first scan" }
        }
        div { class: "dash-kpi",
            span { class: "dash-kpi__label", "Bacterial Risk" }
            strong { class: "dash-kpi__value dash-kpi__value--empty", "—" }
            span { class: "dash-kpi__meta", "Awaiting first scan" }
        }
        div { class: "dash-kpi",
            span { class: "dash-kpi__label", "Yield Forecast" }
            strong { class: "dash-kpi__value dash-kpi__value--empty", "—" }
            span { class: "dash-kpi__meta", "Awaiting first scan" }
        }
    }
}
