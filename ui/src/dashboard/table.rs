//! Field status table.

use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::state::{DashboardState, FieldRow};
use crate::diagnose::HealthTier;

#[component]
pub fn FieldTable() -> Element {
    let dashboard = use_context::<Signal<DashboardState>>();
    let rows = dashboard.with(|state| state.fields.clone());

    rsx! {
        section { class: "dash-card dash-fields",
            div { class: "dash-card__header",
                h3 { "Field Status" }
                span { class: "dash-card__meta", "{rows.len()} monitored" }
            }
            table { class: "field-table",
                thead {
                    tr {
                        th { "Field" }
                        th { "Crop" }
                        th { "Health" }
                        th { "Bacterial" }
                        th { "Status" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        {render_row(row)}
                    }
                }
            }
        }
    }
}

fn render_row(row: &FieldRow) -> Element {
    let health_class = HealthTier::from_score(row.health).css_class();
    let bacterial_class = bacterial_class(row.bacterial_pct);

    rsx! {
        tr { key: "{row.id}",
            td { class: "field-table__name",
                "{row.name} "
                span { class: "field-table__id", "{row.id}" }
            }
            td { "{row.crop}" }
            td { class: "field-table__health {health_class}", {format::format_score(row.health)} }
            td { class: "field-table__pct {bacterial_class}", {format::format_pct(row.bacterial_pct)} }
            td {
                span {
                    class: format!("status-pill {}", row.status.css_class()),
                    {row.status.pill_label()}
                }
            }
        }
    }
}

/// Bacterial-load coloring: ≥40 red, ≥20 yellow, else green.
fn bacterial_class(pct: f64) -> &'static str {
    if pct >= 40.0 {
        "pct--high"
    } else if pct >= 20.0 {
        "pct--elevated"
    } else {
        "pct--low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bacterial_thresholds_match_the_source_palette() {
        assert_eq!(bacterial_class(61.0), "pct--high");
        assert_eq!(bacterial_class(40.0), "pct--high");
        assert_eq!(bacterial_class(34.7), "pct--elevated");
        assert_eq!(bacterial_class(20.0), "pct--elevated");
        assert_eq!(bacterial_class(18.4), "pct--low");
        assert_eq!(bacterial_class(1.8), "pct--low");
    }
}
