use dioxus::prelude::*;

use crate::dashboard::{ActivityFeed, FieldTable, HistoryChart, KpiCards};

#[component]
pub fn Dashboard() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {crate::t!("page-dashboard-title")} }
            p { {crate::t!("page-dashboard-intro")} }

            KpiCards {}

            div { class: "page-dashboard__panels",
                HistoryChart {}
                FieldTable {}
            }

            ActivityFeed {}
        }
    }
}
