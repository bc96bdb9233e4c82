//! Activity feed: newest entries first, bounded by the state cap.

use dioxus::prelude::*;

use crate::dashboard::state::DashboardState;

#[component]
pub fn ActivityFeed() -> Element {
    let dashboard = use_context::<Signal<DashboardState>>();
    let entries = dashboard.with(|state| state.activity.clone());

    rsx! {
        section { class: "dash-card dash-activity",
            div { class: "dash-card__header",
                h3 { "Activity Log" }
            }

            if entries.is_empty() {
                p { class: "dash-card__placeholder", "System events will appear here." }
            } else {
                ul { class: "activity-feed",
                    for entry in entries.iter() {
                        li { key: "{entry.id}", class: "activity-feed__entry",
                            span { class: "activity-feed__dot", aria_hidden: "true" }
                            div {
                                p { class: "activity-feed__message", "{entry.message}" }
                                p { class: "activity-feed__stamp", "{entry.stamp}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
