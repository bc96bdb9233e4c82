use dioxus::prelude::*;

use crate::t;

/// Marketing hero for the landing page: headline, pitch, and the stat
/// strip sales likes to quote.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            p { class: "hero__eyebrow", {t!("hero-eyebrow")} }
            h1 { class: "hero__headline", {t!("hero-headline")} }
            p { class: "hero__pitch", {t!("hero-pitch")} }

            ul { class: "hero__stats",
                li { class: "hero__stat",
                    strong { "99.2%" }
                    span { {t!("hero-stat-accuracy")} }
                }
                li { class: "hero__stat",
                    strong { "< 4s" }
                    span { {t!("hero-stat-speed")} }
                }
                li { class: "hero__stat",
                    strong { "40+" }
                    span { {t!("hero-stat-pathogens")} }
                }
            }
        }
    }
}
