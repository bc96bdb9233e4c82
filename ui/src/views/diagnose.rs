use dioxus::prelude::*;

use crate::diagnose::DiagnosePanel;

#[component]
pub fn Diagnose() -> Element {
    // Re-render immediately when the locale changes elsewhere.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node retains the reactive dependency on the
        // language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-diagnose",
            h1 { {crate::t!("page-diagnose-title")} }
            p { {crate::t!("page-diagnose-intro")} }
            DiagnosePanel {}
        }
    }
}
