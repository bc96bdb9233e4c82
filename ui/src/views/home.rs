use dioxus::prelude::*;

use crate::core::timing;
use crate::dashboard::DashboardState;
use crate::Hero;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we
    // re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        section { class: "page page-home",
            Hero {}

            div { class: "page-home__features",
                h2 { {crate::t!("home-features-title")} }
                ul {
                    li { {crate::t!("home-feature-scan")} }
                    li { {crate::t!("home-feature-dashboard")} }
                    li { {crate::t!("home-feature-alerts")} }
                }
                p { class: "page-home__cta", {crate::t!("home-cta")} }
            }

            DemoRequestForm {}
        }
    }
}

/// Demo-access form. Nothing is sent anywhere: the "send" is a fixed
/// delay, then a success panel plus an activity-log entry, which is
/// exactly as much backend as the rest of the page has.
#[component]
fn DemoRequestForm() -> Element {
    let mut dashboard = use_context::<Signal<DashboardState>>();
    let mut email = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let submitted = use_signal(|| Option::<String>::None);

    let on_submit = {
        let mut submitted = submitted.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let address = email().trim().to_string();
            if address.is_empty() || sending() {
                return;
            }
            sending.set(true);
            spawn(async move {
                timing::sleep_ms(1500).await;
                dashboard.with_mut(|dash| {
                    dash.log_activity(format!("Demo requested: {address}"), &timing::clock_now());
                });
                submitted.set(Some(address));
                sending.set(false);
            });
        }
    };

    let button_label = if sending() {
        crate::t!("demo-sending")
    } else {
        crate::t!("demo-button")
    };

    rsx! {
        section { class: "demo-request",
            match submitted() {
                Some(address) => rsx! {
                    div { class: "demo-request__success",
                        h3 { {crate::t!("demo-success-title")} }
                        p { {crate::t!("demo-success-body", email = address)} }
                    }
                },
                None => rsx! {
                    h3 { {crate::t!("demo-title")} }
                    p { class: "demo-request__sub", {crate::t!("demo-sub")} }
                    form { class: "demo-request__form", onsubmit: on_submit,
                        input {
                            r#type: "email",
                            required: true,
                            placeholder: crate::t!("demo-placeholder"),
                            value: "{email()}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "button--primary",
                            disabled: sending(),
                            "{button_label}"
                        }
                    }
                },
            }
        }
    }
}
