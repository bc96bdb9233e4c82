use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::timing;
use ui::dashboard::DashboardState;
use ui::views::{Dashboard, Diagnose, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/diagnose")]
    Diagnose {},
    #[route("/dashboard")]
    Dashboard {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_diagnose(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Diagnose {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register the localized navigation builder.
        register_nav(NavBuilder {
            home: nav_home,
            diagnose: nav_diagnose,
            dashboard: nav_dashboard,
        });
    }

    // Single dashboard state for the whole session, injected for the
    // diagnosis coroutine (writer) and the dashboard surfaces (readers).
    let mut dashboard_state = use_context_provider(|| Signal::new(DashboardState::seeded()));
    use_hook(move || {
        dashboard_state.with_mut(|dash| {
            dash.log_activity(
                "AgriGuard AI initialized · Satellite sync active",
                &timing::clock_now(),
            );
        });
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
