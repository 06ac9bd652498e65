use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::data::DataStore;
use ui::views::{Methods, Report};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Report {},
    #[route("/methods")]
    Methods {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");

// Embedded shared theme (ui/assets/theme/main.css); keeps web and desktop on
// one stylesheet source.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_report(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Report {},
        "{label}"
    })
}
fn nav_methods(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Methods {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Register platform navigation and provide the shared data store. Every
    // session gets its own selector signals; the store itself is read-only.
    register_nav(NavBuilder {
        report: nav_report,
        methods: nav_methods,
    });
    use_context_provider(DataStore::new);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

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
