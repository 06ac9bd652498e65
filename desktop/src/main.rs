#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::data::DataStore;
use ui::views::{Methods, Report};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Report {},
    #[route("/methods")]
    Methods {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Wildscope – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn nav_report(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Report {}, "{label}" })
}
fn nav_methods(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Methods {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Register platform navigation links.
    register_nav(NavBuilder {
        report: nav_report,
        methods: nav_methods,
    });

    // One data store per process; a broken bundle is reported before first
    // paint and the affected sections render their error cards.
    let store = use_context_provider(DataStore::new);
    if let Err(err) = store.warm() {
        error!(%err, "survey data bundle failed to load");
    }

    rsx! {
        // Global app resources
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
