//! Application navbar shared by the web and desktop builds.
//!
//! Platforms register a [`NavBuilder`] providing fully constructed `Link`
//! elements, so `ui` does not need to know each platform's `Route` enum:
//!
//! 1. Define functions returning `Link { to: Route::..., class:
//!    "navbar__link", "{label}" }` in the platform crate.
//! 2. Call [`register_nav`] before rendering the root.
//! 3. Render `AppNavbar {}` inside the layout.
//!
//! If no builder is registered, the navbar renders the brand block alone.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

pub struct NavBuilder {
    // Each closure returns a Link whose child is exactly the label passed in.
    pub report: fn(label: &str) -> Element,
    pub methods: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let report = (builder.report)("Report");
        let methods = (builder.methods)("Data & methods");

        rsx! {
            nav { class: "navbar__links",
                {report}
                {methods}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        // Also inline the stylesheet so packaged desktop builds style the
        // navbar without a resource lookup.
        document::Style { "{NAVBAR_CSS_INLINE}" }

        header { class: "navbar",
            div { class: "navbar__brand",
                span { class: "navbar__wordmark", "Wildscope" }
                span { class: "navbar__tagline", "State of Conservation Technology 2020–2022" }
            }
            if let Some(nav) = internal_nav {
                {nav}
            }
        }
    }
}
