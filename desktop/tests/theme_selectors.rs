#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the report UI (chart cards,
  selector widgets, error cards) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop builds.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.

A substring presence check is enough as an early warning; parsing the CSS
would add dependencies without catching more.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Report prose & figures
    ".report-section",
    ".report-cover",
    ".report-figure",
    ".report-caption",
    ".report-lede",
    ".report-note",
    ".report-divider",
    // Dataset error cards
    ".report-error",
    ".report-error__lead",
    ".report-error__detail",
    // Chart cards
    ".chart-card",
    ".chart-card__title",
    ".chart-card__plot",
    ".chart-axis-label",
    ".chart-item-label",
    ".chart-tick-label",
    ".chart-axis-title",
    ".chart-segment-label",
    ".chart-bubble-count",
    ".chart-legend-title",
    ".chart-legend-label",
    // Donut pair
    ".donut-pair",
    ".donut-pair__ring",
    ".donut-pair__caption",
    // Selector widgets
    ".year-radio",
    ".year-radio__legend",
    ".year-radio__option",
    ".year-radio__option--active",
    ".select-box",
    ".select-box__label",
    ".select-box__control",
    // Data notes
    ".methods-table",
    ".methods-table__error",
    // Responsive block sanity check
    "@media (max-width: 640px)",
];

#[test]
fn required_selectors_are_present() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|selector| !THEME_CSS.contains(selector))
        .collect();

    assert!(
        missing.is_empty(),
        "theme is missing {} selector(s):\n  {}",
        missing.len(),
        missing.join("\n  ")
    );
}

#[test]
fn navbar_styles_live_in_their_own_sheet() {
    // The navbar ships its own stylesheet (ui/assets/styling/navbar.css); the
    // theme must not grow a competing definition.
    assert!(!THEME_CSS.contains(".navbar {"));

    const NAVBAR_CSS: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ui/assets/styling/navbar.css"
    ));
    for selector in [".navbar {", ".navbar__wordmark", ".navbar__links", ".navbar__link"] {
        assert!(
            NAVBAR_CSS.contains(selector),
            "navbar stylesheet is missing {selector}"
        );
    }
}
