#![cfg(test)]
//! Ensures the embedded desktop CSS (shared unified theme) remains present & non-trivial.
//!
//! The desktop build embeds the shared theme from `ui/assets/theme/main.css`;
//! an accidental truncation or path break would only degrade styling at
//! runtime. This test fails early if the unified theme goes missing or is
//! blank. If you intentionally relocate the theme, update both this test and
//! the `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_theme_is_present_and_nontrivial() {
    let trimmed = EMBEDDED_CSS.trim();
    assert!(!trimmed.is_empty(), "embedded theme CSS is empty");
    assert!(
        trimmed.len() > 2_000,
        "embedded theme CSS is suspiciously small ({} bytes)",
        trimmed.len()
    );
    assert!(
        trimmed.contains(":root"),
        "embedded theme CSS lost its token block"
    );
}
