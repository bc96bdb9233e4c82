#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the scan
  panel, report, and dashboard surfaces in particular) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) builds.

How it works:
- The unified theme is embedded with `include_str!` pointing at the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- Presence of a curated set of selectors / tokens is asserted.
- When intentionally renaming or removing a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.

A substring presence check is sufficient as an early warning; parsing the
CSS properly would add dependencies for no extra safety.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (charts, tables, report gauges, etc).
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
    // Buttons & shared UI
    ".button--primary",
    ".button--ghost",
    ".visually-hidden",
    // Hero & home
    ".hero__headline",
    ".demo-request__form",
    // Scan panel
    ".drop-zone",
    ".drop-zone--over",
    ".sample-row__button",
    ".scan-line",
    ".scan-loading__bar",
    // Report
    ".scan-report__gauges",
    ".scan-report__bar-fill",
    ".tier--good",
    ".tier--critical",
    ".risk--moderate",
    ".advice--urgent",
    // Dashboard
    ".dash-kpi__value",
    ".chart-container",
    ".chart-bar--risk",
    ".chart-bar--latest",
    ".chart-tooltip",
    ".field-table",
    ".status-pill",
    ".status-critical",
    ".activity-feed__entry",
];

#[test]
fn required_selectors_are_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Theme is missing required selector(s): {missing:?}"
    );
}

#[test]
fn theme_defines_the_core_palette_tokens() {
    for token in ["--color-forest", "--color-amber", "--color-red", "--color-accent"] {
        assert!(
            THEME_CSS.contains(token),
            "Palette token `{token}` missing from theme"
        );
    }
}
