#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the dashboard
  shell, tables, charts, goal cards, and the footer summary) remain present in
  the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for charts, goal cards, and summary rows).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".dashboard-shell",
    ".dashboard-shell__content",
    ".dashboard-card",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    // Profile sidebar
    ".profile-panel",
    ".profile-panel__title",
    ".profile-panel__field",
    // Data tables
    ".data-table",
    ".data-table__value",
    ".data-table__placeholder",
    // Charts
    ".metrics-chart",
    ".metrics-chart__title",
    ".metrics-chart__canvas",
    ".metrics-chart__bar",
    ".metrics-chart__line",
    ".metrics-chart__marker",
    ".metrics-chart__gridline",
    ".metrics-chart__tick-label",
    ".metrics-chart__axis-label",
    ".metrics-chart--empty",
    // Metric highlights
    ".metric-highlight",
    ".metric-highlight__label",
    ".metric-highlight__value",
    // Goal board
    ".goal-board",
    ".goal-card",
    ".goal-card--success",
    ".goal-card--warning",
    ".goal-card--error",
    ".goal-form",
    ".goal-form__flash",
    // Footer summary
    ".summary-footer",
    ".summary-footer__fields",
    ".summary-footer__banner",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn goal_severity_classes_stay_paired() {
    // Goal cards rely on all three traffic-light variants existing together.
    let success = THEME_CSS.contains(".goal-card--success");
    let warning = THEME_CSS.contains(".goal-card--warning");
    let error = THEME_CSS.contains(".goal-card--error");
    assert!(
        success && warning && error,
        "Goal severity variants missing (success: {success}, warning: {warning}, error: {error})"
    );
}
