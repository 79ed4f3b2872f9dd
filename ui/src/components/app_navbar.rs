use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet, shared by every platform shell.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// If a builder is registered, `AppNavbar` renders the dashboard tabs from
/// it; otherwise it falls back to any raw `children` passed by the caller.
///
/// Wiring steps for a platform crate (web/desktop):
/// 1. Define one function per tab returning a
///    `Link { to: Route::..., class: "navbar__link", "{label}" }`.
/// 2. Call `ui::components::app_navbar::register_nav(builder)` before
///    rendering the root (e.g. at top of `App()`).
/// 3. Use `AppNavbar {}` with no manual nav link children.
pub struct NavBuilder {
    // Each closure returns a Link (or element styled as a nav link) whose
    // children are exactly the label string passed in.
    pub academics: fn(label: &str) -> Element,
    pub attendance: fn(label: &str) -> Element,
    pub skills: fn(label: &str) -> Element,
    pub goals: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    // Build the internal tab nav if a NavBuilder is registered.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let academics = (builder.academics)("Academics");
        let attendance = (builder.attendance)("Attendance");
        let skills = (builder.skills)("Skills");
        let goals = (builder.goals)("Goals");

        rsx! {
            nav { class: "navbar__links",
                {academics}
                {attendance}
                {skills}
                {goals}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        // Include the shared navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Markbook" }
                    }
                    span { class: "navbar__brand-subtitle", "Student development dashboard" }
                }

                // Navigation (internal builder or legacy children)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
