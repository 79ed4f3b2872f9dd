#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, ProfilePanel, SummaryFooter};
use ui::core::profile::Profile;
use ui::dashboard::{sample_goals, sample_subjects, DashboardSummary};
use ui::views::{Academics, Attendance, Goals, Skills};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Academics {},
    #[route("/attendance")]
    Attendance {},
    #[route("/skills")]
    Skills {},
    #[route("/goals")]
    Goals {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Markbook – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_academics(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Academics {}, "{label}" })
}
fn nav_attendance(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Attendance {}, "{label}" })
}
fn nav_skills(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Skills {}, "{label}" })
}
fn nav_goals(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Goals {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Session-scoped shared state, same shape as the web shell.
    let profile = use_signal(Profile::default);
    use_context_provider(|| profile);
    let goals = use_signal(sample_goals);
    use_context_provider(|| goals);

    register_nav(NavBuilder {
        academics: nav_academics,
        attendance: nav_attendance,
        skills: nav_skills,
        goals: nav_goals,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop shell layout around the routed views, mirroring the web shell.
#[component]
fn DesktopShell() -> Element {
    let profile = use_context::<Signal<Profile>>();
    let summary = DashboardSummary::from_subjects(&sample_subjects());

    rsx! {
        AppNavbar { }

        div { class: "dashboard-shell",
            ProfilePanel { profile }
            main { class: "dashboard-shell__content",
                Outlet::<Route> {}
            }
        }

        SummaryFooter { profile: profile(), summary }
    }
}
