use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, ProfilePanel, SummaryFooter};
use ui::core::profile::Profile;
use ui::dashboard::{sample_goals, sample_subjects, DashboardSummary};
use ui::views::{Academics, Attendance, Goals, Skills};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Academics {},
    #[route("/attendance")]
    Attendance {},
    #[route("/skills")]
    Skills {},
    #[route("/goals")]
    Goals {},
}

fn nav_academics(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Academics {},
        "{label}"
    })
}
fn nav_attendance(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Attendance {},
        "{label}"
    })
}
fn nav_skills(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Skills {},
        "{label}"
    })
}
fn nav_goals(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Goals {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Session-scoped shared state: the captured profile and the goal board.
    // Neither outlives the page; reloads start from the sample data again.
    let profile = use_signal(Profile::default);
    use_context_provider(|| profile);
    let goals = use_signal(sample_goals);
    use_context_provider(|| goals);

    // Register the navigation builder so the shared navbar can render links
    // without knowing this crate's Route enum.
    register_nav(NavBuilder {
        academics: nav_academics,
        attendance: nav_attendance,
        skills: nav_skills,
        goals: nav_goals,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web shell layout: navbar on top, profile sidebar beside the routed view,
/// summary footer underneath.
#[component]
fn WebShell() -> Element {
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
