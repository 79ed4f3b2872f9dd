use dioxus::prelude::*;
use time::{macros::format_description, OffsetDateTime};

use crate::core::profile::Profile;
use crate::dashboard::DashboardSummary;

/// Footer summary: the captured profile fields next to the derived averages,
/// plus the static load confirmation banner.
#[component]
pub fn SummaryFooter(profile: Profile, summary: DashboardSummary) -> Element {
    let loaded_at = loaded_stamp();

    rsx! {
        footer { class: "summary-footer",
            h2 { class: "summary-footer__title", "Student Summary" }

            dl { class: "summary-footer__fields",
                div { class: "summary-footer__field",
                    dt { "Name" }
                    dd { "{profile.name}" }
                }
                div { class: "summary-footer__field",
                    dt { "Age" }
                    dd { "{profile.age}" }
                }
                div { class: "summary-footer__field",
                    dt { "Course" }
                    dd { "{profile.course.label()}" }
                }
                div { class: "summary-footer__field",
                    dt { "Year" }
                    dd { "{profile.year.label()}" }
                }
                div { class: "summary-footer__field",
                    dt { "Average Marks" }
                    dd { "{summary.marks_display()}" }
                }
                div { class: "summary-footer__field",
                    dt { "Average Attendance" }
                    dd { "{summary.attendance_display()}" }
                }
            }

            p { class: "summary-footer__banner",
                span { "Dashboard Loaded Successfully" }
                span { class: "summary-footer__stamp", "{loaded_at}" }
            }
        }
    }
}

fn loaded_stamp() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year]-[month]-[day] [hour]:[minute] UTC"
        ))
        .unwrap_or_else(|_| "—".to_string())
}
