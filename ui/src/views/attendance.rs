use dioxus::prelude::*;

use crate::components::{DataTable, MetricsChart};
use crate::core::format;
use crate::dashboard::{attendance_chart, sample_subjects, DashboardSummary};

#[component]
pub fn Attendance() -> Element {
    let subjects = sample_subjects();
    let summary = DashboardSummary::from_subjects(&subjects);
    let chart = attendance_chart(&subjects);

    let rows: Vec<(String, String)> = subjects
        .iter()
        .map(|record| {
            (
                record.subject.clone(),
                format::format_number(record.attendance_pct, 0),
            )
        })
        .collect();

    rsx! {
        section { class: "page page-attendance",
            h1 { "Attendance Percentage" }

            div { class: "dashboard-card",
                DataTable {
                    label_header: "Subject",
                    value_header: "Attendance %",
                    rows,
                }
            }

            div { class: "dashboard-card",
                MetricsChart { spec: chart }
            }

            div { class: "metric-highlight",
                span { class: "metric-highlight__label", "Average Attendance" }
                strong { class: "metric-highlight__value", "{summary.attendance_display()}" }
            }
        }
    }
}
