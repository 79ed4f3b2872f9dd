use dioxus::prelude::*;

use crate::components::{DataTable, MetricsChart};
use crate::core::format;
use crate::dashboard::{marks_chart, sample_subjects, DashboardSummary};

#[cfg(debug_assertions)]
fn log_academics_render(rows: usize) {
    // Lightweight render trace for diagnosing stale-signal issues.
    println!("[dashboard] Academics render (rows={rows})");
}

#[component]
pub fn Academics() -> Element {
    let subjects = sample_subjects();
    let summary = DashboardSummary::from_subjects(&subjects);
    let chart = marks_chart(&subjects);

    #[cfg(debug_assertions)]
    {
        log_academics_render(subjects.len());
    }

    let rows: Vec<(String, String)> = subjects
        .iter()
        .map(|record| {
            (
                record.subject.clone(),
                format::format_number(record.marks, 0),
            )
        })
        .collect();

    rsx! {
        section { class: "page page-academics",
            h1 { "Subject-wise Marks" }

            div { class: "dashboard-card",
                DataTable {
                    label_header: "Subject",
                    value_header: "Marks",
                    rows,
                }
            }

            div { class: "dashboard-card",
                MetricsChart { spec: chart }
            }

            div { class: "metric-highlight",
                span { class: "metric-highlight__label", "Average Marks" }
                strong { class: "metric-highlight__value", "{summary.marks_display()}" }
            }
        }
    }
}
