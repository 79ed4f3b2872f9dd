use dioxus::prelude::*;

use crate::components::{DataTable, MetricsChart};
use crate::core::format;
use crate::dashboard::{sample_skills, skills_chart};

#[component]
pub fn Skills() -> Element {
    let skills = sample_skills();
    let chart = skills_chart(&skills);

    let rows: Vec<(String, String)> = skills
        .iter()
        .map(|record| {
            (
                record.skill.clone(),
                format::format_number(record.level_pct, 0),
            )
        })
        .collect();

    rsx! {
        section { class: "page page-skills",
            h1 { "Skill Levels" }

            div { class: "dashboard-card",
                DataTable {
                    label_header: "Skill",
                    value_header: "Level (%)",
                    rows,
                }
            }

            div { class: "dashboard-card",
                MetricsChart { spec: chart }
            }
        }
    }
}
