use dioxus::prelude::*;

/// Two-column data table used by the Academics, Attendance, and Skills views.
#[component]
pub fn DataTable(
    label_header: String,
    value_header: String,
    rows: Vec<(String, String)>,
) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { scope: "col", "{label_header}" }
                    th { scope: "col", "{value_header}" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td { class: "data-table__placeholder", colspan: "2", "No rows yet." }
                    }
                } else {
                    for (label, value) in rows.iter() {
                        tr { key: "{label}",
                            td { "{label}" }
                            td { class: "data-table__value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
