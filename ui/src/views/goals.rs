use dioxus::prelude::*;

use crate::dashboard::GoalBoard;

/// Personal goals with their completion status, severity-styled, plus the
/// add-goal form. Added goals live on the shared session board only; nothing
/// is persisted across sessions.
#[component]
pub fn Goals() -> Element {
    let mut board = use_context::<Signal<GoalBoard>>();
    let mut draft = use_signal(String::new);
    let mut flash = use_signal(|| Option::<String>::None);

    let on_add = move |_| {
        let description = draft().trim().to_string();
        if description.is_empty() {
            flash.set(Some("Enter a goal first.".to_string()));
            return;
        }
        if board().contains(&description) {
            flash.set(Some(format!("Goal '{description}' is already listed.")));
            return;
        }

        let updated = board().with_goal(&description);
        board.set(updated);
        flash.set(Some(format!("Goal '{description}' added!")));
        draft.set(String::new());
    };

    let current = board();

    rsx! {
        section { class: "page page-goals",
            h1 { "Personal Goals" }

            if current.is_empty() {
                p { class: "goal-board__placeholder", "No goals on the board yet. Add one below." }
            } else {
                ul { class: "goal-board",
                    for entry in current.entries().iter() {
                        li {
                            key: "{entry.description}",
                            class: format!("goal-card {}", entry.status.severity().css_class()),
                            span { class: "goal-card__description", "{entry.description}" }
                            span { class: "goal-card__status", "{entry.status.label()}" }
                        }
                    }
                }
            }

            div { class: "goal-form",
                label { class: "goal-form__field",
                    span { "Add New Goal" }
                    input {
                        r#type: "text",
                        value: "{draft()}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_add,
                    "Add Goal"
                }
            }

            if let Some(message) = flash() {
                p { class: "goal-form__flash", "{message}" }
            }
        }
    }
}
