use dioxus::events::FormEvent;
use dioxus::prelude::*;

use crate::core::profile::{Course, Profile, Year, AGE_MAX, AGE_MIN};

/// Sidebar card capturing the student profile. Writes go straight to the
/// shared profile signal so the footer summary re-renders with each edit.
#[component]
pub fn ProfilePanel(mut profile: Signal<Profile>) -> Element {
    let current = profile();

    let on_name = move |evt: FormEvent| {
        profile.with_mut(|p| p.name = evt.value());
    };

    let on_age = move |evt: FormEvent| {
        // The widget already bounds the range; clamp again so a typed value
        // outside it can't slip through.
        if let Ok(age) = evt.value().parse::<u8>() {
            profile.with_mut(|p| p.age = age.clamp(AGE_MIN, AGE_MAX));
        }
    };

    let on_course = move |evt: FormEvent| {
        if let Some(course) = Course::parse(&evt.value()) {
            profile.with_mut(|p| p.course = course);
        }
    };

    let on_year = move |evt: FormEvent| {
        if let Some(year) = Year::parse(&evt.value()) {
            profile.with_mut(|p| p.year = year);
        }
    };

    rsx! {
        aside { class: "profile-panel",
            h2 { class: "profile-panel__title", "Student Profile" }

            label { class: "profile-panel__field",
                span { "Student Name" }
                input {
                    r#type: "text",
                    value: "{current.name}",
                    oninput: on_name,
                }
            }

            label { class: "profile-panel__field",
                span { "Age" }
                input {
                    r#type: "number",
                    min: "{AGE_MIN}",
                    max: "{AGE_MAX}",
                    value: "{current.age}",
                    oninput: on_age,
                }
            }

            label { class: "profile-panel__field",
                span { "Course" }
                select {
                    value: "{current.course.label()}",
                    oninput: on_course,
                    for course in Course::ALL {
                        option { key: "{course.label()}", value: "{course.label()}", "{course.label()}" }
                    }
                }
            }

            label { class: "profile-panel__field",
                span { "Year" }
                select {
                    value: "{current.year.label()}",
                    oninput: on_year,
                    for year in Year::ALL {
                        option { key: "{year.label()}", value: "{year.label()}", "{year.label()}" }
                    }
                }
            }
        }
    }
}
