use dioxus::prelude::*;
use lesson_core::model::LessonProgress;

use crate::vm::map_progress_steps;

/// Read-only projection of the lesson progression: one circle + label per
/// phase, styled active / completed / locked.
#[component]
pub fn ProgressBar(progress: LessonProgress) -> Element {
    let steps = map_progress_steps(&progress);
    rsx! {
        div { class: "progress-bar",
            div { class: "progress-steps",
                for step in steps {
                    div { class: "progress-step",
                        div { class: step.circle_class(), span { "{step.glyph()}" } }
                        span { class: step.label_class(), "{step.label}" }
                    }
                }
            }
        }
    }
}
