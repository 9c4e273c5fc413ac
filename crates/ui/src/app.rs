use chrono::Datelike;
use dioxus::document;
use dioxus::html::input_data::keyboard_types::Modifiers;
use dioxus::prelude::*;

use lesson_core::APP_TITLE;
use lesson_core::model::{LessonProgress, Phase};

use crate::views::{AssessmentView, ChallengeView, DiscoveryView, ExplorationView, ProgressBar};

/// Application root: owns the phase progression, renders exactly one phase
/// view at a time and advances when that view reports completion. Phase
/// views receive nothing mutable; they only signal upwards.
#[component]
pub fn App() -> Element {
    let mut progress = use_signal(LessonProgress::new);

    let complete_phase = use_callback(move |phase: Phase| {
        progress.with_mut(|p| p.advance(phase));
        scroll_to_top();
    });

    let restart = use_callback(move |()| {
        progress.with_mut(LessonProgress::restart);
        scroll_to_top();
    });

    let current = progress.read().current();
    let year = chrono::Local::now().year();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{APP_TITLE}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                header { class: "app-header",
                    div { class: "logo-tile", "▱" }
                    h1 {
                        class: "app-title",
                        onclick: move |evt: MouseEvent| {
                            // Shift+click skips ahead; plain clicks do nothing.
                            if evt.modifiers().contains(Modifiers::SHIFT) {
                                progress.with_mut(LessonProgress::skip_forward);
                            }
                        },
                        "{APP_TITLE}"
                    }
                }
                ProgressBar { progress: progress.read().clone() }
                main { class: "content",
                    div { class: "phase-panel",
                        match current {
                            Phase::Discovery => rsx! {
                                DiscoveryView { on_complete: move |()| complete_phase.call(Phase::Discovery) }
                            },
                            Phase::Exploration => rsx! {
                                ExplorationView { on_complete: move |()| complete_phase.call(Phase::Exploration) }
                            },
                            Phase::Challenge => rsx! {
                                ChallengeView { on_complete: move |()| complete_phase.call(Phase::Challenge) }
                            },
                            Phase::Assessment => rsx! {
                                AssessmentView { on_restart: move |()| restart.call(()) }
                            },
                        }
                    }
                }
                footer { class: "app-footer",
                    p { "© {year} Parallel Pals Learning" }
                }
            }
        }
    }
}

/// Viewport reset on phase transitions. Purely presentational; a no-op when
/// the webview has nothing to scroll.
fn scroll_to_top() {
    let _ = document::eval("window.scrollTo(0, 0);");
}
