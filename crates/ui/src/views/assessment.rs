use std::sync::Arc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizVm, ScoreTier};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Everything the assessment quiz can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Answer(usize),
    NextQuestion,
    Restart,
}

#[component]
pub fn AssessmentView(on_restart: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let total = catalog.questions.len();

    let mut quiz = use_signal(QuizVm::new);

    let catalog_for_dispatch = Arc::clone(&catalog);
    let dispatch = use_callback(move |intent: AssessmentIntent| match intent {
        AssessmentIntent::Answer(option_index) => {
            let index = quiz.read().question_index();
            let question = &catalog_for_dispatch.questions[index];
            quiz.with_mut(|vm| vm.answer(option_index, question));
        }
        AssessmentIntent::NextQuestion => quiz.with_mut(|vm| vm.next_question(total)),
        AssessmentIntent::Restart => on_restart.call(()),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm = quiz();

    if vm.is_complete() {
        let tier = ScoreTier::for_score(vm.score(), total);
        return rsx! {
            div { class: "page assessment-page assessment-page--complete",
                div { class: "score-award", "🏆" }
                h2 { class: tier.title_class(), "{tier.message()}" }
                p { class: "score-summary", "You got {vm.score()} out of {total} correct!" }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| dispatch.call(AssessmentIntent::Restart),
                    "↺ Start Lesson Again"
                }
            }
        };
    }

    let question = &catalog.questions[vm.question_index()];
    let feedback_shown = vm.is_feedback_shown();
    let selected = vm.selected_option();
    let answered_correctly = selected == Some(question.correct_index);
    let question_number = vm.question_index() + 1;
    let progress_percent = vm.question_index() as f64 / total as f64 * 100.0;

    let option_nodes = question.options.iter().enumerate().map(|(idx, option)| {
        let class = if feedback_shown {
            if idx == question.correct_index {
                "quiz-option quiz-option--correct"
            } else if selected == Some(idx) {
                "quiz-option quiz-option--wrong"
            } else {
                "quiz-option quiz-option--dimmed"
            }
        } else {
            "quiz-option"
        };
        let correct_mark = feedback_shown && idx == question.correct_index;
        let wrong_mark = feedback_shown && selected == Some(idx) && idx != question.correct_index;
        rsx! {
            button {
                class,
                r#type: "button",
                disabled: feedback_shown,
                onclick: move |_| dispatch.call(AssessmentIntent::Answer(idx)),
                span { "{option}" }
                if correct_mark {
                    span { class: "quiz-option-mark", "✓" }
                }
                if wrong_mark {
                    span { class: "quiz-option-mark", "✗" }
                }
            }
        }
    });

    rsx! {
        div { class: "page assessment-page",
            div { class: "quiz-status",
                span { "Question {question_number} of {total}" }
                span { "Score: {vm.score()}" }
            }
            div { class: "quiz-progress",
                div { class: "quiz-progress-fill", style: "width: {progress_percent}%;" }
            }
            div { class: "quiz-card",
                h2 { class: "quiz-prompt", "{question.prompt}" }
                div { class: "quiz-options", {option_nodes} }
                if feedback_shown {
                    div { class: "quiz-feedback",
                        p { class: if answered_correctly { "quiz-verdict quiz-verdict--correct" } else { "quiz-verdict quiz-verdict--wrong" },
                            strong {
                                if answered_correctly { "Correct! " } else { "Not quite. " }
                            }
                            "{question.explanation}"
                        }
                        div { class: "quiz-feedback-actions",
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(AssessmentIntent::NextQuestion),
                                "Next Question"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AssessmentIntent>>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<AssessmentIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<AssessmentIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }
}
