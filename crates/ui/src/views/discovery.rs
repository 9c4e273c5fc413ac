use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::illustrations::gallery_art;
use crate::vm::{
    DiscoveryStep, GROWTH_DONE_DELAY, GROWTH_START_DELAY, GrowthStage, next_gallery_index,
    prev_gallery_index,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Everything the discovery phase can do, driven by clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoveryIntent {
    PrevImage,
    NextImage,
    StartGrowth,
    ShowCompare,
    ToggleIntersection,
    Finish,
}

#[component]
pub fn DiscoveryView(on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let gallery_len = catalog.gallery.len();

    let mut step = use_signal(|| DiscoveryStep::Gallery);
    let mut gallery_index = use_signal(|| 0_usize);
    let mut growth_stage = use_signal(|| GrowthStage::Initial);
    let mut show_intersection = use_signal(|| false);

    let dispatch = use_callback(move |intent: DiscoveryIntent| match intent {
        DiscoveryIntent::PrevImage => {
            gallery_index.set(prev_gallery_index(gallery_index(), gallery_len));
        }
        DiscoveryIntent::NextImage => {
            gallery_index.set(next_gallery_index(gallery_index(), gallery_len));
        }
        DiscoveryIntent::StartGrowth => {
            step.set(DiscoveryStep::Growth);
            // Two-stage one-shot timer; each set re-checks the state it
            // owns so a superseded task is a no-op.
            spawn(async move {
                tokio::time::sleep(GROWTH_START_DELAY).await;
                if step() == DiscoveryStep::Growth && growth_stage() == GrowthStage::Initial {
                    growth_stage.set(GrowthStage::Growing);
                }
                tokio::time::sleep(GROWTH_DONE_DELAY - GROWTH_START_DELAY).await;
                if step() == DiscoveryStep::Growth && growth_stage() == GrowthStage::Growing {
                    growth_stage.set(GrowthStage::Done);
                }
            });
        }
        DiscoveryIntent::ShowCompare => step.set(DiscoveryStep::Compare),
        DiscoveryIntent::ToggleIntersection => show_intersection.set(!show_intersection()),
        DiscoveryIntent::Finish => on_complete.call(()),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DiscoveryTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    // The wrap helpers keep the index in bounds for the validated catalog.
    let item = &catalog.gallery[gallery_index()];

    rsx! {
        div { class: "page discovery-page",
            match step() {
                DiscoveryStep::Gallery => rsx! {
                    div { class: "view-header",
                        h2 { class: "view-title", "Do you see a pattern?" }
                        p { class: "view-subtitle", "Use the arrows to look at these pictures." }
                    }
                    div { class: "gallery-frame",
                        {gallery_art(item.art)}
                        div { class: "gallery-caption",
                            p { class: "gallery-label", "{item.label}" }
                            p { class: "gallery-description", "{item.description}" }
                        }
                        button {
                            class: "gallery-nav gallery-nav--prev",
                            r#type: "button",
                            onclick: move |_| dispatch.call(DiscoveryIntent::PrevImage),
                            "←"
                        }
                        button {
                            class: "gallery-nav gallery-nav--next",
                            r#type: "button",
                            onclick: move |_| dispatch.call(DiscoveryIntent::NextImage),
                            "→"
                        }
                        div { class: "gallery-dots",
                            for idx in 0..gallery_len {
                                div {
                                    class: if idx == gallery_index() { "gallery-dot gallery-dot--current" } else { "gallery-dot" },
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary btn-lg",
                        r#type: "button",
                        onclick: move |_| dispatch.call(DiscoveryIntent::StartGrowth),
                        "What are they? →"
                    }
                },
                DiscoveryStep::Growth => rsx! {
                    div { class: "view-header",
                        h2 { class: "view-title", "Parallel Lines Never Meet!" }
                        p { class: "view-subtitle",
                            "Watch what happens when we make these lines longer. Do they ever touch?"
                        }
                    }
                    div { class: "growth-stage",
                        div { class: "growth-row",
                            div {
                                class: if growth_stage() == GrowthStage::Initial { "grow-line" } else { "grow-line grow-line--extended" },
                            }
                        }
                        div { class: "growth-row",
                            div {
                                class: if growth_stage() == GrowthStage::Initial { "grow-line" } else { "grow-line grow-line--extended" },
                            }
                        }
                        if growth_stage() == GrowthStage::Done {
                            div { class: "growth-overlay",
                                div { class: "growth-card",
                                    p { class: "growth-message", "They go on forever!" }
                                }
                            }
                        }
                    }
                    div { class: "step-actions",
                        if growth_stage() == GrowthStage::Done {
                            button {
                                class: "btn btn-success btn-lg",
                                r#type: "button",
                                onclick: move |_| dispatch.call(DiscoveryIntent::ShowCompare),
                                "See what is NOT parallel →"
                            }
                        }
                    }
                },
                DiscoveryStep::Compare => rsx! {
                    div { class: "view-header",
                        h2 { class: "view-title", "Parallel vs Not Parallel" }
                    }
                    div { class: "compare-grid",
                        div { class: "compare-card compare-card--parallel",
                            div { class: "compare-lines",
                                div { class: "compare-line compare-line--green" }
                                div { class: "compare-line compare-line--green" }
                            }
                            p { class: "compare-verdict compare-verdict--parallel", "✓ PARALLEL" }
                            p { class: "compare-note", "Never touch, like train tracks." }
                        }
                        div { class: "compare-card compare-card--intersecting",
                            div { class: "compare-lines compare-lines--crossable",
                                div {
                                    class: if show_intersection() { "compare-line compare-line--red compare-line--tilt-down" } else { "compare-line compare-line--red compare-line--upper" },
                                }
                                div {
                                    class: if show_intersection() { "compare-line compare-line--red compare-line--tilt-up" } else { "compare-line compare-line--red compare-line--lower" },
                                }
                            }
                            button {
                                class: "compare-toggle",
                                r#type: "button",
                                onclick: move |_| dispatch.call(DiscoveryIntent::ToggleIntersection),
                                if show_intersection() { "✗ INTERSECTING" } else { "Click to Cross!" }
                            }
                            p { class: "compare-note", "They meet at a point!" }
                        }
                    }
                    div { class: "definition-card",
                        h3 { class: "definition-heading", "Definition" }
                        p { class: "definition-text",
                            "\"Parallel lines go in the same direction and never touch.\""
                        }
                    }
                    button {
                        class: "btn btn-primary btn-lg",
                        r#type: "button",
                        onclick: move |_| dispatch.call(DiscoveryIntent::Finish),
                        "I Understand! Let's Explore →"
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DiscoveryTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DiscoveryIntent>>>>,
}

#[cfg(test)]
impl DiscoveryTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DiscoveryIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<DiscoveryIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }
}
