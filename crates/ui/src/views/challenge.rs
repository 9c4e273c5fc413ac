use std::sync::Arc;

use dioxus::prelude::*;

use lesson_core::Catalog;
use lesson_core::model::{SideId, SpotId};

use crate::context::AppContext;
use crate::vm::{ChallengeStage, HuntProgress, ShapeFeedback, WRONG_FEEDBACK_CLEAR, toggle_side};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Everything the challenge phase can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeIntent {
    SelectSide(SideId),
    CheckAnswer,
    NextShape,
    FindSpot(SpotId),
    Finish,
}

#[component]
pub fn ChallengeView(on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let shape_count = catalog.shapes.len();
    let spot_count = catalog.hunt_spots.len();

    let mut stage = use_signal(|| ChallengeStage::Shapes);
    let mut shape_index = use_signal(|| 0_usize);
    let mut selection = use_signal(Vec::<SideId>::new);
    let mut feedback = use_signal(|| ShapeFeedback::None);
    let mut hunt = use_signal(HuntProgress::new);

    let catalog_for_dispatch = Arc::clone(&catalog);
    let dispatch = use_callback(move |intent: ChallengeIntent| match intent {
        ChallengeIntent::SelectSide(id) => {
            // The solved overlay swallows further clicks.
            if feedback() == ShapeFeedback::Correct {
                return;
            }
            selection.set(toggle_side(&selection(), id));
            feedback.set(ShapeFeedback::None);
        }
        ChallengeIntent::CheckAnswer => {
            let picked = selection();
            if picked.len() != 2 {
                return;
            }
            let shape = &catalog_for_dispatch.shapes[shape_index()];
            if shape.is_parallel_pair(picked[0], picked[1]) {
                feedback.set(ShapeFeedback::Correct);
            } else {
                feedback.set(ShapeFeedback::Wrong);
                // Auto-clear after a beat, unless the learner moved on or
                // already changed the selection.
                let shape_at_fire = shape_index();
                spawn(async move {
                    tokio::time::sleep(WRONG_FEEDBACK_CLEAR).await;
                    if feedback() == ShapeFeedback::Wrong && shape_index() == shape_at_fire {
                        feedback.set(ShapeFeedback::None);
                        selection.set(Vec::new());
                    }
                });
            }
        }
        ChallengeIntent::NextShape => {
            if feedback() != ShapeFeedback::Correct {
                return;
            }
            if shape_index() + 1 < shape_count {
                shape_index.set(shape_index() + 1);
                selection.set(Vec::new());
                feedback.set(ShapeFeedback::None);
            } else {
                stage.set(ChallengeStage::Hunt);
            }
        }
        ChallengeIntent::FindSpot(id) => hunt.with_mut(|h| h.mark_found(id)),
        ChallengeIntent::Finish => {
            if hunt().all_found(spot_count) {
                on_complete.call(());
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ChallengeTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    rsx! {
        div { class: "page challenge-page",
            match stage() {
                ChallengeStage::Shapes => rsx! {
                    ShapeDetective {
                        catalog: Arc::clone(&catalog),
                        shape_index: shape_index(),
                        selection: selection(),
                        feedback: feedback(),
                        dispatch,
                    }
                },
                ChallengeStage::Hunt => rsx! {
                    SceneHunt { hunt: hunt(), spot_count, dispatch }
                },
            }
        }
    }
}

#[derive(Props, Clone)]
struct ShapeDetectiveProps {
    catalog: Arc<Catalog>,
    shape_index: usize,
    selection: Vec<SideId>,
    feedback: ShapeFeedback,
    dispatch: Callback<ChallengeIntent>,
}

impl PartialEq for ShapeDetectiveProps {
    fn eq(&self, other: &Self) -> bool {
        self.shape_index == other.shape_index
            && self.selection == other.selection
            && self.feedback == other.feedback
    }
}

#[component]
fn ShapeDetective(props: ShapeDetectiveProps) -> Element {
    let ShapeDetectiveProps {
        catalog,
        shape_index,
        selection,
        feedback,
        dispatch,
    } = props;
    let shape = &catalog.shapes[shape_index];
    let shape_count = catalog.shapes.len();
    let last_shape = shape_index + 1 == shape_count;

    let outline = shape
        .sides
        .iter()
        .map(|side| format!("{},{}", side.from.x, side.from.y))
        .collect::<Vec<_>>()
        .join(" ");

    let side_nodes = shape.sides.iter().map(|side| {
        let id = side.id;
        let selected = selection.contains(&id);
        let mid_x = (side.from.x + side.to.x) / 2.0;
        let mid_y = (side.from.y + side.to.y) / 2.0;
        rsx! {
            g {
                class: "shape-side",
                onclick: move |_| dispatch.call(ChallengeIntent::SelectSide(id)),
                line {
                    x1: "{side.from.x}",
                    y1: "{side.from.y}",
                    x2: "{side.to.x}",
                    y2: "{side.to.y}",
                    class: "side-hit",
                }
                line {
                    x1: "{side.from.x}",
                    y1: "{side.from.y}",
                    x2: "{side.to.x}",
                    y2: "{side.to.y}",
                    class: if selected { "side-line side-line--selected" } else { "side-line" },
                }
                if selected {
                    circle { cx: "{mid_x}", cy: "{mid_y}", r: "6", class: "side-dot" }
                }
            }
        }
    });

    rsx! {
        div { class: "view-header",
            h2 { class: "view-title", "🔍 Shape Detective" }
            p { class: "view-subtitle", "{shape.instruction}" }
            p { class: "view-hint", "Click on 2 lines to select them." }
        }
        div { class: "shape-card",
            div { class: "selection-badge", "Selected: {selection.len()}/2" }
            svg {
                class: "shape-canvas",
                view_box: "0 0 {shape.view_box.width} {shape.view_box.height}",
                polygon { points: "{outline}", class: "shape-fill" }
                {side_nodes}
            }
            if feedback == ShapeFeedback::Correct {
                div { class: "shape-overlay",
                    div { class: "shape-overlay-card", "✓ Correct!" }
                }
            }
            if feedback == ShapeFeedback::Wrong {
                div { class: "shape-wrong-banner", "Oops! Those lines are not parallel." }
            }
        }
        div { class: "step-actions",
            if feedback == ShapeFeedback::Correct {
                button {
                    class: "btn btn-success btn-lg",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ChallengeIntent::NextShape),
                    if last_shape { "Start the Hunt! →" } else { "Next Shape →" }
                }
            } else {
                button {
                    class: if selection.len() == 2 { "btn btn-primary btn-lg" } else { "btn btn-secondary btn-lg" },
                    r#type: "button",
                    disabled: selection.len() != 2,
                    onclick: move |_| dispatch.call(ChallengeIntent::CheckAnswer),
                    "Check Answer"
                }
            }
        }
        div { class: "shape-dots",
            for idx in 0..shape_count {
                div { class: if idx == shape_index { "shape-dot shape-dot--current" } else { "shape-dot" } }
            }
        }
    }
}

#[component]
fn SceneHunt(hunt: HuntProgress, spot_count: usize, dispatch: Callback<ChallengeIntent>) -> Element {
    let all_found = hunt.all_found(spot_count);
    rsx! {
        div { class: "view-header",
            h2 { class: "view-title", "Parallel Hunt" }
            p { class: "view-subtitle",
                "There are {spot_count} items with parallel lines in this room."
            }
            p { class: "view-hint view-hint--accent", "Click on them when you find them!" }
        }
        div { class: "hunt-frame",
            svg { class: "hunt-room", view_box: "0 0 800 500",
                rect { width: "800", height: "400", fill: "#fdfbf7" }
                rect { y: "400", width: "800", height: "100", fill: "#d1d5db" }

                // Window with blinds
                g {
                    class: if hunt.is_found(1) { "hunt-spot hunt-spot--found" } else { "hunt-spot" },
                    onclick: move |_| dispatch.call(ChallengeIntent::FindSpot(1)),
                    rect {
                        x: "100",
                        y: "80",
                        width: "200",
                        height: "220",
                        fill: "#bfdbfe",
                        stroke: "#1e3a8a",
                        stroke_width: "6",
                        rx: "4",
                    }
                    for y in (0..8).map(|i| 100 + i * 22) {
                        rect {
                            x: "110",
                            y: "{y}",
                            width: "180",
                            height: "12",
                            rx: "2",
                            fill: if hunt.is_found(1) { "#dcfce7" } else { "white" },
                            stroke: "#9ca3af",
                            stroke_width: "1",
                        }
                    }
                    if hunt.is_found(1) {
                        g { transform: "translate(280, 60)",
                            circle { r: "20", fill: "#10b981" }
                            path {
                                d: "M-8,0 L-2,6 L8,-6",
                                stroke: "white",
                                stroke_width: "4",
                                fill: "none",
                            }
                        }
                    }
                }

                // Bookshelf
                g {
                    class: if hunt.is_found(2) { "hunt-spot hunt-spot--found" } else { "hunt-spot" },
                    onclick: move |_| dispatch.call(ChallengeIntent::FindSpot(2)),
                    rect { x: "600", y: "150", width: "140", height: "250", fill: "#78350f", rx: "4" }
                    rect { x: "610", y: "160", width: "120", height: "230", fill: "#451a03" }
                    for (shelf_y, tall_y, taller_y, short_y) in
                        [220, 280, 340].map(|y| (y, y - 30, y - 35, y - 25))
                    {
                        g {
                            rect {
                                x: "615",
                                y: "{shelf_y}",
                                width: "110",
                                height: "8",
                                fill: if hunt.is_found(2) { "#bbf7d0" } else { "#a8a29e" },
                            }
                            rect { x: "625", y: "{tall_y}", width: "10", height: "30", fill: "#ef4444" }
                            rect { x: "638", y: "{taller_y}", width: "12", height: "35", fill: "#3b82f6" }
                            rect { x: "652", y: "{short_y}", width: "8", height: "25", fill: "#10b981" }
                        }
                    }
                    if hunt.is_found(2) {
                        g { transform: "translate(730, 140)",
                            circle { r: "20", fill: "#10b981" }
                            path {
                                d: "M-8,0 L-2,6 L8,-6",
                                stroke: "white",
                                stroke_width: "4",
                                fill: "none",
                            }
                        }
                    }
                }

                // Striped rug
                g { transform: "translate(350, 420) skewX(-40)",
                    g {
                        class: if hunt.is_found(3) { "hunt-spot hunt-spot--found" } else { "hunt-spot" },
                        onclick: move |_| dispatch.call(ChallengeIntent::FindSpot(3)),
                        rect {
                            width: "200",
                            height: "60",
                            fill: "#fca5a5",
                            rx: "4",
                            stroke: "#991b1b",
                            stroke_width: "2",
                        }
                        for x in [10, 30, 50, 70, 90, 110, 130, 150, 170, 190] {
                            rect {
                                x: "{x}",
                                y: "0",
                                width: "10",
                                height: "60",
                                fill: if hunt.is_found(3) { "#15803d" } else { "#b91c1c" },
                                opacity: "0.6",
                            }
                        }
                    }
                }
                if hunt.is_found(3) {
                    g { transform: "translate(450, 450)",
                        circle { r: "20", fill: "#10b981" }
                        path {
                            d: "M-8,0 L-2,6 L8,-6",
                            stroke: "white",
                            stroke_width: "4",
                            fill: "none",
                        }
                    }
                }
            }
            div { class: "hunt-badge", "Found: {hunt.found_count()} / {spot_count}" }
        }
        div { class: "step-actions",
            if all_found {
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ChallengeIntent::Finish),
                    "Take the Quiz! →"
                }
            } else {
                p { class: "hunt-hint", "Hint: Look for things with straight lines!" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ChallengeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ChallengeIntent>>>>,
}

#[cfg(test)]
impl ChallengeTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ChallengeIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<ChallengeIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }
}
