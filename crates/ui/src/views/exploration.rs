use dioxus::prelude::*;
use rand::Rng;

use lesson_core::geometry::Point;

use crate::vm::{
    DrawAttempt, DrawOutcome, ExplorationActivity, ROTATION_MAX, ROTATION_MIN, ROTATION_START,
    StrokeCheck, check_stroke, is_aligned,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Drawing surface dimensions, in surface units (1:1 with pixels).
const SURFACE_W: f64 = 640.0;
const SURFACE_H: f64 = 320.0;
const GRID_STEP: usize = 32;
const REFERENCE_LEN: f64 = 150.0;

/// Everything the exploration phase can do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExplorationIntent {
    SetRotation(i32),
    ToggleDistance,
    NextActivity,
    StrokeStart(Point),
    StrokeMove(Point),
    StrokeEnd,
    ClearDrawing,
    Finish,
}

#[component]
pub fn ExplorationView(on_complete: EventHandler<()>) -> Element {
    let mut activity = use_signal(|| ExplorationActivity::Rotate);
    let mut rotation = use_signal(|| ROTATION_START);
    let mut show_distance = use_signal(|| false);

    let mut drawing = use_signal(|| false);
    let mut attempt = use_signal(|| None::<DrawAttempt>);
    let mut outcome = use_signal(|| DrawOutcome::None);
    // One reference line per phase instance, drawn once.
    let target_angle = use_signal(|| rand::rng().random_range(-30.0_f64..30.0));

    let dispatch = use_callback(move |intent: ExplorationIntent| match intent {
        ExplorationIntent::SetRotation(value) => {
            rotation.set(value.clamp(ROTATION_MIN, ROTATION_MAX));
        }
        ExplorationIntent::ToggleDistance => show_distance.set(!show_distance()),
        ExplorationIntent::NextActivity => match activity() {
            ExplorationActivity::Rotate if is_aligned(rotation()) => {
                activity.set(ExplorationActivity::Distance);
            }
            ExplorationActivity::Distance if show_distance() => {
                activity.set(ExplorationActivity::Draw);
            }
            _ => {}
        },
        ExplorationIntent::StrokeStart(at) => {
            drawing.set(true);
            attempt.set(Some(DrawAttempt::begin(at)));
            outcome.set(DrawOutcome::None);
        }
        ExplorationIntent::StrokeMove(at) => {
            if drawing() {
                if let Some(mut current) = attempt() {
                    current.current = at;
                    attempt.set(Some(current));
                }
            }
        }
        ExplorationIntent::StrokeEnd => {
            if !drawing() {
                return;
            }
            drawing.set(false);
            if let Some(stroke) = attempt() {
                match check_stroke(stroke, target_angle()) {
                    // Accidental click: drop the stroke, keep the outcome.
                    StrokeCheck::TooShort => attempt.set(None),
                    StrokeCheck::Success => outcome.set(DrawOutcome::Success),
                    StrokeCheck::Fail => outcome.set(DrawOutcome::Fail),
                }
            }
        }
        ExplorationIntent::ClearDrawing => {
            drawing.set(false);
            attempt.set(None);
            outcome.set(DrawOutcome::None);
        }
        ExplorationIntent::Finish => {
            if outcome() == DrawOutcome::Success {
                on_complete.call(());
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ExplorationTestHandles>() {
                handles.register(dispatch, target_angle);
            }
        }
    }

    rsx! {
        div { class: "page exploration-page",
            match activity() {
                ExplorationActivity::Rotate => rsx! {
                    RotationTool { rotation: rotation(), dispatch }
                },
                ExplorationActivity::Distance => rsx! {
                    DistanceTool { show_distance: show_distance(), dispatch }
                },
                ExplorationActivity::Draw => rsx! {
                    DrawingTool {
                        attempt: attempt(),
                        outcome: outcome(),
                        target_angle: target_angle(),
                        dispatch,
                    }
                },
            }
        }
    }
}

#[component]
fn RotationTool(rotation: i32, dispatch: Callback<ExplorationIntent>) -> Element {
    let aligned = is_aligned(rotation);
    rsx! {
        div { class: "view-header",
            h2 { class: "view-title", "Make them Parallel!" }
            p { class: "view-subtitle",
                "Use the slider to turn the red line until it matches the blue one."
            }
        }
        div { class: "rotation-stage",
            div { class: "rotation-line rotation-line--fixed" }
            div {
                class: if aligned { "rotation-line rotation-line--movable rotation-line--aligned" } else { "rotation-line rotation-line--movable" },
                style: "transform: rotate({rotation}deg);",
            }
            if aligned {
                div { class: "rotation-banner", span { "PARALLEL!" } }
            }
        }
        div { class: "rotation-controls",
            input {
                class: "rotation-slider",
                r#type: "range",
                min: "{ROTATION_MIN}",
                max: "{ROTATION_MAX}",
                value: "{rotation}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<i32>() {
                        dispatch.call(ExplorationIntent::SetRotation(value));
                    }
                },
            }
            div { class: "rotation-scale",
                span { "Tilt Left" }
                span { "Straight" }
                span { "Tilt Right" }
            }
        }
        div { class: "step-actions",
            if aligned {
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ExplorationIntent::NextActivity),
                    "Next Activity →"
                }
            }
        }
    }
}

#[component]
fn DistanceTool(show_distance: bool, dispatch: Callback<ExplorationIntent>) -> Element {
    rsx! {
        div { class: "view-header",
            h2 { class: "view-title", "The Distance Rule" }
            p { class: "view-subtitle",
                "Click the button to measure the distance between the lines."
            }
        }
        div { class: "distance-stage",
            div { class: "distance-line" }
            div { class: "distance-ticks",
                for _ in 0..3 {
                    div { class: if show_distance { "distance-tick distance-tick--visible" } else { "distance-tick" },
                        if show_distance {
                            span { class: "distance-value", "10cm" }
                        }
                    }
                }
            }
            div { class: "distance-line" }
        }
        div { class: "step-actions step-actions--column",
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| dispatch.call(ExplorationIntent::ToggleDistance),
                if show_distance { "Hide Measures" } else { "Check Distance" }
            }
            if show_distance {
                div { class: "distance-callout",
                    p { class: "distance-callout-title", "It's always the same!" }
                    p { "Parallel lines stay the same distance apart." }
                }
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ExplorationIntent::NextActivity),
                    "Next: Draw it yourself! →"
                }
            }
        }
    }
}

#[component]
fn DrawingTool(
    attempt: Option<DrawAttempt>,
    outcome: DrawOutcome,
    target_angle: f64,
    dispatch: Callback<ExplorationIntent>,
) -> Element {
    // Reference line through the upper third of the surface.
    let rad = target_angle.to_radians();
    let (cx, cy) = (SURFACE_W / 2.0, SURFACE_H / 3.0);
    let (dx, dy) = (rad.cos() * REFERENCE_LEN / 2.0, rad.sin() * REFERENCE_LEN / 2.0);
    let (ref_x1, ref_y1) = (cx - dx, cy - dy);
    let (ref_x2, ref_y2) = (cx + dx, cy + dy);

    let stroke_class = match outcome {
        DrawOutcome::None => "user-stroke",
        DrawOutcome::Success => "user-stroke user-stroke--success",
        DrawOutcome::Fail => "user-stroke user-stroke--fail",
    };

    rsx! {
        div { class: "view-header",
            h2 { class: "view-title", "Your Turn to Draw!" }
            p { class: "view-subtitle",
                "Draw a line parallel to the blue one. Click and drag on the grid."
            }
        }
        div { class: "draw-frame",
            svg {
                class: "draw-surface",
                width: "{SURFACE_W}",
                height: "{SURFACE_H}",
                view_box: "0 0 {SURFACE_W} {SURFACE_H}",
                onpointerdown: move |evt| {
                    let at = evt.element_coordinates();
                    dispatch.call(ExplorationIntent::StrokeStart(Point::new(at.x, at.y)));
                },
                onpointermove: move |evt| {
                    let at = evt.element_coordinates();
                    dispatch.call(ExplorationIntent::StrokeMove(Point::new(at.x, at.y)));
                },
                onpointerup: move |_| dispatch.call(ExplorationIntent::StrokeEnd),
                onpointerleave: move |_| dispatch.call(ExplorationIntent::StrokeEnd),
                for x in (0..=SURFACE_W as usize).step_by(GRID_STEP) {
                    line {
                        x1: "{x}",
                        y1: "0",
                        x2: "{x}",
                        y2: "{SURFACE_H}",
                        class: "grid-line",
                    }
                }
                for y in (0..=SURFACE_H as usize).step_by(GRID_STEP) {
                    line {
                        x1: "0",
                        y1: "{y}",
                        x2: "{SURFACE_W}",
                        y2: "{y}",
                        class: "grid-line",
                    }
                }
                line {
                    x1: "{ref_x1}",
                    y1: "{ref_y1}",
                    x2: "{ref_x2}",
                    y2: "{ref_y2}",
                    class: "reference-line",
                }
                if let Some(stroke) = attempt {
                    line {
                        x1: "{stroke.start.x}",
                        y1: "{stroke.start.y}",
                        x2: "{stroke.current.x}",
                        y2: "{stroke.current.y}",
                        class: stroke_class,
                    }
                }
            }
            match outcome {
                DrawOutcome::Success => rsx! {
                    div { class: "draw-banner draw-banner--success", "Great Job! That's parallel!" }
                },
                DrawOutcome::Fail => rsx! {
                    div { class: "draw-banner draw-banner--fail", "Not quite. Try again!" }
                },
                DrawOutcome::None => rsx! {},
            }
            button {
                class: "draw-reset",
                r#type: "button",
                title: "Clear",
                onclick: move |_| dispatch.call(ExplorationIntent::ClearDrawing),
                "↻"
            }
        }
        div { class: "step-actions",
            if outcome == DrawOutcome::Success {
                button {
                    class: "btn btn-primary btn-lg",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ExplorationIntent::Finish),
                    "I'm ready for Challenges! →"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ExplorationTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ExplorationIntent>>>>,
    target_angle: Rc<RefCell<Option<Signal<f64>>>>,
}

#[cfg(test)]
impl ExplorationTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ExplorationIntent>, target_angle: Signal<f64>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.target_angle.borrow_mut() = Some(target_angle);
    }

    pub(crate) fn dispatch(&self) -> Callback<ExplorationIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }

    pub(crate) fn target_angle(&self) -> f64 {
        let signal = self
            .target_angle
            .borrow()
            .as_ref()
            .copied()
            .expect("angle registered");
        signal()
    }
}
