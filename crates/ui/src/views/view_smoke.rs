use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use lesson_core::geometry::Point;
use lesson_core::model::{LessonProgress, Phase};

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness};
use super::{
    AssessmentIntent, ChallengeIntent, DiscoveryIntent, ExplorationIntent, ProgressBar,
};

/// Drive until the rendered HTML satisfies `pred`, or panic after a bounded
/// number of virtual-time steps.
async fn drive_until(harness: &mut ViewHarness, pred: impl Fn(&str) -> bool) -> String {
    for _ in 0..200 {
        let html = harness.render();
        if pred(&html) {
            return html;
        }
        harness.drive_async().await;
    }
    panic!("condition not reached; last render:\n{}", harness.render());
}

#[tokio::test(flavor = "current_thread")]
async fn discovery_gallery_cycles_in_both_directions() {
    let mut harness = setup_view_harness(ViewKind::Discovery);
    let html = harness.render();
    assert!(html.contains("Do you see a pattern?"), "missing title in {html}");
    assert!(html.contains("Train Tracks"), "missing first item in {html}");

    let dispatch = harness.discovery.dispatch();
    dispatch.call(DiscoveryIntent::PrevImage);
    harness.drive();
    assert!(harness.render().contains("Zebra Crossing"), "previous should wrap");

    dispatch.call(DiscoveryIntent::NextImage);
    harness.drive();
    assert!(harness.render().contains("Train Tracks"), "next should wrap back");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn discovery_growth_animation_reaches_done_and_phase_completes() {
    let mut harness = setup_view_harness(ViewKind::Discovery);
    let dispatch = harness.discovery.dispatch();

    dispatch.call(DiscoveryIntent::StartGrowth);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Parallel Lines Never Meet!"), "missing growth title in {html}");
    assert!(
        !html.contains("They go on forever!"),
        "done reveal must wait for both delays"
    );

    // Virtual time advances through both one-shot delays.
    drive_until(&mut harness, |html| html.contains("They go on forever!")).await;

    dispatch.call(DiscoveryIntent::ShowCompare);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Parallel vs Not Parallel"), "missing compare step in {html}");
    assert!(html.contains("Click to Cross!"), "missing toggle in {html}");

    dispatch.call(DiscoveryIntent::ToggleIntersection);
    harness.drive();
    assert!(harness.render().contains("INTERSECTING"), "toggle should cross the lines");

    assert!(!harness.completed.is_set());
    dispatch.call(DiscoveryIntent::Finish);
    harness.drive();
    assert!(harness.completed.is_set(), "finish must invoke on_complete");
}

#[tokio::test(flavor = "current_thread")]
async fn exploration_rotation_gates_on_exact_zero() {
    let mut harness = setup_view_harness(ViewKind::Exploration);
    let html = harness.render();
    assert!(html.contains("Make them Parallel!"), "missing rotation tool in {html}");
    assert!(!html.contains("PARALLEL!"), "starts misaligned");

    let dispatch = harness.exploration.dispatch();
    // Not aligned: advancing is ignored.
    dispatch.call(ExplorationIntent::NextActivity);
    harness.drive();
    assert!(harness.render().contains("Make them Parallel!"));

    dispatch.call(ExplorationIntent::SetRotation(1));
    harness.drive();
    assert!(!harness.render().contains("PARALLEL!"), "1 degree off is not aligned");

    dispatch.call(ExplorationIntent::SetRotation(0));
    harness.drive();
    assert!(harness.render().contains("PARALLEL!"), "exact zero aligns");

    dispatch.call(ExplorationIntent::NextActivity);
    harness.drive();
    assert!(harness.render().contains("The Distance Rule"), "should reach distance tool");
}

#[tokio::test(flavor = "current_thread")]
async fn exploration_distance_and_drawing_flow_completes_phase() {
    let mut harness = setup_view_harness(ViewKind::Exploration);
    let dispatch = harness.exploration.dispatch();

    dispatch.call(ExplorationIntent::SetRotation(0));
    dispatch.call(ExplorationIntent::NextActivity);
    harness.drive();

    // Distance gate: hidden measures block advancing.
    dispatch.call(ExplorationIntent::NextActivity);
    harness.drive();
    assert!(harness.render().contains("The Distance Rule"));

    dispatch.call(ExplorationIntent::ToggleDistance);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("It's always the same!"), "missing callout in {html}");

    dispatch.call(ExplorationIntent::NextActivity);
    harness.drive();
    assert!(harness.render().contains("Your Turn to Draw!"));

    // A stroke parallel to the reference line succeeds.
    let angle = harness.exploration.target_angle().to_radians();
    let start = Point::new(100.0, 250.0);
    let end = Point::new(100.0 + angle.cos() * 120.0, 250.0 + angle.sin() * 120.0);
    dispatch.call(ExplorationIntent::StrokeStart(start));
    dispatch.call(ExplorationIntent::StrokeMove(end));
    dispatch.call(ExplorationIntent::StrokeEnd);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Great Job! That's parallel!"), "missing success in {html}");

    dispatch.call(ExplorationIntent::Finish);
    harness.drive();
    assert!(harness.completed.is_set());
}

#[tokio::test(flavor = "current_thread")]
async fn exploration_short_and_crooked_strokes_do_not_unlock() {
    let mut harness = setup_view_harness(ViewKind::Exploration);
    let dispatch = harness.exploration.dispatch();

    dispatch.call(ExplorationIntent::SetRotation(0));
    dispatch.call(ExplorationIntent::NextActivity);
    dispatch.call(ExplorationIntent::ToggleDistance);
    dispatch.call(ExplorationIntent::NextActivity);
    harness.drive();

    // Below the minimum length: silently discarded, no banner, no stroke.
    dispatch.call(ExplorationIntent::StrokeStart(Point::new(50.0, 50.0)));
    dispatch.call(ExplorationIntent::StrokeMove(Point::new(60.0, 55.0)));
    dispatch.call(ExplorationIntent::StrokeEnd);
    harness.drive();
    let html = harness.render();
    assert!(!html.contains("Great Job!"), "short stroke must not judge");
    assert!(!html.contains("Not quite"), "short stroke must not judge");
    assert!(!html.contains("user-stroke"), "short stroke is dropped from {html}");

    // Perpendicular to any reference in [-30, 30): a clear fail.
    dispatch.call(ExplorationIntent::StrokeStart(Point::new(300.0, 100.0)));
    dispatch.call(ExplorationIntent::StrokeMove(Point::new(300.0, 280.0)));
    dispatch.call(ExplorationIntent::StrokeEnd);
    harness.drive();
    assert!(harness.render().contains("Not quite. Try again!"));

    // Finish stays locked after a fail, and reset clears the verdict.
    dispatch.call(ExplorationIntent::Finish);
    harness.drive();
    assert!(!harness.completed.is_set());

    dispatch.call(ExplorationIntent::ClearDrawing);
    harness.drive();
    assert!(!harness.render().contains("Not quite"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn challenge_shapes_wrong_feedback_clears_then_flow_reaches_hunt() {
    let mut harness = setup_view_harness(ViewKind::Challenge);
    let html = harness.render();
    assert!(html.contains("Shape Detective"), "missing shape step in {html}");
    assert!(html.contains("Selected: 0/2"), "missing badge in {html}");

    let dispatch = harness.challenge.dispatch();

    // Wrong pair on the rectangle: transient feedback, then auto-reset.
    dispatch.call(ChallengeIntent::SelectSide(0));
    dispatch.call(ChallengeIntent::SelectSide(1));
    harness.drive();
    assert!(harness.render().contains("Selected: 2/2"));
    dispatch.call(ChallengeIntent::CheckAnswer);
    harness.drive();
    assert!(harness.render().contains("Oops! Those lines are not parallel."));
    drive_until(&mut harness, |html| html.contains("Selected: 0/2")).await;
    assert!(!harness.render().contains("Oops!"), "wrong feedback should clear itself");

    // Correct pair in reverse order, then through the remaining shapes.
    dispatch.call(ChallengeIntent::SelectSide(2));
    dispatch.call(ChallengeIntent::SelectSide(0));
    dispatch.call(ChallengeIntent::CheckAnswer);
    harness.drive();
    assert!(harness.render().contains("Correct!"));
    dispatch.call(ChallengeIntent::NextShape);
    harness.drive();
    assert!(harness.render().contains("only ONE pair"), "trapezoid should be next");

    dispatch.call(ChallengeIntent::SelectSide(0));
    dispatch.call(ChallengeIntent::SelectSide(2));
    dispatch.call(ChallengeIntent::CheckAnswer);
    dispatch.call(ChallengeIntent::NextShape);
    harness.drive();
    assert!(harness.render().contains("parallel to each other"), "hexagon should be last");

    dispatch.call(ChallengeIntent::SelectSide(1));
    dispatch.call(ChallengeIntent::SelectSide(4));
    dispatch.call(ChallengeIntent::CheckAnswer);
    dispatch.call(ChallengeIntent::NextShape);
    harness.drive();
    assert!(harness.render().contains("Parallel Hunt"), "last shape leads to the hunt");
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_selection_policy_third_click_replaces_pair() {
    let mut harness = setup_view_harness(ViewKind::Challenge);
    let dispatch = harness.challenge.dispatch();

    dispatch.call(ChallengeIntent::SelectSide(0));
    dispatch.call(ChallengeIntent::SelectSide(2));
    harness.drive();
    assert!(harness.render().contains("Selected: 2/2"));

    dispatch.call(ChallengeIntent::SelectSide(1));
    harness.drive();
    assert!(harness.render().contains("Selected: 1/2"), "third click starts a new pair");

    // Deselect by clicking again.
    dispatch.call(ChallengeIntent::SelectSide(1));
    harness.drive();
    assert!(harness.render().contains("Selected: 0/2"));
}

#[tokio::test(flavor = "current_thread")]
async fn challenge_hunt_is_idempotent_and_gates_completion() {
    let mut harness = setup_view_harness(ViewKind::Challenge);
    let dispatch = harness.challenge.dispatch();

    // Solve all three shapes to reach the hunt.
    for pair in [[0_u8, 2], [0, 2], [2, 5]] {
        dispatch.call(ChallengeIntent::SelectSide(pair[0]));
        dispatch.call(ChallengeIntent::SelectSide(pair[1]));
        dispatch.call(ChallengeIntent::CheckAnswer);
        dispatch.call(ChallengeIntent::NextShape);
    }
    harness.drive();
    assert!(harness.render().contains("Found: 0 / 3"));

    dispatch.call(ChallengeIntent::FindSpot(1));
    dispatch.call(ChallengeIntent::FindSpot(1));
    harness.drive();
    assert!(harness.render().contains("Found: 1 / 3"), "re-finding must not double count");

    // Not all found yet: completing is ignored.
    dispatch.call(ChallengeIntent::Finish);
    harness.drive();
    assert!(!harness.completed.is_set());

    dispatch.call(ChallengeIntent::FindSpot(2));
    dispatch.call(ChallengeIntent::FindSpot(3));
    harness.drive();
    assert!(harness.render().contains("Found: 3 / 3"));
    assert!(harness.render().contains("Take the Quiz!"));

    dispatch.call(ChallengeIntent::Finish);
    harness.drive();
    assert!(harness.completed.is_set());
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_scores_locks_feedback_and_restarts() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    let html = harness.render();
    assert!(html.contains("Question 1 of 8"), "missing status in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");

    let dispatch = harness.assessment.dispatch();

    // Question 1: correct answer is option 1; a second click while feedback
    // is up must not re-score.
    dispatch.call(AssessmentIntent::Answer(1));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Score: 1"));

    dispatch.call(AssessmentIntent::Answer(0));
    harness.drive();
    assert!(harness.render().contains("Score: 1"), "feedback lock must hold the score");

    dispatch.call(AssessmentIntent::NextQuestion);
    harness.drive();
    assert!(harness.render().contains("Question 2 of 8"));

    // Answer the rest wrong: option 3 is wrong for every remaining question.
    for _ in 1..8 {
        dispatch.call(AssessmentIntent::Answer(3));
        dispatch.call(AssessmentIntent::NextQuestion);
    }
    harness.drive();
    let html = harness.render();
    assert!(html.contains("You got 1 out of 8 correct!"), "missing summary in {html}");
    assert!(html.contains("Keep Practicing!"), "1/8 lands in the lowest tier");

    dispatch.call(AssessmentIntent::Restart);
    harness.drive();
    assert!(harness.completed.is_set(), "restart must reach the root callback");
}

#[derive(Props, Clone, PartialEq)]
struct ProgressHarnessProps {
    completed_phases: usize,
}

#[component]
fn ProgressHarness(props: ProgressHarnessProps) -> Element {
    let mut progress = LessonProgress::new();
    for phase in Phase::ALL.into_iter().take(props.completed_phases) {
        progress.advance(phase);
    }
    rsx! {
        ProgressBar { progress }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn progress_bar_projects_phase_statuses() {
    let mut dom = VirtualDom::new_with_props(
        ProgressHarness,
        ProgressHarnessProps { completed_phases: 1 },
    );
    dom.rebuild_in_place();
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("progress-circle--completed"), "missing completed in {html}");
    assert!(html.contains("progress-circle--active"), "missing active in {html}");
    assert!(html.contains("progress-circle--locked"), "missing locked in {html}");
    for label in ["Discover", "Explore", "Challenge", "Quiz"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}
