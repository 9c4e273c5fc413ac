mod challenge_vm;
mod discovery_vm;
mod exploration_vm;
mod progress_vm;
mod quiz_vm;

pub use challenge_vm::{
    ChallengeStage, HuntProgress, ShapeFeedback, WRONG_FEEDBACK_CLEAR, toggle_side,
};
pub use discovery_vm::{
    DiscoveryStep, GROWTH_DONE_DELAY, GROWTH_START_DELAY, GrowthStage, next_gallery_index,
    prev_gallery_index,
};
pub use exploration_vm::{
    DRAW_TOLERANCE_DEG, DrawAttempt, DrawOutcome, ExplorationActivity, MIN_STROKE_LEN,
    ROTATION_MAX, ROTATION_MIN, ROTATION_START, StrokeCheck, check_stroke, is_aligned,
};
pub use progress_vm::{ProgressStepVm, map_progress_steps};
pub use quiz_vm::{QuizVm, ScoreTier};
