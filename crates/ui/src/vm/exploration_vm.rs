use lesson_core::geometry::{Point, angle_of, distance, is_parallel_within_tolerance};

/// Activities of the exploration phase, each gated by its success condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationActivity {
    Rotate,
    Distance,
    Draw,
}

/// Slider bounds and starting value for the rotation-matching activity.
/// The start is deliberately not parallel.
pub const ROTATION_MIN: i32 = -45;
pub const ROTATION_MAX: i32 = 45;
pub const ROTATION_START: i32 = 15;

/// The rotation activity requires exact zero, not a tolerance band: the
/// slider snaps to whole degrees, so exact alignment is always reachable.
#[must_use]
pub fn is_aligned(rotation: i32) -> bool {
    rotation == 0
}

/// Strokes shorter than this are treated as accidental clicks.
pub const MIN_STROKE_LEN: f64 = 20.0;
/// Slightly loose tolerance for the free-hand parallel check.
pub const DRAW_TOLERANCE_DEG: f64 = 6.0;

/// An in-progress or finished drag stroke on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawAttempt {
    pub start: Point,
    pub current: Point,
}

impl DrawAttempt {
    #[must_use]
    pub fn begin(at: Point) -> Self {
        Self {
            start: at,
            current: at,
        }
    }
}

/// Result of a finished drawing attempt, as shown to the learner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    None,
    Success,
    Fail,
}

/// Verdict on a released stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeCheck {
    /// Below the minimum length: discard silently, no outcome change.
    TooShort,
    Success,
    Fail,
}

/// Judge a released stroke against the fixed reference angle.
#[must_use]
pub fn check_stroke(attempt: DrawAttempt, reference_angle_deg: f64) -> StrokeCheck {
    if distance(attempt.start, attempt.current) < MIN_STROKE_LEN {
        return StrokeCheck::TooShort;
    }
    let drawn = angle_of(attempt.start, attempt.current);
    if is_parallel_within_tolerance(drawn, reference_angle_deg, DRAW_TOLERANCE_DEG) {
        StrokeCheck::Success
    } else {
        StrokeCheck::Fail
    }
}
