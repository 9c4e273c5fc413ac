use std::collections::BTreeSet;
use std::time::Duration;

use lesson_core::model::{SideId, SpotId};

/// Sub-phases of the challenge: shape puzzles, then the scene hunt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeStage {
    Shapes,
    Hunt,
}

/// Feedback overlay state for the current shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeFeedback {
    None,
    Correct,
    Wrong,
}

/// How long the wrong-answer indication stays up before it clears itself
/// and empties the selection.
pub const WRONG_FEEDBACK_CLEAR: Duration = Duration::from_millis(1500);

/// Apply the side-selection policy for a click on `id`:
/// an already-selected side is deselected; a third side replaces the whole
/// pair; otherwise the side joins the selection.
#[must_use]
pub fn toggle_side(selection: &[SideId], id: SideId) -> Vec<SideId> {
    if selection.contains(&id) {
        return selection.iter().copied().filter(|s| *s != id).collect();
    }
    if selection.len() >= 2 {
        return vec![id];
    }
    let mut next = selection.to_vec();
    next.push(id);
    next
}

/// Found-set for the scene hunt. Grows monotonically; no un-finding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HuntProgress {
    found: BTreeSet<SpotId>,
}

impl HuntProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_found(&mut self, id: SpotId) {
        self.found.insert(id);
    }

    #[must_use]
    pub fn is_found(&self, id: SpotId) -> bool {
        self.found.contains(&id)
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn all_found(&self, total: usize) -> bool {
        self.found_count() == total
    }
}
