use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One of the four top-level learning stages, in lesson order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Phase {
    Discovery,
    Exploration,
    Challenge,
    Assessment,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Discovery,
        Phase::Exploration,
        Phase::Challenge,
        Phase::Assessment,
    ];

    /// The phase after this one, or `None` for the terminal phase.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Discovery => Some(Phase::Exploration),
            Phase::Exploration => Some(Phase::Challenge),
            Phase::Challenge => Some(Phase::Assessment),
            Phase::Assessment => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Phase::Discovery => "Discover",
            Phase::Exploration => "Explore",
            Phase::Challenge => "Challenge",
            Phase::Assessment => "Quiz",
        }
    }
}

/// Visual status of a phase in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Active,
    Completed,
    Locked,
}

/// The root progression state: the active phase plus the set of phases
/// finished this session. Progression is forward-only; only `restart`
/// returns to the beginning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonProgress {
    current: Phase,
    completed: BTreeSet<Phase>,
}

impl Default for LessonProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LessonProgress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Phase::Discovery,
            completed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Phase {
        self.current
    }

    #[must_use]
    pub fn is_completed(&self, phase: Phase) -> bool {
        self.completed.contains(&phase)
    }

    /// Record `phase` as finished and move to its successor.
    ///
    /// Completion insert is idempotent. Advancing from the terminal phase
    /// records completion but leaves the active phase unchanged.
    pub fn advance(&mut self, phase: Phase) {
        self.completed.insert(phase);
        if let Some(next) = phase.next() {
            self.current = next;
        }
    }

    /// Reset to the initial state: Discovery active, nothing completed.
    pub fn restart(&mut self) {
        self.current = Phase::Discovery;
        self.completed.clear();
    }

    /// Debug escape hatch: jump to the next phase without completing the
    /// current one. Bounded at the terminal phase.
    pub fn skip_forward(&mut self) {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
    }

    /// Derive the indicator status for a phase. The active phase wins over
    /// a completed marker.
    #[must_use]
    pub fn status(&self, phase: Phase) -> PhaseStatus {
        if phase == self.current {
            PhaseStatus::Active
        } else if self.is_completed(phase) {
            PhaseStatus::Completed
        } else {
            PhaseStatus::Locked
        }
    }
}
