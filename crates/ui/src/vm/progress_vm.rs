use lesson_core::model::{LessonProgress, Phase, PhaseStatus};

/// One circle + label in the progress indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressStepVm {
    pub phase: Phase,
    pub label: &'static str,
    pub status: PhaseStatus,
}

impl ProgressStepVm {
    #[must_use]
    pub fn circle_class(&self) -> &'static str {
        match self.status {
            PhaseStatus::Active => "progress-circle progress-circle--active",
            PhaseStatus::Completed => "progress-circle progress-circle--completed",
            PhaseStatus::Locked => "progress-circle progress-circle--locked",
        }
    }

    #[must_use]
    pub fn label_class(&self) -> &'static str {
        match self.status {
            PhaseStatus::Active => "progress-label progress-label--active",
            PhaseStatus::Completed => "progress-label progress-label--completed",
            PhaseStatus::Locked => "progress-label progress-label--locked",
        }
    }

    /// Marker glyph inside the circle.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self.status {
            PhaseStatus::Active => "●",
            PhaseStatus::Completed => "✓",
            PhaseStatus::Locked => "🔒",
        }
    }
}

#[must_use]
pub fn map_progress_steps(progress: &LessonProgress) -> Vec<ProgressStepVm> {
    Phase::ALL
        .into_iter()
        .map(|phase| ProgressStepVm {
            phase,
            label: phase.label(),
            status: progress.status(phase),
        })
        .collect()
}
