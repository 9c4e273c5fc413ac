mod assessment;
mod challenge;
mod discovery;
mod exploration;
mod illustrations;
mod progress;

pub use assessment::{AssessmentIntent, AssessmentView};
pub use challenge::{ChallengeIntent, ChallengeView};
pub use discovery::{DiscoveryIntent, DiscoveryView};
pub use exploration::{ExplorationIntent, ExplorationView};
pub use progress::ProgressBar;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
