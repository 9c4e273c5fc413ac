use std::time::Duration;

/// Sub-steps of the discovery phase, forward-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscoveryStep {
    Gallery,
    Growth,
    Compare,
}

/// States of the line-growth animation. Timer-driven, not user-driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthStage {
    Initial,
    Growing,
    Done,
}

/// Delay before the lines start lengthening.
pub const GROWTH_START_DELAY: Duration = Duration::from_millis(500);
/// Total time from entering the step until the "they never meet" reveal.
pub const GROWTH_DONE_DELAY: Duration = Duration::from_millis(3500);

/// Cyclic gallery navigation, wrapping in both directions.
#[must_use]
pub fn next_gallery_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

#[must_use]
pub fn prev_gallery_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_wraps_forward_and_backward() {
        assert_eq!(next_gallery_index(0, 4), 1);
        assert_eq!(next_gallery_index(3, 4), 0);
        assert_eq!(prev_gallery_index(1, 4), 0);
        assert_eq!(prev_gallery_index(0, 4), 3);
    }

    #[test]
    fn empty_gallery_stays_at_zero() {
        assert_eq!(next_gallery_index(0, 0), 0);
        assert_eq!(prev_gallery_index(0, 0), 0);
    }

    #[test]
    fn growth_delays_are_ordered() {
        assert!(GROWTH_START_DELAY < GROWTH_DONE_DELAY);
    }
}
