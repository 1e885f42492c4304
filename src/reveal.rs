use log::debug;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Entrance delay for the `index`th item of a staggered list.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Revealed,
}

/// One-shot latch driving a section's entrance animation.
///
/// Fed with intersection ratios from whatever observes the viewport. Once it
/// reports revealed it stays revealed, even if the section scrolls away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    state: RevealState,
    threshold: f64,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::Unseen,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Records a visibility sample. Returns true only on the sample that
    /// flips the latch.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.is_revealed() || visible_ratio < self.threshold || visible_ratio <= 0.0 {
            return false;
        }
        debug!("revealing at ratio {visible_ratio:.2}");
        self.state = RevealState::Revealed;
        true
    }

    /// Feeds in whether the viewport can be observed at all.
    pub fn observer_support(&mut self, supported: bool) -> bool {
        if supported {
            return false;
        }
        self.observation_unavailable()
    }

    /// No way to observe the viewport: show the content rather than hide it forever.
    pub fn observation_unavailable(&mut self) -> bool {
        if self.is_revealed() {
            return false;
        }
        debug!("viewport observation unavailable, revealing");
        self.state = RevealState::Revealed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unseen() {
        let latch = RevealLatch::default();
        assert_eq!(latch.state(), RevealState::Unseen);
        assert!(!latch.is_revealed());
        assert_eq!(latch.threshold(), 0.1);
    }

    #[test]
    fn test_below_threshold_stays_unseen() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.05));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut latch = RevealLatch::new(0.1);
        let fired = [0.02, 0.1, 0.5, 0.0, 1.0, 0.0]
            .into_iter()
            .filter(|r| latch.observe(*r))
            .count();
        assert_eq!(fired, 1);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_never_reverts() {
        let mut latch = RevealLatch::new(0.25);
        assert!(latch.observe(0.3));
        // scrolled out of view again
        for ratio in [0.0, 0.1, 0.0] {
            latch.observe(ratio);
            assert_eq!(latch.state(), RevealState::Revealed);
        }
        assert!(!latch.observation_unavailable());
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_unavailable_observation_reveals() {
        let mut latch = RevealLatch::default();
        assert!(latch.observation_unavailable());
        assert!(latch.is_revealed());
        assert!(!latch.observe(1.0));
    }

    #[test]
    fn test_observer_support() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observer_support(true));
        assert!(!latch.is_revealed());

        assert!(latch.observer_support(false));
        assert!(latch.is_revealed());
        assert!(!latch.observer_support(false));
    }

    #[test]
    fn test_zero_threshold_needs_some_visibility() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(0.0));
        assert!(latch.observe(0.01));
    }

    #[test]
    fn test_stagger() {
        let delays = (0..4).map(|i| stagger(400, 100, i)).collect::<Vec<_>>();
        assert_eq!(delays, vec![400, 500, 600, 700]);
        assert_eq!(stagger(10, 0, 99), 10);
        assert_eq!(stagger(1, 1, usize::MAX), u32::MAX);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealLatch::new(3.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
    }
}
