pub const MIN_SCROLL_SPEED: f32 = 1.;
pub const MAX_SCROLL_SPEED: f32 = 100.;

/// Maps the UI speed range [1, 100] to pixels per frame.
const SPEED_TO_PIXELS: f32 = 50.;

/// Advances the tab viewport's horizontal offset at a user-set rate.
/// The offset itself lives in the viewport; the animator only computes
/// the next value and stops itself at the scrollable end.
#[derive(Debug)]
pub struct ScrollAnimator {
    enabled: bool,
    speed: f32,
    reset_pending: bool,
}

impl ScrollAnimator {
    pub fn new(speed: f32) -> Self {
        Self {
            enabled: false,
            speed: speed.clamp(MIN_SCROLL_SPEED, MAX_SCROLL_SPEED),
            reset_pending: false,
        }
    }

    /// One frame step. Disables itself once the offset reaches
    /// `max_offset` (content width minus viewport width).
    pub fn step(&mut self, offset: f32, max_offset: f32) -> f32 {
        if !self.enabled {
            return offset;
        }
        let next = offset + self.speed / SPEED_TO_PIXELS;
        if next >= max_offset {
            self.enabled = false;
            return max_offset.max(0.);
        }
        next
    }

    pub fn start(&mut self) {
        self.enabled = true;
    }

    pub fn stop(&mut self) {
        self.enabled = false;
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Stop and ask the viewport to jump back to offset 0.
    pub fn reset(&mut self) {
        self.enabled = false;
        self.reset_pending = true;
    }

    /// Consumed by the viewport on its next frame.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pending)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Takes effect on the next frame.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SCROLL_SPEED, MAX_SCROLL_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rate() {
        // 1000px content in a 500px viewport at speed 50 -> 1px per frame
        let mut animator = ScrollAnimator::new(50.);
        animator.start();
        let max_offset = 1000. - 500.;
        let mut offset = 0.;
        for frame in 1..=499 {
            offset = animator.step(offset, max_offset);
            assert_eq!(offset, frame as f32);
            assert!(animator.is_enabled());
        }
        offset = animator.step(offset, max_offset);
        assert_eq!(offset, 500.);
        assert!(!animator.is_enabled());
        // Further steps are no-ops
        assert_eq!(animator.step(offset, max_offset), 500.);
    }

    #[test]
    fn test_restart_continues_from_offset() {
        let mut animator = ScrollAnimator::new(50.);
        animator.start();
        animator.stop();
        animator.start();
        assert_eq!(animator.step(120., 500.), 121.);
    }

    #[test]
    fn test_speed_clamped_and_applied_next_frame() {
        let mut animator = ScrollAnimator::new(0.);
        assert_eq!(animator.speed(), MIN_SCROLL_SPEED);
        animator.set_speed(500.);
        assert_eq!(animator.speed(), MAX_SCROLL_SPEED);
        animator.start();
        assert_eq!(animator.step(0., 100.), 2.);
    }

    #[test]
    fn test_reset() {
        let mut animator = ScrollAnimator::new(10.);
        animator.start();
        animator.reset();
        assert!(!animator.is_enabled());
        assert!(animator.take_reset());
        assert!(!animator.take_reset());
    }

    #[test]
    fn test_degenerate_viewport_stops_immediately() {
        // Content narrower than the viewport: max offset is zero
        let mut animator = ScrollAnimator::new(50.);
        animator.start();
        assert_eq!(animator.step(0., 0.), 0.);
        assert!(!animator.is_enabled());
    }
}
