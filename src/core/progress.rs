use rand::Rng;

use crate::core::message::JobStatus;

const TICK_INTERVAL: f32 = 0.4;
const INCREMENT_MAX: f32 = 5.0;
const PROCESSING_CEILING: f32 = 90.0;
const RESET_DELAY: f32 = 2.0;

/// Heuristic progress display for jobs whose backend reports few or no
/// progress events. The value is an estimate for user feedback only;
/// nothing may read it back as a measurement. Real `Progress` events
/// from the worker take precedence via `observe`.
///
/// While the status is processing-like the value creeps upward by a
/// random amount every tick, capped at 90 so completion is never faked.
/// On completion it snaps to 100 and clears to 0 after a short delay.
pub struct ProgressEstimator {
    value: f32,
    since_tick: f32,
    since_complete: Option<f32>,
    last_status: JobStatus,
}

impl ProgressEstimator {
    pub fn new() -> Self {
        Self {
            value: 0.,
            since_tick: 0.,
            since_complete: None,
            last_status: JobStatus::Idle,
        }
    }

    /// Percentage in [0, 100] for the display bar.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// A real progress report from the worker overrides the estimate,
    /// still capped below completion while the job is running.
    pub fn observe(&mut self, real: f32) {
        if self.last_status.is_processing() {
            self.value = self.value.max(real.min(PROCESSING_CEILING));
        }
    }

    pub fn update(&mut self, status: JobStatus, dt: f32) {
        if status != self.last_status {
            self.transition(status);
        }
        if status.is_processing() {
            self.since_tick += dt;
            while self.since_tick >= TICK_INTERVAL {
                self.since_tick -= TICK_INTERVAL;
                self.value += rand::rng().random_range(0.0..INCREMENT_MAX);
                if self.value >= PROCESSING_CEILING {
                    self.value = PROCESSING_CEILING;
                }
            }
        } else if status.is_complete()
            && let Some(elapsed) = &mut self.since_complete
        {
            *elapsed += dt;
            if *elapsed >= RESET_DELAY {
                self.value = 0.;
                self.since_complete = None;
            }
        }
    }

    fn transition(&mut self, status: JobStatus) {
        match status {
            JobStatus::Processing => {
                self.value = 5.;
                self.since_tick = 0.;
                self.since_complete = None;
            }
            JobStatus::GeneratingTabs => {
                self.value = 10.;
                self.since_tick = 0.;
                self.since_complete = None;
            }
            JobStatus::Done | JobStatus::TabsReady => {
                self.value = 100.;
                self.since_complete = Some(0.);
            }
            JobStatus::Idle | JobStatus::Error => {
                self.value = 0.;
                self.since_complete = None;
            }
        }
        self.last_status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_exceeds_ceiling_while_processing() {
        let mut progress = ProgressEstimator::new();
        for _ in 0..500 {
            progress.update(JobStatus::Processing, TICK_INTERVAL);
            assert!(progress.value() <= PROCESSING_CEILING);
        }
        assert_eq!(progress.value(), PROCESSING_CEILING);
    }

    #[test]
    fn test_completion_then_delayed_reset() {
        let mut progress = ProgressEstimator::new();
        progress.update(JobStatus::Processing, 1.0);
        progress.update(JobStatus::Done, 0.);
        assert_eq!(progress.value(), 100.);
        progress.update(JobStatus::Done, RESET_DELAY - 0.1);
        assert_eq!(progress.value(), 100.);
        progress.update(JobStatus::Done, 0.2);
        assert_eq!(progress.value(), 0.);
    }

    #[test]
    fn test_error_clears() {
        let mut progress = ProgressEstimator::new();
        progress.update(JobStatus::Processing, 2.0);
        assert!(progress.value() > 0.);
        progress.update(JobStatus::Error, 0.);
        assert_eq!(progress.value(), 0.);
    }

    #[test]
    fn test_real_progress_wins_over_estimate() {
        let mut progress = ProgressEstimator::new();
        progress.update(JobStatus::Processing, 0.);
        progress.observe(60.);
        assert!(progress.value() >= 60.);
        // Real reports never fake completion either
        progress.observe(100.);
        assert!(progress.value() <= PROCESSING_CEILING);
    }

    #[test]
    fn test_observe_ignored_when_idle() {
        let mut progress = ProgressEstimator::new();
        progress.observe(50.);
        assert_eq!(progress.value(), 0.);
    }

    #[test]
    fn test_processing_starts_from_baseline() {
        let mut progress = ProgressEstimator::new();
        progress.update(JobStatus::Processing, 0.);
        assert_eq!(progress.value(), 5.);
        progress.update(JobStatus::GeneratingTabs, 0.);
        assert_eq!(progress.value(), 10.);
    }
}
