/// Playback clock for the loaded timeline. The roll view only ever
/// reads `position` and `duration`; all writes go through the state.
///
/// Stands in for an external audio transport: when sonified audio
/// playback is wired in, its reported position lands in `seek`.
#[derive(Debug, Clone, Copy)]
pub struct TransportClock {
    position: f32,
    duration: f32,
    playing: bool,
}

impl TransportClock {
    pub fn new() -> Self {
        Self {
            position: 0.,
            duration: 0.,
            playing: false,
        }
    }

    /// Advance the clock by one frame. Pauses at the end of the timeline.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        self.position += dt;
        if self.duration > 0. && self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
        }
    }

    pub fn play(&mut self) {
        if self.duration > 0. {
            // Restart when play is hit at the very end
            if self.position >= self.duration {
                self.position = 0.;
            }
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn seek(&mut self, position: f32) {
        self.position = if self.duration > 0. {
            position.clamp(0., self.duration)
        } else {
            position.max(0.)
        };
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.);
        self.position = self.position.min(self.duration);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_only_while_playing() {
        let mut clock = TransportClock::new();
        clock.set_duration(10.);
        clock.update(1.);
        assert_eq!(clock.position(), 0.);
        clock.play();
        clock.update(1.5);
        assert_eq!(clock.position(), 1.5);
        clock.pause();
        clock.update(1.);
        assert_eq!(clock.position(), 1.5);
    }

    #[test]
    fn test_pauses_at_end() {
        let mut clock = TransportClock::new();
        clock.set_duration(2.);
        clock.play();
        clock.update(5.);
        assert_eq!(clock.position(), 2.);
        assert!(!clock.is_playing());
        // Play from the end restarts
        clock.play();
        assert_eq!(clock.position(), 0.);
        assert!(clock.is_playing());
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut clock = TransportClock::new();
        clock.set_duration(4.);
        clock.seek(10.);
        assert_eq!(clock.position(), 4.);
        clock.seek(-1.);
        assert_eq!(clock.position(), 0.);
    }

    #[test]
    fn test_play_without_duration_is_noop() {
        let mut clock = TransportClock::new();
        clock.play();
        assert!(!clock.is_playing());
    }
}
