use serde::Deserialize;

pub const MAX_PITCH: u8 = 127;

/// Vertical padding in semitones so extreme notes don't sit on the edge
/// of the roll surface.
const WINDOW_PADDING: u8 = 3;

/// A single transcribed note event. Immutable once delivered.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Note {
    pub pitch: u8,
    pub start: f32,
    pub end: f32,
    #[serde(default)]
    pub velocity: f32,
}

impl Note {
    pub fn duration(&self) -> f32 {
        (self.end - self.start).max(0.)
    }

    pub fn is_valid(&self) -> bool {
        self.pitch <= MAX_PITCH && self.start >= 0. && self.end >= self.start
    }
}

/// One transcription result: every note plus the total duration.
/// Replaced wholesale when a new result arrives, never edited in place.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteTimeline {
    pub notes: Vec<Note>,
    pub end_time: f32,
}

impl NoteTimeline {
    pub fn is_renderable(&self) -> bool {
        !self.notes.is_empty() && self.end_time > 0.
    }
}

/// Padded pitch range used to lay out the roll vertically.
/// Recomputed once per timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchWindow {
    pub low: u8,
    pub high: u8,
}

impl PitchWindow {
    /// `None` when there are no notes to frame. The caller must not
    /// render in that case.
    pub fn from_notes(notes: &[Note]) -> Option<Self> {
        let mut bounds: Option<(u8, u8)> = None;
        for note in notes {
            let (low, high) = bounds.get_or_insert((note.pitch, note.pitch));
            *low = (*low).min(note.pitch);
            *high = (*high).max(note.pitch);
        }
        bounds.map(|(low, high)| Self {
            low: low.saturating_sub(WINDOW_PADDING),
            high: high.saturating_add(WINDOW_PADDING).min(MAX_PITCH),
        })
    }

    /// Semitone span, `high - low`.
    pub fn range(&self) -> u8 {
        self.high - self.low
    }
}

/// Human readable note name, e.g. 60 -> "C4".
pub fn pitch_name(pitch: u8) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let octave = pitch as i32 / 12 - 1;
    format!("{}{}", NAMES[(pitch % 12) as usize], octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(pitch: u8) -> Note {
        Note {
            pitch,
            start: 0.,
            end: 1.,
            velocity: 0.8,
        }
    }

    #[test]
    fn test_window_padding() {
        let window = PitchWindow::from_notes(&[note(60)]).unwrap();
        assert_eq!(window.low, 57);
        assert_eq!(window.high, 63);
        assert_eq!(window.range(), 6);
    }

    #[test]
    fn test_window_clamped_at_bounds() {
        let window = PitchWindow::from_notes(&[note(2), note(125)]).unwrap();
        assert_eq!(window.low, 0);
        assert_eq!(window.high, 127);
    }

    #[test]
    fn test_window_covers_all_pitches() {
        let notes = [note(40), note(72), note(55)];
        let window = PitchWindow::from_notes(&notes).unwrap();
        for n in &notes {
            assert!(window.low <= n.pitch && n.pitch <= window.high);
        }
        assert_eq!(window.low, 37);
        assert_eq!(window.high, 75);
    }

    #[test]
    fn test_window_empty() {
        assert_eq!(PitchWindow::from_notes(&[]), None);
    }

    #[test]
    fn test_note_validity() {
        assert!(note(60).is_valid());
        let reversed = Note {
            pitch: 60,
            start: 2.,
            end: 1.,
            velocity: 0.5,
        };
        assert!(!reversed.is_valid());
    }

    #[test]
    fn test_pitch_name() {
        assert_eq!(pitch_name(60), "C4");
        assert_eq!(pitch_name(21), "A0");
        assert_eq!(pitch_name(64), "E4");
    }
}
